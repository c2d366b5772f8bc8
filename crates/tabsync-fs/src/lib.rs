//! File I/O policy for tabsync
//!
//! Tolerant ingestion, strict persistence: reads drop malformed byte
//! sequences instead of failing, writes are atomic and fail loudly.

pub mod error;
pub mod io;

pub use error::{Error, Result};
pub use io::{read_lossy, write_atomic};
