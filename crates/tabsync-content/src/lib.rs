//! Region location, splicing, and validation for tabsync
//!
//! Locates a marker-delimited region of markup in two documents and splices
//! the reference's region over the target's, preserving all surrounding
//! text. Markers are fixed comment literals, not parsed HTML.

pub mod error;
pub mod marker;
pub mod region;
pub mod splice;
pub mod validate;

pub use error::{Error, Result};
pub use region::Region;
pub use splice::{Splice, splice};
pub use validate::{Phrase, ValidationProfile};
