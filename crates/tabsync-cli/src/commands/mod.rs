//! CLI command implementations

mod patch;

pub use patch::{Outcome, PatchOptions, RegionReport, Report, run_patch};
