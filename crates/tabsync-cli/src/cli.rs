//! CLI argument parsing using clap derive

use clap::Parser;
use std::path::PathBuf;

/// Default target document, patched in place
pub const DEFAULT_TARGET: &str = "index.html";
/// Default reference document the region is copied from
pub const DEFAULT_REFERENCE: &str = "SABG_Sistema_Formacion_accesible.html";

/// Copy the marked instructivo region of a reference HTML document into a target document
///
/// Invoked without arguments, patches index.html from
/// SABG_Sistema_Formacion_accesible.html in the current directory.
#[derive(Parser, Debug)]
#[command(name = "tabsync")]
#[command(author, version, long_about = None)]
pub struct Cli {
    /// Target document, patched in place
    #[arg(default_value = DEFAULT_TARGET)]
    pub target: PathBuf,

    /// Reference document the region is copied from
    #[arg(default_value = DEFAULT_REFERENCE)]
    pub reference: PathBuf,

    /// Require only the tab keyword instead of the full heading and example phrases
    #[arg(long)]
    pub lenient: bool,

    /// Locate, splice, and validate, but print a diff instead of writing
    #[arg(long)]
    pub dry_run: bool,

    /// Output the run report as JSON for scripting
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
