//! tabsync CLI
//!
//! Replaces the marked instructivo region of a target HTML document with the
//! same region taken from a reference document.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::Cli;
use commands::PatchOptions;
use error::Result;
use tabsync_content::ValidationProfile;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    let profile = if cli.lenient {
        ValidationProfile::lenient()
    } else {
        ValidationProfile::strict()
    };

    let options = PatchOptions {
        profile,
        dry_run: cli.dry_run,
        json: cli.json,
    };

    commands::run_patch(&cli.target, &cli.reference, &options)
}
