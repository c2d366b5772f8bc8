//! The patch run: read, splice, validate, write

use std::path::Path;

use colored::Colorize;
use serde::Serialize;
use similar::{ChangeTag, TextDiff};
use tracing::debug;

use tabsync_content::{Region, ValidationProfile, splice};

use crate::error::Result;

/// Options controlling a patch run
#[derive(Debug, Clone)]
pub struct PatchOptions {
    /// Phrases required in the patched document
    pub profile: ValidationProfile,
    /// Report the change without writing it
    pub dry_run: bool,
    /// Emit the run report as JSON instead of console lines
    pub json: bool,
}

/// Outcome of a patch run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Outcome {
    /// Target region replaced and written
    Patched,
    /// Target region already matches the reference; nothing written
    InSync,
    /// Dry run; nothing written
    DryRun,
}

/// Machine-readable report of a patch run
#[derive(Debug, Serialize)]
pub struct Report {
    pub outcome: Outcome,
    pub target: String,
    pub reference: String,
    pub target_region: RegionReport,
    pub reference_region: RegionReport,
}

/// Span and checksum of a located region
#[derive(Debug, Serialize)]
pub struct RegionReport {
    pub start: usize,
    pub end: usize,
    pub checksum: String,
}

impl RegionReport {
    fn from_region(region: &Region) -> Self {
        Self {
            start: region.span.start,
            end: region.span.end,
            checksum: region.checksum().to_string(),
        }
    }
}

/// Run the patch pipeline: read both documents, splice, validate, write.
///
/// The target file is only touched after validation passes, and the write
/// itself is atomic, so every failure leaves it byte-identical.
pub fn run_patch(target: &Path, reference: &Path, options: &PatchOptions) -> Result<()> {
    let target_text = tabsync_fs::read_lossy(target)?;
    let reference_text = tabsync_fs::read_lossy(reference)?;
    debug!(
        target = %target.display(),
        reference = %reference.display(),
        "documentos cargados"
    );

    let result = splice(&target_text, &reference_text)?;
    options.profile.check(&result.patched)?;

    let outcome = if result.in_sync() {
        Outcome::InSync
    } else if options.dry_run {
        Outcome::DryRun
    } else {
        tabsync_fs::write_atomic(target, &result.patched)?;
        Outcome::Patched
    };
    debug!(?outcome, "corrida completada");

    if options.json {
        let report = Report {
            outcome,
            target: target.display().to_string(),
            reference: reference.display().to_string(),
            target_region: RegionReport::from_region(&result.target_region),
            reference_region: RegionReport::from_region(&result.reference_region),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    match outcome {
        Outcome::Patched => println!(
            "{} Instructivo + Ejemplo reemplazados en {} usando {}",
            "OK:".green().bold(),
            target.display(),
            reference.display()
        ),
        Outcome::InSync => println!(
            "{} el bloque de {} ya coincide con {}; nada que escribir",
            "OK:".green().bold(),
            target.display(),
            reference.display()
        ),
        Outcome::DryRun => {
            print_diff(&target_text, &result.patched);
            println!(
                "{} simulación: {} no fue modificado",
                "OK:".green().bold(),
                target.display()
            );
        }
    }

    Ok(())
}

/// Print the line diff the write would apply.
fn print_diff(old: &str, new: &str) {
    let diff = TextDiff::from_lines(old, new);
    for change in diff.iter_all_changes() {
        match change.tag() {
            ChangeTag::Delete => print!("{}{}", "-".red(), change.value()),
            ChangeTag::Insert => print!("{}{}", "+".green(), change.value()),
            ChangeTag::Equal => {}
        }
    }
}
