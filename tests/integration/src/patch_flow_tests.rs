//! End-to-end tests for the patch flow
//!
//! These exercise the complete pipeline the CLI drives:
//! read → locate × 2 → splice → validate → write.

use std::fs;
use std::path::PathBuf;

use pretty_assertions::assert_eq;
use tabsync_content::{Error, Region, ValidationProfile, splice};
use tabsync_fs::{read_lossy, write_atomic};
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../test-fixtures/documents")
        .join(name)
}

/// Copy both fixture documents into a fresh temp directory.
fn setup_fixture_documents(dir: &std::path::Path) -> (PathBuf, PathBuf) {
    let target = dir.join("index.html");
    let reference = dir.join("SABG_Sistema_Formacion_accesible.html");
    fs::copy(fixture("index.html"), &target).unwrap();
    fs::copy(fixture("SABG_Sistema_Formacion_accesible.html"), &reference).unwrap();
    (target, reference)
}

#[test]
fn full_pipeline_patches_the_fixture_page() {
    let temp = TempDir::new().unwrap();
    let (target_path, reference_path) = setup_fixture_documents(temp.path());

    let target = read_lossy(&target_path).unwrap();
    let reference = read_lossy(&reference_path).unwrap();

    let result = splice(&target, &reference).unwrap();
    ValidationProfile::strict().check(&result.patched).unwrap();
    write_atomic(&target_path, &result.patched).unwrap();

    let written = fs::read_to_string(&target_path).unwrap();
    assert_eq!(written, result.patched);

    // The instructivo tab now carries the reference content, the rest of the
    // page is untouched.
    assert!(written.contains("📖 INSTRUCTIVO PARA EL LLENADO DEL FORMATO"));
    assert!(written.contains("María Guadalupe Hernández López"));
    assert!(!written.contains("versión anterior"));
    assert!(written.contains("<form action=\"/registro\" method=\"post\">"));
    assert!(written.starts_with("<!DOCTYPE html>"));
}

#[test]
fn pipeline_output_is_prefix_reference_region_suffix() {
    let target = "<p>A</p><!-- TAB: INSTRUCTIVO --><div id=\"instructivo\" class=\"tab-content x\">OLD</div><!-- TAB: FORMULARIO --><p>Z</p>";
    let reference = "<!-- TAB: INSTRUCTIVO --><div id=\"instructivo\" class=\"tab-content\">\
<h2>📖 INSTRUCTIVO PARA EL LLENADO DEL FORMATO</h2><p>Ejemplo: así se llena</p></div>\
<!-- TAB: FORMULARIO -->";

    let result = splice(target, reference).unwrap();
    ValidationProfile::strict().check(&result.patched).unwrap();

    let reference_region = Region::locate(reference).unwrap();
    assert_eq!(
        result.patched,
        format!(
            "<p>A</p>{}<!-- TAB: FORMULARIO --><p>Z</p>",
            reference_region.text
        )
    );
}

#[test]
fn validation_failure_leaves_the_target_file_untouched() {
    let temp = TempDir::new().unwrap();
    let (target_path, reference_path) = setup_fixture_documents(temp.path());

    // Strip the example line from the reference region
    let reference = read_lossy(&reference_path).unwrap().replace("Ejemplo", "Muestra");
    fs::write(&reference_path, &reference).unwrap();
    let before = fs::read_to_string(&target_path).unwrap();

    let target = read_lossy(&target_path).unwrap();
    let result = splice(&target, &reference).unwrap();
    let err = ValidationProfile::strict().check(&result.patched).unwrap_err();
    assert!(matches!(err, Error::ValidationFailed { ref phrase } if phrase == "ejemplo"));

    // The write is gated behind validation, so the file never changed.
    assert_eq!(fs::read_to_string(&target_path).unwrap(), before);
}

#[test]
fn malformed_bytes_outside_the_region_do_not_abort_the_run() {
    let temp = TempDir::new().unwrap();
    let (target_path, reference_path) = setup_fixture_documents(temp.path());

    // Corrupt the target's header with invalid UTF-8
    let mut bytes = fs::read(&target_path).unwrap();
    bytes.splice(0..0, b"\xFF\xFE".iter().copied());
    fs::write(&target_path, &bytes).unwrap();

    let target = read_lossy(&target_path).unwrap();
    let reference = read_lossy(&reference_path).unwrap();

    let result = splice(&target, &reference).unwrap();
    ValidationProfile::strict().check(&result.patched).unwrap();
    write_atomic(&target_path, &result.patched).unwrap();

    // The rewritten file is clean UTF-8 with the corrupt bytes dropped
    let written = fs::read_to_string(&target_path).unwrap();
    assert!(written.starts_with("<!DOCTYPE html>"));
}

#[test]
fn repatching_a_patched_page_is_a_noop() {
    let temp = TempDir::new().unwrap();
    let (target_path, reference_path) = setup_fixture_documents(temp.path());

    let reference = read_lossy(&reference_path).unwrap();

    let first = splice(&read_lossy(&target_path).unwrap(), &reference).unwrap();
    write_atomic(&target_path, &first.patched).unwrap();

    let second = splice(&read_lossy(&target_path).unwrap(), &reference).unwrap();
    assert!(second.in_sync());
    assert_eq!(second.patched, first.patched);
}
