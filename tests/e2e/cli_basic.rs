//! E2E tests for basic CLI behavior
//!
//! Exercises the non-interactive surface: help, version, list mode, and
//! argument validation.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn pv() -> Command {
    cargo_bin_cmd!("pv")
}

fn write_png(path: &std::path::Path) {
    image::RgbaImage::from_pixel(2, 2, image::Rgba([1, 2, 3, 255]))
        .save(path)
        .unwrap();
}

// =============================================================================
// Help and Version
// =============================================================================

#[test]
fn help_prints_usage() {
    pv().arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: pv"));
}

#[test]
fn version_prints_the_crate_version() {
    pv().arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// =============================================================================
// List Mode
// =============================================================================

#[test]
fn list_mode_prints_labels_in_grid_order() {
    let temp = TempDir::new().unwrap();
    write_png(&temp.path().join("b.png"));
    fs::write(temp.path().join("a.txt"), b"x").unwrap();
    fs::create_dir(temp.path().join("Z")).unwrap();

    pv().arg("--list")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::eq("[Z]\nb.png\n"));
}

#[test]
fn list_mode_on_empty_directory_prints_nothing() {
    let temp = TempDir::new().unwrap();
    pv().arg("--list")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn list_mode_truncates_long_labels() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("holiday_photos_2019a")).unwrap();

    pv().arg("--list")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::eq("[holiday_phot...]\n"));
}

// =============================================================================
// Argument Validation
// =============================================================================

#[test]
fn unknown_option_is_invalid() {
    pv().arg("--bogus").assert().failure().code(2);
}

#[test]
fn missing_directory_is_invalid() {
    pv().arg("--list")
        .arg("/definitely/not/a/real/dir")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("not a directory"));
}

#[test]
fn file_as_root_is_invalid() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("photo.png");
    write_png(&file);

    pv().arg("--list").arg(&file).assert().failure().code(2);
}
