//! Integration tests for show / edit / open
//!
//! External programs are replaced with Unix stand-ins: `head -n 1` picks the
//! first candidate, `false` plays a cancelled picker, `true` a well-behaved
//! editor or opener.

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::timesheet_in;

fn seeded() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("2025-01-16.md"), "older sheet\n").unwrap();
    fs::write(temp.path().join("2025-01-17.md"), "newer sheet\n").unwrap();
    temp
}

#[test]
fn test_show_explicit_filename() {
    let temp = seeded();

    timesheet_in(temp.path())
        .args(["show", "2025-01-16.md"])
        .assert()
        .success()
        .stdout("older sheet\n");
}

#[test]
fn test_show_explicit_stem() {
    let temp = seeded();

    timesheet_in(temp.path())
        .args(["show", "2025-01-17"])
        .assert()
        .success()
        .stdout("newer sheet\n");
}

#[test]
fn test_show_unknown_timesheet() {
    let temp = seeded();

    timesheet_in(temp.path())
        .args(["show", "2024-01-01"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Timesheet not found: 2024-01-01"));
}

#[test]
fn test_show_empty_store() {
    let temp = TempDir::new().unwrap();

    timesheet_in(temp.path())
        .env("TIMESHEET_PICKER", "head -n 1")
        .arg("show")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("No timesheets found"));
}

#[cfg(unix)]
mod with_tools {
    use super::*;

    #[test]
    fn test_show_via_picker() {
        let temp = seeded();

        timesheet_in(temp.path())
            .env("TIMESHEET_PICKER", "head -n 1")
            .arg("show")
            .assert()
            .success()
            .stdout("newer sheet\n");
    }

    #[test]
    fn test_picker_from_config() {
        let temp = seeded();

        timesheet_in(temp.path())
            .args(["config", "picker", "tail -n 1"])
            .assert()
            .success();

        timesheet_in(temp.path())
            .arg("show")
            .assert()
            .success()
            .stdout("older sheet\n");
    }

    #[test]
    fn test_blank_picker_env_falls_back_to_config() {
        let temp = seeded();

        timesheet_in(temp.path())
            .args(["config", "picker", "tail -n 1"])
            .assert()
            .success();

        timesheet_in(temp.path())
            .env("TIMESHEET_PICKER", "")
            .arg("show")
            .assert()
            .success()
            .stdout("older sheet\n");
    }

    #[test]
    fn test_cancelled_selection_aborts() {
        let temp = seeded();

        for action in ["show", "edit", "open"] {
            timesheet_in(temp.path())
                .env("TIMESHEET_PICKER", "false")
                .env("EDITOR", "true")
                .env("TIMESHEET_OPENER", "true")
                .arg(action)
                .assert()
                .code(5)
                .stdout(predicate::str::is_empty())
                .stderr(predicate::str::contains("No timesheet selected."));
        }

        assert_eq!(
            fs::read_to_string(temp.path().join("2025-01-17.md")).unwrap(),
            "newer sheet\n"
        );
        assert_eq!(
            fs::read_to_string(temp.path().join("2025-01-16.md")).unwrap(),
            "older sheet\n"
        );
    }

    #[test]
    fn test_missing_picker() {
        let temp = seeded();

        timesheet_in(temp.path())
            .env("TIMESHEET_PICKER", "no-such-picker-for-timesheet-tests")
            .arg("show")
            .assert()
            .code(127)
            .stderr(predicate::str::contains("Failed to launch picker"));
    }

    #[test]
    fn test_edit_via_picker() {
        let temp = seeded();

        timesheet_in(temp.path())
            .env("TIMESHEET_PICKER", "head -n 1")
            .env("EDITOR", "true")
            .arg("edit")
            .assert()
            .success();
    }

    #[test]
    fn test_edit_failure_propagates() {
        let temp = seeded();

        timesheet_in(temp.path())
            .env("EDITOR", "false")
            .args(["edit", "2025-01-16"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("editor 'false' exited with status 1"));
    }

    #[test]
    fn test_open_explicit() {
        let temp = seeded();

        timesheet_in(temp.path())
            .env("TIMESHEET_OPENER", "true")
            .args(["open", "2025-01-16"])
            .assert()
            .success();
    }

    #[test]
    fn test_open_failure_propagates() {
        let temp = seeded();

        timesheet_in(temp.path())
            .env("TIMESHEET_OPENER", "false")
            .args(["open", "2025-01-16"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("opener 'false' exited with status 1"));
    }
}
