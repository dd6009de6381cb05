#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

pub fn timesheet_cmd() -> Command {
    let mut cmd = Command::cargo_bin("timesheet").unwrap();
    cmd.env_remove("TIMESHEET_ROOT");
    cmd.env_remove("TIMESHEET_PICKER");
    cmd.env_remove("TIMESHEET_OPENER");
    cmd.env_remove("TIMESHEET_LOG");
    cmd.env_remove("EDITOR");
    cmd.env_remove("VISUAL");
    cmd
}

/// Command rooted at `dir` through --dir
pub fn timesheet_in(dir: &Path) -> Command {
    let mut cmd = timesheet_cmd();
    cmd.arg("--dir").arg(dir);
    cmd
}

/// Timesheet filenames in `dir`, sorted
pub fn timesheet_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|n| n.ends_with(".md"))
        .collect();
    names.sort();
    names
}
