//! Locating the timesheet base directory

use crate::error::{Result, TimesheetError};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Environment variable naming the base directory
pub const ROOT_ENV: &str = "TIMESHEET_ROOT";

/// Resolve the base directory: `--dir`, then TIMESHEET_ROOT, then the current directory
pub fn resolve_base_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    let current = std::env::current_dir()?;
    resolve_from(explicit, std::env::var_os(ROOT_ENV), &current)
}

fn resolve_from(
    explicit: Option<&Path>,
    env_root: Option<OsString>,
    current: &Path,
) -> Result<PathBuf> {
    let path = match (explicit, env_root) {
        (Some(path), _) => path.to_path_buf(),
        (None, Some(root)) if !root.is_empty() => PathBuf::from(root),
        _ => current.to_path_buf(),
    };

    if !path.is_dir() {
        return Err(TimesheetError::BaseDirectory(path));
    }

    tracing::debug!(base = %path.display(), "using base directory");
    Ok(path)
}
