//! Timesheet store: the directory of timesheet files

use crate::domain::TimesheetName;
use crate::error::{Result, TimesheetError};
use chrono::NaiveDate;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// A timesheet file found in the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimesheetEntry {
    pub name: TimesheetName,
    pub path: PathBuf,
}

impl TimesheetEntry {
    pub fn filename(&self) -> String {
        self.name.filename()
    }

    /// Candidate string shown in the selector
    pub fn label(&self) -> String {
        self.name.label()
    }
}

/// File system implementation of the timesheet store
#[derive(Debug, Clone)]
pub struct TimesheetStore {
    root: PathBuf,
}

impl TimesheetStore {
    /// Create a store rooted at the given base directory
    pub fn new(root: PathBuf) -> Self {
        TimesheetStore { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create a new timesheet for `date` without ever overwriting an existing file
    pub fn create(&self, date: NaiveDate, content: &str) -> Result<TimesheetEntry> {
        let mut name = TimesheetName::first(date);

        loop {
            let path = self.root.join(name.filename());
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(file) => {
                    write_or_remove(file, &path, content)?;
                    tracing::debug!(file = %name.filename(), "timesheet created");
                    return Ok(TimesheetEntry { name, path });
                }
                Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                    name = name.next();
                }
                Err(e) => return Err(TimesheetError::Io(e)),
            }
        }
    }

    /// All timesheets, most recent first
    pub fn list(&self) -> Result<Vec<TimesheetEntry>> {
        let mut entries = Vec::new();

        for entry in fs::read_dir(&self.root)? {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!(error = %e, "skipping unreadable directory entry");
                    continue;
                }
            };
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let Some(name) = path
                .file_name()
                .and_then(|n| n.to_str())
                .and_then(TimesheetName::parse)
            else {
                continue;
            };
            entries.push(TimesheetEntry { name, path });
        }

        entries.sort_by(|a, b| b.name.cmp(&a.name));
        Ok(entries)
    }

    /// Map a selector label, filename, or filename stem to a timesheet
    pub fn resolve(&self, identifier: &str) -> Result<TimesheetEntry> {
        let wanted = identifier.trim();
        self.list()?
            .into_iter()
            .find(|entry| {
                entry.label() == wanted
                    || entry.filename() == wanted
                    || entry.name.stem() == wanted
            })
            .ok_or_else(|| TimesheetError::TimesheetNotFound(identifier.to_string()))
    }

    /// Read a timesheet's contents
    pub fn read(&self, entry: &TimesheetEntry) -> Result<String> {
        fs::read_to_string(&entry.path).map_err(TimesheetError::Io)
    }
}

/// Fill a freshly created file; on failure remove it so no partial timesheet is left
fn write_or_remove<W: Write>(mut file: W, path: &Path, content: &str) -> Result<()> {
    let written = file.write_all(content.as_bytes()).and_then(|_| file.flush());
    drop(file);

    if let Err(e) = written {
        if let Err(cleanup) = fs::remove_file(path) {
            tracing::warn!(
                file = %path.display(),
                error = %cleanup,
                "could not remove partial timesheet"
            );
        }
        return Err(TimesheetError::Io(e));
    }
    Ok(())
}
