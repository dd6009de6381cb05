//! Error types for timesheet

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the timesheet application
#[derive(Debug, Error)]
pub enum TimesheetError {
    #[error("Project {0} already exists.")]
    DuplicateProject(String),

    #[error("Project {0} does not exist.")]
    ProjectNotFound(String),

    #[error("Invalid project name: {0:?}")]
    InvalidProjectName(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("No timesheets found in {0}")]
    NoTimesheets(PathBuf),

    #[error("Timesheet not found: {0}")]
    TimesheetNotFound(String),

    #[error("No timesheet selected.")]
    SelectionCancelled,

    #[error("Failed to launch {tool} '{program}': {source}")]
    ToolLaunch {
        tool: &'static str,
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{} '{}' exited with status {}", .tool, .program, display_code(.code))]
    ToolFailed {
        tool: &'static str,
        program: String,
        code: Option<i32>,
    },

    #[error("Not a usable timesheet directory: {0}")]
    BaseDirectory(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Template error: {0}")]
    Template(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

fn display_code(code: &Option<i32>) -> String {
    match code {
        Some(c) => c.to_string(),
        None => "signal".to_string(),
    }
}

impl TimesheetError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            TimesheetError::InvalidProjectName(_) | TimesheetError::InvalidDate(_) => 2,
            TimesheetError::DuplicateProject(_) => 3,
            TimesheetError::ProjectNotFound(_)
            | TimesheetError::TimesheetNotFound(_)
            | TimesheetError::NoTimesheets(_) => 4,
            TimesheetError::SelectionCancelled => 5,
            TimesheetError::ToolLaunch { .. } => 127,
            // Propagate the external tool's own status
            TimesheetError::ToolFailed { code, .. } => match code {
                Some(c) if *c != 0 => *c,
                _ => 1,
            },
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            TimesheetError::ProjectNotFound(name) => {
                format!(
                    "Project {} does not exist.\n\n\
                    Suggestions:\n\
                    • Run 'timesheet list-projects' to see registered projects\n\
                    • Project names are case-sensitive",
                    name
                )
            }
            TimesheetError::InvalidDate(input) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Valid dates:\n\
                    • today, yesterday\n\
                    • Specific dates: YYYY-MM-DD (e.g., 2025-01-17)\n\n\
                    Examples:\n\
                    timesheet create\n\
                    timesheet create yesterday\n\
                    timesheet create 2025-01-15",
                    input
                )
            }
            TimesheetError::NoTimesheets(path) => {
                format!(
                    "No timesheets found in {}\n\n\
                    Suggestions:\n\
                    • Run 'timesheet create' to start one\n\
                    • Use --dir or TIMESHEET_ROOT to point at your timesheet directory",
                    path.display()
                )
            }
            TimesheetError::TimesheetNotFound(id) => {
                format!(
                    "Timesheet not found: {}\n\n\
                    Suggestions:\n\
                    • Run 'timesheet list' to see available timesheets\n\
                    • Identify a timesheet by filename (2025-01-17.md) or date (2025-01-17)",
                    id
                )
            }
            TimesheetError::ToolLaunch { tool, .. } => {
                let hint = match *tool {
                    "editor" => {
                        "• Set EDITOR environment variable (e.g., export EDITOR=nano)\n\
                        • Configure editor: timesheet config editor 'vim'"
                    }
                    "picker" => {
                        "• Install fzf, or set TIMESHEET_PICKER\n\
                        • Configure picker: timesheet config picker 'sk'\n\
                        • Pass the timesheet explicitly: timesheet show 2025-01-17"
                    }
                    _ => {
                        "• Set TIMESHEET_OPENER environment variable\n\
                        • Configure opener: timesheet config opener 'xdg-open'"
                    }
                };
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check that the program is installed and in PATH\n\
                    {}",
                    self, hint
                )
            }
            TimesheetError::BaseDirectory(path) => {
                format!(
                    "Not a usable timesheet directory: {}\n\n\
                    Suggestions:\n\
                    • Create the directory first\n\
                    • Check the --dir argument or the TIMESHEET_ROOT environment variable",
                    path.display()
                )
            }
            TimesheetError::Config(msg) => {
                if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Example: timesheet config editor 'code -w'",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using TimesheetError
pub type Result<T> = std::result::Result<T, TimesheetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_by_category() {
        assert_eq!(TimesheetError::DuplicateProject("x".into()).exit_code(), 3);
        assert_eq!(TimesheetError::ProjectNotFound("x".into()).exit_code(), 4);
        assert_eq!(
            TimesheetError::NoTimesheets(PathBuf::from("/tmp")).exit_code(),
            4
        );
        assert_eq!(TimesheetError::SelectionCancelled.exit_code(), 5);
        assert_eq!(TimesheetError::InvalidDate("x".into()).exit_code(), 2);
        assert_eq!(TimesheetError::Config("x".into()).exit_code(), 1);
    }

    #[test]
    fn test_tool_failed_propagates_status() {
        let err = TimesheetError::ToolFailed {
            tool: "editor",
            program: "vim".to_string(),
            code: Some(42),
        };
        assert_eq!(err.exit_code(), 42);
        assert_eq!(err.to_string(), "editor 'vim' exited with status 42");

        let killed = TimesheetError::ToolFailed {
            tool: "opener",
            program: "xdg-open".to_string(),
            code: None,
        };
        assert_eq!(killed.exit_code(), 1);
        assert!(killed.to_string().contains("signal"));
    }

    #[test]
    fn test_tool_launch_exit_code() {
        let err = TimesheetError::ToolLaunch {
            tool: "picker",
            program: "fzf".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.exit_code(), 127);
        let msg = err.display_with_suggestions();
        assert!(msg.contains("Failed to launch picker 'fzf'"));
        assert!(msg.contains("TIMESHEET_PICKER"));
        assert!(msg.contains("PATH"));
    }

    #[test]
    fn test_invalid_date_examples() {
        let err = TimesheetError::InvalidDate("someday".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("today, yesterday"));
        assert!(msg.contains("YYYY-MM-DD"));
        assert!(msg.contains("timesheet create yesterday"));
    }

    #[test]
    fn test_not_found_suggestions() {
        let msg = TimesheetError::ProjectNotFound("Acme".into()).display_with_suggestions();
        assert!(msg.starts_with("Project Acme does not exist."));
        assert!(msg.contains("timesheet list-projects"));

        let msg = TimesheetError::TimesheetNotFound("2025-01-01".into()).display_with_suggestions();
        assert!(msg.contains("timesheet list"));
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = TimesheetError::Template("bad placeholder".to_string());
        assert_eq!(
            err.display_with_suggestions(),
            "Template error: bad placeholder"
        );
        assert_eq!(
            TimesheetError::DuplicateProject("Acme".into()).display_with_suggestions(),
            "Project Acme already exists."
        );
    }
}
