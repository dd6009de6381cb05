//! Output formatting utilities

use crate::infrastructure::{Config, TimesheetEntry};

/// Format project names, one per line
pub fn format_project_list(projects: &[String]) -> String {
    if projects.is_empty() {
        return "No projects found".to_string();
    }

    let mut output = String::new();
    for project in projects {
        output.push_str(project);
        output.push('\n');
    }
    output
}

/// Format timesheets as `<filename>  <label>` lines
pub fn format_timesheet_list(entries: &[TimesheetEntry]) -> String {
    if entries.is_empty() {
        return "No timesheets found".to_string();
    }

    let width = entries
        .iter()
        .map(|e| e.filename().len())
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format!(
            "{:<width$}  {}\n",
            entry.filename(),
            entry.label(),
            width = width
        ));
    }
    output
}

/// Format the full configuration as `key = value` lines
pub fn format_config(config: &Config) -> String {
    format!(
        "editor = {}\npicker = {}\nopener = {}\n",
        config.editor, config.picker, config.opener
    )
}
