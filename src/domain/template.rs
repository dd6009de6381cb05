//! Template system for new timesheets

use crate::error::{Result, TimesheetError};
use chrono::NaiveDate;
use std::fs;
use std::path::Path;

const DEFAULT_TEMPLATE: &str = "# Timesheet: {DAY_NAME}, {DATE}\n\n{PROJECTS}";

/// Template for timesheet generation
#[derive(Debug)]
pub struct Template {
    content: String,
}

impl Template {
    /// Built-in template
    pub fn builtin() -> Self {
        Template {
            content: DEFAULT_TEMPLATE.to_string(),
        }
    }

    /// Create template from custom template file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            TimesheetError::Template(format!(
                "Failed to read template file {}: {}",
                path.display(),
                e
            ))
        })?;

        Ok(Template { content })
    }

    /// Render template with date and project substitution
    pub fn render(&self, date: NaiveDate, projects: &[String]) -> String {
        let mut result = self.content.clone();

        // {DATE} -> "January 17, 2025"
        result = result.replace("{DATE}", &date.format("%B %d, %Y").to_string());
        result = result.replace("{ISO_DATE}", &date.format("%Y-%m-%d").to_string());
        result = result.replace("{YEAR}", &date.format("%Y").to_string());
        result = result.replace("{MONTH}", &date.format("%B").to_string());
        result = result.replace("{DAY_NAME}", &date.format("%A").to_string());

        // Last, so project names containing placeholders stay verbatim
        result = result.replace("{PROJECTS}", &render_projects(projects));

        result
    }
}

fn render_projects(projects: &[String]) -> String {
    let mut out = String::new();
    for project in projects {
        out.push_str(&format!("## {}\n\nHours:\nNotes:\n\n", project));
    }
    out
}

/// Load `.timesheet/template.md` from the base directory or fall back to built-in
pub fn load_template(base_dir: &Path) -> Result<Template> {
    let custom_path = base_dir.join(".timesheet").join("template.md");

    if custom_path.exists() {
        Template::from_file(&custom_path)
    } else {
        Ok(Template::builtin())
    }
}
