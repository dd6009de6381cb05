//! Create timesheet use case

use crate::domain::{load_template, DateReference};
use crate::error::Result;
use crate::infrastructure::{
    Config, EditorSession, ProjectRegistry, TimesheetEntry, TimesheetStore, ToolRunner,
};
use chrono::NaiveDate;

/// Service for creating new timesheets
pub struct CreateTimesheetService<'a, R: ProjectRegistry> {
    store: TimesheetStore,
    registry: R,
    config: Config,
    runner: &'a dyn ToolRunner,
}

impl<'a, R: ProjectRegistry> CreateTimesheetService<'a, R> {
    pub fn new(
        store: TimesheetStore,
        registry: R,
        config: Config,
        runner: &'a dyn ToolRunner,
    ) -> Self {
        CreateTimesheetService {
            store,
            registry,
            config,
            runner,
        }
    }

    /// Create a timesheet for the referenced date, seeded from the template.
    /// Opens it in the editor only when `open_in_editor` is true.
    pub fn execute(
        &self,
        date_ref: &str,
        today: NaiveDate,
        open_in_editor: bool,
    ) -> Result<TimesheetEntry> {
        // Validate input before touching the disk
        let date = DateReference::parse(date_ref)?.resolve(today);

        let projects = self.registry.list()?;
        let template = load_template(self.store.root())?;
        let content = template.render(date, &projects);

        let entry = self.store.create(date, &content)?;

        if open_in_editor {
            let editor = EditorSession::new(self.config.get_editor(), self.runner);
            editor.edit(&entry.path)?;
        }

        Ok(entry)
    }
}
