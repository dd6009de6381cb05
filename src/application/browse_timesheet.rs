//! Show / edit / open use cases over existing timesheets

use crate::error::{Result, TimesheetError};
use crate::infrastructure::{
    Config, EditorSession, Selector, SystemOpener, TimesheetEntry, TimesheetStore, ToolRunner,
};

/// Service for picking an existing timesheet and acting on it
pub struct BrowseTimesheetService<'a> {
    store: TimesheetStore,
    config: Config,
    runner: &'a dyn ToolRunner,
}

impl<'a> BrowseTimesheetService<'a> {
    pub fn new(store: TimesheetStore, config: Config, runner: &'a dyn ToolRunner) -> Self {
        BrowseTimesheetService {
            store,
            config,
            runner,
        }
    }

    /// Resolve an explicit identifier, or ask the picker when there is none
    pub fn choose(&self, identifier: Option<&str>) -> Result<TimesheetEntry> {
        if let Some(id) = identifier {
            return self.store.resolve(id);
        }

        let entries = self.store.list()?;
        if entries.is_empty() {
            return Err(TimesheetError::NoTimesheets(self.store.root().to_path_buf()));
        }

        let labels: Vec<String> = entries.iter().map(TimesheetEntry::label).collect();
        let selector = Selector::new(self.config.get_picker(), self.runner);

        let chosen = selector
            .select(&labels)?
            .ok_or(TimesheetError::SelectionCancelled)?;

        entries
            .into_iter()
            .find(|entry| entry.label() == chosen)
            .ok_or(TimesheetError::TimesheetNotFound(chosen))
    }

    /// Contents of the chosen timesheet
    pub fn show(&self, identifier: Option<&str>) -> Result<String> {
        let entry = self.choose(identifier)?;
        self.store.read(&entry)
    }

    /// Open the chosen timesheet in the editor and wait for it
    pub fn edit(&self, identifier: Option<&str>) -> Result<TimesheetEntry> {
        let entry = self.choose(identifier)?;
        EditorSession::new(self.config.get_editor(), self.runner).edit(&entry.path)?;
        Ok(entry)
    }

    /// Hand the chosen timesheet to the system opener
    pub fn open(&self, identifier: Option<&str>) -> Result<TimesheetEntry> {
        let entry = self.choose(identifier)?;
        SystemOpener::new(self.config.get_opener(), self.runner).open(&entry.path)?;
        Ok(entry)
    }
}
