//! Editor integration for timesheet files

use crate::error::Result;
use crate::infrastructure::runner::{ToolCommand, ToolRunner};
use std::path::Path;

/// Session for editing files in an external editor
pub struct EditorSession<'a> {
    command: String,
    runner: &'a dyn ToolRunner,
}

impl<'a> EditorSession<'a> {
    /// Create a new editor session with the given command
    pub fn new(editor_command: String, runner: &'a dyn ToolRunner) -> Self {
        EditorSession {
            command: editor_command,
            runner,
        }
    }

    /// Open a file in the editor and wait for it to exit
    pub fn edit(&self, file_path: &Path) -> Result<()> {
        let command =
            ToolCommand::parse("editor", &self.command)?.arg(file_path.to_string_lossy());
        let code = self.runner.run(&command)?;
        command.check(code)
    }
}
