//! System file opener (open / xdg-open / rundll32)

use crate::error::Result;
use crate::infrastructure::runner::{ToolCommand, ToolRunner};
use std::path::Path;

pub struct SystemOpener<'a> {
    command: String,
    runner: &'a dyn ToolRunner,
}

impl<'a> SystemOpener<'a> {
    pub fn new(opener_command: String, runner: &'a dyn ToolRunner) -> Self {
        SystemOpener {
            command: opener_command,
            runner,
        }
    }

    /// Hand a file to the default application
    pub fn open(&self, file_path: &Path) -> Result<()> {
        let command =
            ToolCommand::parse("opener", &self.command)?.arg(file_path.to_string_lossy());
        let code = self.runner.run(&command)?;
        command.check(code)
    }
}
