//! Interactive selection through an external fuzzy picker

use crate::error::Result;
use crate::infrastructure::runner::{ToolCommand, ToolRunner};

/// fzf: no candidate matched the query
const EXIT_NO_MATCH: i32 = 1;
/// fzf: interrupted with Ctrl-C or Esc
const EXIT_ABORTED: i32 = 130;

/// Single-item, cancellable picker
pub struct Selector<'a> {
    command: String,
    runner: &'a dyn ToolRunner,
}

impl<'a> Selector<'a> {
    pub fn new(picker_command: String, runner: &'a dyn ToolRunner) -> Self {
        Selector {
            command: picker_command,
            runner,
        }
    }

    /// Let the user choose one candidate. `Ok(None)` means the user cancelled.
    pub fn select(&self, candidates: &[String]) -> Result<Option<String>> {
        let command = ToolCommand::parse("picker", &self.command)?;

        let mut input = candidates.join("\n");
        input.push('\n');

        let output = self.runner.capture(&command, &input)?;

        match output.code {
            Some(0) => {
                let choice = output.stdout.lines().next().unwrap_or("").trim_end();
                if choice.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(choice.to_string()))
                }
            }
            Some(EXIT_NO_MATCH) | Some(EXIT_ABORTED) => {
                tracing::debug!(code = ?output.code, "picker cancelled");
                Ok(None)
            }
            code => command.check(code).map(|_| None),
        }
    }
}
