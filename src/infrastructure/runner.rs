//! Blocking execution of external programs (editor, picker, opener)

use crate::error::{Result, TimesheetError};
use std::io::Write;
use std::process::{Command, Stdio};

/// A parsed external command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    /// Role of the tool, used in error messages ("editor", "picker", "opener")
    pub tool: &'static str,
    pub program: String,
    pub args: Vec<String>,
}

impl ToolCommand {
    /// Split a configured command line into program and arguments
    pub fn parse(tool: &'static str, command_line: &str) -> Result<Self> {
        let mut parts = command_line.split_whitespace().map(str::to_string);

        let program = parts.next().ok_or_else(|| {
            TimesheetError::Config(format!("No {} command configured", tool))
        })?;

        Ok(ToolCommand {
            tool,
            program,
            args: parts.collect(),
        })
    }

    /// Append an argument
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Convert a non-zero exit into a ToolFailed error
    pub fn check(&self, code: Option<i32>) -> Result<()> {
        if code == Some(0) {
            Ok(())
        } else {
            Err(TimesheetError::ToolFailed {
                tool: self.tool,
                program: self.program.clone(),
                code,
            })
        }
    }

    fn launch_error(&self, source: std::io::Error) -> TimesheetError {
        TimesheetError::ToolLaunch {
            tool: self.tool,
            program: self.program.clone(),
            source,
        }
    }
}

/// Output of a captured run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    /// None when the process was killed by a signal
    pub code: Option<i32>,
    pub stdout: String,
}

/// Runs external programs to completion
pub trait ToolRunner {
    /// Run with inherited stdio, returning the exit code
    fn run(&self, command: &ToolCommand) -> Result<Option<i32>>;

    /// Run with `input` on stdin and stdout captured; stderr stays attached
    fn capture(&self, command: &ToolCommand, input: &str) -> Result<ToolOutput>;
}

/// ToolRunner backed by real child processes
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    fn build(command: &ToolCommand) -> Command {
        // On Windows, go through cmd /C so .bat and .cmd files are found
        let mut cmd = if cfg!(windows) {
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").arg(&command.program);
            cmd
        } else {
            Command::new(&command.program)
        };
        cmd.args(&command.args);
        cmd
    }
}

impl ToolRunner for ProcessRunner {
    fn run(&self, command: &ToolCommand) -> Result<Option<i32>> {
        tracing::debug!(
            tool = command.tool,
            program = %command.program,
            args = ?command.args,
            "running"
        );

        let status = Self::build(command)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| command.launch_error(e))?;

        tracing::debug!(tool = command.tool, code = ?status.code(), "finished");
        Ok(status.code())
    }

    fn capture(&self, command: &ToolCommand, input: &str) -> Result<ToolOutput> {
        tracing::debug!(
            tool = command.tool,
            program = %command.program,
            args = ?command.args,
            "capturing"
        );

        let mut child = Self::build(command)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| command.launch_error(e))?;

        if let Some(mut stdin) = child.stdin.take() {
            // A picker may exit before reading everything
            if let Err(e) = stdin.write_all(input.as_bytes()) {
                if e.kind() != std::io::ErrorKind::BrokenPipe {
                    return Err(TimesheetError::Io(e));
                }
            }
        }

        let output = child.wait_with_output()?;
        tracing::debug!(tool = command.tool, code = ?output.status.code(), "finished");

        Ok(ToolOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        })
    }
}
