//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "timesheet")]
#[command(about = "Personal timesheet manager", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Timesheet directory (default: TIMESHEET_ROOT, then the current directory)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register a new project
    AddProject {
        /// Project name
        name: String,
    },

    /// Remove a project (existing timesheets are left untouched)
    DeleteProject {
        /// Project name
        name: String,
    },

    /// List registered projects
    ListProjects,

    /// Create a new timesheet and open it in the editor
    Create {
        /// Day the timesheet covers (today, yesterday, YYYY-MM-DD)
        #[arg(default_value = "today")]
        when: String,

        /// Only create the file; do not launch the editor
        #[arg(long)]
        no_edit: bool,
    },

    /// List timesheets, most recent first
    List,

    /// Print a timesheet
    Show {
        /// Timesheet to show (filename or date); prompts with the picker when omitted
        id: Option<String>,
    },

    /// Edit a timesheet in the editor
    Edit {
        /// Timesheet to edit (filename or date); prompts with the picker when omitted
        id: Option<String>,
    },

    /// Open a timesheet with the system's default application
    Open {
        /// Timesheet to open (filename or date); prompts with the picker when omitted
        id: Option<String>,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set (editor, picker, opener)
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
