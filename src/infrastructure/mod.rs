//! Infrastructure layer - External I/O and persistence

pub mod base_dir;
pub mod config;
pub mod editor;
pub mod logging;
pub mod opener;
pub mod registry;
pub mod runner;
pub mod selector;
pub mod store;

pub use base_dir::resolve_base_dir;
pub use config::Config;
pub use editor::EditorSession;
pub use opener::SystemOpener;
pub use registry::{JsonProjectRegistry, ProjectRegistry};
pub use runner::{ProcessRunner, ToolCommand, ToolOutput, ToolRunner};
pub use selector::Selector;
pub use store::{TimesheetEntry, TimesheetStore};
