//! Domain layer - Business rules and naming conventions

pub mod date_ref;
pub mod naming;
pub mod project;
pub mod template;

pub use date_ref::DateReference;
pub use naming::TimesheetName;
pub use project::ProjectList;
pub use template::{load_template, Template};
