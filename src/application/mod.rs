//! Application layer - Use cases and orchestration

pub mod browse_timesheet;
pub mod create_timesheet;
pub mod manage_config;
pub mod manage_projects;

pub use browse_timesheet::BrowseTimesheetService;
pub use create_timesheet::CreateTimesheetService;
pub use manage_config::ConfigService;
pub use manage_projects::ProjectService;
