//! timesheet - Personal command-line timesheet manager
//!
//! Keeps a registry of project names and a directory of per-day timesheet
//! files, and hands them to an external fuzzy picker, text editor, or the
//! system opener.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::TimesheetError;
