//! Project list rules

use crate::error::{Result, TimesheetError};
use serde::{Deserialize, Serialize};

/// Ordered set of project names, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectList {
    names: Vec<String>,
}

impl ProjectList {
    pub fn new() -> Self {
        ProjectList::default()
    }

    /// Normalize a user-supplied name; blank names and control characters are rejected
    pub fn normalize(name: &str) -> Result<String> {
        let trimmed = name.trim();
        // A name is exactly one line of printable text
        // One name per line in listings and one heading per project in templates
        if trimmed.is_empty() || trimmed.chars().any(char::is_control) {
            return Err(TimesheetError::InvalidProjectName(name.to_string()));
        }
        Ok(trimmed.to_string())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Append a project; fails without mutating if the name is taken
    pub fn add(&mut self, name: &str) -> Result<String> {
        let name = Self::normalize(name)?;
        if self.contains(&name) {
            return Err(TimesheetError::DuplicateProject(name));
        }
        self.names.push(name.clone());
        Ok(name)
    }

    /// Remove a project; fails without mutating if absent
    pub fn remove(&mut self, name: &str) -> Result<String> {
        let name = Self::normalize(name)?;
        match self.names.iter().position(|n| *n == name) {
            Some(idx) => Ok(self.names.remove(idx)),
            None => Err(TimesheetError::ProjectNotFound(name)),
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn into_names(self) -> Vec<String> {
        self.names
    }
}

impl FromIterator<String> for ProjectList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut list = ProjectList::new();
        for name in iter {
            // Hand-edited files may contain repeats; keep the first
            if !list.contains(&name) {
                list.names.push(name);
            }
        }
        list
    }
}
