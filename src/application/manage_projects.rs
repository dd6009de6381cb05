//! Project registry use cases

use crate::error::Result;
use crate::infrastructure::ProjectRegistry;

/// Service for adding, deleting and listing projects
pub struct ProjectService<R: ProjectRegistry> {
    registry: R,
}

impl<R: ProjectRegistry> ProjectService<R> {
    pub fn new(registry: R) -> Self {
        ProjectService { registry }
    }

    /// Register a project. Existing timesheets are never touched.
    pub fn add(&self, name: &str) -> Result<String> {
        self.registry.add(name)
    }

    /// Remove a project. Timesheets that mention it stay as they are.
    pub fn delete(&self, name: &str) -> Result<String> {
        self.registry.delete(name)
    }

    pub fn list(&self) -> Result<Vec<String>> {
        self.registry.list()
    }
}
