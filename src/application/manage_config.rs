//! Config management use case

use crate::error::Result;
use crate::infrastructure::Config;
use std::path::PathBuf;

/// Service for reading and writing `.timesheet/config.toml`
pub struct ConfigService {
    root: PathBuf,
}

impl ConfigService {
    pub fn new(root: PathBuf) -> Self {
        ConfigService { root }
    }

    /// Get a single stored value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = Config::load_from_dir(&self.root)?;
        config.get(key).map(str::to_string)
    }

    /// Set a value and persist it
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = Config::load_from_dir(&self.root)?;
        config.set(key, value)?;
        config.save_to_dir(&self.root)
    }

    /// All stored values
    pub fn list(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }
}
