//! Configuration management

use crate::error::{Result, TimesheetError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Environment override for the picker command
pub const PICKER_ENV: &str = "TIMESHEET_PICKER";
/// Environment override for the system opener command
pub const OPENER_ENV: &str = "TIMESHEET_OPENER";

/// Windows default opener; explorer.exe exits with 1 even on success
pub const WINDOWS_OPENER: &str = "rundll32 url.dll,FileProtocolHandler";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub editor: String,
    pub picker: String,
    pub opener: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            editor: Self::default_editor().to_string(),
            picker: "fzf".to_string(),
            opener: Self::default_opener().to_string(),
        }
    }
}

impl Config {
    /// Valid keys for `timesheet config`
    pub const KEYS: [&'static str; 3] = ["editor", "picker", "opener"];

    /// Load config from .timesheet/config.toml; a missing file yields defaults
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".timesheet").join("config.toml");

        let contents = match fs::read_to_string(&config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %config_path.display(), "no config file, using defaults");
                return Ok(Config::default());
            }
            Err(e) => return Err(TimesheetError::Io(e)),
        };

        toml::from_str(&contents)
            .map_err(|e| TimesheetError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .timesheet/config.toml
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let config_dir = path.join(".timesheet");
        let config_path = config_dir.join("config.toml");

        if !config_dir.exists() {
            fs::create_dir(&config_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Get a stored value by key
    pub fn get(&self, key: &str) -> Result<&str> {
        match key {
            "editor" => Ok(&self.editor),
            "picker" => Ok(&self.picker),
            "opener" => Ok(&self.opener),
            _ => Err(Self::unknown_key(key)),
        }
    }

    /// Set a stored value by key
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let slot = match key {
            "editor" => &mut self.editor,
            "picker" => &mut self.picker,
            "opener" => &mut self.opener,
            _ => return Err(Self::unknown_key(key)),
        };
        if value.trim().is_empty() {
            return Err(TimesheetError::Config(format!(
                "Value for '{}' cannot be empty",
                key
            )));
        }
        *slot = value.to_string();
        Ok(())
    }

    fn unknown_key(key: &str) -> TimesheetError {
        TimesheetError::Config(format!(
            "Unknown config key: '{}'. Valid keys are: {}",
            key,
            Self::KEYS.join(", ")
        ))
    }

    /// Get the editor command, checking environment variables first
    pub fn get_editor(&self) -> String {
        let env = non_empty_var("EDITOR").or_else(|| non_empty_var("VISUAL"));
        env.unwrap_or_else(|| self.editor.clone())
    }

    /// Get the picker command, checking TIMESHEET_PICKER first
    pub fn get_picker(&self) -> String {
        non_empty_var(PICKER_ENV).unwrap_or_else(|| self.picker.clone())
    }

    /// Get the opener command, checking TIMESHEET_OPENER first
    pub fn get_opener(&self) -> String {
        non_empty_var(OPENER_ENV).unwrap_or_else(|| self.opener.clone())
    }

    fn default_editor() -> &'static str {
        if cfg!(windows) {
            "notepad"
        } else {
            "vim"
        }
    }

    fn default_opener() -> &'static str {
        if cfg!(target_os = "macos") {
            "open"
        } else if cfg!(windows) {
            WINDOWS_OPENER
        } else {
            "xdg-open"
        }
    }
}

/// An environment override; set-but-blank counts as unset
fn non_empty_var(key: &str) -> Option<String> {
    non_blank(std::env::var(key).ok())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
