//! Persisted project registry (`projects.json`)

use crate::domain::ProjectList;
use crate::error::{Result, TimesheetError};
use std::fs;
use std::path::{Path, PathBuf};

pub const REGISTRY_FILE: &str = "projects.json";

/// Abstract registry of project names
pub trait ProjectRegistry {
    /// All project names in insertion order
    fn list(&self) -> Result<Vec<String>>;

    /// Register a new project, returning the stored name
    fn add(&self, name: &str) -> Result<String>;

    /// Remove a project, returning the removed name
    fn delete(&self, name: &str) -> Result<String>;
}

/// Registry stored as a JSON array in the base directory
#[derive(Debug, Clone)]
pub struct JsonProjectRegistry {
    root: PathBuf,
}

impl JsonProjectRegistry {
    pub fn new(root: PathBuf) -> Self {
        JsonProjectRegistry { root }
    }

    pub fn path(&self) -> PathBuf {
        self.root.join(REGISTRY_FILE)
    }

    fn load(&self) -> Result<ProjectList> {
        let path = self.path();
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(ProjectList::new()),
            Err(e) => return Err(TimesheetError::Io(e)),
        };

        let names: Vec<String> = serde_json::from_str(&contents).map_err(|e| {
            TimesheetError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        Ok(names.into_iter().collect())
    }

    fn save(&self, projects: &ProjectList) -> Result<()> {
        let contents = serde_json::to_string_pretty(projects)?;
        write_atomic(&self.path(), &contents)
    }
}

impl ProjectRegistry for JsonProjectRegistry {
    fn list(&self) -> Result<Vec<String>> {
        Ok(self.load()?.into_names())
    }

    fn add(&self, name: &str) -> Result<String> {
        let mut projects = self.load()?;
        let added = projects.add(name)?;
        self.save(&projects)?;
        tracing::debug!(project = %added, "project added");
        Ok(added)
    }

    fn delete(&self, name: &str) -> Result<String> {
        let mut projects = self.load()?;
        let removed = projects.remove(name)?;
        self.save(&projects)?;
        tracing::debug!(project = %removed, "project deleted");
        Ok(removed)
    }
}

/// Write to a temp file in the same directory, then rename into place.
///
/// On Windows, `rename` does not overwrite existing files, so the destination is removed first.
fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let tmp_name = format!(
        "{}.timesheet-tmp-{}",
        path.file_name()
            .and_then(|s| s.to_str())
            .unwrap_or(REGISTRY_FILE),
        std::process::id()
    );
    let tmp_path = path.with_file_name(tmp_name);

    fs::write(&tmp_path, content)?;

    if cfg!(windows) && path.exists() {
        fs::remove_file(path)?;
    }

    fs::rename(&tmp_path, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn registry() -> (TempDir, JsonProjectRegistry) {
        let temp = TempDir::new().unwrap();
        let registry = JsonProjectRegistry::new(temp.path().to_path_buf());
        (temp, registry)
    }

    #[test]
    fn test_missing_file_is_empty() {
        let (temp, registry) = registry();
        assert!(registry.list().unwrap().is_empty());
        assert!(!temp.path().join(REGISTRY_FILE).exists());
    }

    #[test]
    fn test_add_creates_file() {
        let (temp, registry) = registry();
        registry.add("Acme").unwrap();

        let content = fs::read_to_string(temp.path().join(REGISTRY_FILE)).unwrap();
        let parsed: Vec<String> = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, vec!["Acme"]);
    }

    #[test]
    fn test_add_twice_keeps_one_entry() {
        let (_temp, registry) = registry();
        registry.add("Acme").unwrap();
        assert!(matches!(
            registry.add("Acme"),
            Err(TimesheetError::DuplicateProject(_))
        ));
        assert_eq!(registry.list().unwrap(), vec!["Acme"]);
    }

    #[test]
    fn test_delete() {
        let (_temp, registry) = registry();
        registry.add("Acme").unwrap();
        registry.add("Globex").unwrap();

        assert_eq!(registry.delete("Acme").unwrap(), "Acme");
        assert_eq!(registry.list().unwrap(), vec!["Globex"]);
    }

    #[test]
    fn test_delete_absent_leaves_file_untouched() {
        let (temp, registry) = registry();
        registry.add("Acme").unwrap();
        let before = fs::read_to_string(temp.path().join(REGISTRY_FILE)).unwrap();

        assert!(matches!(
            registry.delete("Initech"),
            Err(TimesheetError::ProjectNotFound(_))
        ));

        let after = fs::read_to_string(temp.path().join(REGISTRY_FILE)).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_delete_with_no_registry_file() {
        let (temp, registry) = registry();
        assert!(registry.delete("Acme").is_err());
        assert!(!temp.path().join(REGISTRY_FILE).exists());
    }

    #[test]
    fn test_reads_compact_json() {
        let (temp, registry) = registry();
        fs::write(temp.path().join(REGISTRY_FILE), r#"["A", "B"]"#).unwrap();
        assert_eq!(registry.list().unwrap(), vec!["A", "B"]);
    }

    #[test]
    fn test_malformed_registry_is_config_error() {
        let (temp, registry) = registry();
        fs::write(temp.path().join(REGISTRY_FILE), "{not json").unwrap();

        match registry.list() {
            Err(TimesheetError::Config(msg)) => assert!(msg.contains(REGISTRY_FILE)),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_no_temp_files_left_behind() {
        let (temp, registry) = registry();
        registry.add("Acme").unwrap();
        registry.add("Globex").unwrap();

        let names: Vec<String> = fs::read_dir(temp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec![REGISTRY_FILE.to_string()]);
    }
}
