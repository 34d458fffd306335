//! Path resolution for pomodoro configuration.
//!
//! Everything lives in `~/.pomodoro/`:
//! - `config.yaml` - Main configuration file

use std::path::PathBuf;

use crate::error::PomodoroError;

/// Paths to pomodoro configuration files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.pomodoro/`
    pub root: PathBuf,
    /// Config file: `~/.pomodoro/config.yaml`
    pub config_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, PomodoroError> {
        let home = std::env::var("HOME").map_err(|_| {
            PomodoroError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".pomodoro")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            root,
        }
    }

    /// Resolve paths, preferring an explicit config file over the default.
    ///
    /// # Errors
    ///
    /// Returns an error if no override is given and the home directory
    /// cannot be determined.
    pub fn resolve(config_override: Option<PathBuf>) -> Result<Self, PomodoroError> {
        match config_override {
            Some(config_file) => {
                let root = config_file
                    .parent()
                    .map_or_else(|| PathBuf::from("."), PathBuf::from);
                Ok(Self { root, config_file })
            }
            None => Self::new(),
        }
    }

    /// Ensure the root directory exists, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), PomodoroError> {
        if !self.root.as_os_str().is_empty() && !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                PomodoroError::Config(format!(
                    "Failed to create directory {}: {e}",
                    self.root.display()
                ))
            })?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_paths_with_root() {
        let root = PathBuf::from("/tmp/test-pomodoro");
        let paths = Paths::with_root(root.clone());

        assert_eq!(paths.root, root);
        assert_eq!(paths.config_file, root.join("config.yaml"));
    }

    #[test]
    fn test_resolve_override() {
        let paths = Paths::resolve(Some(PathBuf::from("/etc/pomo/timer.yaml"))).unwrap();

        assert_eq!(paths.config_file, PathBuf::from("/etc/pomo/timer.yaml"));
        assert_eq!(paths.root, PathBuf::from("/etc/pomo"));
    }

    #[test]
    fn test_ensure_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().join("nested").join(".pomodoro"));

        paths.ensure_dirs().unwrap();

        assert!(paths.root.exists());
    }
}
