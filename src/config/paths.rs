//! Path resolution for breathwork configuration and data files.
//!
//! All data is stored under one root, `~/.breathwork/` by default:
//! - `config.yaml` - Main configuration file
//! - `breathwork.db` - SQLite database for practice history and moods
//! - `logs/` - Log files written while the TUI owns the terminal

use std::path::PathBuf;

use crate::error::BreathworkError;

/// Environment variable that overrides the data root.
pub const HOME_ENV: &str = "BREATHWORK_HOME";

/// Paths to breathwork configuration and data.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.breathwork/`
    pub root: PathBuf,
    /// Config file: `~/.breathwork/config.yaml`
    pub config_file: PathBuf,
    /// Database file: `~/.breathwork/breathwork.db`
    pub database: PathBuf,
    /// Logs directory: `~/.breathwork/logs/`
    pub logs: PathBuf,
}

impl Paths {
    /// Resolve the data root from `BREATHWORK_HOME`, else `$HOME/.breathwork`.
    ///
    /// # Errors
    ///
    /// Returns an error if neither variable is set.
    pub fn new() -> Result<Self, BreathworkError> {
        if let Some(root) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self::with_root(PathBuf::from(root)));
        }

        let home = std::env::var_os("HOME").ok_or_else(|| {
            BreathworkError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".breathwork")))
    }

    /// Use `root` if given, else resolve as [`Paths::new`] does.
    ///
    /// # Errors
    ///
    /// Returns an error if no root is given and none can be resolved.
    pub fn resolve(root: Option<PathBuf>) -> Result<Self, BreathworkError> {
        root.map_or_else(Self::new, |root| Ok(Self::with_root(root)))
    }

    /// Create paths with a custom root directory.
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            database: root.join("breathwork.db"),
            logs: root.join("logs"),
            root,
        }
    }

    /// Log file written by the TUI.
    #[must_use]
    pub fn log_file(&self) -> PathBuf {
        self.logs.join("breathwork.log")
    }

    /// Ensure all directories exist, creating them if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), BreathworkError> {
        for dir in [&self.root, &self.logs] {
            if !dir.exists() {
                std::fs::create_dir_all(dir).map_err(|e| {
                    BreathworkError::Config(format!(
                        "Failed to create directory {}: {e}",
                        dir.display()
                    ))
                })?;
            }
        }

        Ok(())
    }
}
