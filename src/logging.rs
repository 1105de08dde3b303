//! Log initialization.
//!
//! Verbosity comes from `BREATHWORK_LOG` using `tracing-subscriber`'s
//! directive syntax (e.g. `debug`, `breathwork::features=trace`). Nothing
//! below `warn` is shown by default.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::BreathworkError;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "BREATHWORK_LOG";

const DEFAULT_FILTER: &str = "warn";

fn filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Log to stderr.
pub fn init_stderr() {
    let result = tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    // A subscriber may already be installed (tests, embedding hosts).
    if result.is_err() {
        tracing::debug!("log subscriber already installed");
    }
}

/// Log to a file, appending. Used while the TUI owns the terminal.
///
/// # Errors
///
/// Returns `BreathworkError::Io` if the file cannot be opened.
pub fn init_file(path: &Path) -> Result<(), BreathworkError> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let result = tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();

    if result.is_err() {
        tracing::debug!("log subscriber already installed");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_file_creates_log() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("breathwork.log");

        init_file(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_init_file_missing_dir() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("breathwork.log");

        assert!(matches!(init_file(&path), Err(BreathworkError::Io(_))));
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init_stderr();
        init_stderr();
    }
}
