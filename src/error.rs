//! Error types for breathwork.

use thiserror::Error;

/// Errors that can occur in breathwork.
#[derive(Debug, Error)]
pub enum BreathworkError {
    /// Invalid or unreadable configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// `SQLite` failure.
    #[error("Database error: {0}")]
    Database(String),

    /// A requested item does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// User input could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The voice guide could not speak.
    #[error("Announcer error: {0}")]
    Announce(String),

    /// Terminal setup or drawing failed.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<rusqlite::Error> for BreathworkError {
    fn from(e: rusqlite::Error) -> Self {
        Self::Database(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BreathworkError::NotFound("exercise 'foo'".to_string());
        assert_eq!(err.to_string(), "Not found: exercise 'foo'");

        let err = BreathworkError::Config("bad yaml".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad yaml");
    }

    #[test]
    fn test_from_rusqlite() {
        let err: BreathworkError = rusqlite::Error::QueryReturnedNoRows.into();
        assert!(matches!(err, BreathworkError::Database(_)));
    }
}
