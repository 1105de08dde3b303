//! Practice history.
//!
//! Persists finished breathing sessions to the local database.

use chrono::{DateTime, Local, Utc};
use rusqlite::types::Type;
use rusqlite::{params, OptionalExtension, Row};
use serde::{Deserialize, Serialize};

use super::exercise::Exercise;
use crate::error::BreathworkError;
use crate::storage::Database;

/// How a practice session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Ran until the session budget was used up
    Completed,
    /// Reset, switched away from, or quit part-way
    Abandoned,
}

impl Outcome {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Abandoned => "abandoned",
        }
    }

    fn parse(s: &str) -> Self {
        match s {
            "completed" => Self::Completed,
            _ => Self::Abandoned,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Completed => write!(f, "Completed"),
            Self::Abandoned => write!(f, "Abandoned"),
        }
    }
}

/// A finished breathing session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PracticeSession {
    /// Database ID (None if not persisted)
    pub id: Option<i64>,
    /// Exercise id
    pub exercise_id: String,
    /// Exercise title at the time of practice
    pub exercise_title: String,
    /// When the first tick was started
    pub started_at: DateTime<Utc>,
    /// When the session ended
    pub ended_at: DateTime<Utc>,
    /// Seconds actually practiced
    pub elapsed_seconds: i64,
    /// Session budget in seconds
    pub planned_seconds: i64,
    /// How it ended
    pub outcome: Outcome,
}

impl PracticeSession {
    /// Record a session of `exercise` that started at `started_at` and ends now.
    #[must_use]
    pub fn finished(
        exercise: &Exercise,
        started_at: DateTime<Utc>,
        elapsed_seconds: u32,
        outcome: Outcome,
    ) -> Self {
        Self {
            id: None,
            exercise_id: exercise.id().to_string(),
            exercise_title: exercise.title().to_string(),
            started_at,
            ended_at: Utc::now(),
            elapsed_seconds: i64::from(elapsed_seconds),
            planned_seconds: i64::from(exercise.total_duration_seconds()),
            outcome,
        }
    }

    /// Start time in the local timezone.
    #[must_use]
    pub fn started_at_local(&self) -> DateTime<Local> {
        self.started_at.with_timezone(&Local)
    }
}

/// Storage for practice sessions.
pub struct HistoryStorage {
    db: Database,
}

impl HistoryStorage {
    /// Create storage over an existing database connection.
    #[must_use]
    pub const fn with_database(db: Database) -> Self {
        Self { db }
    }

    /// Insert a session and assign its id.
    ///
    /// # Errors
    ///
    /// Returns `BreathworkError::Database` if the insert fails.
    pub fn save(&self, session: &mut PracticeSession) -> Result<(), BreathworkError> {
        let conn = self.db.connection();

        conn.execute(
            r"INSERT INTO breathing_sessions
              (exercise_id, exercise_title, started_at, ended_at,
               elapsed_seconds, planned_seconds, outcome)
              VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                session.exercise_id,
                session.exercise_title,
                session.started_at.to_rfc3339(),
                session.ended_at.to_rfc3339(),
                session.elapsed_seconds,
                session.planned_seconds,
                session.outcome.as_str(),
            ],
        )
        .map_err(|e| BreathworkError::Database(format!("Failed to insert session: {e}")))?;

        session.id = Some(conn.last_insert_rowid());
        tracing::debug!(
            id = session.id,
            exercise = %session.exercise_id,
            outcome = %session.outcome,
            "practice session saved"
        );
        Ok(())
    }

    /// Get a session by ID.
    ///
    /// # Errors
    ///
    /// Returns `BreathworkError::Database` if the query fails.
    pub fn get(&self, id: i64) -> Result<Option<PracticeSession>, BreathworkError> {
        let conn = self.db.connection();

        conn.query_row(
            &format!("{SELECT_COLUMNS} WHERE id = ?1"),
            [id],
            row_to_session,
        )
        .optional()
        .map_err(|e| BreathworkError::Database(format!("Failed to query session: {e}")))
    }

    /// Most recent sessions first.
    ///
    /// # Errors
    ///
    /// Returns `BreathworkError::Database` if the query fails.
    pub fn get_recent(&self, limit: usize) -> Result<Vec<PracticeSession>, BreathworkError> {
        self.query(
            &format!("{SELECT_COLUMNS} ORDER BY started_at DESC LIMIT ?1"),
            params![i64::try_from(limit).unwrap_or(i64::MAX)],
        )
    }

    /// Sessions of one exercise, most recent first.
    ///
    /// # Errors
    ///
    /// Returns `BreathworkError::Database` if the query fails.
    pub fn get_by_exercise(
        &self,
        exercise_id: &str,
        limit: usize,
    ) -> Result<Vec<PracticeSession>, BreathworkError> {
        self.query(
            &format!(
                "{SELECT_COLUMNS} WHERE exercise_id = ?1 ORDER BY started_at DESC LIMIT ?2"
            ),
            params![exercise_id, i64::try_from(limit).unwrap_or(i64::MAX)],
        )
    }

    /// Sessions started in `[start, end)`, most recent first.
    ///
    /// # Errors
    ///
    /// Returns `BreathworkError::Database` if the query fails.
    pub fn get_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<PracticeSession>, BreathworkError> {
        self.query(
            &format!(
                "{SELECT_COLUMNS} WHERE started_at >= ?1 AND started_at < ?2 \
                 ORDER BY started_at DESC"
            ),
            params![start.to_rfc3339(), end.to_rfc3339()],
        )
    }

    /// Start times of every completed session, most recent first.
    ///
    /// # Errors
    ///
    /// Returns `BreathworkError::Database` if the query fails or a stored
    /// timestamp is corrupt.
    pub fn completed_starts(&self) -> Result<Vec<DateTime<Utc>>, BreathworkError> {
        let conn = self.db.connection();

        let mut stmt = conn
            .prepare(
                "SELECT started_at FROM breathing_sessions \
                 WHERE outcome = ?1 ORDER BY started_at DESC",
            )
            .map_err(|e| BreathworkError::Database(format!("Failed to prepare query: {e}")))?;

        let rows = stmt
            .query_map([Outcome::Completed.as_str()], |row| {
                let started_at: String = row.get(0)?;
                parse_timestamp(0, &started_at)
            })
            .map_err(|e| BreathworkError::Database(format!("Failed to query sessions: {e}")))?;

        rows.collect::<Result<Vec<_>, _>>()
            .map_err(|e| BreathworkError::Database(e.to_string()))
    }

    /// Delete all history. Returns the number of sessions removed.
    ///
    /// # Errors
    ///
    /// Returns `BreathworkError::Database` if the delete fails.
    pub fn delete_all(&self) -> Result<usize, BreathworkError> {
        self.db
            .connection()
            .execute("DELETE FROM breathing_sessions", [])
            .map_err(|e| BreathworkError::Database(format!("Failed to delete sessions: {e}")))
    }

    fn query(
        &self,
        sql: &str,
        params: impl rusqlite::Params,
    ) -> Result<Vec<PracticeSession>, BreathworkError> {
        let conn = self.db.connection();

        let mut stmt = conn
            .prepare(sql)
            .map_err(|e| BreathworkError::Database(format!("Failed to prepare query: {e}")))?;

        let rows = stmt
            .query_map(params, row_to_session)
            .map_err(|e| BreathworkError::Database(format!("Failed to query sessions: {e}")))?;

        let mut sessions = Vec::new();
        for row in rows {
            sessions.push(row.map_err(|e| BreathworkError::Database(e.to_string()))?);
        }

        Ok(sessions)
    }
}

const SELECT_COLUMNS: &str = r"SELECT id, exercise_id, exercise_title, started_at, ended_at,
                                      elapsed_seconds, planned_seconds, outcome
                               FROM breathing_sessions";

/// Convert a database row to a `PracticeSession`.
fn row_to_session(row: &Row<'_>) -> Result<PracticeSession, rusqlite::Error> {
    let started_at: String = row.get(3)?;
    let ended_at: String = row.get(4)?;
    let outcome: String = row.get(7)?;

    Ok(PracticeSession {
        id: Some(row.get(0)?),
        exercise_id: row.get(1)?,
        exercise_title: row.get(2)?,
        started_at: parse_timestamp(3, &started_at)?,
        ended_at: parse_timestamp(4, &ended_at)?,
        elapsed_seconds: row.get(5)?,
        planned_seconds: row.get(6)?,
        outcome: Outcome::parse(&outcome),
    })
}

fn parse_timestamp(column: usize, s: &str) -> Result<DateTime<Utc>, rusqlite::Error> {
    DateTime::parse_from_rfc3339(s)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| {
            tracing::warn!(column, value = s, "corrupt timestamp in practice history");
            rusqlite::Error::FromSqlConversionFailure(column, Type::Text, Box::new(e))
        })
}
