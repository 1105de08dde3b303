//! Database migrations for breathwork.
//!
//! Each migration upgrades the schema by one version. Migrations run
//! automatically when the database is opened.

use rusqlite::Connection;

use crate::error::BreathworkError;

/// Current schema version.
const CURRENT_VERSION: i32 = 1;

/// Get the current schema version from the database.
///
/// Returns 0 for a new database.
pub fn get_version(conn: &Connection) -> Result<i32, BreathworkError> {
    conn.query_row("PRAGMA user_version", [], |row| row.get(0))
        .map_err(|e| BreathworkError::Database(format!("Failed to get schema version: {e}")))
}

fn set_version(conn: &Connection, version: i32) -> Result<(), BreathworkError> {
    conn.execute_batch(&format!("PRAGMA user_version = {version};"))
        .map_err(|e| BreathworkError::Database(format!("Failed to set schema version: {e}")))
}

/// Run all pending migrations.
pub fn run(conn: &Connection) -> Result<(), BreathworkError> {
    let current = get_version(conn)?;

    if current >= CURRENT_VERSION {
        return Ok(());
    }

    for version in (current + 1)..=CURRENT_VERSION {
        tracing::info!(version, "running database migration");
        run_migration(conn, version)?;
        set_version(conn, version)?;
    }

    Ok(())
}

fn run_migration(conn: &Connection, version: i32) -> Result<(), BreathworkError> {
    match version {
        1 => migrate_v1(conn),
        _ => Err(BreathworkError::Database(format!(
            "Unknown migration version: {version}"
        ))),
    }
}

/// Migration v1: Initial schema.
///
/// - `breathing_sessions`: finished practice sessions
/// - `mood_entries`: one mood per local day
fn migrate_v1(conn: &Connection) -> Result<(), BreathworkError> {
    conn.execute_batch(
        r"
        CREATE TABLE IF NOT EXISTS breathing_sessions (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            exercise_id TEXT NOT NULL,
            exercise_title TEXT NOT NULL,
            started_at TEXT NOT NULL,
            ended_at TEXT NOT NULL,
            elapsed_seconds INTEGER NOT NULL,
            planned_seconds INTEGER NOT NULL,
            outcome TEXT NOT NULL DEFAULT 'completed'
        );

        CREATE INDEX IF NOT EXISTS idx_breathing_sessions_started
        ON breathing_sessions(started_at);

        CREATE INDEX IF NOT EXISTS idx_breathing_sessions_exercise
        ON breathing_sessions(exercise_id);

        CREATE TABLE IF NOT EXISTS mood_entries (
            date TEXT PRIMARY KEY,
            logged_at TEXT NOT NULL,
            mood INTEGER NOT NULL CHECK (mood BETWEEN 1 AND 5),
            note TEXT
        );
        ",
    )
    .map_err(|e| BreathworkError::Database(format!("Migration v1 failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migration_v1() {
        let conn = Connection::open_in_memory().unwrap();

        run(&conn).unwrap();
        assert_eq!(get_version(&conn).unwrap(), CURRENT_VERSION);

        conn.execute(
            "INSERT INTO breathing_sessions
             (exercise_id, exercise_title, started_at, ended_at,
              elapsed_seconds, planned_seconds)
             VALUES ('box-breathing', 'Box Breathing',
                     '2024-01-01T10:00:00Z', '2024-01-01T10:02:00Z', 120, 120)",
            [],
        )
        .unwrap();

        conn.execute(
            "INSERT INTO mood_entries (date, logged_at, mood)
             VALUES ('2024-01-01', '2024-01-01T10:00:00Z', 4)",
            [],
        )
        .unwrap();
    }

    #[test]
    fn test_mood_check_constraint() {
        let conn = Connection::open_in_memory().unwrap();
        run(&conn).unwrap();

        let result = conn.execute(
            "INSERT INTO mood_entries (date, logged_at, mood) VALUES ('2024-01-01', 'x', 9)",
            [],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_migration_idempotent() {
        let conn = Connection::open_in_memory().unwrap();

        run(&conn).unwrap();
        run(&conn).unwrap();

        assert_eq!(get_version(&conn).unwrap(), CURRENT_VERSION);
    }

    #[test]
    fn test_get_version_new_database() {
        let conn = Connection::open_in_memory().unwrap();
        assert_eq!(get_version(&conn).unwrap(), 0);
    }
}
