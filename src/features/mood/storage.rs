//! Mood log storage.
//!
//! One row per local calendar day. Logging again on the same day replaces
//! that day's entry.

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{params, Row};

use super::entry::{MoodEntry, MoodLevel};
use crate::core::local_today;
use crate::error::BreathworkError;
use crate::storage::Database;

/// Storage for mood entries.
pub struct MoodStorage {
    db: Database,
}

impl MoodStorage {
    /// Create storage over an existing database connection.
    #[must_use]
    pub const fn with_database(db: Database) -> Self {
        Self { db }
    }

    /// Log today's mood.
    ///
    /// # Errors
    ///
    /// Returns `BreathworkError::Database` if the write fails.
    pub fn log(
        &self,
        level: MoodLevel,
        note: Option<String>,
    ) -> Result<MoodEntry, BreathworkError> {
        self.log_on(local_today(), level, note)
    }

    /// Log the mood for a specific day, replacing any entry for that day.
    ///
    /// # Errors
    ///
    /// Returns `BreathworkError::Database` if the write fails.
    pub fn log_on(
        &self,
        date: NaiveDate,
        level: MoodLevel,
        note: Option<String>,
    ) -> Result<MoodEntry, BreathworkError> {
        let entry = MoodEntry {
            date,
            logged_at: Utc::now(),
            level,
            note,
        };

        self.db
            .connection()
            .execute(
                r"INSERT INTO mood_entries (date, logged_at, mood, note)
                  VALUES (?1, ?2, ?3, ?4)
                  ON CONFLICT(date) DO UPDATE SET
                    logged_at = excluded.logged_at,
                    mood = excluded.mood,
                    note = excluded.note",
                params![
                    entry.date.to_string(),
                    entry.logged_at.to_rfc3339(),
                    entry.level.value(),
                    entry.note,
                ],
            )
            .map_err(|e| BreathworkError::Database(format!("Failed to log mood: {e}")))?;

        tracing::debug!(date = %entry.date, mood = entry.level.value(), "mood logged");
        Ok(entry)
    }

    /// Most recent entries first.
    ///
    /// # Errors
    ///
    /// Returns `BreathworkError::Database` if the query fails.
    pub fn get_recent(&self, limit: usize) -> Result<Vec<MoodEntry>, BreathworkError> {
        self.query(
            r"SELECT date, logged_at, mood, note FROM mood_entries
              ORDER BY date DESC LIMIT ?1",
            params![i64::try_from(limit).unwrap_or(i64::MAX)],
        )
    }

    /// Entries for `from..=to`, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `BreathworkError::Database` if the query fails.
    pub fn get_range(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<MoodEntry>, BreathworkError> {
        self.query(
            r"SELECT date, logged_at, mood, note FROM mood_entries
              WHERE date >= ?1 AND date <= ?2
              ORDER BY date ASC",
            params![from.to_string(), to.to_string()],
        )
    }

    /// Delete the whole log. Returns the number of entries removed.
    ///
    /// # Errors
    ///
    /// Returns `BreathworkError::Database` if the delete fails.
    pub fn delete_all(&self) -> Result<usize, BreathworkError> {
        self.db
            .connection()
            .execute("DELETE FROM mood_entries", [])
            .map_err(|e| BreathworkError::Database(format!("Failed to clear mood log: {e}")))
    }

    fn query(
        &self,
        sql: &str,
        params: impl rusqlite::Params,
    ) -> Result<Vec<MoodEntry>, BreathworkError> {
        let conn = self.db.connection();

        let mut stmt = conn
            .prepare(sql)
            .map_err(|e| BreathworkError::Database(format!("Failed to prepare query: {e}")))?;

        let rows = stmt
            .query_map(params, row_to_entry)
            .map_err(|e| BreathworkError::Database(format!("Failed to query mood log: {e}")))?;

        let mut entries = Vec::new();
        for row in rows {
            if let Some(entry) = row.map_err(|e| BreathworkError::Database(e.to_string()))? {
                entries.push(entry);
            }
        }

        Ok(entries)
    }
}

/// Convert a row, skipping rows with an unreadable date or mood.
fn row_to_entry(row: &Row<'_>) -> Result<Option<MoodEntry>, rusqlite::Error> {
    let date: String = row.get(0)?;
    let logged_at: String = row.get(1)?;
    let mood: u8 = row.get(2)?;
    let note: Option<String> = row.get(3)?;

    let Ok(date) = date.parse::<NaiveDate>() else {
        tracing::warn!(date, "skipping mood entry with invalid date");
        return Ok(None);
    };
    let Some(level) = MoodLevel::from_value(mood) else {
        tracing::warn!(mood, "skipping mood entry with invalid level");
        return Ok(None);
    };
    let logged_at = DateTime::parse_from_rfc3339(&logged_at)
        .map(|t| t.with_timezone(&Utc))
        .unwrap_or_default();

    Ok(Some(MoodEntry {
        date,
        logged_at,
        level,
        note,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_storage() -> MoodStorage {
        MoodStorage::with_database(Database::open_in_memory().unwrap())
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    #[test]
    fn test_log_and_read() {
        let storage = create_test_storage();
        storage
            .log_on(day(1), MoodLevel::Good, Some("walked".to_string()))
            .unwrap();

        let entries = storage.get_recent(10).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].level, MoodLevel::Good);
        assert_eq!(entries[0].note.as_deref(), Some("walked"));
    }

    #[test]
    fn test_same_day_replaces() {
        let storage = create_test_storage();
        storage.log_on(day(1), MoodLevel::Bad, None).unwrap();
        storage.log_on(day(1), MoodLevel::Great, None).unwrap();

        let entries = storage.get_recent(10).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].level, MoodLevel::Great);
    }

    #[test]
    fn test_get_range_is_sorted_and_bounded() {
        let storage = create_test_storage();
        storage.log_on(day(3), MoodLevel::Okay, None).unwrap();
        storage.log_on(day(1), MoodLevel::Bad, None).unwrap();
        storage.log_on(day(9), MoodLevel::Great, None).unwrap();

        let entries = storage.get_range(day(1), day(5)).unwrap();
        let dates: Vec<_> = entries.iter().map(|e| e.date).collect();
        assert_eq!(dates, vec![day(1), day(3)]);
    }

    #[test]
    fn test_log_today() {
        let storage = create_test_storage();
        let entry = storage.log(MoodLevel::Okay, None).unwrap();
        assert_eq!(entry.date, local_today());
    }

    #[test]
    fn test_delete_all() {
        let storage = create_test_storage();
        storage.log_on(day(1), MoodLevel::Okay, None).unwrap();
        storage.log_on(day(2), MoodLevel::Okay, None).unwrap();
        assert_eq!(storage.delete_all().unwrap(), 2);
        assert!(storage.get_recent(10).unwrap().is_empty());
    }
}
