//! Practice history and report commands.

use crate::error::BreathworkError;
use crate::features::breathing::{HistoryStorage, PracticeReport, ReportPeriod};
use crate::output::{format_report, format_sessions};

use super::Context;

/// Execute history command
///
/// # Errors
///
/// Returns an error if the exercise is unknown, the database cannot be read,
/// or output formatting fails.
pub fn history(
    ctx: &Context,
    limit: usize,
    exercise: Option<&str>,
) -> Result<String, BreathworkError> {
    let storage = HistoryStorage::with_database(ctx.database()?);

    match exercise {
        Some(key) => {
            // Accept titles too, but keep ids of exercises since removed from config.
            let id = ctx
                .catalog
                .get(key)
                .map_or_else(|| key.to_string(), |e| e.id().to_string());
            let sessions = storage.get_by_exercise(&id, limit)?;
            format_sessions(&sessions, &format!("History: {id}"), ctx.format)
        }
        None => {
            let sessions = storage.get_recent(limit)?;
            format_sessions(&sessions, "History", ctx.format)
        }
    }
}

/// Execute report command
///
/// # Errors
///
/// Returns an error if the database cannot be read or output formatting fails.
pub fn report(ctx: &Context, period: &str) -> Result<String, BreathworkError> {
    let storage = HistoryStorage::with_database(ctx.database()?);
    let report = PracticeReport::generate(&storage, ReportPeriod::parse(period))?;
    format_report(&report, ctx.format)
}

#[cfg(test)]
mod tests {
    use super::super::test_support::context;
    use super::*;
    use crate::cli::args::OutputFormat;
    use crate::features::breathing::{Outcome, PracticeSession};
    use chrono::Utc;

    fn record(ctx: &Context, id: &str, elapsed: u32, outcome: Outcome) {
        let storage = HistoryStorage::with_database(ctx.database().unwrap());
        let exercise = ctx.catalog.require(id).unwrap();
        let mut session = PracticeSession::finished(&exercise, Utc::now(), elapsed, outcome);
        storage.save(&mut session).unwrap();
    }

    #[test]
    fn test_history_empty() {
        let (_dir, ctx) = context(OutputFormat::Pretty);
        let output = history(&ctx, 10, None).unwrap();
        assert!(output.contains("No sessions"));
    }

    #[test]
    fn test_history_filters_by_title() {
        let (_dir, ctx) = context(OutputFormat::Json);
        record(&ctx, "box-breathing", 120, Outcome::Completed);
        record(&ctx, "478-breathing", 20, Outcome::Abandoned);

        let output = history(&ctx, 10, Some("4-7-8 Breathing")).unwrap();
        assert!(output.contains("\"count\": 1"));
        assert!(output.contains("\"exercise_id\": \"478-breathing\""));
    }

    #[test]
    fn test_report_json() {
        let (_dir, ctx) = context(OutputFormat::Json);
        record(&ctx, "box-breathing", 120, Outcome::Completed);

        let output = report(&ctx, "today").unwrap();
        assert!(output.contains("\"period\": \"Today\""));
        assert!(output.contains("\"completed_sessions\": 1"));
        assert!(output.contains("\"streak_days\": 1"));
    }
}
