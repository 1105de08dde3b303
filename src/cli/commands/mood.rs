//! Mood log commands.

use chrono::Days;
use colored::Colorize;

use crate::cli::args::{MoodCommands, OutputFormat};
use crate::core::local_today;
use crate::error::BreathworkError;
use crate::features::mood::{MoodLevel, MoodStorage, MoodTrend, MAX_TREND_DAYS};
use crate::output::{format_moods, format_trend, to_json};

use super::Context;

/// Execute mood subcommands.
///
/// # Errors
///
/// Returns an error if the mood cannot be parsed, the database fails, or
/// output formatting fails.
pub fn mood(ctx: &Context, cmd: MoodCommands) -> Result<String, BreathworkError> {
    let storage = MoodStorage::with_database(ctx.database()?);

    match cmd {
        MoodCommands::Log { level, note } => log(&storage, &level, note, ctx.format),
        MoodCommands::List { limit } => {
            let entries = storage.get_recent(limit)?;
            format_moods(&entries, ctx.format)
        }
        MoodCommands::Trend { days } => {
            let days = days
                .unwrap_or(ctx.config.mood.trend_days)
                .clamp(1, MAX_TREND_DAYS);
            trend(&storage, days, ctx.format)
        }
    }
}

fn log(
    storage: &MoodStorage,
    level: &str,
    note: Option<String>,
    format: OutputFormat,
) -> Result<String, BreathworkError> {
    let level = MoodLevel::parse(level)?;
    let note = note.filter(|n| !n.trim().is_empty());
    let entry = storage.log(level, note)?;

    match format {
        OutputFormat::Json => to_json(&entry),
        OutputFormat::Pretty => Ok(format!(
            "{} Logged {} for {}",
            "✓".green(),
            entry.level.to_string().bold(),
            entry.date
        )),
    }
}

fn trend(
    storage: &MoodStorage,
    days: u32,
    format: OutputFormat,
) -> Result<String, BreathworkError> {
    let today = local_today();
    let from = today
        .checked_sub_days(Days::new(u64::from(days.saturating_sub(1))))
        .ok_or_else(|| {
            BreathworkError::Parse(format!("Trend window of {days} days is too long"))
        })?;
    let entries = storage.get_range(from, today)?;
    let trend = MoodTrend::build(&entries, today, days);
    format_trend(&trend, format)
}

#[cfg(test)]
mod tests {
    use super::super::test_support::context;
    use super::*;

    #[test]
    fn test_log_then_list() {
        let (_dir, ctx) = context(OutputFormat::Json);

        mood(
            &ctx,
            MoodCommands::Log {
                level: "4".to_string(),
                note: Some("calm".to_string()),
            },
        )
        .unwrap();

        let output = mood(&ctx, MoodCommands::List { limit: 10 }).unwrap();
        assert!(output.contains("\"count\": 1"));
        assert!(output.contains("\"level\": \"good\""));
        assert!(output.contains("\"note\": \"calm\""));
    }

    #[test]
    fn test_log_invalid_level() {
        let (_dir, ctx) = context(OutputFormat::Pretty);
        let result = mood(
            &ctx,
            MoodCommands::Log {
                level: "ecstatic".to_string(),
                note: None,
            },
        );
        assert!(matches!(result, Err(BreathworkError::Parse(_))));
    }

    #[test]
    fn test_blank_note_dropped() {
        let (_dir, ctx) = context(OutputFormat::Json);
        let output = mood(
            &ctx,
            MoodCommands::Log {
                level: "okay".to_string(),
                note: Some("   ".to_string()),
            },
        )
        .unwrap();
        assert!(output.contains("\"note\": null"));
    }

    #[test]
    fn test_trend_uses_config_days() {
        let (_dir, ctx) = context(OutputFormat::Json);
        mood(
            &ctx,
            MoodCommands::Log {
                level: "great".to_string(),
                note: None,
            },
        )
        .unwrap();

        let output = mood(&ctx, MoodCommands::Trend { days: None }).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["days"].as_array().unwrap().len(), 7);
        assert_eq!(value["days"][6]["level"], "great");
        assert_eq!(value["average"], 5.0);
    }

    #[test]
    fn test_trend_window_is_bounded() {
        let (_dir, ctx) = context(OutputFormat::Json);
        let output = mood(
            &ctx,
            MoodCommands::Trend {
                days: Some(200_000_000),
            },
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["days"].as_array().unwrap().len(), 3650);
    }

    #[test]
    fn test_trend_config_days_bounded() {
        let (_dir, mut ctx) = context(OutputFormat::Json);
        ctx.config.mood.trend_days = 0;
        let output = mood(&ctx, MoodCommands::Trend { days: None }).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["days"].as_array().unwrap().len(), 1);
    }
}
