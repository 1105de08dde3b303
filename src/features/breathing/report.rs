//! Practice reports.
//!
//! Summarizes practice history over a period.

use std::collections::HashMap;

use chrono::{Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use super::history::{HistoryStorage, Outcome, PracticeSession};
use crate::core::{format_seconds, local_day_range, local_today};
use crate::error::BreathworkError;

/// Report time period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportPeriod {
    /// Today only
    Today,
    /// Last 7 days
    Week,
    /// Last 30 days
    Month,
    /// All time
    AllTime,
}

impl ReportPeriod {
    /// First and last local day covered, given today's date.
    #[must_use]
    pub fn days(&self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        let first = match self {
            Self::Today => today,
            Self::Week => today - Duration::days(6),
            Self::Month => today - Duration::days(29),
            Self::AllTime => NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or(NaiveDate::MIN),
        };
        (first, today)
    }

    /// Parse period from string. Unknown input means a week.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "today" | "t" | "d" => Self::Today,
            "month" | "m" | "30d" => Self::Month,
            "all" | "alltime" | "all-time" => Self::AllTime,
            _ => Self::Week,
        }
    }

    /// Get display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Today => "Today",
            Self::Week => "This Week",
            Self::Month => "This Month",
            Self::AllTime => "All Time",
        }
    }
}

/// Practice report data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PracticeReport {
    /// Report period name
    pub period: String,
    /// Seconds practiced across all sessions
    pub total_seconds: i64,
    /// Sessions that ran to completion
    pub completed_sessions: i64,
    /// Sessions stopped part-way
    pub abandoned_sessions: i64,
    /// Per-exercise totals, most practiced first
    pub by_exercise: Vec<ExercisePractice>,
    /// Per-day totals, most recent first
    pub daily: Vec<DailyPractice>,
    /// Consecutive days with a completed session, ending today or yesterday
    pub streak_days: i64,
}

/// Practice time for one exercise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExercisePractice {
    /// Exercise id
    pub exercise_id: String,
    /// Exercise title
    pub title: String,
    /// Seconds practiced
    pub seconds: i64,
    /// Session count
    pub sessions: i64,
}

/// Practice time for one day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyPractice {
    /// Local date
    pub date: String,
    /// Seconds practiced
    pub seconds: i64,
    /// Session count
    pub sessions: i64,
}

impl PracticeReport {
    /// Generate a report for the given period.
    ///
    /// The streak looks at the whole history, not just the period.
    ///
    /// # Errors
    ///
    /// Returns an error if the history cannot be read.
    pub fn generate(
        storage: &HistoryStorage,
        period: ReportPeriod,
    ) -> Result<Self, BreathworkError> {
        let today = local_today();
        let (first, last) = period.days(today);
        let (start, end) = local_day_range(first, last);
        let sessions = storage.get_range(start, end)?;
        let completed_days: Vec<NaiveDate> = storage
            .completed_starts()?
            .iter()
            .map(|t| t.with_timezone(&Local).date_naive())
            .collect();
        Ok(Self::from_sessions(period, &sessions, &completed_days, today))
    }

    /// Build a report from already-loaded sessions of the period and the
    /// local days on which any session was completed.
    #[must_use]
    pub fn from_sessions(
        period: ReportPeriod,
        sessions: &[PracticeSession],
        completed_days: &[NaiveDate],
        today: NaiveDate,
    ) -> Self {
        let total_seconds = sessions.iter().map(|s| s.elapsed_seconds).sum();
        let completed = sessions
            .iter()
            .filter(|s| s.outcome == Outcome::Completed)
            .count();
        let completed_sessions = i64::try_from(completed).unwrap_or(i64::MAX);
        let abandoned_sessions = i64::try_from(sessions.len() - completed).unwrap_or(i64::MAX);

        let mut exercise_map: HashMap<&str, ExercisePractice> = HashMap::new();
        for session in sessions {
            let entry = exercise_map
                .entry(session.exercise_id.as_str())
                .or_insert_with(|| ExercisePractice {
                    exercise_id: session.exercise_id.clone(),
                    title: session.exercise_title.clone(),
                    seconds: 0,
                    sessions: 0,
                });
            entry.seconds += session.elapsed_seconds;
            entry.sessions += 1;
        }
        let mut by_exercise: Vec<_> = exercise_map.into_values().collect();
        by_exercise.sort_by(|a, b| {
            b.seconds
                .cmp(&a.seconds)
                .then_with(|| a.exercise_id.cmp(&b.exercise_id))
        });

        let mut daily_map: HashMap<NaiveDate, (i64, i64)> = HashMap::new();
        for session in sessions {
            let entry = daily_map
                .entry(session.started_at_local().date_naive())
                .or_insert((0, 0));
            entry.0 += session.elapsed_seconds;
            entry.1 += 1;
        }
        let mut days: Vec<_> = daily_map.into_iter().collect();
        days.sort_by(|a, b| b.0.cmp(&a.0));
        let daily = days
            .into_iter()
            .map(|(date, (seconds, sessions))| DailyPractice {
                date: date.to_string(),
                seconds,
                sessions,
            })
            .collect();

        Self {
            period: period.display_name().to_string(),
            total_seconds,
            completed_sessions,
            abandoned_sessions,
            by_exercise,
            daily,
            streak_days: calculate_streak(completed_days, today),
        }
    }

    /// Format the report for display.
    #[must_use]
    pub fn format(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!("🌬  Practice Report: {}", self.period));
        lines.push("═".repeat(50));
        lines.push(String::new());

        lines.push("Summary".to_string());
        lines.push("─".repeat(40));
        lines.push(format!(
            "  Total practice:      {}",
            format_seconds(self.total_seconds)
        ));
        lines.push(format!("  Completed sessions:  {}", self.completed_sessions));
        lines.push(format!("  Abandoned sessions:  {}", self.abandoned_sessions));
        lines.push(format!("  Current streak:      {} days", self.streak_days));
        lines.push(String::new());

        if !self.by_exercise.is_empty() {
            lines.push("By Exercise".to_string());
            lines.push("─".repeat(40));
            for exercise in &self.by_exercise {
                lines.push(format!(
                    "  {:<22} {:>8} ({} sessions)",
                    exercise.title,
                    format_minutes(exercise.seconds),
                    exercise.sessions
                ));
            }
            lines.push(String::new());
        }

        if !self.daily.is_empty() {
            lines.push("Recent Days".to_string());
            lines.push("─".repeat(40));
            for day in self.daily.iter().take(7) {
                lines.push(format!(
                    "  {} {:>8} ({} sessions)",
                    day.date,
                    format_minutes(day.seconds),
                    day.sessions
                ));
            }
        }

        lines.join("\n")
    }
}

fn format_minutes(seconds: i64) -> String {
    format!("{}m {:02}s", seconds / 60, seconds % 60)
}

/// Count consecutive days with practice, from today backwards.
///
/// A streak that ended yesterday still counts.
fn calculate_streak(days: &[NaiveDate], today: NaiveDate) -> i64 {
    let mut dates = days.to_vec();
    dates.sort();
    dates.dedup();

    let mut check_date = today;
    if !dates.contains(&today) {
        check_date = today - Duration::days(1);
        if !dates.contains(&check_date) {
            return 0;
        }
    }

    let mut streak = 0;
    while dates.contains(&check_date) {
        streak += 1;
        check_date -= Duration::days(1);
    }

    streak
}
