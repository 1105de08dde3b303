//! Mood trend over trailing days.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::entry::{MoodEntry, MoodLevel};
use crate::core::trailing_days;

/// Characters for sparkline rendering, one per mood level. Index 0 marks a
/// day without an entry.
const BAR_CHARS: [char; 6] = ['·', '▁', '▃', '▄', '▆', '█'];

/// Longest trend window, about ten years.
pub const MAX_TREND_DAYS: u32 = 3650;

/// One day in a trend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendDay {
    /// Local date
    pub date: NaiveDate,
    /// Mood logged that day, if any
    pub level: Option<MoodLevel>,
}

/// Mood over the last N days.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodTrend {
    /// One bucket per day, oldest first
    pub days: Vec<TrendDay>,
    /// Mean of the logged values, `None` when nothing was logged
    pub average: Option<f64>,
}

impl MoodTrend {
    /// Bucket `entries` into the `days` days ending at `today`.
    ///
    /// Entries outside the window are ignored.
    #[must_use]
    pub fn build(entries: &[MoodEntry], today: NaiveDate, days: u32) -> Self {
        let by_date: HashMap<NaiveDate, MoodLevel> =
            entries.iter().map(|e| (e.date, e.level)).collect();

        let days: Vec<TrendDay> = trailing_days(today, days)
            .into_iter()
            .map(|date| TrendDay {
                date,
                level: by_date.get(&date).copied(),
            })
            .collect();

        let values: Vec<f64> = days
            .iter()
            .filter_map(|d| d.level.map(|l| f64::from(l.value())))
            .collect();
        #[allow(clippy::cast_precision_loss)]
        let average = if values.is_empty() {
            None
        } else {
            Some(values.iter().sum::<f64>() / values.len() as f64)
        };

        Self { days, average }
    }

    /// Number of days with an entry.
    #[must_use]
    pub fn logged_days(&self) -> usize {
        self.days.iter().filter(|d| d.level.is_some()).count()
    }

    /// Level nearest the average.
    #[must_use]
    pub fn average_level(&self) -> Option<MoodLevel> {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        self.average
            .and_then(|avg| MoodLevel::from_value(avg.round().clamp(1.0, 5.0) as u8))
    }

    /// Render a single-line sparkline, oldest day first.
    #[must_use]
    pub fn sparkline(&self) -> String {
        self.days
            .iter()
            .map(|d| BAR_CHARS[d.level.map_or(0, |l| usize::from(l.value()))])
            .collect()
    }

    /// Format the trend for display.
    #[must_use]
    pub fn format(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!("Mood, last {} days", self.days.len()));
        lines.push("─".repeat(40));
        lines.push(format!("  {}", self.sparkline()));
        lines.push(String::new());

        for day in &self.days {
            let label = day
                .level
                .map_or_else(|| "-".to_string(), |l| l.to_string());
            lines.push(format!("  {}  {label}", day.date.format("%a %m-%d")));
        }

        lines.push(String::new());
        match (self.average, self.average_level()) {
            (Some(avg), Some(level)) => lines.push(format!(
                "  Average: {avg:.1} ({level}) over {} logged days",
                self.logged_days()
            )),
            _ => lines.push("  No moods logged in this period".to_string()),
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    fn entry(d: u32, level: MoodLevel) -> MoodEntry {
        MoodEntry {
            date: day(d),
            logged_at: Utc::now(),
            level,
            note: None,
        }
    }

    #[test]
    fn test_build_buckets_oldest_first() {
        let entries = vec![entry(10, MoodLevel::Great), entry(8, MoodLevel::Bad)];
        let trend = MoodTrend::build(&entries, day(10), 4);

        let levels: Vec<_> = trend.days.iter().map(|d| d.level).collect();
        assert_eq!(
            levels,
            vec![None, Some(MoodLevel::Bad), None, Some(MoodLevel::Great)]
        );
        assert_eq!(trend.days[0].date, day(7));
        assert_eq!(trend.days[3].date, day(10));
        assert_eq!(trend.logged_days(), 2);
    }

    #[test]
    fn test_average_ignores_missing_days() {
        let entries = vec![entry(9, MoodLevel::Good), entry(10, MoodLevel::Great)];
        let trend = MoodTrend::build(&entries, day(10), 7);

        let avg = trend.average.unwrap();
        assert!((avg - 4.5).abs() < f64::EPSILON);
        assert_eq!(trend.average_level(), Some(MoodLevel::Great));
    }

    #[test]
    fn test_entries_outside_window_ignored() {
        let entries = vec![entry(1, MoodLevel::Awful)];
        let trend = MoodTrend::build(&entries, day(10), 7);
        assert!(trend.average.is_none());
        assert_eq!(trend.logged_days(), 0);
        assert!(trend.format().contains("No moods logged"));
    }

    #[test]
    fn test_sparkline() {
        let entries = vec![entry(8, MoodLevel::Awful), entry(10, MoodLevel::Great)];
        let trend = MoodTrend::build(&entries, day(10), 3);
        assert_eq!(trend.sparkline(), "▁·█");
    }
}
