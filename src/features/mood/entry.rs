//! Mood levels and log entries.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::BreathworkError;

/// How the day felt, from 1 (awful) to 5 (great).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodLevel {
    /// 1
    Awful,
    /// 2
    Bad,
    /// 3
    Okay,
    /// 4
    Good,
    /// 5
    Great,
}

impl MoodLevel {
    /// All levels, best first.
    pub const ALL: [Self; 5] = [Self::Great, Self::Good, Self::Okay, Self::Bad, Self::Awful];

    /// Numeric value, 1 to 5.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::Awful => 1,
            Self::Bad => 2,
            Self::Okay => 3,
            Self::Good => 4,
            Self::Great => 5,
        }
    }

    /// Level for a numeric value.
    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::Awful),
            2 => Some(Self::Bad),
            3 => Some(Self::Okay),
            4 => Some(Self::Good),
            5 => Some(Self::Great),
            _ => None,
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Awful => "Awful",
            Self::Bad => "Bad",
            Self::Okay => "Okay",
            Self::Good => "Good",
            Self::Great => "Great",
        }
    }

    /// Emoji shown next to the label.
    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Awful => "😞",
            Self::Bad => "😟",
            Self::Okay => "😐",
            Self::Good => "🙂",
            Self::Great => "😄",
        }
    }

    /// Parse `1`-`5` or a label.
    ///
    /// # Errors
    ///
    /// Returns `BreathworkError::Parse` for anything else.
    pub fn parse(s: &str) -> Result<Self, BreathworkError> {
        let s = s.trim().to_lowercase();

        if let Ok(n) = s.parse::<u8>() {
            return Self::from_value(n).ok_or_else(|| {
                BreathworkError::Parse(format!("Mood must be between 1 and 5, got {n}"))
            });
        }

        Self::ALL
            .into_iter()
            .find(|level| level.label().eq_ignore_ascii_case(&s))
            .ok_or_else(|| {
                BreathworkError::Parse(format!(
                    "Unknown mood '{s}' (use 1-5 or great/good/okay/bad/awful)"
                ))
            })
    }
}

impl std::fmt::Display for MoodLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.label(), self.emoji())
    }
}

/// One day's mood.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    /// Local calendar day; at most one entry per day
    pub date: NaiveDate,
    /// When it was logged
    pub logged_at: DateTime<Utc>,
    /// Mood level
    pub level: MoodLevel,
    /// Optional note
    pub note: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numbers() {
        assert_eq!(MoodLevel::parse("1").unwrap(), MoodLevel::Awful);
        assert_eq!(MoodLevel::parse(" 5 ").unwrap(), MoodLevel::Great);
        assert!(MoodLevel::parse("0").is_err());
        assert!(MoodLevel::parse("6").is_err());
    }

    #[test]
    fn test_parse_labels() {
        assert_eq!(MoodLevel::parse("good").unwrap(), MoodLevel::Good);
        assert_eq!(MoodLevel::parse("OKAY").unwrap(), MoodLevel::Okay);
        assert!(MoodLevel::parse("meh").is_err());
    }

    #[test]
    fn test_value_round_trip() {
        for level in MoodLevel::ALL {
            assert_eq!(MoodLevel::from_value(level.value()), Some(level));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(MoodLevel::Great.to_string(), "Great 😄");
    }
}
