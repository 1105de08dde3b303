//! Burnout self-assessment.
//!
//! Five statements, each rated on a 1-5 frequency scale. Not a diagnosis.

use serde::{Deserialize, Serialize};

use crate::error::BreathworkError;

/// The statements, in the order answers are given.
pub const QUESTIONS: [&str; 5] = [
    "I feel emotionally drained from my work/studies.",
    "I feel used up at the end of the day.",
    "I feel tired when I get up in the morning and have to face another day.",
    "Working/studying all day is really a strain for me.",
    "I feel burned out from my work/studies.",
];

/// Highest possible score.
pub const MAX_SCORE: u8 = 25;

const LOW_MAX: u8 = 10;
const MODERATE_MAX: u8 = 17;

/// How often a statement applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    /// 1
    Never,
    /// 2
    Rarely,
    /// 3
    Sometimes,
    /// 4
    Often,
    /// 5
    Always,
}

impl Frequency {
    /// All answers, lowest first.
    pub const ALL: [Self; 5] = [
        Self::Never,
        Self::Rarely,
        Self::Sometimes,
        Self::Often,
        Self::Always,
    ];

    /// Numeric value, 1 to 5.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::Never => 1,
            Self::Rarely => 2,
            Self::Sometimes => 3,
            Self::Often => 4,
            Self::Always => 5,
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Never => "Never",
            Self::Rarely => "Rarely",
            Self::Sometimes => "Sometimes",
            Self::Often => "Often",
            Self::Always => "Always",
        }
    }

    /// Parse `1`-`5` or a label.
    ///
    /// # Errors
    ///
    /// Returns `BreathworkError::Parse` for anything else.
    pub fn parse(s: &str) -> Result<Self, BreathworkError> {
        let s = s.trim();

        if let Ok(n) = s.parse::<u8>() {
            return Self::ALL
                .into_iter()
                .find(|f| f.value() == n)
                .ok_or_else(|| {
                    BreathworkError::Parse(format!("Answers must be between 1 and 5, got {n}"))
                });
        }

        Self::ALL
            .into_iter()
            .find(|f| f.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                BreathworkError::Parse(format!(
                    "Unknown answer '{s}' (use 1-5 or never/rarely/sometimes/often/always)"
                ))
            })
    }
}

/// Burnout band for a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BurnoutLevel {
    /// Score up to 10
    Low,
    /// Score 11 to 17
    Moderate,
    /// Score 18 and above
    High,
}

impl BurnoutLevel {
    /// Band for a total score.
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        if score <= LOW_MAX {
            Self::Low
        } else if score <= MODERATE_MAX {
            Self::Moderate
        } else {
            Self::High
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low Burnout",
            Self::Moderate => "Moderate Burnout",
            Self::High => "High Burnout",
        }
    }

    /// What the band suggests.
    #[must_use]
    pub const fn advice(self) -> &'static str {
        match self {
            Self::Low => "You seem to be managing stress well. Keep up the healthy habits!",
            Self::Moderate => {
                "You might be experiencing some signs of burnout. \
                 Consider exploring stress management techniques."
            }
            Self::High => {
                "Your score suggests a high level of burnout. It's important to seek \
                 support and make changes to improve your well-being."
            }
        }
    }
}

/// A scored questionnaire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assessment {
    /// One answer per question, in question order
    pub answers: Vec<Frequency>,
    /// Sum of the answer values
    pub score: u8,
    /// Highest possible score
    pub max_score: u8,
    /// Band for the score
    pub level: BurnoutLevel,
}

impl Assessment {
    /// Score a complete set of answers.
    ///
    /// # Errors
    ///
    /// Returns `BreathworkError::Parse` unless exactly one answer per
    /// question is given.
    pub fn score(answers: &[Frequency]) -> Result<Self, BreathworkError> {
        if answers.len() != QUESTIONS.len() {
            return Err(BreathworkError::Parse(format!(
                "Please answer all {} questions ({} given)",
                QUESTIONS.len(),
                answers.len()
            )));
        }

        let score = answers.iter().map(|a| a.value()).sum();
        Ok(Self {
            answers: answers.to_vec(),
            score,
            max_score: MAX_SCORE,
            level: BurnoutLevel::from_score(score),
        })
    }

    /// Parse and score answers given as text.
    ///
    /// # Errors
    ///
    /// Returns `BreathworkError::Parse` if any answer is invalid or the set is
    /// incomplete.
    pub fn from_answers<S: AsRef<str>>(answers: &[S]) -> Result<Self, BreathworkError> {
        let parsed = answers
            .iter()
            .map(|a| Frequency::parse(a.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::score(&parsed)
    }

    /// Score as a fraction of the maximum.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        f64::from(self.score) / f64::from(self.max_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers_summing_to(score: u8) -> Vec<Frequency> {
        // Spread `score` over five answers, each 1..=5
        let mut rest = score - 5;
        (0..5)
            .map(|_| {
                let extra = rest.min(4);
                rest -= extra;
                Frequency::ALL[usize::from(extra)]
            })
            .collect()
    }

    #[test]
    fn test_band_boundaries() {
        let level = |score| Assessment::score(&answers_summing_to(score)).unwrap().level;

        assert_eq!(level(5), BurnoutLevel::Low);
        assert_eq!(level(10), BurnoutLevel::Low);
        assert_eq!(level(11), BurnoutLevel::Moderate);
        assert_eq!(level(17), BurnoutLevel::Moderate);
        assert_eq!(level(18), BurnoutLevel::High);
        assert_eq!(level(25), BurnoutLevel::High);
    }

    #[test]
    fn test_score_sums_answers() {
        let assessment = Assessment::from_answers(&["1", "never", "3", "Often", "5"]).unwrap();
        assert_eq!(assessment.score, 14);
        assert_eq!(assessment.max_score, 25);
        assert_eq!(assessment.level, BurnoutLevel::Moderate);
        assert_eq!(assessment.answers[1], Frequency::Never);
        assert!((assessment.ratio() - 0.56).abs() < 1e-9);
    }

    #[test]
    fn test_incomplete_answers_refused() {
        let result = Assessment::from_answers(&["3", "3", "3", "3"]);
        assert!(matches!(result, Err(BreathworkError::Parse(m)) if m.contains("all 5")));
        assert!(Assessment::score(&[]).is_err());
        assert!(Assessment::from_answers(&["3"; 6]).is_err());
    }

    #[test]
    fn test_answer_out_of_range() {
        assert!(Frequency::parse("0").is_err());
        assert!(Frequency::parse("6").is_err());
        assert!(Frequency::parse("usually").is_err());
        assert_eq!(Frequency::parse(" ALWAYS ").unwrap(), Frequency::Always);
        assert!(Assessment::from_answers(&["1", "2", "3", "4", "9"]).is_err());
    }

    #[test]
    fn test_json_shape() {
        let assessment = Assessment::from_answers(&["5"; 5]).unwrap();
        let value = serde_json::to_value(&assessment).unwrap();
        assert_eq!(value["level"], "high");
        assert_eq!(value["answers"][0], "always");
        assert_eq!(value["score"], 25);
    }
}
