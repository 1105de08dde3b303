//! Breathing exercise definitions.
//!
//! An exercise is an ordered, cyclic list of phases plus a target session
//! length. Definitions are immutable once built.

use serde::{Deserialize, Serialize};

use crate::error::BreathworkError;

/// Name of a breathing phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhaseName {
    /// Breathe in
    Inhale,
    /// Hold with full lungs
    Hold,
    /// Breathe out
    Exhale,
    /// Rest with empty lungs
    Pause,
}

impl PhaseName {
    /// Capitalized name, as spoken and displayed.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Inhale => "Inhale",
            Self::Hold => "Hold",
            Self::Exhale => "Exhale",
            Self::Pause => "Pause",
        }
    }
}

impl std::fmt::Display for PhaseName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One fixed-length segment of a breathing cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phase {
    /// Phase name
    pub name: PhaseName,
    /// Length in seconds, at least 1
    #[serde(rename = "duration")]
    pub duration_seconds: u32,
}

impl Phase {
    /// Create a phase.
    #[must_use]
    pub const fn new(name: PhaseName, duration_seconds: u32) -> Self {
        Self {
            name,
            duration_seconds,
        }
    }
}

/// A named breathing exercise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Exercise {
    id: String,
    title: String,
    description: String,
    phases: Vec<Phase>,
    total_duration_seconds: u32,
}

impl Exercise {
    /// Build an exercise, validating its shape.
    ///
    /// # Errors
    ///
    /// Returns `BreathworkError::Config` if the id is blank, there are no
    /// phases, a phase lasts zero seconds, or the total duration is zero.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        phases: Vec<Phase>,
        total_duration_seconds: u32,
    ) -> Result<Self, BreathworkError> {
        let id = id.into();

        if id.trim().is_empty() {
            return Err(BreathworkError::Config(
                "Exercise id must not be empty".to_string(),
            ));
        }
        if phases.is_empty() {
            return Err(BreathworkError::Config(format!(
                "Exercise '{id}' has no phases"
            )));
        }
        if let Some(phase) = phases.iter().find(|p| p.duration_seconds == 0) {
            return Err(BreathworkError::Config(format!(
                "Exercise '{id}': phase {} must last at least one second",
                phase.name
            )));
        }
        if total_duration_seconds == 0 {
            return Err(BreathworkError::Config(format!(
                "Exercise '{id}': total duration must be positive"
            )));
        }

        Ok(Self::from_parts(
            id,
            title.into(),
            description.into(),
            phases,
            total_duration_seconds,
        ))
    }

    /// Assemble an exercise whose shape is known to be valid.
    pub(crate) fn from_parts(
        id: String,
        title: String,
        description: String,
        phases: Vec<Phase>,
        total_duration_seconds: u32,
    ) -> Self {
        Self {
            id,
            title,
            description,
            phases,
            total_duration_seconds,
        }
    }

    /// Stable identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// One-line description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Phases in cycle order. Never empty.
    #[must_use]
    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    /// Phase at `index`, wrapping around the cycle.
    #[must_use]
    pub fn phase(&self, index: usize) -> Phase {
        self.phases[index % self.phases.len()]
    }

    /// Number of phases in one cycle.
    #[must_use]
    pub fn phase_count(&self) -> usize {
        self.phases.len()
    }

    /// Target session length in seconds.
    #[must_use]
    pub const fn total_duration_seconds(&self) -> u32 {
        self.total_duration_seconds
    }

    /// Length of one full cycle in seconds.
    #[must_use]
    pub fn cycle_seconds(&self) -> u32 {
        self.phases.iter().map(|p| p.duration_seconds).sum()
    }

    /// Number of complete cycles that fit in the session budget.
    #[must_use]
    pub fn full_cycles(&self) -> u32 {
        self.total_duration_seconds / self.cycle_seconds().max(1)
    }

    /// Compact pattern such as `4-7-8`.
    #[must_use]
    pub fn pattern(&self) -> String {
        self.phases
            .iter()
            .map(|p| p.duration_seconds.to_string())
            .collect::<Vec<_>>()
            .join("-")
    }
}
