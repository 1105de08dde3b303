//! The exercise catalog.
//!
//! Built-in exercises come first, followed by any exercises defined in
//! `config.yaml`. The catalog is assembled once at startup and never changes.

use std::sync::Arc;

use once_cell::sync::Lazy;

use super::exercise::{Exercise, Phase, PhaseName};
use crate::config::ExerciseConfig;
use crate::error::BreathworkError;

static BUILTIN: Lazy<Vec<Arc<Exercise>>> = Lazy::new(|| {
    vec![
        Arc::new(Exercise::from_parts(
            "box-breathing".to_string(),
            "Box Breathing".to_string(),
            "A simple technique to calm your nervous system and reduce stress by focusing on \
             steady, even breaths."
                .to_string(),
            vec![
                Phase::new(PhaseName::Inhale, 4),
                Phase::new(PhaseName::Hold, 4),
                Phase::new(PhaseName::Exhale, 4),
                Phase::new(PhaseName::Pause, 4),
            ],
            2 * 60,
        )),
        Arc::new(Exercise::from_parts(
            "478-breathing".to_string(),
            "4-7-8 Breathing".to_string(),
            "Known as \"relaxing breath\", this technique can help with anxiety and sleep."
                .to_string(),
            vec![
                Phase::new(PhaseName::Inhale, 4),
                Phase::new(PhaseName::Hold, 7),
                Phase::new(PhaseName::Exhale, 8),
            ],
            60,
        )),
        Arc::new(Exercise::from_parts(
            "mindful-breathing".to_string(),
            "Mindful Breathing".to_string(),
            "Focus on the natural rhythm of your breath to bring calmness and awareness."
                .to_string(),
            vec![
                Phase::new(PhaseName::Inhale, 5),
                Phase::new(PhaseName::Exhale, 5),
            ],
            5 * 60,
        )),
    ]
});

/// Ordered, immutable set of exercises.
#[derive(Debug, Clone)]
pub struct Catalog {
    exercises: Vec<Arc<Exercise>>,
}

impl Catalog {
    /// The built-in exercises only.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            exercises: BUILTIN.clone(),
        }
    }

    /// Built-in exercises followed by user-defined ones.
    ///
    /// # Errors
    ///
    /// Returns `BreathworkError::Config` if a definition is invalid or reuses
    /// an existing id.
    pub fn with_custom(custom: &[ExerciseConfig]) -> Result<Self, BreathworkError> {
        let mut catalog = Self::builtin();

        for def in custom {
            let exercise = Exercise::new(
                def.id.clone(),
                def.title.clone().unwrap_or_else(|| def.id.clone()),
                def.description.clone(),
                def.phases.clone(),
                def.total_seconds,
            )?;

            if catalog.exercises.iter().any(|e| e.id() == exercise.id()) {
                return Err(BreathworkError::Config(format!(
                    "Duplicate exercise id '{}'",
                    exercise.id()
                )));
            }

            tracing::debug!(id = exercise.id(), "registered custom exercise");
            catalog.exercises.push(Arc::new(exercise));
        }

        Ok(catalog)
    }

    /// Look up an exercise by id, or by title ignoring case.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Arc<Exercise>> {
        let key = key.trim();
        self.exercises
            .iter()
            .find(|e| e.id() == key)
            .or_else(|| {
                self.exercises
                    .iter()
                    .find(|e| e.title().eq_ignore_ascii_case(key))
            })
            .cloned()
    }

    /// Like [`Catalog::get`], but a miss is an error.
    ///
    /// # Errors
    ///
    /// Returns `BreathworkError::NotFound` listing the known ids.
    pub fn require(&self, key: &str) -> Result<Arc<Exercise>, BreathworkError> {
        self.get(key).ok_or_else(|| {
            let known = self
                .exercises
                .iter()
                .map(|e| e.id())
                .collect::<Vec<_>>()
                .join(", ");
            BreathworkError::NotFound(format!("exercise '{key}' (available: {known})"))
        })
    }

    /// The default exercise: the first one.
    #[must_use]
    pub fn first(&self) -> Arc<Exercise> {
        Arc::clone(&self.exercises[0])
    }

    /// Position of an exercise in the catalog.
    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.exercises.iter().position(|e| e.id() == id)
    }

    /// Exercise at a position, if any.
    #[must_use]
    pub fn at(&self, index: usize) -> Option<Arc<Exercise>> {
        self.exercises.get(index).cloned()
    }

    /// All exercises in catalog order.
    #[must_use]
    pub fn as_slice(&self) -> &[Arc<Exercise>] {
        &self.exercises
    }

    /// Iterate in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Exercise>> {
        self.exercises.iter()
    }

    /// Number of exercises.
    #[must_use]
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    /// Always false: the built-ins are never removed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
