//! Output formatting for breathwork.
//!
//! Each formatter renders either colored text or pretty-printed JSON.

mod json;
mod pretty;

use std::sync::Arc;

use crate::cli::args::OutputFormat;
use crate::error::BreathworkError;
use crate::features::breathing::{Exercise, PracticeReport, PracticeSession, Simulation};
use crate::features::burnout::Assessment;
use crate::features::mood::{MoodEntry, MoodTrend};

pub use json::*;
pub use pretty::*;

/// Format the exercise catalog based on output format
///
/// # Errors
///
/// Returns `BreathworkError::Json` if JSON serialization fails.
pub fn format_exercises(
    exercises: &[Arc<Exercise>],
    format: OutputFormat,
) -> Result<String, BreathworkError> {
    match format {
        OutputFormat::Pretty => Ok(format_exercises_pretty(exercises)),
        OutputFormat::Json => format_exercises_json(exercises),
    }
}

/// Format a single exercise based on output format
///
/// # Errors
///
/// Returns `BreathworkError::Json` if JSON serialization fails.
pub fn format_exercise(
    exercise: &Exercise,
    format: OutputFormat,
) -> Result<String, BreathworkError> {
    match format {
        OutputFormat::Pretty => Ok(format_exercise_pretty(exercise)),
        OutputFormat::Json => format_exercise_json(exercise),
    }
}

/// Format a simulation trace based on output format
///
/// # Errors
///
/// Returns `BreathworkError::Json` if JSON serialization fails.
pub fn format_simulation(
    simulation: &Simulation,
    format: OutputFormat,
) -> Result<String, BreathworkError> {
    match format {
        OutputFormat::Pretty => Ok(format_simulation_pretty(simulation)),
        OutputFormat::Json => format_simulation_json(simulation),
    }
}

/// Format practice sessions based on output format
///
/// # Errors
///
/// Returns `BreathworkError::Json` if JSON serialization fails.
pub fn format_sessions(
    sessions: &[PracticeSession],
    title: &str,
    format: OutputFormat,
) -> Result<String, BreathworkError> {
    match format {
        OutputFormat::Pretty => Ok(format_sessions_pretty(sessions, title)),
        OutputFormat::Json => format_sessions_json(sessions),
    }
}

/// Format a practice report based on output format
///
/// # Errors
///
/// Returns `BreathworkError::Json` if JSON serialization fails.
pub fn format_report(
    report: &PracticeReport,
    format: OutputFormat,
) -> Result<String, BreathworkError> {
    match format {
        OutputFormat::Pretty => Ok(report.format()),
        OutputFormat::Json => to_json(report),
    }
}

/// Format mood entries based on output format
///
/// # Errors
///
/// Returns `BreathworkError::Json` if JSON serialization fails.
pub fn format_moods(
    entries: &[MoodEntry],
    format: OutputFormat,
) -> Result<String, BreathworkError> {
    match format {
        OutputFormat::Pretty => Ok(format_moods_pretty(entries)),
        OutputFormat::Json => format_moods_json(entries),
    }
}

/// Format a mood trend based on output format
///
/// # Errors
///
/// Returns `BreathworkError::Json` if JSON serialization fails.
pub fn format_trend(trend: &MoodTrend, format: OutputFormat) -> Result<String, BreathworkError> {
    match format {
        OutputFormat::Pretty => Ok(trend.format()),
        OutputFormat::Json => to_json(trend),
    }
}

/// Format the burnout questionnaire based on output format
///
/// # Errors
///
/// Returns `BreathworkError::Json` if JSON serialization fails.
pub fn format_questionnaire(format: OutputFormat) -> Result<String, BreathworkError> {
    match format {
        OutputFormat::Pretty => Ok(format_questionnaire_pretty()),
        OutputFormat::Json => format_questionnaire_json(),
    }
}

/// Format a burnout assessment based on output format
///
/// # Errors
///
/// Returns `BreathworkError::Json` if JSON serialization fails.
pub fn format_assessment(
    assessment: &Assessment,
    format: OutputFormat,
) -> Result<String, BreathworkError> {
    match format {
        OutputFormat::Pretty => Ok(format_assessment_pretty(assessment)),
        OutputFormat::Json => format_assessment_json(assessment),
    }
}
