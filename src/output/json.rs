//! JSON output formatting for breathwork.

use std::sync::Arc;

use serde::Serialize;
use serde_json::{json, Value};

use crate::error::BreathworkError;
use crate::features::breathing::{Exercise, PracticeSession, Simulation};
use crate::features::burnout::{Assessment, Frequency, QUESTIONS};
use crate::features::mood::MoodEntry;

fn exercise_value(exercise: &Exercise) -> Value {
    json!({
        "id": exercise.id(),
        "title": exercise.title(),
        "description": exercise.description(),
        "pattern": exercise.pattern(),
        "phases": exercise.phases(),
        "total_duration_seconds": exercise.total_duration_seconds(),
        "cycle_seconds": exercise.cycle_seconds(),
        "full_cycles": exercise.full_cycles(),
    })
}

/// Format the exercise catalog as JSON
///
/// # Errors
///
/// Returns `BreathworkError::Json` if JSON serialization fails.
pub fn format_exercises_json(exercises: &[Arc<Exercise>]) -> Result<String, BreathworkError> {
    let items: Vec<Value> = exercises.iter().map(|e| exercise_value(e)).collect();
    let output = json!({
        "count": items.len(),
        "items": items
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a single exercise as JSON
///
/// # Errors
///
/// Returns `BreathworkError::Json` if JSON serialization fails.
pub fn format_exercise_json(exercise: &Exercise) -> Result<String, BreathworkError> {
    Ok(serde_json::to_string_pretty(&exercise_value(exercise))?)
}

/// Format a simulation trace as JSON
///
/// # Errors
///
/// Returns `BreathworkError::Json` if JSON serialization fails.
pub fn format_simulation_json(simulation: &Simulation) -> Result<String, BreathworkError> {
    let output = json!({
        "exercise_id": simulation.exercise_id,
        "title": simulation.title,
        "ticks": simulation.ticks(),
        "completed": simulation.completed,
        "steps": simulation.steps
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format practice sessions as JSON
///
/// # Errors
///
/// Returns `BreathworkError::Json` if JSON serialization fails.
pub fn format_sessions_json(sessions: &[PracticeSession]) -> Result<String, BreathworkError> {
    let output = json!({
        "count": sessions.len(),
        "items": sessions
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format mood entries as JSON
///
/// # Errors
///
/// Returns `BreathworkError::Json` if JSON serialization fails.
pub fn format_moods_json(entries: &[MoodEntry]) -> Result<String, BreathworkError> {
    let output = json!({
        "count": entries.len(),
        "items": entries
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format the burnout questions and answer scale as JSON
///
/// # Errors
///
/// Returns `BreathworkError::Json` if JSON serialization fails.
pub fn format_questionnaire_json() -> Result<String, BreathworkError> {
    let scale: Vec<Value> = Frequency::ALL
        .iter()
        .map(|f| json!({ "value": f.value(), "label": f.label() }))
        .collect();
    let output = json!({
        "questions": QUESTIONS,
        "scale": scale,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a scored burnout assessment as JSON
///
/// # Errors
///
/// Returns `BreathworkError::Json` if JSON serialization fails.
pub fn format_assessment_json(assessment: &Assessment) -> Result<String, BreathworkError> {
    let answers: Vec<Value> = QUESTIONS
        .iter()
        .zip(&assessment.answers)
        .map(|(question, answer)| {
            json!({ "question": question, "answer": answer, "value": answer.value() })
        })
        .collect();
    let output = json!({
        "score": assessment.score,
        "max_score": assessment.max_score,
        "level": assessment.level,
        "label": assessment.level.label(),
        "advice": assessment.level.advice(),
        "answers": answers,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `BreathworkError::Json` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, BreathworkError> {
    Ok(serde_json::to_string_pretty(value)?)
}
