//! Burnout barometer command.

use crate::error::BreathworkError;
use crate::features::burnout::Assessment;
use crate::output::{format_assessment, format_questionnaire};

use super::Context;

/// Score the burnout questionnaire, or list its statements when no answers
/// are given.
///
/// # Errors
///
/// Returns an error if an answer is invalid, answers are missing, or output
/// formatting fails.
pub fn burnout(ctx: &Context, answers: &[String]) -> Result<String, BreathworkError> {
    if answers.is_empty() {
        return format_questionnaire(ctx.format);
    }

    let assessment = Assessment::from_answers(answers)?;
    tracing::debug!(score = assessment.score, level = ?assessment.level, "burnout scored");
    format_assessment(&assessment, ctx.format)
}

#[cfg(test)]
mod tests {
    use super::super::test_support::context;
    use super::*;
    use crate::cli::args::OutputFormat;

    fn answers(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_burnout_scores_json() {
        let (_dir, ctx) = context(OutputFormat::Json);
        let output = burnout(&ctx, &answers(&["3", "3", "3", "1", "1"])).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["score"], 11);
        assert_eq!(value["level"], "moderate");
    }

    #[test]
    fn test_burnout_without_answers_lists_questions() {
        let (_dir, ctx) = context(OutputFormat::Json);
        let output = burnout(&ctx, &[]).unwrap();
        assert!(output.contains("\"questions\""));
    }

    #[test]
    fn test_burnout_incomplete() {
        let (_dir, ctx) = context(OutputFormat::Pretty);
        let result = burnout(&ctx, &answers(&["3", "3"]));
        assert!(matches!(result, Err(BreathworkError::Parse(_))));
    }
}
