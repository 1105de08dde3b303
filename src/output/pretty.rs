use std::sync::Arc;

use colored::Colorize;

use crate::core::{format_clock, format_seconds};
use crate::features::breathing::{Exercise, Outcome, PracticeSession, SessionStatus, Simulation};
use crate::features::burnout::{Assessment, BurnoutLevel, Frequency, QUESTIONS};
use crate::features::mood::MoodEntry;

/// Format the exercise catalog as a table
pub fn format_exercises_pretty(exercises: &[Arc<Exercise>]) -> String {
    if exercises.is_empty() {
        return "Exercises (0)\n  No exercises".to_string();
    }

    let id_width = exercises.iter().map(|e| e.id().len()).max().unwrap_or(0);
    let title_width = exercises.iter().map(|e| e.title().len()).max().unwrap_or(0);

    let mut output = format!("Exercises ({})\n", exercises.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for exercise in exercises {
        output.push_str(&format!(
            "{}  {}  {}  {}\n",
            format!("{:<id_width$}", exercise.id()).cyan(),
            format!("{:<title_width$}", exercise.title()).bold(),
            format!("{:<9}", exercise.pattern()).yellow(),
            format_clock(exercise.total_duration_seconds()).dimmed(),
        ));
    }

    output
}

/// Format one exercise with its phases
pub fn format_exercise_pretty(exercise: &Exercise) -> String {
    let mut lines = vec![
        exercise.title().bold().to_string(),
        format!("  {}", exercise.id().dimmed()),
    ];

    if !exercise.description().is_empty() {
        lines.push(String::new());
        lines.push(format!("  {}", exercise.description()));
    }

    lines.push(String::new());
    lines.push("  Phases:".to_string());
    for (i, phase) in exercise.phases().iter().enumerate() {
        lines.push(format!(
            "    {}. {:<7} {}s",
            i + 1,
            phase.name.label(),
            phase.duration_seconds
        ));
    }

    lines.push(String::new());
    lines.push(format!("  Pattern:      {}", exercise.pattern().yellow()));
    lines.push(format!("  Cycle length: {}s", exercise.cycle_seconds()));
    lines.push(format!(
        "  Session:      {} ({} full cycles)",
        format_clock(exercise.total_duration_seconds()),
        exercise.full_cycles()
    ));

    lines.join("\n")
}

/// Format a simulation trace, one line per tick
pub fn format_simulation_pretty(simulation: &Simulation) -> String {
    let mut output = format!(
        "{} ({})\n",
        simulation.title.bold(),
        simulation.exercise_id.dimmed()
    );
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for step in &simulation.steps {
        let snap = &step.snapshot;
        let label = match snap.status {
            SessionStatus::Complete => snap.display_label.green().bold(),
            SessionStatus::Running => snap.display_label.normal(),
            SessionStatus::Paused | SessionStatus::Idle => snap.display_label.yellow(),
        };

        let mut line = format!(
            "{:>4}  {:<18} {}/{}",
            step.tick,
            label,
            format_clock(snap.total_elapsed_seconds),
            format_clock(snap.total_duration_seconds),
        );

        if !step.announcements.is_empty() {
            line.push_str(&format!("  🔊 {}", step.announcements.join(", ").cyan()));
        }

        output.push_str(&line);
        output.push('\n');
    }

    let summary = if simulation.completed {
        format!("Completed after {} ticks", simulation.ticks())
            .green()
            .to_string()
    } else {
        format!("Stopped after {} ticks", simulation.ticks())
            .yellow()
            .to_string()
    };
    output.push_str(&summary);

    output
}

/// Format practice sessions as a list
pub fn format_sessions_pretty(sessions: &[PracticeSession], title: &str) -> String {
    if sessions.is_empty() {
        return format!("{title} (0 sessions)\n  No sessions");
    }

    let mut output = format!("{title} ({} sessions)\n", sessions.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for session in sessions {
        let icon = match session.outcome {
            Outcome::Completed => "[✓]".green(),
            Outcome::Abandoned => "[-]".yellow(),
        };

        output.push_str(&format!(
            "{} {}  {}  {}\n",
            icon,
            session.started_at_local().format("%Y-%m-%d %H:%M").to_string().dimmed(),
            session.exercise_title.bold(),
            format_seconds(session.elapsed_seconds),
        ));
    }

    output
}

/// Format mood entries, most recent first
pub fn format_moods_pretty(entries: &[MoodEntry]) -> String {
    if entries.is_empty() {
        return "Moods (0 entries)\n  No moods logged".to_string();
    }

    let mut output = format!("Moods ({} entries)\n", entries.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for entry in entries {
        let mut line = format!(
            "{}  {}",
            entry.date.format("%a %Y-%m-%d").to_string().dimmed(),
            entry.level.to_string().bold()
        );
        if let Some(note) = &entry.note {
            line.push_str(&format!("  {}", note.italic()));
        }
        output.push_str(&line);
        output.push('\n');
    }

    output
}

/// Format the burnout questions and the answer scale
pub fn format_questionnaire_pretty() -> String {
    let mut lines = vec!["Burnout Barometer".bold().to_string(), "─".repeat(60)];
    lines.push("How often has each statement applied over the past few weeks?".to_string());
    lines.push(String::new());

    for (i, question) in QUESTIONS.iter().enumerate() {
        lines.push(format!("  {}. {question}", i + 1));
    }

    lines.push(String::new());
    let scale: Vec<String> = Frequency::ALL
        .iter()
        .map(|f| format!("{}={}", f.value(), f.label()))
        .collect();
    lines.push(format!("  Scale: {}", scale.join("  ").dimmed()));
    lines.push(format!("  Answer with: {}", "breathwork burnout 3 4 2 5 3".cyan()));

    lines.join("\n")
}

/// Format a scored burnout assessment
pub fn format_assessment_pretty(assessment: &Assessment) -> String {
    let filled = usize::from(assessment.score);
    let empty = usize::from(assessment.max_score.saturating_sub(assessment.score));
    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(empty));
    let (label, bar) = match assessment.level {
        BurnoutLevel::Low => (assessment.level.label().green(), bar.green()),
        BurnoutLevel::Moderate => (assessment.level.label().yellow(), bar.yellow()),
        BurnoutLevel::High => (assessment.level.label().red(), bar.red()),
    };

    let mut lines = vec!["Burnout Barometer".bold().to_string(), "─".repeat(60)];
    for (i, (question, answer)) in QUESTIONS.iter().zip(&assessment.answers).enumerate() {
        lines.push(format!("  {}. {question}\n     {}", i + 1, answer.label().dimmed()));
    }

    lines.push(String::new());
    lines.push(format!(
        "  Score: {}/{}  {}",
        assessment.score, assessment.max_score, bar
    ));
    lines.push(format!("  {}", label.bold()));
    lines.push(format!("  {}", assessment.level.advice()));
    lines.push(String::new());
    lines.push(format!("  {}", "This is not a diagnostic tool.".dimmed()));

    lines.join("\n")
}
