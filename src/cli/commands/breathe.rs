//! Interactive breathing session command.

use crate::cli::args::BreatheArgs;
use crate::error::BreathworkError;
use crate::features::breathing::{HistoryStorage, SpeechAnnouncer};
use crate::logging;
use crate::tui::{self, App};

use super::Context;

/// Execute breathe command
///
/// Opens the TUI. Logs go to `logs/breathwork.log` while it runs.
///
/// # Errors
///
/// Returns an error if the exercise is unknown or the terminal fails.
pub fn breathe(ctx: &Context, args: &BreatheArgs) -> Result<String, BreathworkError> {
    ctx.paths.ensure_dirs()?;
    logging::init_file(&ctx.paths.log_file())?;

    let requested = args
        .exercise
        .as_deref()
        .or(ctx.config.breathing.default_exercise.as_deref());
    let initial = match requested {
        Some(key) => ctx.catalog.require(key)?,
        None => ctx.catalog.first(),
    };

    let voice_enabled = args.voice_override().unwrap_or(ctx.config.breathing.voice);
    let voice = SpeechAnnouncer::new(ctx.config.breathing.voice_command.as_deref(), voice_enabled);

    // Sessions still run without a database.
    let history = match ctx.database() {
        Ok(db) => Some(HistoryStorage::with_database(db)),
        Err(e) => {
            tracing::warn!(error = %e, "practice history unavailable");
            None
        }
    };

    tracing::info!(exercise = initial.id(), voice = voice_enabled, "opening session screen");

    let mut app = App::new(ctx.catalog.clone(), &initial, voice, history);
    tui::run(&mut app)?;

    Ok(String::new())
}
