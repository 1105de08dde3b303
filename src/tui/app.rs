//! Application state for the TUI.

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};

use crate::features::breathing::{
    Catalog, DeadlineScheduler, Exercise, HistoryStorage, Outcome, PracticeSession, SessionStatus,
    SessionTimer, Snapshot, SpeechAnnouncer, TickOutcome,
};

/// Longest wait for terminal input, so the screen keeps redrawing.
const MAX_POLL: Duration = Duration::from_millis(100);

/// Application state.
pub struct App {
    /// Exercises available for selection.
    pub catalog: Catalog,
    /// Index of the selected exercise.
    pub selected: usize,
    /// Status message to display.
    pub status: Option<String>,
    timer: SessionTimer<SpeechAnnouncer, DeadlineScheduler>,
    history: Option<HistoryStorage>,
    started_at: Option<DateTime<Utc>>,
}

impl App {
    /// Create a new app with `initial` selected.
    ///
    /// Practice is recorded to `history` when given.
    #[must_use]
    pub fn new(
        catalog: Catalog,
        initial: &Arc<Exercise>,
        voice: SpeechAnnouncer,
        history: Option<HistoryStorage>,
    ) -> Self {
        let selected = catalog.position(initial.id()).unwrap_or(0);
        let exercise = catalog.at(selected).unwrap_or_else(|| catalog.first());
        let timer = SessionTimer::new(exercise, voice, DeadlineScheduler::new());

        Self {
            catalog,
            selected,
            status: Some("Press space to begin, ? for help".to_string()),
            timer,
            history,
            started_at: None,
        }
    }

    /// Current session state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.timer.snapshot()
    }

    /// The selected exercise.
    #[must_use]
    pub fn exercise(&self) -> &Arc<Exercise> {
        self.timer.exercise()
    }

    /// Whether the voice guide is on.
    #[must_use]
    pub fn voice_enabled(&self) -> bool {
        self.timer.announcer().is_enabled()
    }

    /// Start, or pause if running.
    pub fn toggle_running(&mut self) {
        if self.timer.is_running() {
            self.timer.pause();
            return;
        }

        if self.started_at.is_none() {
            self.started_at = Some(Utc::now());
        }
        self.timer.start();
    }

    /// Reset the session, recording it as abandoned if it had begun.
    pub fn reset(&mut self) {
        self.abandon();
        self.timer.reset();
        self.status = Some("Session reset".to_string());
    }

    /// Select the next exercise, wrapping around.
    pub fn select_next(&mut self) {
        let next = (self.selected + 1) % self.catalog.len().max(1);
        self.select(next);
    }

    /// Select the previous exercise, wrapping around.
    pub fn select_previous(&mut self) {
        let len = self.catalog.len().max(1);
        let previous = (self.selected + len - 1) % len;
        self.select(previous);
    }

    fn select(&mut self, index: usize) {
        if index == self.selected {
            return;
        }
        let Some(exercise) = self.catalog.at(index) else {
            return;
        };

        self.abandon();
        self.selected = index;
        self.status = Some(exercise.title().to_string());
        self.timer.select(exercise);
    }

    /// Turn the voice guide on or off.
    pub fn toggle_voice(&mut self) {
        let enabled = !self.voice_enabled();
        self.timer.announcer_mut().set_enabled(enabled);
        self.status = Some(if enabled { "Voice on" } else { "Voice off" }.to_string());
    }

    /// How long the event loop may wait before the next tick is due.
    #[must_use]
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.timer
            .scheduler()
            .time_until_due(now)
            .map_or(MAX_POLL, |due| due.min(MAX_POLL))
    }

    /// Deliver any tick whose deadline has passed.
    pub fn deliver_due(&mut self, now: Instant) {
        while let Some(handle) = self.timer.scheduler_mut().due(now) {
            if self.timer.fire(handle) == TickOutcome::Completed {
                self.record(Outcome::Completed);
                self.status = Some("Well done".to_string());
            }
        }
    }

    /// Stop the session before leaving, recording unfinished practice.
    pub fn quit(&mut self) {
        self.abandon();
        self.timer.shutdown();
    }

    fn abandon(&mut self) {
        if self.timer.elapsed_seconds() > 0 && !self.is_complete() {
            self.record(Outcome::Abandoned);
        }
        self.started_at = None;
    }

    fn is_complete(&self) -> bool {
        self.timer.status() == SessionStatus::Complete
    }

    fn record(&mut self, outcome: Outcome) {
        let Some(started_at) = self.started_at.take() else {
            return;
        };
        let Some(history) = &self.history else {
            return;
        };

        let mut session = PracticeSession::finished(
            self.timer.exercise(),
            started_at,
            self.timer.elapsed_seconds(),
            outcome,
        );
        if let Err(e) = history.save(&mut session) {
            tracing::warn!(error = %e, "could not record practice session");
            self.status = Some(format!("Could not save session: {e}"));
        }
    }
}
