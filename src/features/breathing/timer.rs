//! The guided breathing session timer.
//!
//! [`SessionTimer`] owns the session state and is the only thing that mutates
//! it. Time enters through an injected [`Scheduler`]: the timer schedules one
//! tick, the host delivers it through [`SessionTimer::fire`], and the timer
//! schedules the next. Guidance is spoken through an injected [`Announcer`]
//! at explicit transition points.
//!
//! The session budget is checked only when a phase runs out, so a session can
//! run past its target by up to one phase.
//!
//! The timer is single-owner. Hosts that share it across threads must put it
//! behind a mutex so that ticks and user actions are serialized.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::exercise::{Exercise, PhaseName};
use crate::core::{Announcer, Scheduler, TickHandle};

/// Delay between ticks.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

const READY_LABEL: &str = "Ready?";
const PAUSED_LABEL: &str = "Paused";
const COMPLETE_LABEL: &str = "Session Complete!";
const RESET_ANNOUNCEMENT: &str = "Exercise reset";

/// What the breathing animation should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhaseView {
    /// Not started, or reset
    Idle,
    /// Breathing in
    Inhale,
    /// Holding
    Hold,
    /// Breathing out
    Exhale,
    /// Resting
    Pause,
    /// Session budget used up
    Complete,
}

impl From<PhaseName> for PhaseView {
    fn from(name: PhaseName) -> Self {
        match name {
            PhaseName::Inhale => Self::Inhale,
            PhaseName::Hold => Self::Hold,
            PhaseName::Exhale => Self::Exhale,
            PhaseName::Pause => Self::Pause,
        }
    }
}

impl std::fmt::Display for PhaseView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Inhale => write!(f, "inhale"),
            Self::Hold => write!(f, "hold"),
            Self::Exhale => write!(f, "exhale"),
            Self::Pause => write!(f, "pause"),
            Self::Complete => write!(f, "complete"),
        }
    }
}

/// Lifecycle state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    /// Fresh session, nothing elapsed
    Idle,
    /// Counting down
    Running,
    /// Stopped part-way
    Paused,
    /// Budget used up
    Complete,
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Running => write!(f, "Running"),
            Self::Paused => write!(f, "Paused"),
            Self::Complete => write!(f, "Complete"),
        }
    }
}

/// Result of delivering a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not running, or the handle was stale
    Ignored,
    /// One second counted
    Counted,
    /// One second counted and the session finished
    Completed,
}

/// Read-only view of the session for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Selected exercise
    pub exercise_id: String,
    /// Animation state
    pub phase_view: PhaseView,
    /// Text shown in the animation, e.g. `Inhale (3s)`
    pub display_label: String,
    /// Index of the active phase
    pub phase_index: usize,
    /// Seconds left in the active phase
    pub time_left_in_phase: u32,
    /// Seconds counted so far
    pub total_elapsed_seconds: u32,
    /// Session budget
    pub total_duration_seconds: u32,
    /// Whether ticks are being scheduled
    pub running: bool,
    /// Lifecycle state
    pub status: SessionStatus,
}

impl Snapshot {
    /// Fraction of the budget used, clamped to 1.0.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.total_duration_seconds == 0 {
            return 0.0;
        }
        (f64::from(self.total_elapsed_seconds) / f64::from(self.total_duration_seconds)).min(1.0)
    }
}

/// Drives one breathing exercise through its phases.
pub struct SessionTimer<A: Announcer, S: Scheduler> {
    exercise: Arc<Exercise>,
    phase_index: usize,
    time_left: u32,
    elapsed: u32,
    running: bool,
    completed: bool,
    /// Whether the current phase entry has been announced
    announced: bool,
    view: PhaseView,
    label: String,
    pending: Option<TickHandle>,
    announcer: A,
    scheduler: S,
}

impl<A: Announcer, S: Scheduler> SessionTimer<A, S> {
    /// Create a timer for `exercise`, in the idle state.
    pub fn new(exercise: Arc<Exercise>, announcer: A, scheduler: S) -> Self {
        let time_left = exercise.phase(0).duration_seconds;
        Self {
            exercise,
            phase_index: 0,
            time_left,
            elapsed: 0,
            running: false,
            completed: false,
            announced: false,
            view: PhaseView::Idle,
            label: READY_LABEL.to_string(),
            pending: None,
            announcer,
            scheduler,
        }
    }

    /// Switch to another exercise. Any countdown stops and the state resets.
    pub fn select(&mut self, exercise: Arc<Exercise>) {
        self.cancel_pending();
        self.announcer.cancel();
        tracing::debug!(exercise = exercise.id(), "exercise selected");
        self.exercise = exercise;
        self.restore();
    }

    /// Start or resume the session.
    ///
    /// Does nothing while running. After the budget is used up this starts a
    /// fresh session.
    pub fn start(&mut self) {
        if self.running {
            return;
        }

        if self.elapsed >= self.exercise.total_duration_seconds() {
            self.cancel_pending();
            self.restore();
        }

        if self.time_left == 0 && self.phase_index == 0 && self.elapsed == 0 {
            self.time_left = self.exercise.phase(0).duration_seconds;
        }

        tracing::debug!(
            exercise = self.exercise.id(),
            elapsed = self.elapsed,
            "session started"
        );
        self.running = true;
        self.completed = false;
        self.settle();
    }

    /// Pause the session. Idempotent.
    pub fn pause(&mut self) {
        if !self.running {
            return;
        }

        self.running = false;
        self.cancel_pending();
        tracing::debug!(elapsed = self.elapsed, "session paused");

        if self.elapsed == 0 {
            self.label = READY_LABEL.to_string();
        } else if self.elapsed < self.exercise.total_duration_seconds() {
            self.label = PAUSED_LABEL.to_string();
            self.say(PAUSED_LABEL);
        }
    }

    /// Return to the start of the current exercise.
    pub fn reset(&mut self) {
        self.cancel_pending();
        self.announcer.cancel();
        self.restore();
        tracing::debug!(exercise = self.exercise.id(), "session reset");
        self.say(RESET_ANNOUNCEMENT);
    }

    /// Count one second. Only has an effect while running.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.running {
            return TickOutcome::Ignored;
        }

        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }

        if self.time_left > 0 {
            self.time_left -= 1;
            self.elapsed += 1;
        }

        self.settle();

        if self.completed {
            TickOutcome::Completed
        } else {
            TickOutcome::Counted
        }
    }

    /// Deliver a scheduled tick. Handles other than the pending one are
    /// stale and ignored.
    pub fn fire(&mut self, handle: TickHandle) -> TickOutcome {
        if self.pending != Some(handle) {
            tracing::trace!(handle = handle.id(), "ignoring stale tick");
            return TickOutcome::Ignored;
        }
        self.tick()
    }

    /// Stop scheduling and silence the voice guide.
    pub fn shutdown(&mut self) {
        self.running = false;
        self.cancel_pending();
        self.announcer.cancel();
    }

    /// Current state for rendering.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            exercise_id: self.exercise.id().to_string(),
            phase_view: self.view,
            display_label: self.label.clone(),
            phase_index: self.phase_index,
            time_left_in_phase: self.time_left,
            total_elapsed_seconds: self.elapsed,
            total_duration_seconds: self.exercise.total_duration_seconds(),
            running: self.running,
            status: self.status(),
        }
    }

    /// Lifecycle state.
    #[must_use]
    pub const fn status(&self) -> SessionStatus {
        if self.running {
            SessionStatus::Running
        } else if self.completed {
            SessionStatus::Complete
        } else if self.elapsed == 0 {
            SessionStatus::Idle
        } else {
            SessionStatus::Paused
        }
    }

    /// The selected exercise.
    #[must_use]
    pub fn exercise(&self) -> &Arc<Exercise> {
        &self.exercise
    }

    /// Whether ticks are being scheduled.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Seconds counted so far.
    #[must_use]
    pub const fn elapsed_seconds(&self) -> u32 {
        self.elapsed
    }

    /// The outstanding tick, if any.
    #[must_use]
    pub const fn pending_tick(&self) -> Option<TickHandle> {
        self.pending
    }

    /// The voice guide.
    pub fn announcer(&self) -> &A {
        &self.announcer
    }

    /// The voice guide, mutably (e.g. to toggle it).
    pub fn announcer_mut(&mut self) -> &mut A {
        &mut self.announcer
    }

    /// The scheduler.
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// The scheduler, mutably (e.g. to poll for due ticks).
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Run phase processing until a tick is scheduled or the session ends.
    ///
    /// A phase that has run out hands over to the next one without consuming
    /// a second.
    fn settle(&mut self) {
        loop {
            let phase = self.exercise.phase(self.phase_index);

            // Resuming on an entry second stays silent
            if self.time_left == phase.duration_seconds && !self.announced {
                self.announced = true;
                self.say(phase.name.label());
            }

            self.view = phase.name.into();
            self.label = format!("{} ({}s)", phase.name, self.time_left);

            if self.time_left > 0 {
                self.pending = Some(self.scheduler.schedule(TICK_INTERVAL));
                return;
            }

            if self.elapsed >= self.exercise.total_duration_seconds() {
                self.finish();
                return;
            }

            self.phase_index = (self.phase_index + 1) % self.exercise.phase_count();
            self.time_left = self.exercise.phase(self.phase_index).duration_seconds;
            self.announced = false;
        }
    }

    fn finish(&mut self) {
        self.running = false;
        self.completed = true;
        self.pending = None;
        self.view = PhaseView::Complete;
        self.label = COMPLETE_LABEL.to_string();
        tracing::info!(
            exercise = self.exercise.id(),
            elapsed = self.elapsed,
            "session complete"
        );
        self.say(COMPLETE_LABEL);
    }

    fn restore(&mut self) {
        self.phase_index = 0;
        self.time_left = self.exercise.phase(0).duration_seconds;
        self.elapsed = 0;
        self.running = false;
        self.completed = false;
        self.announced = false;
        self.view = PhaseView::Idle;
        self.label = READY_LABEL.to_string();
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
    }

    fn say(&mut self, text: &str) {
        if let Err(e) = self.announcer.announce(text) {
            tracing::debug!(error = %e, text, "announcement failed");
        }
    }
}

impl<A: Announcer, S: Scheduler> Drop for SessionTimer<A, S> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
