//! Headless session runs.
//!
//! Drives a [`SessionTimer`] with a [`ManualScheduler`] and a
//! [`TranscriptAnnouncer`], recording what a listener would see and hear
//! after every tick.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::announcer::TranscriptAnnouncer;
use super::exercise::Exercise;
use super::scheduler::ManualScheduler;
use super::timer::{SessionTimer, Snapshot, TickOutcome};

/// State after one tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceStep {
    /// Ticks delivered so far; 0 is the moment `start` was pressed
    pub tick: u32,
    /// Session state after the tick
    pub snapshot: Snapshot,
    /// Announcements made during the tick
    pub announcements: Vec<String>,
}

/// A recorded headless run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Simulation {
    /// Exercise id
    pub exercise_id: String,
    /// Exercise title
    pub title: String,
    /// Whether the session finished within the run
    pub completed: bool,
    /// One step per tick, starting with the start step
    pub steps: Vec<TraceStep>,
}

impl Simulation {
    /// Start a session and deliver ticks until it completes, or until
    /// `max_ticks` ticks have been delivered.
    #[must_use]
    pub fn run(exercise: Arc<Exercise>, max_ticks: Option<u32>) -> Self {
        let exercise_id = exercise.id().to_string();
        let title = exercise.title().to_string();
        let mut timer =
            SessionTimer::new(exercise, TranscriptAnnouncer::new(), ManualScheduler::new());

        timer.start();
        let mut steps = vec![TraceStep {
            tick: 0,
            snapshot: timer.snapshot(),
            announcements: timer.announcer_mut().take(),
        }];

        let mut completed = false;
        let mut tick = 0;
        while max_ticks.map_or(true, |max| tick < max) {
            let Some(handle) = timer.scheduler_mut().advance() else {
                break;
            };
            let outcome = timer.fire(handle);
            if outcome == TickOutcome::Ignored {
                break;
            }

            tick += 1;
            steps.push(TraceStep {
                tick,
                snapshot: timer.snapshot(),
                announcements: timer.announcer_mut().take(),
            });

            if outcome == TickOutcome::Completed {
                completed = true;
                break;
            }
        }

        tracing::debug!(exercise = %exercise_id, ticks = tick, completed, "simulation finished");

        Self {
            exercise_id,
            title,
            completed,
            steps,
        }
    }

    /// Ticks delivered.
    #[must_use]
    pub fn ticks(&self) -> u32 {
        self.steps.last().map_or(0, |s| s.tick)
    }

    /// Every announcement in order.
    #[must_use]
    pub fn announcements(&self) -> Vec<&str> {
        self.steps
            .iter()
            .flat_map(|s| s.announcements.iter().map(String::as_str))
            .collect()
    }

    /// Final session state.
    #[must_use]
    pub fn last(&self) -> Option<&Snapshot> {
        self.steps.last().map(|s| &s.snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::breathing::{Catalog, PhaseView, SessionStatus};

    fn exercise(id: &str) -> Arc<Exercise> {
        Catalog::builtin().get(id).unwrap()
    }

    #[test]
    fn test_box_runs_to_completion() {
        let sim = Simulation::run(exercise("box-breathing"), None);

        assert!(sim.completed);
        assert_eq!(sim.ticks(), 120);
        let last = sim.last().unwrap();
        assert_eq!(last.status, SessionStatus::Complete);
        assert_eq!(last.phase_view, PhaseView::Complete);
        assert_eq!(last.display_label, "Session Complete!");
    }

    #[test]
    fn test_478_overruns_by_one_tick() {
        let sim = Simulation::run(exercise("478-breathing"), None);
        assert!(sim.completed);
        assert_eq!(sim.ticks(), 61);
    }

    #[test]
    fn test_tick_limit() {
        let sim = Simulation::run(exercise("box-breathing"), Some(5));

        assert!(!sim.completed);
        assert_eq!(sim.ticks(), 5);
        assert_eq!(sim.steps.len(), 6);
        let last = sim.last().unwrap();
        assert_eq!(last.phase_index, 1);
        assert_eq!(last.time_left_in_phase, 3);
        assert_eq!(last.status, SessionStatus::Running);
    }

    #[test]
    fn test_announcements_follow_phases() {
        let sim = Simulation::run(exercise("box-breathing"), Some(16));

        assert_eq!(
            sim.announcements(),
            vec!["Inhale", "Hold", "Exhale", "Pause", "Inhale"]
        );
        assert_eq!(sim.steps[0].announcements, vec!["Inhale".to_string()]);
        assert_eq!(sim.steps[0].snapshot.display_label, "Inhale (4s)");
    }

    #[test]
    fn test_zero_ticks_records_start_only() {
        let sim = Simulation::run(exercise("mindful-breathing"), Some(0));
        assert_eq!(sim.ticks(), 0);
        assert_eq!(sim.steps.len(), 1);
    }
}
