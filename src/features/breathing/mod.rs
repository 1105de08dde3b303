//! Guided breathing sessions.
//!
//! - Exercise definitions and the built-in catalog
//! - The phase-stepping session timer
//! - Voice guide and tick scheduler backends
//! - Headless simulation
//! - Practice history and reports

pub mod announcer;
pub mod catalog;
pub mod exercise;
pub mod history;
pub mod report;
pub mod scheduler;
pub mod simulation;
pub mod timer;

pub use announcer::{SilentAnnouncer, SpeechAnnouncer, TranscriptAnnouncer};
pub use catalog::Catalog;
pub use exercise::{Exercise, Phase, PhaseName};
pub use history::{HistoryStorage, Outcome, PracticeSession};
pub use report::{PracticeReport, ReportPeriod};
pub use scheduler::{DeadlineScheduler, ManualScheduler};
pub use simulation::{Simulation, TraceStep};
pub use timer::{PhaseView, SessionStatus, SessionTimer, Snapshot, TickOutcome, TICK_INTERVAL};
