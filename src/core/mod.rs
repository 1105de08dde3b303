//! Core abstractions for breathwork.
//!
//! This module provides the capabilities injected into the session timer and
//! shared date helpers.

mod datetime;
mod traits;

pub use datetime::{
    format_clock, format_seconds, local_day_range, local_midnight_utc, local_today,
    trailing_days,
};
pub use traits::{Announcer, Scheduler, TickHandle};

#[cfg(test)]
pub use traits::MockAnnouncer;
