//! Capabilities the session timer consumes.
//!
//! The timer never talks to a clock or a speech engine directly. Both are
//! injected through these traits so the interactive TUI, the headless
//! simulator and the tests can drive the exact same state machine.

use std::time::Duration;

use crate::error::BreathworkError;

/// Something that can speak short guidance phrases ("Inhale", "Paused").
///
/// Only one utterance is ever active: a new announcement replaces whatever is
/// still being spoken.
#[cfg_attr(test, mockall::automock)]
pub trait Announcer {
    /// Speak `text`, interrupting any utterance in flight.
    ///
    /// # Errors
    ///
    /// Returns an error if the speech backend is unavailable. Callers are
    /// expected to ignore it.
    fn announce(&mut self, text: &str) -> Result<(), BreathworkError>;

    /// Silence the current utterance, if any.
    fn cancel(&mut self);
}

/// Opaque identifier for one scheduled tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickHandle(u64);

impl TickHandle {
    /// Wrap a raw sequence number.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// The raw sequence number.
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }
}

/// A one-shot timing facility.
///
/// The timer schedules exactly one tick at a time and reschedules after each
/// delivery; there is no periodic primitive.
pub trait Scheduler {
    /// Arrange for a single tick to be delivered after `delay`.
    fn schedule(&mut self, delay: Duration) -> TickHandle;

    /// Withdraw a tick. Cancelling an already delivered or unknown handle is a
    /// no-op.
    fn cancel(&mut self, handle: TickHandle);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_handle_identity() {
        let a = TickHandle::new(1);
        let b = TickHandle::new(1);
        let c = TickHandle::new(2);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(c.id(), 2);
    }

    #[test]
    fn test_mock_announcer_expectations() {
        let mut mock = MockAnnouncer::new();
        mock.expect_announce()
            .withf(|text| text == "Inhale")
            .times(1)
            .returning(|_| Ok(()));
        mock.expect_cancel().times(1).return_const(());

        assert!(mock.announce("Inhale").is_ok());
        mock.cancel();
    }
}
