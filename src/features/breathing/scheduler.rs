//! Tick schedulers.
//!
//! Both schedulers hold at most one outstanding tick. Scheduling a new tick
//! replaces the previous one.

use std::time::{Duration, Instant};

use crate::core::{Scheduler, TickHandle};

/// Wall-clock scheduler polled by the TUI event loop.
#[derive(Debug, Default)]
pub struct DeadlineScheduler {
    next_id: u64,
    pending: Option<(TickHandle, Instant)>,
}

impl DeadlineScheduler {
    /// Create an idle scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule relative to an explicit `now`.
    pub fn schedule_at(&mut self, now: Instant, delay: Duration) -> TickHandle {
        self.next_id += 1;
        let handle = TickHandle::new(self.next_id);
        self.pending = Some((handle, now + delay));
        handle
    }

    /// Take the pending tick if its deadline has passed.
    pub fn due(&mut self, now: Instant) -> Option<TickHandle> {
        match self.pending {
            Some((handle, deadline)) if deadline <= now => {
                self.pending = None;
                Some(handle)
            }
            _ => None,
        }
    }

    /// Time left before the pending tick is due, if one is pending.
    #[must_use]
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.pending
            .map(|(_, deadline)| deadline.saturating_duration_since(now))
    }

    /// Whether a tick is outstanding.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl Scheduler for DeadlineScheduler {
    fn schedule(&mut self, delay: Duration) -> TickHandle {
        self.schedule_at(Instant::now(), delay)
    }

    fn cancel(&mut self, handle: TickHandle) {
        if matches!(self.pending, Some((h, _)) if h == handle) {
            self.pending = None;
        }
    }
}

/// Scheduler advanced by hand, for headless runs and tests.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: u64,
    pending: Option<TickHandle>,
    scheduled: usize,
    cancelled: usize,
}

impl ManualScheduler {
    /// Create an idle scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver the pending tick, as if one second had passed.
    pub fn advance(&mut self) -> Option<TickHandle> {
        self.pending.take()
    }

    /// The outstanding tick, without delivering it.
    #[must_use]
    pub const fn pending(&self) -> Option<TickHandle> {
        self.pending
    }

    /// How many ticks have been scheduled so far.
    #[must_use]
    pub const fn scheduled_count(&self) -> usize {
        self.scheduled
    }

    /// How many outstanding ticks were withdrawn.
    #[must_use]
    pub const fn cancelled_count(&self) -> usize {
        self.cancelled
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, _delay: Duration) -> TickHandle {
        self.next_id += 1;
        let handle = TickHandle::new(self.next_id);
        self.pending = Some(handle);
        self.scheduled += 1;
        handle
    }

    fn cancel(&mut self, handle: TickHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
            self.cancelled += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deadline_due_only_after_deadline() {
        let mut scheduler = DeadlineScheduler::new();
        let start = Instant::now();
        let handle = scheduler.schedule_at(start, Duration::from_secs(1));

        assert!(scheduler.due(start).is_none());
        assert!(scheduler.due(start + Duration::from_millis(999)).is_none());
        assert_eq!(scheduler.due(start + Duration::from_secs(1)), Some(handle));
        // Delivered once only
        assert!(scheduler.due(start + Duration::from_secs(2)).is_none());
        assert!(!scheduler.is_pending());
    }

    #[test]
    fn test_deadline_cancel() {
        let mut scheduler = DeadlineScheduler::new();
        let start = Instant::now();
        let handle = scheduler.schedule_at(start, Duration::from_secs(1));

        scheduler.cancel(TickHandle::new(999));
        assert!(scheduler.is_pending());

        scheduler.cancel(handle);
        assert!(!scheduler.is_pending());
        assert!(scheduler.due(start + Duration::from_secs(5)).is_none());
    }

    #[test]
    fn test_deadline_reschedule_replaces() {
        let mut scheduler = DeadlineScheduler::new();
        let start = Instant::now();
        let first = scheduler.schedule_at(start, Duration::from_secs(1));
        let second = scheduler.schedule_at(start, Duration::from_secs(2));
        assert_ne!(first, second);

        assert!(scheduler.due(start + Duration::from_secs(1)).is_none());
        assert_eq!(scheduler.due(start + Duration::from_secs(2)), Some(second));
    }

    #[test]
    fn test_time_until_due() {
        let mut scheduler = DeadlineScheduler::new();
        let start = Instant::now();
        assert!(scheduler.time_until_due(start).is_none());

        scheduler.schedule_at(start, Duration::from_secs(1));
        assert_eq!(
            scheduler.time_until_due(start + Duration::from_millis(400)),
            Some(Duration::from_millis(600))
        );
        assert_eq!(
            scheduler.time_until_due(start + Duration::from_secs(3)),
            Some(Duration::ZERO)
        );
    }

    #[test]
    fn test_manual_advance_and_counts() {
        let mut scheduler = ManualScheduler::new();
        assert!(scheduler.advance().is_none());

        let handle = scheduler.schedule(Duration::from_secs(1));
        assert_eq!(scheduler.pending(), Some(handle));
        assert_eq!(scheduler.advance(), Some(handle));
        assert!(scheduler.pending().is_none());

        let handle = scheduler.schedule(Duration::from_secs(1));
        scheduler.cancel(handle);
        assert_eq!(scheduler.scheduled_count(), 2);
        assert_eq!(scheduler.cancelled_count(), 1);
    }
}
