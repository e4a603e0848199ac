use std::time::{Duration, Instant};

/// Periodic tick schedule owned by the engine.
///
/// A timer's period never changes. Speeding up the game means dropping this
/// handle and scheduling a new one, which also makes a stale handle easy to
/// spot by its `id`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct TickTimer {
    id: u64,
    interval: Duration,
    next_due: Instant,
}

impl TickTimer {
    /// Arms a timer whose first tick fires one `interval` after `now`.
    #[must_use]
    pub fn schedule(id: u64, now: Instant, interval: Duration) -> Self {
        debug_assert!(!interval.is_zero());
        Self {
            id,
            interval,
            next_due: now + interval,
        }
    }

    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Instant of the next tick.
    #[must_use]
    pub fn deadline(&self) -> Instant {
        self.next_due
    }

    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_due
    }

    /// Consumes the pending tick if it is due and re-arms for the next one.
    ///
    /// When the host has fallen more than a full interval behind, the timer
    /// re-arms from `now` instead of replaying every missed tick.
    pub fn fire(&mut self, now: Instant) -> bool {
        if !self.is_due(now) {
            return false;
        }

        self.next_due += self.interval;
        if self.next_due <= now {
            self.next_due = now + self.interval;
        }

        true
    }
}
