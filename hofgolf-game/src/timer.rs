//! Per-round countdown for timed games.
//!
//! The timer is advisory: it latches a `timed_out` flag exactly once per
//! round and otherwise takes no action. The session consumes the flag on the
//! next navigation and resets the timer on every round transition. All
//! wall-clock values are passed in as millisecond timestamps so the engine
//! stays deterministic under test.

use crate::constants::ROUND_SECONDS;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoundTimer {
    started_at_ms: u64,
    timed_out: bool,
}

impl RoundTimer {
    /// A timer whose round began at `now_ms`.
    #[must_use]
    pub const fn started_at(now_ms: u64) -> Self {
        Self {
            started_at_ms: now_ms,
            timed_out: false,
        }
    }

    /// Reset the round baseline and clear any latched timeout.
    pub const fn restart(&mut self, now_ms: u64) {
        *self = Self::started_at(now_ms);
    }

    /// Whole seconds left on the round clock.
    #[must_use]
    pub const fn remaining_secs(&self, now_ms: u64) -> u64 {
        let elapsed = now_ms.saturating_sub(self.started_at_ms) / 1000;
        ROUND_SECONDS.saturating_sub(elapsed)
    }

    /// Latch the timeout flag once the clock reaches zero.
    /// Returns true only on the tick that latches it.
    pub const fn tick(&mut self, now_ms: u64) -> bool {
        if self.timed_out || self.remaining_secs(now_ms) > 0 {
            return false;
        }
        self.timed_out = true;
        true
    }

    #[must_use]
    pub const fn timed_out(&self) -> bool {
        self.timed_out
    }

    /// Read and clear the latched flag; called when a navigation completes.
    pub const fn consume_timeout(&mut self) -> bool {
        let expired = self.timed_out;
        self.timed_out = false;
        expired
    }
}
