//! Controllable clock for tests

use chrono::{DateTime, TimeDelta, Utc};
use parking_lot::Mutex;
use std::sync::Arc;
use verity_eligibility::time::shift_days;
use verity_eligibility::Clock;

/// Clock that only moves when told to.
///
/// Clones share the same instant, so a test can keep a handle and advance
/// the clock held by an evaluator.
#[derive(Debug, Clone)]
pub struct FixedClock {
    current: Arc<Mutex<DateTime<Utc>>>,
}

impl FixedClock {
    /// Create a clock frozen at `instant`
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self {
            current: Arc::new(Mutex::new(instant)),
        }
    }

    /// Create a clock frozen at the Unix epoch
    pub fn at_epoch() -> Self {
        Self::at(DateTime::<Utc>::UNIX_EPOCH)
    }

    /// Move the clock forward (or backward, for negative deltas),
    /// clamped to the representable range
    pub fn advance(&self, delta: TimeDelta) {
        let mut current = self.current.lock();
        *current = current.checked_add_signed(delta).unwrap_or(if delta < TimeDelta::zero() {
            DateTime::<Utc>::MIN_UTC
        } else {
            DateTime::<Utc>::MAX_UTC
        });
    }

    /// Move the clock forward by whole days
    pub fn advance_days(&self, days: i64) {
        let mut current = self.current.lock();
        *current = shift_days(*current, days);
    }

    /// Set the absolute instant
    pub fn set(&self, instant: DateTime<Utc>) {
        *self.current.lock() = instant;
    }
}

impl Default for FixedClock {
    fn default() -> Self {
        Self::at_epoch()
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.current.lock()
    }
}
