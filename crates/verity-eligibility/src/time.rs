//! Clock capability and day arithmetic.
//!
//! Every operation that needs "now" receives it from a [`Clock`]. Production
//! code uses [`SystemClock`]; tests inject a fixed or simulated clock (see
//! `verity-testkit`). `SystemClock` is the only place in this crate that reads
//! the wall clock.

use chrono::{DateTime, TimeDelta, Utc};
use std::sync::Arc;

/// Source of the current instant, always in UTC.
pub trait Clock: Send + Sync {
    /// Current instant. Sampled once per operation.
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Create a new system clock
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    #[allow(clippy::disallowed_methods)]
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

impl<T: Clock + ?Sized> Clock for Arc<T> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

impl<T: Clock + ?Sized> Clock for Box<T> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

/// Whole days in `delta`, rounded toward negative infinity.
///
/// `TimeDelta::num_days` truncates toward zero, which would count an
/// expiration twelve hours in the past as day `0`. Flooring counts it as `-1`.
pub fn whole_days_floor(delta: TimeDelta) -> i64 {
    let days = delta.num_days();
    match TimeDelta::try_days(days) {
        Some(whole) if delta < whole => days - 1,
        _ => days,
    }
}

/// `instant` moved by `days` calendar days, clamped to the representable range.
pub fn shift_days(instant: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    TimeDelta::try_days(days)
        .and_then(|delta| instant.checked_add_signed(delta))
        .unwrap_or(if days < 0 {
            DateTime::<Utc>::MIN_UTC
        } else {
            DateTime::<Utc>::MAX_UTC
        })
}
