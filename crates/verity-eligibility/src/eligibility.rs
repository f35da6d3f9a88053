//! Verification window operations.
//!
//! Pure functions over an explicit `now` and explicit window lengths. The
//! [`EligibilityEvaluator`](crate::EligibilityEvaluator) wraps them with a
//! clock and a settings store.

use crate::candidates::RecencyOrdered;
use crate::time::{shift_days, whole_days_floor};
use crate::verification::Verification;
use chrono::{DateTime, Utc};

/// Whether `expiration` is within `window_days` of `now`.
///
/// The remaining time is counted in whole days, rounded down. A verification
/// with no expiration is never expiring soon. One that has already expired
/// has a negative day count and therefore reports `true` for any
/// non-negative window.
pub fn is_expiring_soon_at(
    now: DateTime<Utc>,
    expiration: Option<DateTime<Utc>>,
    window_days: i64,
) -> bool {
    let Some(expiration) = expiration else {
        return false;
    };
    days_until_expiration(now, expiration) <= window_days
}

/// Whole days from `now` until `expiration`, rounded down.
pub fn days_until_expiration(now: DateTime<Utc>, expiration: DateTime<Utc>) -> i64 {
    whole_days_floor(expiration.signed_duration_since(now))
}

/// Oldest creation time still inside a `days_good_for` validity window.
pub fn earliest_allowed_verification_date_at(
    now: DateTime<Utc>,
    days_good_for: i64,
) -> DateTime<Utc> {
    shift_days(now, days_good_for.saturating_neg())
}

/// The candidate in effect at `deadline`.
///
/// Without a deadline the most recently created candidate is returned,
/// whether or not it is active. Otherwise the first candidate active at the
/// deadline wins, which is the most recently created one because of the
/// list's ordering.
pub fn verification_for_instant<V: Verification>(
    deadline: Option<DateTime<Utc>>,
    candidates: &RecencyOrdered<V>,
) -> Option<&V> {
    let Some(deadline) = deadline else {
        return candidates.most_recent();
    };
    candidates.iter().find(|candidate| {
        let active = candidate.is_active_at(deadline);
        tracing::trace!(
            created_at = %candidate.created_at(),
            active,
            "Checked candidate against deadline"
        );
        active
    })
}
