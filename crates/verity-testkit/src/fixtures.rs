//! Verification fixtures on a day grid

use chrono::{DateTime, TimeDelta, Utc};
use uuid::Uuid;
use verity_eligibility::VerificationRecord;

/// Unix timestamp of 2024-01-01T00:00:00Z.
const REFERENCE_TIMESTAMP: i64 = 1_704_067_200;

/// Day zero of the fixture grid: 2024-01-01T00:00:00Z.
pub fn reference_instant() -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH + TimeDelta::seconds(REFERENCE_TIMESTAMP)
}

/// `n` days after [`reference_instant`].
pub fn day(n: i64) -> DateTime<Utc> {
    reference_instant() + TimeDelta::days(n)
}

/// Builder for [`VerificationRecord`] fixtures.
#[derive(Debug, Clone)]
pub struct VerificationBuilder {
    id: Uuid,
    created_at: DateTime<Utc>,
    expires_at: Option<DateTime<Utc>>,
}

impl VerificationBuilder {
    /// Record with deterministic id `id`, created on day 0, no expiration
    pub fn new(id: u128) -> Self {
        Self {
            id: Uuid::from_u128(id),
            created_at: reference_instant(),
            expires_at: None,
        }
    }

    pub fn created_on(mut self, n: i64) -> Self {
        self.created_at = day(n);
        self
    }

    pub fn expires_on(mut self, n: i64) -> Self {
        self.expires_at = Some(day(n));
        self
    }

    pub fn created_at(mut self, instant: DateTime<Utc>) -> Self {
        self.created_at = instant;
        self
    }

    pub fn expires_at(mut self, instant: DateTime<Utc>) -> Self {
        self.expires_at = Some(instant);
        self
    }

    pub fn build(self) -> VerificationRecord {
        VerificationRecord::new(self.id, self.created_at, self.expires_at)
    }
}
