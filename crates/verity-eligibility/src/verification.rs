//! Verification capability.
//!
//! Verification records are owned by the caller's persistence layer. This
//! crate only needs their creation time, their expiration time and whether
//! they were in effect at a given instant.

use crate::time::shift_days;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// A verification with a validity window.
pub trait Verification {
    /// When the verification was created.
    fn created_at(&self) -> DateTime<Utc>;

    /// When the verification stops being valid, if an expiration is set.
    fn expires_at(&self) -> Option<DateTime<Utc>>;

    /// Whether the verification was in effect at `instant`.
    ///
    /// Defaults to `created_at <= instant < expires_at`. A verification with
    /// no expiration has no validity window and is never active.
    fn is_active_at(&self, instant: DateTime<Utc>) -> bool {
        match self.expires_at() {
            Some(expires_at) => self.created_at() <= instant && instant < expires_at,
            None => false,
        }
    }
}

impl<V: Verification + ?Sized> Verification for &V {
    fn created_at(&self) -> DateTime<Utc> {
        (**self).created_at()
    }

    fn expires_at(&self) -> Option<DateTime<Utc>> {
        (**self).expires_at()
    }

    fn is_active_at(&self, instant: DateTime<Utc>) -> bool {
        (**self).is_active_at(instant)
    }
}

impl<V: Verification + ?Sized> Verification for Arc<V> {
    fn created_at(&self) -> DateTime<Utc> {
        (**self).created_at()
    }

    fn expires_at(&self) -> Option<DateTime<Utc>> {
        (**self).expires_at()
    }

    fn is_active_at(&self, instant: DateTime<Utc>) -> bool {
        (**self).is_active_at(instant)
    }
}

/// Plain verification record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationRecord {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl VerificationRecord {
    pub fn new(id: Uuid, created_at: DateTime<Utc>, expires_at: Option<DateTime<Utc>>) -> Self {
        Self {
            id,
            created_at,
            expires_at,
        }
    }

    /// Record created at `created_at` that stays valid for `days_good_for` days.
    pub fn issued(id: Uuid, created_at: DateTime<Utc>, days_good_for: i64) -> Self {
        Self::new(id, created_at, Some(shift_days(created_at, days_good_for)))
    }

    /// Check if this record has expired at the given time
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at {
            Some(expires_at) => now >= expires_at,
            None => false,
        }
    }
}

impl Verification for VerificationRecord {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }
}
