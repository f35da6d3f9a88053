//! Clock- and settings-backed eligibility evaluation.

use crate::candidates::RecencyOrdered;
use crate::eligibility;
use crate::errors::ConfigError;
use crate::settings::SettingsSource;
use crate::time::{Clock, SystemClock};
use crate::verification::Verification;
use chrono::{DateTime, Utc};

/// Evaluates verification windows against a clock and a settings store.
///
/// Settings are read on every call rather than captured at construction, so
/// a store that changes underneath the evaluator is observed immediately.
/// Each call samples the clock at most once.
#[derive(Debug, Clone)]
pub struct EligibilityEvaluator<C, S> {
    clock: C,
    settings: S,
}

impl<S: SettingsSource> EligibilityEvaluator<SystemClock, S> {
    /// Evaluator reading the operating system clock.
    pub fn system(settings: S) -> Self {
        Self::new(SystemClock::new(), settings)
    }
}

impl<C: Clock, S: SettingsSource> EligibilityEvaluator<C, S> {
    pub fn new(clock: C, settings: S) -> Self {
        Self { clock, settings }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn settings(&self) -> &S {
        &self.settings
    }

    /// Whether `expiration` falls within the configured expiring-soon window.
    pub fn is_expiring_soon(&self, expiration: Option<DateTime<Utc>>) -> Result<bool, ConfigError> {
        let Some(expiration) = expiration else {
            return Ok(false);
        };
        let window_days = self.settings.expiring_soon_window()?;
        let now = self.clock.now();
        let expiring = eligibility::is_expiring_soon_at(now, Some(expiration), window_days);
        tracing::debug!(
            %expiration,
            window_days,
            days_until_expiration = eligibility::days_until_expiration(now, expiration),
            expiring,
            "Evaluated expiring-soon window"
        );
        Ok(expiring)
    }

    /// Oldest creation time still inside the configured validity window.
    pub fn earliest_allowed_verification_date(&self) -> Result<DateTime<Utc>, ConfigError> {
        let days_good_for = self.settings.days_good_for()?;
        let earliest =
            eligibility::earliest_allowed_verification_date_at(self.clock.now(), days_good_for);
        tracing::debug!(days_good_for, %earliest, "Computed earliest allowed verification date");
        Ok(earliest)
    }

    /// The candidate in effect at `deadline`, most recent first.
    pub fn verification_for_instant<'a, V: Verification>(
        &self,
        deadline: Option<DateTime<Utc>>,
        candidates: &'a RecencyOrdered<V>,
    ) -> Option<&'a V> {
        let found = eligibility::verification_for_instant(deadline, candidates);
        tracing::debug!(
            deadline = ?deadline,
            candidates = candidates.len(),
            found = found.is_some(),
            "Resolved verification for instant"
        );
        found
    }
}
