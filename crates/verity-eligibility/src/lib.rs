//! Verity Eligibility
//!
//! Date-based eligibility windows for identity verification records:
//! - whether a verification is close to expiring
//! - the oldest creation date still considered valid
//! - which verification was in effect at a given instant
//!
//! The operations are pure. "Now" comes from an injected [`Clock`], window
//! lengths from a [`SettingsSource`], and candidate lists are
//! [`RecencyOrdered`] so the most recently created match always wins.
//! [`EligibilityEvaluator`] bundles a clock and a settings store for callers
//! that do not want to thread them through by hand.

#![allow(missing_docs)]

pub mod candidates;
pub mod config;
pub mod eligibility;
pub mod errors;
pub mod evaluator;
pub mod settings;
pub mod time;
pub mod verification;

pub use candidates::RecencyOrdered;
pub use config::{ConfigValidator, VerifyStudentConfig, MAX_WINDOW_DAYS};
pub use eligibility::{
    days_until_expiration, earliest_allowed_verification_date_at, is_expiring_soon_at,
    verification_for_instant,
};
pub use errors::{ConfigError, EligibilityError, OrderingError, Result};
pub use evaluator::EligibilityEvaluator;
pub use settings::{EnvSettings, SettingKey, SettingsSource};
pub use time::{Clock, SystemClock};
pub use verification::{Verification, VerificationRecord};
