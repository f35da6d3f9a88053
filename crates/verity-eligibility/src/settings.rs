//! Settings capability.
//!
//! The window lengths come from an external settings store and are read at
//! call time. Store failures (a missing key, an unparsable value) are returned
//! to the caller unchanged.

use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::env::VarError;
use std::fmt;
use std::sync::Arc;

/// Day-valued settings consumed by the eligibility operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SettingKey {
    /// Length of the validity window of a verification, in days.
    DaysGoodFor,
    /// Lead time before expiration that counts as "expiring soon", in days.
    ExpiringSoonWindow,
}

impl SettingKey {
    /// All keys, in declaration order.
    pub const ALL: [SettingKey; 2] = [SettingKey::DaysGoodFor, SettingKey::ExpiringSoonWindow];

    /// Key name in the settings store.
    pub fn store_key(self) -> &'static str {
        match self {
            SettingKey::DaysGoodFor => "DAYS_GOOD_FOR",
            SettingKey::ExpiringSoonWindow => "EXPIRING_SOON_WINDOW",
        }
    }

    /// Environment variable consulted by [`EnvSettings`].
    pub fn env_var(self) -> &'static str {
        match self {
            SettingKey::DaysGoodFor => "VERITY_DAYS_GOOD_FOR",
            SettingKey::ExpiringSoonWindow => "VERITY_EXPIRING_SOON_WINDOW",
        }
    }

    /// Field name in the `[verify_student]` config table.
    pub fn field_name(self) -> &'static str {
        match self {
            SettingKey::DaysGoodFor => "days_good_for",
            SettingKey::ExpiringSoonWindow => "expiring_soon_window",
        }
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.store_key())
    }
}

/// A store of day-valued settings.
pub trait SettingsSource: Send + Sync {
    /// Current value of `key`, in days.
    fn day_setting(&self, key: SettingKey) -> Result<i64, ConfigError>;

    /// Validity window length in days.
    fn days_good_for(&self) -> Result<i64, ConfigError> {
        self.day_setting(SettingKey::DaysGoodFor)
    }

    /// Expiring-soon lead window in days.
    fn expiring_soon_window(&self) -> Result<i64, ConfigError> {
        self.day_setting(SettingKey::ExpiringSoonWindow)
    }
}

impl<T: SettingsSource + ?Sized> SettingsSource for &T {
    fn day_setting(&self, key: SettingKey) -> Result<i64, ConfigError> {
        (**self).day_setting(key)
    }
}

impl<T: SettingsSource + ?Sized> SettingsSource for Arc<T> {
    fn day_setting(&self, key: SettingKey) -> Result<i64, ConfigError> {
        (**self).day_setting(key)
    }
}

/// Settings read from the process environment on every access.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSettings;

impl EnvSettings {
    /// Create a new environment-backed settings store
    pub fn new() -> Self {
        Self
    }
}

impl SettingsSource for EnvSettings {
    fn day_setting(&self, key: SettingKey) -> Result<i64, ConfigError> {
        env_days(key)?.ok_or(ConfigError::MissingSetting { key })
    }
}

/// Day count from the environment variable for `key`.
///
/// `Ok(None)` when the variable is unset. A variable that is set but not
/// valid unicode or not an integer is an invalid setting.
pub fn env_days(key: SettingKey) -> Result<Option<i64>, ConfigError> {
    match std::env::var(key.env_var()) {
        Ok(raw) => parse_days(key, &raw).map(Some),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(raw)) => Err(ConfigError::invalid(
            key,
            raw.to_string_lossy(),
            "value is not valid unicode",
        )),
    }
}

/// Parse a day count as stored in a string-valued settings store.
pub fn parse_days(key: SettingKey, raw: &str) -> Result<i64, ConfigError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|e| ConfigError::invalid(key, raw, e.to_string()))
}
