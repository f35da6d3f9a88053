//! Typed configuration for the verification windows.
//!
//! Loaded from a TOML file with a `[verify_student]` table, optionally
//! overridden from the environment, then validated:
//!
//! ```toml
//! [verify_student]
//! days_good_for = 365
//! expiring_soon_window = 28
//! ```

use crate::errors::ConfigError;
use crate::settings::{env_days, SettingKey, SettingsSource};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default validity window in days.
pub const DEFAULT_DAYS_GOOD_FOR: i64 = 365;

/// Default expiring-soon lead window in days.
pub const DEFAULT_EXPIRING_SOON_WINDOW: i64 = 28;

/// Upper bound accepted for either window (100 years).
pub const MAX_WINDOW_DAYS: i64 = 36_500;

/// Window lengths for identity verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifyStudentConfig {
    /// How long a verification stays valid after creation, in days.
    pub days_good_for: i64,
    /// How close to expiration a verification counts as expiring soon, in days.
    pub expiring_soon_window: i64,
}

impl Default for VerifyStudentConfig {
    fn default() -> Self {
        Self {
            days_good_for: DEFAULT_DAYS_GOOD_FOR,
            expiring_soon_window: DEFAULT_EXPIRING_SOON_WINDOW,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    verify_student: VerifyStudentConfig,
}

impl VerifyStudentConfig {
    /// Create a configuration with explicit window lengths
    pub fn new(days_good_for: i64, expiring_soon_window: i64) -> Self {
        Self {
            days_good_for,
            expiring_soon_window,
        }
    }

    /// Parse the `[verify_student]` table out of a TOML document.
    ///
    /// A document without the table, or a table missing either field, falls
    /// back to the defaults for what is absent. The result is not validated.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(content).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })?;
        Ok(file.verify_student)
    }

    /// Load and validate configuration from a TOML file.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let config = Self::from_toml_str(&content)?;
        config.validate()?;
        tracing::debug!(
            path = %path.display(),
            days_good_for = config.days_good_for,
            expiring_soon_window = config.expiring_soon_window,
            "Loaded verification window config"
        );
        Ok(config)
    }

    /// Apply `VERITY_*` environment overrides.
    ///
    /// Unset variables leave the current value in place. A variable that is
    /// set but malformed is an error, and the configuration is left untouched.
    pub fn merge_with_env(&mut self) -> Result<(), ConfigError> {
        let mut merged = *self;
        for key in SettingKey::ALL {
            let days = env_days(key).map_err(|e| {
                tracing::warn!(var = key.env_var(), error = %e, "Malformed environment override");
                e
            })?;
            if let Some(days) = days {
                merged.set(key, days);
            }
        }
        *self = merged;
        Ok(())
    }

    /// Validate both windows against `0..=MAX_WINDOW_DAYS`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut validator = ConfigValidator::new();
        for key in SettingKey::ALL {
            validator.range(key.field_name(), self.get(key), 0, MAX_WINDOW_DAYS);
        }
        validator.result()
    }

    /// Value of `key`.
    pub fn get(&self, key: SettingKey) -> i64 {
        match key {
            SettingKey::DaysGoodFor => self.days_good_for,
            SettingKey::ExpiringSoonWindow => self.expiring_soon_window,
        }
    }

    /// Overwrite the value of `key`.
    pub fn set(&mut self, key: SettingKey, days: i64) {
        match key {
            SettingKey::DaysGoodFor => self.days_good_for = days,
            SettingKey::ExpiringSoonWindow => self.expiring_soon_window = days,
        }
    }
}

impl SettingsSource for VerifyStudentConfig {
    fn day_setting(&self, key: SettingKey) -> Result<i64, ConfigError> {
        Ok(self.get(key))
    }
}

/// Accumulates validation failures across fields.
#[derive(Debug, Default)]
pub struct ConfigValidator {
    errors: Vec<ConfigError>,
}

impl ConfigValidator {
    /// Create a new validator
    pub fn new() -> Self {
        Self::default()
    }

    /// Require `min <= value <= max`.
    pub fn range(&mut self, field: &str, value: i64, min: i64, max: i64) -> &mut Self {
        if value < min || value > max {
            self.errors.push(ConfigError::OutOfRange {
                field: field.to_string(),
                min,
                max,
                actual: value,
            });
        }
        self
    }

    /// First recorded error, if any.
    pub fn result(self) -> Result<(), ConfigError> {
        match self.errors.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// All recorded errors.
    pub fn all_errors(self) -> Vec<ConfigError> {
        self.errors
    }
}
