//! Error types for eligibility evaluation.
//!
//! The window operations themselves are total. Errors only arise from the
//! settings store (missing or malformed values), configuration loading, and
//! from building a [`RecencyOrdered`](crate::RecencyOrdered) out of a list
//! that does not honor the most-recent-first ordering.

use crate::settings::SettingKey;

/// Configuration and settings-store errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Setting '{key}' is not configured")]
    MissingSetting { key: SettingKey },

    #[error("Setting '{key}' has invalid value '{value}': {reason}")]
    InvalidSetting {
        key: SettingKey,
        value: String,
        reason: String,
    },

    #[error("Field '{field}' must be between {min} and {max} (got {actual})")]
    OutOfRange {
        field: String,
        min: i64,
        max: i64,
        actual: i64,
    },

    #[error("Failed to read config file {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("Invalid TOML: {reason}")]
    Parse { reason: String },
}

impl ConfigError {
    /// Missing-key failure for `key`.
    pub fn missing(key: SettingKey) -> Self {
        Self::MissingSetting { key }
    }

    /// Malformed-value failure for `key`.
    pub fn invalid(key: SettingKey, value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSetting {
            key,
            value: value.into(),
            reason: reason.into(),
        }
    }
}

/// Candidate list ordering violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrderingError {
    /// The element at `index` was created after the element before it.
    #[error("Candidate at index {index} is more recent than its predecessor")]
    OutOfOrder { index: usize },
}

/// Umbrella error for callers that want a single error type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EligibilityError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Candidate ordering error: {0}")]
    Ordering(#[from] OrderingError),
}

pub type Result<T> = std::result::Result<T, EligibilityError>;
