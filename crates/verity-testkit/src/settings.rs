//! In-memory settings store for tests

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use verity_eligibility::{ConfigError, SettingKey, SettingsSource};

/// Settings store whose keys can be set, changed and removed mid-test.
#[derive(Debug, Clone, Default)]
pub struct InMemorySettings {
    values: Arc<RwLock<HashMap<SettingKey, i64>>>,
}

impl InMemorySettings {
    /// Store with no keys configured
    pub fn empty() -> Self {
        Self::default()
    }

    /// Store with both windows configured
    pub fn with_windows(days_good_for: i64, expiring_soon_window: i64) -> Self {
        let settings = Self::empty();
        settings.set(SettingKey::DaysGoodFor, days_good_for);
        settings.set(SettingKey::ExpiringSoonWindow, expiring_soon_window);
        settings
    }

    pub fn set(&self, key: SettingKey, days: i64) {
        self.values.write().insert(key, days);
    }

    pub fn remove(&self, key: SettingKey) {
        self.values.write().remove(&key);
    }
}

impl SettingsSource for InMemorySettings {
    fn day_setting(&self, key: SettingKey) -> Result<i64, ConfigError> {
        self.values
            .read()
            .get(&key)
            .copied()
            .ok_or(ConfigError::MissingSetting { key })
    }
}
