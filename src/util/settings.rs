//! JSON-serialized user preferences and namespaced app settings.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shares the token store's [`KeyValueStore`]. Preferences live under
//! `userPreferences`; everything else is namespaced as `app_<key>`. Values are
//! schema-less JSON: a stored value that no longer deserializes reads as absent.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::storage::{KeyValueStore, StorageError};

pub const USER_PREFERENCES_KEY: &str = "userPreferences";
const APP_KEY_PREFIX: &str = "app_";

/// Per-browser display preferences.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    /// `None` until the user picks a theme explicitly.
    #[serde(default)]
    pub dark_mode: Option<bool>,
}

#[derive(Clone)]
pub struct Settings {
    store: Arc<dyn KeyValueStore>,
}

impl Settings {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn preferences(&self) -> UserPreferences {
        self.load_json(USER_PREFERENCES_KEY).unwrap_or_default()
    }

    /// # Errors
    ///
    /// Returns [`StorageError`] if serialization or the write fails.
    pub fn save_preferences(&self, prefs: &UserPreferences) -> Result<(), StorageError> {
        self.save_json(USER_PREFERENCES_KEY, prefs)
    }

    /// Load the value stored under `app_<key>`.
    pub fn app_setting<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.load_json(&app_key(key))
    }

    /// # Errors
    ///
    /// Returns [`StorageError`] if serialization or the write fails.
    pub fn set_app_setting<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        self.save_json(&app_key(key), value)
    }

    /// # Errors
    ///
    /// Returns [`StorageError`] if the medium rejects the removal.
    pub fn remove_app_setting(&self, key: &str) -> Result<(), StorageError> {
        self.store.remove(&app_key(key))
    }

    fn load_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.store.get(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                log::debug!("ignoring unreadable setting {key}: {e}");
                None
            }
        }
    }

    fn save_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value).map_err(|e| StorageError::Serialize(e.to_string()))?;
        self.store.set(key, &raw)
    }
}

fn app_key(key: &str) -> String {
    format!("{APP_KEY_PREFIX}{key}")
}
