//! Generic settings persistence coordination.
//!
//! Settings are stored in eframe's persistent storage as JSON strings.

use serde::{Deserialize, Serialize};

/// Coordinates generic settings persistence.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads a setting from persistent storage with a custom default.
    ///
    /// Missing keys and values that no longer deserialize both yield `default`.
    pub fn load_setting_or<T>(storage: Option<&dyn eframe::Storage>, key: &str, default: T) -> T
    where
        T: for<'de> Deserialize<'de>,
    {
        storage
            .and_then(|s| s.get_string(key))
            .and_then(|json| serde_json::from_str(&json).ok())
            .unwrap_or(default)
    }

    /// Saves a setting to persistent storage.
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        match serde_json::to_string(value) {
            Ok(json_str) => {
                storage.set_string(key, json_str);
                storage.flush();
            }
            Err(e) => tracing::warn!(key, error = %e, "failed to serialize setting"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::LayoutPrefs;
    use eframe::Storage;
    use std::collections::HashMap;

    /// Simple mock storage for testing
    #[derive(Default)]
    struct MockStorage {
        data: HashMap<String, String>,
    }

    impl eframe::Storage for MockStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.data.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.data.insert(key.to_string(), value);
        }

        fn flush(&mut self) {}
    }

    #[test]
    fn test_save_and_load_layout() {
        let mut storage = MockStorage::default();
        let prefs = LayoutPrefs {
            show_map: false,
            card_panel_width: 420.0,
        };

        SettingsCoordinator::save_setting(&mut storage, "layout", &prefs);
        let loaded: LayoutPrefs =
            SettingsCoordinator::load_setting_or(Some(&storage), "layout", LayoutPrefs::default());
        assert_eq!(loaded, prefs);
    }

    #[test]
    fn test_missing_or_corrupt_value_uses_default() {
        let mut storage = MockStorage::default();
        let loaded: u32 = SettingsCoordinator::load_setting_or(Some(&storage), "missing", 7);
        assert_eq!(loaded, 7);

        storage.set_string("layout", "{not json".to_string());
        let loaded: LayoutPrefs =
            SettingsCoordinator::load_setting_or(Some(&storage), "layout", LayoutPrefs::default());
        assert_eq!(loaded, LayoutPrefs::default());

        let loaded: u32 = SettingsCoordinator::load_setting_or(None, "anything", 3);
        assert_eq!(loaded, 3);
    }
}
