//! Map settings persistence.
//!
//! The map's `MapConfig` (padding, debounce, tooltip geometry) is stored in
//! eframe's key/value storage as a JSON string under one key. The theme name
//! goes through ThemeCoordinator as a plain string instead.

use serde::{Deserialize, Serialize};

/// Reads and writes JSON-encoded settings in eframe storage.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads the value stored under `key`, or `T::default()`.
    pub fn load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> T
    where
        T: for<'de> Deserialize<'de> + Default,
    {
        Self::load_setting_or(storage, key, T::default())
    }

    /// Stores `value` under `key` and flushes.
    ///
    /// A value that fails to serialize leaves the previous entry in place.
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        match serde_json::to_string(value) {
            Ok(json) => {
                storage.set_string(key, json);
                storage.flush();
            }
            Err(e) => tracing::warn!(key, error = %e, "could not serialize setting"),
        }
    }

    /// Loads the value stored under `key`.
    ///
    /// # Arguments
    /// * `storage` - eframe storage, absent on the first run without persistence
    /// * `key` - Storage key, e.g. `"map_config"`
    /// * `default` - Returned when the key is missing or its JSON no longer parses
    ///
    /// A stored `MapConfig` missing some fields still loads; the gaps take
    /// their default values.
    pub fn load_setting_or<T>(storage: Option<&dyn eframe::Storage>, key: &str, default: T) -> T
    where
        T: for<'de> Deserialize<'de>,
    {
        let Some(json) = storage.and_then(|s| s.get_string(key)) else {
            return default;
        };
        match serde_json::from_str(&json) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = %e, "stored setting is unreadable, using default");
                default
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seatmap::MapConfig;
    use std::collections::HashMap;

    /// Simple mock storage for testing
    struct MockStorage {
        data: HashMap<String, String>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                data: HashMap::new(),
            }
        }
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
    fn test_save_and_load_simple() {
        let mut storage = MockStorage::new();

        // Save a value
        SettingsCoordinator::save_setting(&mut storage, "test_key", &42i32);

        // Load it back
        let loaded: i32 = SettingsCoordinator::load_setting(Some(&storage), "test_key");
        assert_eq!(loaded, 42);
    }

    #[test]
    fn test_load_with_default() {
        let storage = MockStorage::new();

        // Try to load non-existent key, should return default
        let loaded: i32 = SettingsCoordinator::load_setting(Some(&storage), "missing_key");
        assert_eq!(loaded, 0); // i32::default()
    }

    #[test]
    fn test_map_config_round_trip() {
        let mut storage = MockStorage::new();
        let config = MapConfig {
            padding: 12.0,
            resize_debounce_ms: 250,
            ..MapConfig::default()
        };

        SettingsCoordinator::save_setting(&mut storage, "map_config", &config);
        let loaded: MapConfig = SettingsCoordinator::load_setting(Some(&storage), "map_config");
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_map_config_fills_defaults() {
        let mut storage = MockStorage::new();
        eframe::Storage::set_string(&mut storage, "map_config", r#"{"padding": 40.0}"#.to_string());

        let loaded: MapConfig = SettingsCoordinator::load_setting(Some(&storage), "map_config");
        assert_eq!(loaded.padding, 40.0);
        assert_eq!(loaded.resize_debounce_ms, MapConfig::default().resize_debounce_ms);
    }

    #[test]
    fn test_corrupt_setting_uses_fallback() {
        let mut storage = MockStorage::new();
        eframe::Storage::set_string(&mut storage, "map_config", "not json".to_string());

        let loaded = SettingsCoordinator::load_setting_or(Some(&storage), "map_config", MapConfig::default());
        assert_eq!(loaded, MapConfig::default());
    }

    #[test]
    fn test_missing_storage_uses_default() {
        let loaded: MapConfig = SettingsCoordinator::load_setting(None, "map_config");
        assert_eq!(loaded, MapConfig::default());
    }
}
