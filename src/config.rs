//! Application Configuration
//!
//! Fixed settings for storage, export and UI timing. Every field has a
//! default so a partial JSON override still deserializes.

use serde::Deserialize;

use crate::storage::KeyValueStore;

/// Storage key of an optional JSON override
pub const CONFIG_KEY: &str = "grocery_config";

/// Application settings provided to the whole component tree
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// localStorage key holding the frequency map
    pub storage_key: String,
    /// URL scheme of the automation app (without `://`)
    pub shortcut_scheme: String,
    /// Name of the shortcut that receives the list
    pub shortcut_name: String,
    /// How long the "copied" indicator stays on
    pub copied_reset_ms: u32,
    /// Units offered for user-created items, first one is the default
    pub custom_units: Vec<String>,
    /// Minimum level written to the console
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: "grocery_frequencies".to_string(),
            shortcut_scheme: "shortcuts".to_string(),
            shortcut_name: "Add Groceries".to_string(),
            copied_reset_ms: 2000,
            custom_units: ["pcs", "pack", "kg", "g", "L"]
                .iter()
                .map(|u| u.to_string())
                .collect(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Parse a JSON override; missing fields fall back to defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Defaults, overridden by the JSON stored under `CONFIG_KEY` if any
    pub fn load(store: &dyn KeyValueStore) -> Self {
        match store.get(CONFIG_KEY) {
            Ok(Some(json)) => Self::from_json(&json).unwrap_or_else(|e| {
                log::warn!("[config] Ignoring invalid override: {}", e);
                Self::default()
            }),
            Ok(None) => Self::default(),
            Err(e) => {
                log::warn!("[config] Could not read override: {}", e);
                Self::default()
            }
        }
    }

    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = AppConfig::from_json(r#"{"shortcut_name":"Groceries"}"#).unwrap();
        assert_eq!(config.shortcut_name, "Groceries");
        assert_eq!(config.storage_key, "grocery_frequencies");
        assert_eq!(config.copied_reset_ms, 2000);
        assert_eq!(config.custom_units[0], "pcs");
    }

    #[test]
    fn test_load_from_store() {
        let store = MemoryStore::with_entry(CONFIG_KEY, r#"{"copied_reset_ms":500}"#);
        assert_eq!(AppConfig::load(&store).copied_reset_ms, 500);

        let broken = MemoryStore::with_entry(CONFIG_KEY, "[1,2");
        assert_eq!(AppConfig::load(&broken), AppConfig::default());
        assert_eq!(AppConfig::load(&MemoryStore::new()), AppConfig::default());
    }

    #[test]
    fn test_level_filter() {
        let mut config = AppConfig::default();
        assert_eq!(config.level_filter(), log::LevelFilter::Info);
        config.log_level = "debug".to_string();
        assert_eq!(config.level_filter(), log::LevelFilter::Debug);
        config.log_level = "nonsense".to_string();
        assert_eq!(config.level_filter(), log::LevelFilter::Info);
    }
}
