//! Autosave preferences
//!
//! Persisted as JSON in the same key-value store as the drafts.

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_INTERVAL_MS, DEFAULT_KEY_PREFIX, MIN_INTERVAL_MS};
use crate::persistence::{DraftError, KeyValueStore};

/// Autosave configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutosaveConfig {
    /// Master switch for debounced saves (manual saves always work)
    pub enabled: bool,
    /// Debounce window in milliseconds
    pub interval_ms: u64,
    /// Prepended to draft names to build storage keys
    pub key_prefix: String,
}

impl Default for AutosaveConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_ms: DEFAULT_INTERVAL_MS,
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),
        }
    }
}

impl AutosaveConfig {
    /// Storage key for the config itself
    const STORAGE_KEY: &'static str = "cessionpro_autosave_config";

    /// Storage key for a named draft, e.g. `listing` -> `cessionpro_draft_listing`
    pub fn key_for(&self, name: &str) -> String {
        format!("{}{}", self.key_prefix, name)
    }

    /// Debounce window actually applied (never below the floor)
    pub fn effective_interval_ms(&self) -> u64 {
        self.interval_ms.max(MIN_INTERVAL_MS)
    }

    /// Load config from `store`, falling back to defaults
    pub fn load<S: KeyValueStore>(store: &S) -> Self {
        match store.get(Self::STORAGE_KEY) {
            Ok(Some(json)) => match serde_json::from_str(&json) {
                Ok(config) => {
                    log::info!("Loaded autosave config");
                    return config;
                }
                Err(e) => log::warn!("Ignoring unreadable autosave config: {}", e),
            },
            Ok(None) => {}
            Err(e) => log::warn!("Could not read autosave config: {}", e),
        }

        log::info!("Using default autosave config");
        Self::default()
    }

    /// Save config to `store`
    pub fn save<S: KeyValueStore>(&self, store: &S) -> bool {
        match self.write(store) {
            Ok(()) => {
                log::info!("Autosave config saved");
                true
            }
            Err(e) => {
                log::error!("Autosave config not saved: {}", e);
                false
            }
        }
    }

    fn write<S: KeyValueStore>(&self, store: &S) -> Result<(), DraftError> {
        let json = serde_json::to_string(self)?;
        store.set(Self::STORAGE_KEY, &json)?;
        Ok(())
    }
}
