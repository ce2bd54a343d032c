//! Player preferences
//!
//! Persisted as JSON separately from the best scores.

use serde::{Deserialize, Serialize};

use crate::platform::KeyValueStore;
use crate::sim::Mode;

/// Player preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Mode pre-selected on the start screen
    pub preferred_mode: Mode,

    // === Visual Effects ===
    /// Blink the player sprite while invincible
    pub flicker: bool,

    // === Accessibility ===
    /// Reduced motion (no blinking)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            preferred_mode: Mode::Normal,
            flicker: true,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Storage key
    const STORAGE_KEY: &'static str = "scottish_highlands_settings";

    /// Effective sprite flicker (respects reduced_motion)
    pub fn effective_flicker(&self) -> bool {
        self.flicker && !self.reduced_motion
    }

    /// Load settings, falling back to defaults on any failure
    pub fn load(store: &dyn KeyValueStore) -> Self {
        match store.get(Self::STORAGE_KEY) {
            Ok(Some(json)) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings");
                    return settings;
                }
                Err(e) => log::warn!("Ignoring malformed settings: {}", e),
            },
            Ok(None) => {}
            Err(e) => log::warn!("Could not read settings: {}", e),
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings; failures are logged and otherwise ignored
    pub fn save(&self, store: &mut dyn KeyValueStore) {
        match serde_json::to_string(self) {
            Ok(json) => match store.set(Self::STORAGE_KEY, &json) {
                Ok(()) => log::info!("Settings saved"),
                Err(e) => log::warn!("Could not save settings: {}", e),
            },
            Err(e) => log::warn!("Could not encode settings: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::MemoryStore;

    #[test]
    fn test_reduced_motion_disables_flicker() {
        let mut settings = Settings::default();
        assert!(settings.effective_flicker());
        settings.reduced_motion = true;
        assert!(!settings.effective_flicker());
    }

    #[test]
    fn test_save_then_load() {
        let mut store = MemoryStore::new();
        let settings = Settings {
            preferred_mode: Mode::Hard,
            flicker: false,
            reduced_motion: true,
        };
        settings.save(&mut store);
        assert_eq!(Settings::load(&store), settings);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let mut store = MemoryStore::new();
        store
            .set(Settings::STORAGE_KEY, r#"{"preferred_mode":"Hard"}"#)
            .unwrap();
        let settings = Settings::load(&store);
        assert_eq!(settings.preferred_mode, Mode::Hard);
        assert!(settings.flicker);
    }

    #[test]
    fn test_malformed_falls_back() {
        let mut store = MemoryStore::new();
        store.set(Settings::STORAGE_KEY, "{oops").unwrap();
        assert_eq!(Settings::load(&store), Settings::default());
    }
}
