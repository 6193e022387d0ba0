//! Carousel settings persistence.
//!
//! Settings live in eframe's persistent storage as JSON strings. Anything
//! missing, undecodable or invalid falls back to defaults, so a corrupted
//! preference file never keeps the viewer from starting.

use rcarousel::CarouselConfig;
use serde::de::DeserializeOwned;
use serde::Serialize;

const CAROUSEL_CONFIG_KEY: &str = "carousel_config";

/// Coordinates settings persistence.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads the carousel configuration, validated.
    pub fn load_carousel_config(storage: Option<&dyn eframe::Storage>) -> CarouselConfig {
        Self::try_load_setting::<CarouselConfig>(storage, CAROUSEL_CONFIG_KEY)
            .map(CarouselConfig::validated_or_default)
            .unwrap_or_default()
    }

    pub fn save_carousel_config(storage: &mut dyn eframe::Storage, config: &CarouselConfig) {
        Self::save_setting(storage, CAROUSEL_CONFIG_KEY, config);
    }

    /// Saves any serializable value under `key`.
    pub fn save_setting<T: Serialize>(storage: &mut dyn eframe::Storage, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(json_str) => {
                storage.set_string(key, json_str);
                storage.flush();
            }
            Err(e) => tracing::warn!(key, "failed to encode setting: {e}"),
        }
    }

    /// Loads a value, returning None if absent or undecodable.
    pub fn try_load_setting<T: DeserializeOwned>(storage: Option<&dyn eframe::Storage>, key: &str) -> Option<T> {
        let json_str = storage?.get_string(key)?;
        match serde_json::from_str(&json_str) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(key, "ignoring undecodable setting: {e}");
                None
            }
        }
    }
}
