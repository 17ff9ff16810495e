//! Player preferences
//!
//! Persisted in LocalStorage. Nothing here changes the rules of the game.

use serde::{Deserialize, Serialize};

/// GPU adapter preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PowerPreference {
    Low,
    #[default]
    High,
}

impl PowerPreference {
    pub fn as_wgpu(&self) -> wgpu::PowerPreference {
        match self {
            PowerPreference::Low => wgpu::PowerPreference::LowPower,
            PowerPreference::High => wgpu::PowerPreference::HighPerformance,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Id of the `<canvas>` element to draw into
    pub canvas_id: String,
    /// `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,
    /// Mirror the FPS counter into `#hud-fps` if the page has one
    pub show_fps: bool,
    pub power_preference: PowerPreference,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            canvas_id: "gameCanvas".to_string(),
            log_level: "info".to_string(),
            show_fps: false,
            power_preference: PowerPreference::High,
        }
    }
}

impl Settings {
    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "multiball_pong_settings";

    /// Parse settings JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Configured log level, `Info` when unrecognised
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => return settings,
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{"show_fps": true}"#).unwrap();
        assert!(settings.show_fps);
        assert_eq!(settings.canvas_id, "gameCanvas");
        assert_eq!(settings.power_preference, PowerPreference::High);
    }

    #[test]
    fn test_power_preference_names() {
        let settings = Settings::from_json(r#"{"power_preference": "low"}"#).unwrap();
        assert_eq!(settings.power_preference, PowerPreference::Low);
        assert_eq!(
            settings.power_preference.as_wgpu(),
            wgpu::PowerPreference::LowPower
        );
        assert!(Settings::from_json(r#"{"power_preference": "turbo"}"#).is_err());
    }

    #[test]
    fn test_log_level_parsing() {
        let mut settings = Settings::default();
        assert_eq!(settings.log_level(), log::Level::Info);
        settings.log_level = "debug".to_string();
        assert_eq!(settings.log_level(), log::Level::Debug);
        settings.log_level = "chatty".to_string();
        assert_eq!(settings.log_level(), log::Level::Info);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_native_load_uses_defaults() {
        assert_eq!(Settings::load(), Settings::default());
    }

    #[test]
    fn test_round_trip_default() {
        let json = serde_json::to_string(&Settings::default()).unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), Settings::default());
    }
}
