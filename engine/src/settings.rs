//! Demo Settings
//!
//! Optional `settings.json` next to the executable's working directory.
//! Missing file means defaults; a malformed file is logged and ignored
//! rather than aborting the demo.

use serde::{Deserialize, Serialize};

const SETTINGS_PATH: &str = "settings.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoSettings {
    /// Initial window width in logical pixels.
    pub width: u32,
    /// Initial window height in logical pixels.
    pub height: u32,
    /// Cap rendering to the monitor refresh rate.
    pub vsync: bool,
    /// Start in fullscreen.
    pub fullscreen: bool,
    /// Play the detonation sound.
    pub sound: bool,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            vsync: true,
            fullscreen: false,
            sound: true,
        }
    }
}

impl DemoSettings {
    /// Load `settings.json` if present, falling back to defaults.
    pub fn load() -> Self {
        match std::fs::read_to_string(SETTINGS_PATH) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(settings) => settings,
                Err(err) => {
                    log::warn!("ignoring malformed {}: {}", SETTINGS_PATH, err);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings: DemoSettings = serde_json::from_str(r#"{"vsync": false}"#).unwrap();
        assert!(!settings.vsync);
        assert_eq!(settings.width, DemoSettings::default().width);
        assert!(settings.sound);
    }

    #[test]
    fn test_roundtrip() {
        let settings = DemoSettings {
            fullscreen: true,
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: DemoSettings = serde_json::from_str(&json).unwrap();
        assert!(back.fullscreen);
    }
}
