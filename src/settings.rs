//! User settings stored as settings.json in the app data directory

use crate::constants::{DEFAULT_ACCOUNT, DEFAULT_REQUEST_DELAY_MS};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window geometry
    pub window_x: Option<f32>,
    pub window_y: Option<f32>,
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,

    // Demo signer
    pub account: String,

    // Simulated wallet behaviour
    pub request_delay_ms: u64,
    pub simulate_rejection: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_x: None,
            window_y: None,
            window_w: None,
            window_h: None,
            account: DEFAULT_ACCOUNT.to_string(),
            request_delay_ms: DEFAULT_REQUEST_DELAY_MS,
            simulate_rejection: false,
        }
    }
}

impl Settings {
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join("settings.json");
        match std::fs::read_to_string(&path) {
            Ok(s) => match serde_json::from_str(&s) {
                Ok(settings) => {
                    debug!(path = %path.display(), "Settings loaded");
                    settings
                }
                Err(e) => {
                    warn!(error = %e, "Failed to parse settings, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                debug!("No settings file found, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, data_dir: &Path) {
        let path = data_dir.join("settings.json");
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    warn!(error = %e, "Failed to save settings");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize settings"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_falls_back_to_defaults() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.account, DEFAULT_ACCOUNT);
        assert_eq!(settings.request_delay_ms, DEFAULT_REQUEST_DELAY_MS);
        assert!(!settings.simulate_rejection);
        assert!(settings.window_x.is_none());
    }

    #[test]
    fn settings_round_trip() {
        let mut settings = Settings::default();
        settings.window_w = Some(900.0);
        settings.simulate_rejection = true;
        settings.request_delay_ms = 250;

        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.window_w, Some(900.0));
        assert!(back.simulate_rejection);
        assert_eq!(back.request_delay_ms, 250);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let settings: Settings =
            serde_json::from_str(r#"{"request_delay_ms": 10, "col_order": [1, 2]}"#).unwrap();
        assert_eq!(settings.request_delay_ms, 10);
    }
}
