//! Game settings
//!
//! Read once at startup from an optional JSON file in the working directory.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Settings file looked up in the working directory
pub const SETTINGS_FILE: &str = "point-defense.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Window size as a multiple of the 640x480 logical screen
    pub window_scale: u32,
    /// Sync ticks and presentation to the display refresh
    pub vsync: bool,
    /// Fixed RNG seed; derived from the system time when absent
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_scale: 2,
            vsync: true,
            seed: None,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let settings: Self = serde_json::from_str(json)?;
        Ok(settings.normalized())
    }

    /// Load settings from `SETTINGS_FILE`, falling back to defaults
    pub fn load() -> Self {
        Self::load_from(Path::new(SETTINGS_FILE))
    }

    pub fn load_from(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                log::info!("Using default settings");
                return Self::default();
            }
            Err(err) => {
                log::warn!("Could not read {}: {err}; using defaults", path.display());
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(err) => {
                log::warn!("Invalid settings in {}: {err}; using defaults", path.display());
                Self::default()
            }
        }
    }

    fn normalized(mut self) -> Self {
        self.window_scale = self.window_scale.max(1);
        self
    }

    pub fn present_mode(&self) -> wgpu::PresentMode {
        if self.vsync {
            wgpu::PresentMode::AutoVsync
        } else {
            wgpu::PresentMode::AutoNoVsync
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 7 }"#).unwrap();
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.window_scale, 2);
        assert!(settings.vsync);
    }

    #[test]
    fn test_zero_scale_is_clamped() {
        let settings = Settings::from_json(r#"{ "window_scale": 0, "vsync": false }"#).unwrap();
        assert_eq!(settings.window_scale, 1);
        assert_eq!(settings.present_mode(), wgpu::PresentMode::AutoNoVsync);
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(Settings::from_json("{ window_scale: ").is_err());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let settings = Settings::load_from(Path::new("definitely/not/here.json"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_malformed_file_uses_defaults() {
        let path = std::env::temp_dir().join(format!(
            "point-defense-settings-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, "not json").unwrap();
        let settings = Settings::load_from(&path);
        std::fs::remove_file(&path).unwrap();
        assert_eq!(settings, Settings::default());
    }
}
