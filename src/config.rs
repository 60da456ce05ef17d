//! Shell configuration
//!
//! Optional orchard.toml overriding gesture thresholds and the gallery's
//! default layout parameters. Missing file means defaults; a present but
//! malformed file is an error rather than a silent fallback.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::gallery::LayoutParams;
use crate::input::gestures::GestureConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Gesture thresholds as they appear in the config file
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GestureSettings {
    pub touch_slop: f64,
    pub tap_ms: u64,
    pub long_press_ms: u64,
}

impl Default for GestureSettings {
    fn default() -> Self {
        let config = GestureConfig::default();
        Self {
            touch_slop: config.touch_slop,
            tap_ms: config.tap_duration.as_millis() as u64,
            long_press_ms: config.long_press_duration.as_millis() as u64,
        }
    }
}

impl GestureSettings {
    pub fn to_config(&self) -> GestureConfig {
        GestureConfig {
            touch_slop: self.touch_slop,
            tap_duration: Duration::from_millis(self.tap_ms),
            long_press_duration: Duration::from_millis(self.long_press_ms),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub gestures: GestureSettings,
    pub gallery: LayoutParams,
}

impl ShellConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config = toml::from_str(&contents)?;
        info!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Load from the given path, or fall back to defaults when no path was
    /// supplied
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                info!("no config file, using defaults");
                Ok(Self::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ShellConfig::default();
        assert_eq!(config.gestures.long_press_ms, 500);
        assert_eq!(config.gestures.touch_slop, 10.0);
        assert_eq!(config.gallery.spacing(), 20.0);
    }

    #[test]
    fn test_parse_partial_override() {
        let config: ShellConfig = toml::from_str(
            "[gestures]\nlong_press_ms = 350\n\n[gallery]\nspacing = 14.0\nrotation_step = -8.0\n",
        )
        .unwrap();
        assert_eq!(config.gestures.long_press_ms, 350);
        assert_eq!(config.gestures.tap_ms, 200);
        assert_eq!(config.gallery.spacing(), 14.0);
        assert_eq!(config.gallery.rotation_step(), -8.0);
        assert_eq!(config.gallery.scale_decay(), 0.02);
    }

    #[test]
    fn test_gesture_settings_conversion() {
        let settings = GestureSettings {
            touch_slop: 8.0,
            tap_ms: 150,
            long_press_ms: 400,
        };
        let config = settings.to_config();
        assert_eq!(config.touch_slop, 8.0);
        assert_eq!(config.tap_duration, Duration::from_millis(150));
        assert_eq!(config.long_press_duration, Duration::from_millis(400));
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        assert!(toml::from_str::<ShellConfig>("gestures = 5").is_err());
    }
}
