//! User configuration
//!
//! Read from `~/.config/point-shift/config.yaml`. Every key is optional.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::loader::{Delimiter, LoadOptions, RowPolicy};
use crate::orchestrator::RunSettings;
use crate::translate::{Delta, DEFAULT_DX, DEFAULT_DY};

/// Application configuration with serde defaults for every field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Shift along x applied to the translated set
    pub dx: f64,
    /// Shift along y applied to the translated set
    pub dy: f64,
    /// Marker color of the loaded points (name or hex)
    pub original_color: String,
    /// Marker color of the shifted points (name or hex)
    pub translated_color: String,
    pub on_malformed_row: RowPolicy,
    pub delimiter: Delimiter,
    pub window_width: u32,
    pub window_height: u32,
    /// Marker radius in logical pixels
    pub marker_radius: f32,
    /// TTF/OTF font used for labels; system fonts are searched when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dx: DEFAULT_DX,
            dy: DEFAULT_DY,
            original_color: "blue".to_string(),
            translated_color: "red".to_string(),
            on_malformed_row: RowPolicy::default(),
            delimiter: Delimiter::default(),
            window_width: 800,
            window_height: 600,
            marker_radius: 4.0,
            font_path: None,
        }
    }
}

impl AppConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        Self::load_from(&path)
    }

    /// Load config from a specific file, falling back to defaults on any error
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn delta(&self) -> Delta {
        Delta::new(self.dx, self.dy)
    }

    /// Resolved marker colors: original first, translated second
    pub fn colors(&self) -> [Color; 2] {
        [
            Color::parse_or(&self.original_color, Color::BLUE),
            Color::parse_or(&self.translated_color, Color::RED),
        ]
    }

    pub fn run_settings(&self) -> RunSettings {
        RunSettings {
            delta: self.delta(),
            load: LoadOptions {
                delimiter: self.delimiter,
                policy: self.on_malformed_row,
            },
            colors: self.colors(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.delta(), Delta::new(5.0, 3.0));
        assert_eq!(config.colors(), [Color::BLUE, Color::RED]);
        assert_eq!(config.on_malformed_row, RowPolicy::Abort);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: AppConfig = serde_yaml::from_str("dx: -1.5\non_malformed_row: skip\n").unwrap();
        assert_eq!(config.dx, -1.5);
        assert_eq!(config.dy, 3.0);
        assert_eq!(config.on_malformed_row, RowPolicy::Skip);
        assert_eq!(config.original_color, "blue");
    }

    #[test]
    fn test_bad_color_falls_back() {
        let config = AppConfig {
            translated_color: "not-a-color".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.colors()[1], Color::RED);
    }

    #[test]
    fn test_run_settings() {
        let config = AppConfig {
            delimiter: Delimiter::Tab,
            original_color: "#00FF00".to_string(),
            ..AppConfig::default()
        };
        let settings = config.run_settings();
        assert_eq!(settings.load.delimiter, Delimiter::Tab);
        assert_eq!(settings.colors[0], Color::rgb(0, 0xFF, 0));
    }
}
