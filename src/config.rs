//! Configuration file support for huewheel.
//!
//! This module provides serialization and deserialization of picker
//! settings, so a host can keep its shape and layout in a JSON file.

use huewheel_geom::{GeometryError, LayoutConfig};
use serde::{Deserialize, Serialize};

use crate::picker::{Picker, ShapeKind};

/// Log level setting for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    #[default]
    Warn,
    /// Show errors, warnings, and info messages
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including per-sample input
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Picker configuration that can be exported and imported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PickerConfig {
    /// Version of the configuration file format
    pub version: u32,

    /// Which shape the picker shows
    #[serde(default)]
    pub shape: ShapeKind,

    /// Layout of the shape
    #[serde(default)]
    pub layout: LayoutConfig,

    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,
}

impl PickerConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            version: CONFIG_VERSION,
            shape: ShapeKind::default(),
            layout: LayoutConfig::default(),
            log_level: LogLevel::default(),
        }
    }

    /// Build the picker this configuration describes.
    pub fn picker(&self) -> Picker {
        Picker::new(self.shape, self.layout)
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;

        // Validate version compatibility
        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        config.layout.validate()?;

        Ok(config)
    }

    /// Get the default filename for the config file.
    pub fn default_filename() -> &'static str {
        "huewheel-config.json"
    }

    /// Get the default config file path for auto-load/save.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn default_path() -> Option<std::path::PathBuf> {
        // Try to use XDG config directory, fall back to home directory
        if let Some(config_dir) = dirs::config_dir() {
            Some(config_dir.join("huewheel").join(Self::default_filename()))
        } else {
            dirs::home_dir().map(|home_dir| {
                home_dir
                    .join(".config")
                    .join("huewheel")
                    .join(Self::default_filename())
            })
        }
    }

    /// Load configuration from a file.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Try to load configuration from the default path.
    /// Returns None if the file doesn't exist or can't be read.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_default_path() -> Option<Self> {
        let path = Self::default_path()?;
        if !path.exists() {
            log::debug!("No config file found at {:?}", path);
            return None;
        }

        match Self::load(&path) {
            Ok(config) => Some(config),
            Err(e) => {
                log::warn!("Failed to load config file {:?}: {}", path, e);
                None
            }
        }
    }

    /// Save configuration to a file, creating parent directories if needed.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = self.to_json()?;
        std::fs::write(path, json)?;
        log::info!("Saved configuration to {:?}", path);
        Ok(())
    }

    /// Save configuration to the default path.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to_default_path(&self) -> Result<(), ConfigError> {
        let path = Self::default_path().ok_or_else(|| {
            ConfigError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine config directory",
            ))
        })?;
        self.save(&path)
    }
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration version is newer than supported
    #[error(
        "Configuration file version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    /// Layout describes a shape that cannot be drawn
    #[error("Invalid layout: {0}")]
    InvalidLayout(#[from] GeometryError),

    /// I/O error when reading/writing config
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use huewheel_geom::WheelDirection;

    #[test]
    fn test_json_roundtrip() {
        let mut config = PickerConfig::new();
        config.shape = ShapeKind::Triangle;
        config.layout = LayoutConfig::new(240.0)
            .rotation(30.0)
            .wheel_direction(WheelDirection::Clockwise);
        config.log_level = LogLevel::Debug;

        let json = config.to_json().unwrap();
        let loaded = PickerConfig::from_json(&json).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_minimal_file_uses_defaults() {
        let config = PickerConfig::from_json(r#"{"version": 1}"#).unwrap();
        assert_eq!(config.shape, ShapeKind::Ring);
        assert_eq!(config.layout, LayoutConfig::default());
        assert_eq!(config.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_partial_layout() {
        let json = r#"{
            "version": 1,
            "shape": "triangle-wheel",
            "layout": { "width": 180, "wheelAngle": 90 },
            "logLevel": "trace"
        }"#;
        let config = PickerConfig::from_json(json).unwrap();
        assert_eq!(config.shape, ShapeKind::TriangleWheel);
        assert_eq!(config.layout.width, 180.0);
        assert_eq!(config.layout.wheel_angle, 90.0);
        assert_eq!(config.layout.padding, 6.0);
        assert_eq!(config.log_level.to_level_filter(), log::LevelFilter::Trace);
    }

    #[test]
    fn test_version_too_new() {
        let json = format!(r#"{{"version": {}}}"#, CONFIG_VERSION + 1);
        assert!(matches!(
            PickerConfig::from_json(&json),
            Err(ConfigError::VersionTooNew { .. })
        ));
    }

    #[test]
    fn test_degenerate_layout_rejected() {
        let json = r#"{"version": 1, "layout": {"width": 0}}"#;
        assert!(matches!(
            PickerConfig::from_json(json),
            Err(ConfigError::InvalidLayout(GeometryError::Degenerate { .. }))
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            PickerConfig::from_json("{not json"),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_save_and_load() {
        let dir = std::env::temp_dir().join(format!("huewheel-test-{}", std::process::id()));
        let path = dir.join(PickerConfig::default_filename());

        let mut config = PickerConfig::new();
        config.shape = ShapeKind::Box;
        config.save(&path).unwrap();

        let loaded = PickerConfig::load(&path).unwrap();
        assert_eq!(loaded, config);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_picker_from_config() {
        let mut config = PickerConfig::new();
        config.shape = ShapeKind::Wheel;
        let picker = config.picker();
        assert_eq!(picker.kind(), ShapeKind::Wheel);
        assert_eq!(picker.layout(), &config.layout);
    }
}
