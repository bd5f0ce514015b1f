//! Configuration file support for the scroll view demo.
//!
//! Settings are stored as JSON, either at the platform config directory or at
//! an explicit path given on the command line.

use std::path::Path;

use scrollview_ui::IndicatorConfig;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_ITEM_COUNT, DEFAULT_ITEM_HEIGHT, DEFAULT_VIEWPORT_HEIGHT};

/// Log level setting for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including per-frame traces
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(self) -> log::LevelFilter {
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

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Version of the configuration file format
    pub version: u32,

    /// User preferences
    #[serde(default)]
    pub preferences: UserPreferences,

    /// Scroll indicator behavior
    #[serde(default)]
    pub indicator: IndicatorConfig,

    /// Demo content layout
    #[serde(default)]
    pub demo: DemoLayout,
}

/// User preferences section of the config.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Size of the demo list and the viewport it scrolls in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoLayout {
    /// Number of list items
    #[serde(default = "default_item_count")]
    pub item_count: usize,

    /// Height of a single item, divider included
    #[serde(default = "default_item_height")]
    pub item_height: f32,

    /// Height of the scrolling viewport
    #[serde(default = "default_viewport_height")]
    pub viewport_height: f32,
}

fn default_item_count() -> usize {
    DEFAULT_ITEM_COUNT
}

fn default_item_height() -> f32 {
    DEFAULT_ITEM_HEIGHT
}

fn default_viewport_height() -> f32 {
    DEFAULT_VIEWPORT_HEIGHT
}

impl Default for DemoLayout {
    fn default() -> Self {
        Self {
            item_count: default_item_count(),
            item_height: default_item_height(),
            viewport_height: default_viewport_height(),
        }
    }
}

impl AppConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            version: CONFIG_VERSION,
            preferences: UserPreferences::default(),
            indicator: IndicatorConfig::default(),
            demo: DemoLayout::default(),
        }
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

        Ok(config)
    }

    /// Read configuration from an explicit path.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Get the default filename for the config file.
    pub fn default_filename() -> &'static str {
        "scrollview-config.json"
    }

    /// Get the default config file path for auto-load/save.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn default_path() -> Option<std::path::PathBuf> {
        if let Some(config_dir) = dirs::config_dir() {
            Some(config_dir.join("scrollview").join(Self::default_filename()))
        } else {
            dirs::home_dir().map(|home_dir| {
                home_dir
                    .join(".config")
                    .join("scrollview")
                    .join(Self::default_filename())
            })
        }
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

    /// Save configuration to the default path.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to_default_path(&self) -> Result<(), ConfigError> {
        let path = Self::default_path().ok_or(ConfigError::NoConfigDir)?;

        // Create parent directories if needed
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = self.to_json()?;
        std::fs::write(&path, json)?;
        log::info!("Saved configuration to {:?}", path);
        Ok(())
    }
}

impl Default for AppConfig {
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

    /// I/O error when reading/writing config
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// No directory to store the config in
    #[error("Could not determine config directory")]
    NoConfigDir,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_defaults() {
        let config = AppConfig::new();
        let json = config.to_json().unwrap();
        let parsed = AppConfig::from_json(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let parsed = AppConfig::from_json(r#"{ "version": 1 }"#).unwrap();
        assert_eq!(parsed.preferences.log_level, LogLevel::Info);
        assert_eq!(parsed.indicator, IndicatorConfig::default());
        assert_eq!(parsed.demo.item_count, DEFAULT_ITEM_COUNT);
    }

    #[test]
    fn test_partial_indicator_section() {
        let json = r#"{
            "version": 1,
            "preferences": { "log_level": "trace" },
            "indicator": { "show_indicators": false, "hide_delay_ms": 500 }
        }"#;
        let parsed = AppConfig::from_json(json).unwrap();

        assert_eq!(parsed.preferences.log_level, LogLevel::Trace);
        assert!(!parsed.indicator.show_indicators);
        assert_eq!(parsed.indicator.hide_delay_ms, 500);
        assert_eq!(
            parsed.indicator.min_thumb_size,
            IndicatorConfig::default().min_thumb_size
        );
    }

    #[test]
    fn test_version_too_new() {
        let json = format!(r#"{{ "version": {} }}"#, CONFIG_VERSION + 1);
        assert!(matches!(
            AppConfig::from_json(&json),
            Err(ConfigError::VersionTooNew { .. })
        ));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            AppConfig::from_json("not json"),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_level_filter() {
        assert_eq!(LogLevel::Debug.to_level_filter(), log::LevelFilter::Debug);
        assert_eq!(LogLevel::Error.to_level_filter(), log::LevelFilter::Error);
    }
}
