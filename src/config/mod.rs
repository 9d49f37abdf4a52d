// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[api]` - Remote API address and request timeout
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `GOBARBER_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use gobarber::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.language = Some("pt-BR".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "pt-BR").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default = "default_theme_mode")]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Remote API settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    /// Base URL of the GoBarber API.
    #[serde(
        default = "default_api_base_url",
        skip_serializing_if = "Option::is_none"
    )]
    pub base_url: Option<String>,

    /// Request timeout in seconds.
    #[serde(
        default = "default_api_timeout_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_base_url(),
            timeout_secs: default_api_timeout_secs(),
        }
    }
}

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub api: ApiConfig,
}

impl Config {
    /// Returns the effective API base URL.
    #[must_use]
    pub fn api_base_url(&self) -> String {
        self.api
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
    }

    /// Returns the effective API request timeout in seconds.
    #[must_use]
    pub fn api_timeout_secs(&self) -> u64 {
        self.api.timeout_secs.unwrap_or(DEFAULT_API_TIMEOUT_SECS)
    }
}

fn get_config_path() -> Option<PathBuf> {
    paths::get_app_config_dir().map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads configuration from the default location.
///
/// Returns a tuple of (config, optional warning key). A missing file yields
/// the default config without a warning; an unreadable or unparseable file
/// yields the default config plus a warning key for the notification system.
pub fn load() -> (Config, Option<String>) {
    let Some(path) = get_config_path() else {
        return (Config::default(), None);
    };

    if !path.exists() {
        return (Config::default(), None);
    }

    match fs::read_to_string(&path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(config) => (config, None),
            Err(_) => (
                Config::default(),
                Some("notification-config-parse-error".to_string()),
            ),
        },
        Err(_) => (
            Config::default(),
            Some("notification-config-read-error".to_string()),
        ),
    }
}

/// Saves configuration to the default location.
pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Loads configuration from an explicit path. Unparseable content yields
/// the default configuration.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

/// Saves configuration to an explicit path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("pt-BR".to_string()),
                theme_mode: ThemeMode::Light,
            },
            api: ApiConfig {
                base_url: Some("https://api.gobarber.example".to_string()),
                timeout_secs: Some(5),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert!(loaded.general.language.is_none());
    }

    #[test]
    fn default_config_points_at_local_api() {
        let config = Config::default();
        assert_eq!(config.api_base_url(), DEFAULT_API_BASE_URL);
        assert_eq!(config.api_timeout_secs(), DEFAULT_API_TIMEOUT_SECS);
    }

    #[test]
    fn missing_sections_take_defaults() {
        let config: Config = toml::from_str("[general]\nlanguage = \"en-US\"\n")
            .expect("partial config should parse");
        assert_eq!(config.general.language.as_deref(), Some("en-US"));
        assert_eq!(config.api_base_url(), DEFAULT_API_BASE_URL);
    }
}
