// SPDX-License-Identifier: MPL-2.0
//! Centralized path resolution for application directories.
//!
//! The data directory stores the persisted session (`session.cbor`); the
//! config directory stores user preferences (`settings.toml`). Both resolve
//! in the same priority order:
//!
//! 1. Explicit override - parameter to the `_with_override()` functions (tests)
//! 2. CLI arguments (`--data-dir`, `--config-dir`) - set via [`init_cli_overrides`]
//! 3. Environment variables (`GOBARBER_DATA_DIR`, `GOBARBER_CONFIG_DIR`)
//! 4. Platform default - via the `dirs` crate, with the app name appended

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "GoBarber";

/// Environment variable to override the data directory.
pub const ENV_DATA_DIR: &str = "GOBARBER_DATA_DIR";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "GOBARBER_CONFIG_DIR";

static CLI_DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Initializes CLI overrides for the data and config directories.
///
/// Call once at startup, before any path resolution happens.
///
/// # Panics
///
/// Panics if called more than once.
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) {
    CLI_DATA_DIR
        .set(data_dir.map(PathBuf::from))
        .expect("CLI data dir override already initialized");
    CLI_CONFIG_DIR
        .set(config_dir.map(PathBuf::from))
        .expect("CLI config dir override already initialized");
}

fn get_cli_data_dir() -> Option<PathBuf> {
    CLI_DATA_DIR.get().and_then(Clone::clone)
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

fn env_dir(var: &str) -> Option<PathBuf> {
    match std::env::var(var) {
        Ok(path) if !path.is_empty() => Some(PathBuf::from(path)),
        _ => None,
    }
}

/// Returns the application data directory.
///
/// Returns `None` only when the platform data directory cannot be
/// determined and no override is in effect.
pub fn get_app_data_dir() -> Option<PathBuf> {
    get_app_data_dir_with_override(None)
}

/// Returns the application data directory, honoring an explicit override.
pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }
    if let Some(path) = get_cli_data_dir() {
        return Some(path);
    }
    if let Some(path) = env_dir(ENV_DATA_DIR) {
        return Some(path);
    }
    dirs::data_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the application config directory.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory, honoring an explicit override.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }
    if let Some(path) = get_cli_config_dir() {
        return Some(path);
    }
    if let Some(path) = env_dir(ENV_CONFIG_DIR) {
        return Some(path);
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}
