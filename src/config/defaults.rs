// SPDX-License-Identifier: MPL-2.0
//! Default values for configuration settings.

use crate::ui::theming::ThemeMode;

/// Address the GoBarber API conventionally listens on in development.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3333";

/// Request timeout applied to every API call.
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 10;

pub fn default_theme_mode() -> ThemeMode {
    ThemeMode::Dark
}

pub fn default_api_base_url() -> Option<String> {
    Some(DEFAULT_API_BASE_URL.to_string())
}

pub fn default_api_timeout_secs() -> Option<u64> {
    Some(DEFAULT_API_TIMEOUT_SECS)
}
