// SPDX-License-Identifier: MPL-2.0
//! Theme mode selection persisted in the configuration file.

use serde::{Deserialize, Serialize};

/// Application theme mode.
///
/// GoBarber's visual identity is dark, so `Dark` is the default and
/// `System` currently resolves to dark as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
    System,
}

impl ThemeMode {
    /// Returns whether this mode renders with a dark palette.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark | ThemeMode::System => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mode_is_dark() {
        assert_eq!(ThemeMode::default(), ThemeMode::Dark);
        assert!(ThemeMode::default().is_dark());
    }

    #[test]
    fn serializes_kebab_case() {
        let toml = toml::to_string(&std::collections::BTreeMap::from([("mode", ThemeMode::System)]))
            .expect("serialize theme mode");
        assert!(toml.contains("system"));
    }
}
