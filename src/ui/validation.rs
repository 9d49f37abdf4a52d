// SPDX-License-Identifier: MPL-2.0
//! Field validation for the form pages.
//!
//! Checks produce Fluent message keys rather than display text; pages
//! resolve the keys through [`crate::i18n::fluent::I18n`] when rendering
//! the error line under an input. All checks for a form run before the
//! result is reported, so every failing field shows its message at once.

use std::collections::BTreeMap;

/// Mapping from field name to the Fluent key of its first failing check.
pub type FieldErrors = BTreeMap<&'static str, &'static str>;

/// Fails when the trimmed value is empty.
pub fn required(value: &str) -> Option<&'static str> {
    if value.trim().is_empty() {
        Some("validation-required")
    } else {
        None
    }
}

/// Fails when a non-empty value does not look like an e-mail address.
///
/// Structural check only: one `@` with a non-empty local part and a domain
/// containing a dot. Deliverability is the server's concern.
pub fn email(value: &str) -> Option<&'static str> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    let mut parts = value.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();

    let domain_ok = {
        let (head, tail) = domain.split_once('.').unwrap_or(("", ""));
        !head.is_empty() && !tail.is_empty()
    };

    if local.is_empty() || !domain_ok {
        Some("validation-email")
    } else {
        None
    }
}

/// Fails when a non-empty value is shorter than `min` characters.
pub fn min_length(value: &str, min: usize) -> Option<&'static str> {
    if !value.is_empty() && value.chars().count() < min {
        Some("validation-min-length")
    } else {
        None
    }
}

/// Fails when `value` does not equal `other` (password confirmation).
pub fn confirmation(value: &str, other: &str) -> Option<&'static str> {
    if value != other {
        Some("validation-confirmation")
    } else {
        None
    }
}

/// Collects per-field validation results.
///
/// The first failing check recorded for a field wins; later checks for the
/// same field are ignored, matching how the forms report errors.
#[derive(Debug, Default)]
pub struct Validator {
    errors: FieldErrors,
}

impl Validator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a check result for `field`.
    pub fn check(&mut self, field: &'static str, failure: Option<&'static str>) -> &mut Self {
        if let Some(key) = failure {
            self.errors.entry(field).or_insert(key);
        }
        self
    }

    /// Returns the collected errors; empty means the form is valid.
    #[must_use]
    pub fn finish(self) -> FieldErrors {
        self.errors
    }
}
