// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared across pages.

pub mod form_field;

pub use form_field::{form_field, link_button, submit_button};
