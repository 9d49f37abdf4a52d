// SPDX-License-Identifier: MPL-2.0
//! User interface modules.

pub mod components;
pub mod design_tokens;
pub mod notifications;
pub mod pages;
pub mod theming;
pub mod validation;
