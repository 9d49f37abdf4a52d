// SPDX-License-Identifier: MPL-2.0
//! Application pages.
//!
//! Each page owns its form state and messages; the app-level update
//! routines run validation, dispatch API calls, and move between pages.

pub mod dashboard;
pub mod forgot_password;
pub mod profile;
pub mod sign_in;
pub mod sign_up;
