// SPDX-License-Identifier: MPL-2.0
//! GoBarber desktop client.
//!
//! A small Iced application for the GoBarber barbershop scheduling
//! service: sign in, account creation, password recovery, and profile
//! management against the GoBarber REST API, with toast notifications
//! for user feedback.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod ui;
