// SPDX-License-Identifier: MPL-2.0
//! Top-level application messages and launch flags.

use crate::api::{SessionResponse, User};
use crate::error::ApiError;
use crate::ui::notifications::NotificationMessage;
use crate::ui::pages::{dashboard, forgot_password, profile, sign_in, sign_up};
use std::path::PathBuf;
use std::time::Instant;

/// Messages routed through `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    // Page messages
    SignIn(sign_in::Message),
    SignUp(sign_up::Message),
    ForgotPassword(forgot_password::Message),
    Profile(profile::Message),
    Dashboard(dashboard::Message),

    // Toast notifications
    Notification(NotificationMessage),
    Tick(Instant),

    // API call completions
    SessionCreated(Result<SessionResponse, ApiError>),
    AccountCreated(Result<User, ApiError>),
    RecoveryRequested(Result<(), ApiError>),
    ProfileUpdated(Result<User, ApiError>),
    AvatarDialogResult(Option<PathBuf>),
    AvatarUpdated(Result<User, ApiError>),
}

/// Options parsed from the command line by `main.rs`.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Locale override (`--lang`).
    pub lang: Option<String>,
    /// API base URL override (`--api-url`).
    pub api_url: Option<String>,
    /// Data directory override (`--data-dir`).
    pub data_dir: Option<String>,
    /// Config directory override (`--config-dir`).
    pub config_dir: Option<String>,
}
