// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application.
//!
//! Handlers receive an [`UpdateContext`] with mutable borrows of the app
//! state they may touch. Form submissions validate locally first; only a
//! clean form produces an API task. Completion messages push a toast and,
//! where the call succeeded, advance the screen.

use super::session::Session;
use super::{Message, Screen};
use crate::api::ApiClient;
use crate::error::ApiError;
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{Manager, Notification};
use crate::ui::pages::{dashboard, forgot_password, profile, sign_in, sign_up};
use iced::Task;
use std::path::PathBuf;

/// Mutable borrows of the application state handlers operate on.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub screen: &'a mut Screen,
    pub api: &'a ApiClient,
    pub session: &'a mut Option<Session>,
    pub sign_in: &'a mut sign_in::State,
    pub sign_up: &'a mut sign_up::State,
    pub forgot_password: &'a mut forgot_password::State,
    pub profile: &'a mut profile::State,
    pub notifications: &'a mut Manager,
}

pub fn handle_sign_in_message(
    ctx: &mut UpdateContext<'_>,
    message: sign_in::Message,
) -> Task<Message> {
    match message {
        sign_in::Message::EmailChanged(value) => {
            ctx.sign_in.email = value;
            Task::none()
        }
        sign_in::Message::PasswordChanged(value) => {
            ctx.sign_in.password = value;
            Task::none()
        }
        sign_in::Message::Submit => {
            ctx.sign_in.errors = ctx.sign_in.validate();
            if !ctx.sign_in.errors.is_empty() {
                return Task::none();
            }

            ctx.sign_in.submitting = true;
            let api = ctx.api.clone();
            let email = ctx.sign_in.email.trim().to_string();
            let password = ctx.sign_in.password.clone();
            Task::perform(
                async move { api.create_session(&email, &password).await },
                Message::SessionCreated,
            )
        }
        sign_in::Message::GoToSignUp => {
            *ctx.sign_up = sign_up::State::default();
            *ctx.screen = Screen::SignUp;
            Task::none()
        }
        sign_in::Message::GoToForgotPassword => {
            *ctx.forgot_password = forgot_password::State::default();
            *ctx.screen = Screen::ForgotPassword;
            Task::none()
        }
    }
}

pub fn handle_sign_up_message(
    ctx: &mut UpdateContext<'_>,
    message: sign_up::Message,
) -> Task<Message> {
    match message {
        sign_up::Message::NameChanged(value) => {
            ctx.sign_up.name = value;
            Task::none()
        }
        sign_up::Message::EmailChanged(value) => {
            ctx.sign_up.email = value;
            Task::none()
        }
        sign_up::Message::PasswordChanged(value) => {
            ctx.sign_up.password = value;
            Task::none()
        }
        sign_up::Message::Submit => {
            ctx.sign_up.errors = ctx.sign_up.validate();
            if !ctx.sign_up.errors.is_empty() {
                return Task::none();
            }

            ctx.sign_up.submitting = true;
            let api = ctx.api.clone();
            let name = ctx.sign_up.name.trim().to_string();
            let email = ctx.sign_up.email.trim().to_string();
            let password = ctx.sign_up.password.clone();
            Task::perform(
                async move { api.create_account(&name, &email, &password).await },
                Message::AccountCreated,
            )
        }
        sign_up::Message::GoToSignIn => {
            *ctx.screen = Screen::SignIn;
            Task::none()
        }
    }
}

pub fn handle_forgot_password_message(
    ctx: &mut UpdateContext<'_>,
    message: forgot_password::Message,
) -> Task<Message> {
    match message {
        forgot_password::Message::EmailChanged(value) => {
            ctx.forgot_password.email = value;
            Task::none()
        }
        forgot_password::Message::Submit => {
            ctx.forgot_password.errors = ctx.forgot_password.validate();
            if !ctx.forgot_password.errors.is_empty() {
                return Task::none();
            }

            ctx.forgot_password.submitting = true;
            let api = ctx.api.clone();
            let email = ctx.forgot_password.email.trim().to_string();
            Task::perform(
                async move { api.request_password_recovery(&email).await },
                Message::RecoveryRequested,
            )
        }
        forgot_password::Message::GoToSignIn => {
            *ctx.screen = Screen::SignIn;
            Task::none()
        }
    }
}

pub fn handle_profile_message(
    ctx: &mut UpdateContext<'_>,
    message: profile::Message,
) -> Task<Message> {
    match message {
        profile::Message::NameChanged(value) => {
            ctx.profile.name = value;
            Task::none()
        }
        profile::Message::EmailChanged(value) => {
            ctx.profile.email = value;
            Task::none()
        }
        profile::Message::OldPasswordChanged(value) => {
            ctx.profile.old_password = value;
            Task::none()
        }
        profile::Message::PasswordChanged(value) => {
            ctx.profile.password = value;
            Task::none()
        }
        profile::Message::PasswordConfirmationChanged(value) => {
            ctx.profile.password_confirmation = value;
            Task::none()
        }
        profile::Message::Submit => {
            ctx.profile.errors = ctx.profile.validate();
            if !ctx.profile.errors.is_empty() {
                return Task::none();
            }
            let Some(session) = ctx.session.as_ref() else {
                return Task::none();
            };

            ctx.profile.submitting = true;
            let api = ctx.api.clone();
            let token = session.token.clone();
            let request = ctx.profile.to_request();
            Task::perform(
                async move { api.update_profile(&token, &request).await },
                Message::ProfileUpdated,
            )
        }
        profile::Message::ChooseAvatar => {
            if ctx.profile.uploading_avatar {
                return Task::none();
            }
            handle_avatar_dialog()
        }
        profile::Message::GoBack => {
            *ctx.screen = Screen::Dashboard;
            Task::none()
        }
    }
}

pub fn handle_dashboard_message(
    ctx: &mut UpdateContext<'_>,
    message: dashboard::Message,
) -> Task<Message> {
    match message {
        dashboard::Message::EditProfile => {
            if let Some(session) = ctx.session.as_ref() {
                *ctx.profile = profile::State::from_user(&session.user);
                *ctx.screen = Screen::Profile;
            }
            Task::none()
        }
        dashboard::Message::SignOut => {
            sign_out(ctx);
            Task::none()
        }
    }
}

pub fn handle_session_created(
    ctx: &mut UpdateContext<'_>,
    result: Result<crate::api::SessionResponse, ApiError>,
) -> Task<Message> {
    ctx.sign_in.submitting = false;

    match result {
        Ok(response) => {
            let session = Session {
                token: response.token,
                user: response.user,
            };
            if let Some(key) = session.save() {
                ctx.notifications.push(Notification::info(ctx.i18n.tr(&key)));
            }
            *ctx.session = Some(session);
            *ctx.sign_in = sign_in::State::default();
            *ctx.screen = Screen::Dashboard;
            Task::none()
        }
        Err(error) => {
            push_api_error(ctx, "toast-signin-error-title", &error);
            Task::none()
        }
    }
}

pub fn handle_account_created(
    ctx: &mut UpdateContext<'_>,
    result: Result<crate::api::User, ApiError>,
) -> Task<Message> {
    ctx.sign_up.submitting = false;

    match result {
        Ok(_user) => {
            ctx.notifications.push(
                Notification::success(ctx.i18n.tr("toast-signup-success-title"))
                    .with_description(ctx.i18n.tr("toast-signup-success-description")),
            );
            *ctx.sign_up = sign_up::State::default();
            *ctx.screen = Screen::SignIn;
            Task::none()
        }
        Err(error) => {
            push_api_error(ctx, "toast-signup-error-title", &error);
            Task::none()
        }
    }
}

pub fn handle_recovery_requested(
    ctx: &mut UpdateContext<'_>,
    result: Result<(), ApiError>,
) -> Task<Message> {
    ctx.forgot_password.submitting = false;

    match result {
        Ok(()) => {
            ctx.notifications.push(
                Notification::info(ctx.i18n.tr("toast-forgot-success-title"))
                    .with_description(ctx.i18n.tr("toast-forgot-success-description")),
            );
            *ctx.forgot_password = forgot_password::State::default();
            *ctx.screen = Screen::SignIn;
            Task::none()
        }
        Err(error) => {
            push_api_error(ctx, "toast-forgot-error-title", &error);
            Task::none()
        }
    }
}

pub fn handle_profile_updated(
    ctx: &mut UpdateContext<'_>,
    result: Result<crate::api::User, ApiError>,
) -> Task<Message> {
    ctx.profile.submitting = false;

    match result {
        Ok(user) => {
            apply_user_update(ctx, user);
            ctx.notifications.push(
                Notification::success(ctx.i18n.tr("toast-profile-success-title"))
                    .with_description(ctx.i18n.tr("toast-profile-success-description")),
            );
            *ctx.screen = Screen::Dashboard;
            Task::none()
        }
        Err(error) => {
            push_api_error(ctx, "toast-profile-error-title", &error);
            Task::none()
        }
    }
}

pub fn handle_avatar_dialog_result(
    ctx: &mut UpdateContext<'_>,
    path: Option<PathBuf>,
) -> Task<Message> {
    let Some(path) = path else {
        return Task::none();
    };
    let Some(session) = ctx.session.as_ref() else {
        return Task::none();
    };

    ctx.profile.uploading_avatar = true;
    let api = ctx.api.clone();
    let token = session.token.clone();
    Task::perform(
        async move { api.update_avatar(&token, &path).await },
        Message::AvatarUpdated,
    )
}

pub fn handle_avatar_updated(
    ctx: &mut UpdateContext<'_>,
    result: Result<crate::api::User, ApiError>,
) -> Task<Message> {
    ctx.profile.uploading_avatar = false;

    match result {
        Ok(user) => {
            apply_user_update(ctx, user);
            ctx.notifications
                .push(Notification::success(ctx.i18n.tr("toast-avatar-success-title")));
            Task::none()
        }
        Err(error) => {
            push_api_error(ctx, "toast-profile-error-title", &error);
            Task::none()
        }
    }
}

/// Opens the native file picker for avatar selection.
fn handle_avatar_dialog() -> Task<Message> {
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .add_filter("Images", &["png", "jpg", "jpeg"])
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::AvatarDialogResult,
    )
}

/// Stores the updated user in the session (memory and disk).
fn apply_user_update(ctx: &mut UpdateContext<'_>, user: crate::api::User) {
    if let Some(session) = ctx.session.as_mut() {
        session.user = user;
        if let Some(key) = session.save() {
            ctx.notifications.push(Notification::info(ctx.i18n.tr(&key)));
        }
    }
}

/// Pushes an error toast for a failed API call.
///
/// The description prefers the message the server sent; transport errors
/// fall back to a localized summary. A 401 with an active session means
/// the stored token expired, so the user is signed out as well.
fn push_api_error(ctx: &mut UpdateContext<'_>, title_key: &str, error: &ApiError) {
    let description = error
        .server_message()
        .map(String::from)
        .unwrap_or_else(|| ctx.i18n.tr(error.i18n_key()));

    ctx.notifications.push(
        Notification::error(ctx.i18n.tr(title_key)).with_description(description),
    );

    if error.is_unauthorized() && ctx.session.is_some() {
        sign_out(ctx);
        ctx.notifications
            .push(Notification::info(ctx.i18n.tr("toast-session-expired-title")));
    }
}

/// Clears the session (memory and disk) and returns to the sign-in page.
fn sign_out(ctx: &mut UpdateContext<'_>) {
    if let Some(key) = Session::delete() {
        ctx.notifications.push(Notification::info(ctx.i18n.tr(&key)));
    }
    *ctx.session = None;
    *ctx.sign_in = sign_in::State::default();
    *ctx.profile = profile::State::default();
    *ctx.screen = Screen::SignIn;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::User;

    struct Fixture {
        i18n: I18n,
        screen: Screen,
        api: ApiClient,
        session: Option<Session>,
        sign_in: sign_in::State,
        sign_up: sign_up::State,
        forgot_password: forgot_password::State,
        profile: profile::State,
        notifications: Manager,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                i18n: I18n::default(),
                screen: Screen::SignIn,
                api: ApiClient::default(),
                session: None,
                sign_in: sign_in::State::default(),
                sign_up: sign_up::State::default(),
                forgot_password: forgot_password::State::default(),
                profile: profile::State::default(),
                notifications: Manager::new(),
            }
        }

        fn signed_in() -> Self {
            let mut fixture = Self::new();
            fixture.session = Some(Session {
                token: "jwt-token".to_string(),
                user: User {
                    id: "user-1".to_string(),
                    name: "John Doe".to_string(),
                    email: "john@example.com".to_string(),
                    avatar_url: None,
                },
            });
            fixture.screen = Screen::Dashboard;
            fixture
        }

        fn ctx(&mut self) -> UpdateContext<'_> {
            UpdateContext {
                i18n: &self.i18n,
                screen: &mut self.screen,
                api: &self.api,
                session: &mut self.session,
                sign_in: &mut self.sign_in,
                sign_up: &mut self.sign_up,
                forgot_password: &mut self.forgot_password,
                profile: &mut self.profile,
                notifications: &mut self.notifications,
            }
        }
    }

    #[test]
    fn sign_in_submit_with_empty_form_sets_errors_and_stays() {
        let mut fixture = Fixture::new();
        let _ = handle_sign_in_message(&mut fixture.ctx(), sign_in::Message::Submit);

        assert!(!fixture.sign_in.errors.is_empty());
        assert!(!fixture.sign_in.submitting);
        assert_eq!(fixture.screen, Screen::SignIn);
    }

    #[test]
    fn sign_in_submit_with_valid_form_marks_submitting() {
        let mut fixture = Fixture::new();
        fixture.sign_in.email = "john@example.com".to_string();
        fixture.sign_in.password = "123456".to_string();

        let _ = handle_sign_in_message(&mut fixture.ctx(), sign_in::Message::Submit);

        assert!(fixture.sign_in.errors.is_empty());
        assert!(fixture.sign_in.submitting);
    }

    #[test]
    fn navigation_links_switch_screens() {
        let mut fixture = Fixture::new();
        let _ = handle_sign_in_message(&mut fixture.ctx(), sign_in::Message::GoToSignUp);
        assert_eq!(fixture.screen, Screen::SignUp);

        let _ = handle_sign_up_message(&mut fixture.ctx(), sign_up::Message::GoToSignIn);
        assert_eq!(fixture.screen, Screen::SignIn);

        let _ = handle_sign_in_message(&mut fixture.ctx(), sign_in::Message::GoToForgotPassword);
        assert_eq!(fixture.screen, Screen::ForgotPassword);
    }

    #[test]
    fn failed_sign_in_pushes_error_toast() {
        let mut fixture = Fixture::new();
        fixture.sign_in.submitting = true;

        let _ = handle_session_created(
            &mut fixture.ctx(),
            Err(ApiError::Status {
                status: 401,
                message: None,
            }),
        );

        assert!(!fixture.sign_in.submitting);
        assert_eq!(fixture.notifications.len(), 1);
        assert_eq!(fixture.screen, Screen::SignIn);
        assert!(fixture.session.is_none());
    }

    #[test]
    fn error_toast_prefers_server_message() {
        let mut fixture = Fixture::new();

        let _ = handle_account_created(
            &mut fixture.ctx(),
            Err(ApiError::Status {
                status: 400,
                message: Some("E-mail already used".to_string()),
            }),
        );

        let toast = fixture.notifications.visible().next().expect("one toast");
        assert_eq!(toast.description(), Some("E-mail already used"));
    }

    #[test]
    fn account_creation_returns_to_sign_in_with_success_toast() {
        let mut fixture = Fixture::new();
        fixture.screen = Screen::SignUp;
        fixture.sign_up.name = "John".to_string();

        let _ = handle_account_created(
            &mut fixture.ctx(),
            Ok(User {
                id: "user-1".to_string(),
                name: "John".to_string(),
                email: "john@example.com".to_string(),
                avatar_url: None,
            }),
        );

        assert_eq!(fixture.screen, Screen::SignIn);
        assert!(fixture.sign_up.name.is_empty());
        assert_eq!(fixture.notifications.len(), 1);
    }

    #[test]
    fn recovery_request_success_navigates_back() {
        let mut fixture = Fixture::new();
        fixture.screen = Screen::ForgotPassword;

        let _ = handle_recovery_requested(&mut fixture.ctx(), Ok(()));

        assert_eq!(fixture.screen, Screen::SignIn);
        assert_eq!(fixture.notifications.len(), 1);
    }

    #[test]
    fn dashboard_edit_profile_seeds_form_from_session() {
        let mut fixture = Fixture::signed_in();

        let _ = handle_dashboard_message(&mut fixture.ctx(), dashboard::Message::EditProfile);

        assert_eq!(fixture.screen, Screen::Profile);
        assert_eq!(fixture.profile.name, "John Doe");
        assert_eq!(fixture.profile.email, "john@example.com");
    }

    #[test]
    fn expired_token_signs_the_user_out() {
        let mut fixture = Fixture::signed_in();
        fixture.screen = Screen::Profile;
        fixture.profile = profile::State::from_user(&fixture.session.as_ref().unwrap().user);

        let _ = handle_profile_updated(
            &mut fixture.ctx(),
            Err(ApiError::Status {
                status: 401,
                message: None,
            }),
        );

        assert!(fixture.session.is_none());
        assert_eq!(fixture.screen, Screen::SignIn);
        // Error toast plus the session-expired notice.
        assert_eq!(fixture.notifications.len(), 2);
    }

    #[test]
    fn profile_submit_without_session_is_ignored() {
        let mut fixture = Fixture::new();
        fixture.profile.name = "John".to_string();
        fixture.profile.email = "john@example.com".to_string();

        let _ = handle_profile_message(&mut fixture.ctx(), profile::Message::Submit);

        assert!(!fixture.profile.submitting);
    }

    #[test]
    fn avatar_dialog_cancel_is_a_noop() {
        let mut fixture = Fixture::signed_in();

        let _ = handle_avatar_dialog_result(&mut fixture.ctx(), None);

        assert!(!fixture.profile.uploading_avatar);
        assert!(fixture.notifications.is_empty());
    }
}
