// SPDX-License-Identifier: MPL-2.0
//! Profile page: edit name and e-mail, optionally change the password,
//! and replace the avatar.
//!
//! The three password fields only participate in validation when the
//! current password is filled in; leaving it empty updates name and
//! e-mail without touching the password.

use crate::api::{UpdateProfileRequest, User};
use crate::i18n::fluent::I18n;
use crate::ui::components::{form_field, link_button, submit_button};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::validation::{confirmation, email, min_length, required, FieldErrors, Validator};
use iced::widget::{container, text, Column};
use iced::{Element, Length};

#[derive(Debug, Default)]
pub struct State {
    pub name: String,
    pub email: String,
    pub old_password: String,
    pub password: String,
    pub password_confirmation: String,
    pub errors: FieldErrors,
    pub submitting: bool,
    pub uploading_avatar: bool,
}

impl State {
    /// Seeds the form from the signed-in user.
    #[must_use]
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            ..Self::default()
        }
    }

    /// Whether the user is requesting a password change.
    fn changing_password(&self) -> bool {
        !self.old_password.is_empty()
    }

    pub fn validate(&self) -> FieldErrors {
        let mut validator = Validator::new();
        validator
            .check("name", required(&self.name))
            .check("email", required(&self.email).or_else(|| email(&self.email)));

        if self.changing_password() {
            validator
                .check(
                    "password",
                    required(&self.password).or_else(|| min_length(&self.password, 6)),
                )
                .check(
                    "password_confirmation",
                    confirmation(&self.password_confirmation, &self.password),
                );
        }

        validator.finish()
    }

    /// Builds the API request body from the form.
    ///
    /// Password fields are only present when a password change was
    /// requested; the API rejects empty-string passwords.
    #[must_use]
    pub fn to_request(&self) -> UpdateProfileRequest {
        let mut request = UpdateProfileRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            ..UpdateProfileRequest::default()
        };

        if self.changing_password() {
            request.old_password = Some(self.old_password.clone());
            request.password = Some(self.password.clone());
            request.password_confirmation = Some(self.password_confirmation.clone());
        }

        request
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    EmailChanged(String),
    OldPasswordChanged(String),
    PasswordChanged(String),
    PasswordConfirmationChanged(String),
    Submit,
    ChooseAvatar,
    GoBack,
}

pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let error_for = |field: &str| state.errors.get(field).map(|key| i18n.tr(key));

    let avatar_label = if state.uploading_avatar {
        i18n.tr("profile-avatar-uploading")
    } else {
        i18n.tr("profile-avatar-button")
    };
    let avatar_button = link_button(avatar_label, true, Message::ChooseAvatar);

    let form = Column::new()
        .spacing(spacing::MD)
        .width(sizing::FORM_WIDTH)
        .push(text(i18n.tr("profile-heading")).size(typography::TITLE))
        .push(avatar_button)
        .push(form_field(
            &i18n.tr("signup-name-placeholder"),
            &state.name,
            error_for("name"),
            false,
            Message::NameChanged,
        ))
        .push(form_field(
            &i18n.tr("signin-email-placeholder"),
            &state.email,
            error_for("email"),
            false,
            Message::EmailChanged,
        ))
        .push(form_field(
            &i18n.tr("profile-old-password-placeholder"),
            &state.old_password,
            None,
            true,
            Message::OldPasswordChanged,
        ))
        .push(form_field(
            &i18n.tr("profile-new-password-placeholder"),
            &state.password,
            error_for("password"),
            true,
            Message::PasswordChanged,
        ))
        .push(form_field(
            &i18n.tr("profile-confirm-password-placeholder"),
            &state.password_confirmation,
            error_for("password_confirmation"),
            true,
            Message::PasswordConfirmationChanged,
        ))
        .push(submit_button(
            i18n.tr("profile-submit"),
            (!state.submitting).then_some(Message::Submit),
        ))
        .push(link_button(
            i18n.tr("profile-back-link"),
            false,
            Message::GoBack,
        ));

    container(form).center(Length::Fill).into()
}
