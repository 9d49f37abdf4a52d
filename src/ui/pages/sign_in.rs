// SPDX-License-Identifier: MPL-2.0
//! Sign-in page: e-mail and password form with links to account creation
//! and password recovery.

use crate::i18n::fluent::I18n;
use crate::ui::components::{form_field, link_button, submit_button};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::validation::{email, required, FieldErrors, Validator};
use iced::widget::{container, text, Column};
use iced::{Element, Length, Theme};

#[derive(Debug, Default)]
pub struct State {
    pub email: String,
    pub password: String,
    pub errors: FieldErrors,
    pub submitting: bool,
}

impl State {
    /// Runs every field check and returns all failures at once.
    pub fn validate(&self) -> FieldErrors {
        let mut validator = Validator::new();
        validator
            .check("email", required(&self.email).or_else(|| email(&self.email)))
            .check("password", required(&self.password));
        validator.finish()
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    EmailChanged(String),
    PasswordChanged(String),
    Submit,
    GoToSignUp,
    GoToForgotPassword,
}

pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let error_for = |field: &str| state.errors.get(field).map(|key| i18n.tr(key));

    let logo = text(i18n.tr("window-title"))
        .size(typography::DISPLAY)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::ORANGE_500),
        });

    let heading = text(i18n.tr("signin-heading")).size(typography::TITLE);

    let submit = submit_button(
        i18n.tr("signin-submit"),
        (!state.submitting).then_some(Message::Submit),
    );

    let form = Column::new()
        .spacing(spacing::MD)
        .width(sizing::FORM_WIDTH)
        .push(logo)
        .push(heading)
        .push(form_field(
            &i18n.tr("signin-email-placeholder"),
            &state.email,
            error_for("email"),
            false,
            Message::EmailChanged,
        ))
        .push(form_field(
            &i18n.tr("signin-password-placeholder"),
            &state.password,
            error_for("password"),
            true,
            Message::PasswordChanged,
        ))
        .push(submit)
        .push(link_button(
            i18n.tr("signin-forgot-link"),
            false,
            Message::GoToForgotPassword,
        ))
        .push(link_button(
            i18n.tr("signin-create-account-link"),
            true,
            Message::GoToSignUp,
        ));

    container(form).center(Length::Fill).into()
}
