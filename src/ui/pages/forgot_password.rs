// SPDX-License-Identifier: MPL-2.0
//! Password recovery page: asks for the account e-mail and requests a
//! recovery message from the API.

use crate::i18n::fluent::I18n;
use crate::ui::components::{form_field, link_button, submit_button};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::validation::{email, required, FieldErrors, Validator};
use iced::widget::{container, text, Column};
use iced::{Element, Length, Theme};

#[derive(Debug, Default)]
pub struct State {
    pub email: String,
    pub errors: FieldErrors,
    pub submitting: bool,
}

impl State {
    pub fn validate(&self) -> FieldErrors {
        let mut validator = Validator::new();
        validator.check("email", required(&self.email).or_else(|| email(&self.email)));
        validator.finish()
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    EmailChanged(String),
    Submit,
    GoToSignIn,
}

pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let error_for = |field: &str| state.errors.get(field).map(|key| i18n.tr(key));

    let logo = text(i18n.tr("window-title"))
        .size(typography::DISPLAY)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::ORANGE_500),
        });

    let form = Column::new()
        .spacing(spacing::MD)
        .width(sizing::FORM_WIDTH)
        .push(logo)
        .push(text(i18n.tr("forgot-heading")).size(typography::TITLE))
        .push(form_field(
            &i18n.tr("signin-email-placeholder"),
            &state.email,
            error_for("email"),
            false,
            Message::EmailChanged,
        ))
        .push(submit_button(
            i18n.tr("forgot-submit"),
            (!state.submitting).then_some(Message::Submit),
        ))
        .push(link_button(
            i18n.tr("forgot-back-link"),
            false,
            Message::GoToSignIn,
        ));

    container(form).center(Length::Fill).into()
}
