// SPDX-License-Identifier: MPL-2.0
//! Sign-up page: name, e-mail, and password form for account creation.

use crate::i18n::fluent::I18n;
use crate::ui::components::{form_field, link_button, submit_button};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::validation::{email, min_length, required, FieldErrors, Validator};
use iced::widget::{container, text, Column};
use iced::{Element, Length, Theme};

#[derive(Debug, Default)]
pub struct State {
    pub name: String,
    pub email: String,
    pub password: String,
    pub errors: FieldErrors,
    pub submitting: bool,
}

impl State {
    pub fn validate(&self) -> FieldErrors {
        let mut validator = Validator::new();
        validator
            .check("name", required(&self.name))
            .check("email", required(&self.email).or_else(|| email(&self.email)))
            .check(
                "password",
                required(&self.password).or_else(|| min_length(&self.password, 6)),
            );
        validator.finish()
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    EmailChanged(String),
    PasswordChanged(String),
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
        .push(text(i18n.tr("signup-heading")).size(typography::TITLE))
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
            &i18n.tr("signin-password-placeholder"),
            &state.password,
            error_for("password"),
            true,
            Message::PasswordChanged,
        ))
        .push(submit_button(
            i18n.tr("signup-submit"),
            (!state.submitting).then_some(Message::Submit),
        ))
        .push(link_button(
            i18n.tr("signup-back-link"),
            false,
            Message::GoToSignIn,
        ));

    container(form).center(Length::Fill).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_form_fails_all_three_fields() {
        let errors = State::default().validate();
        assert_eq!(errors.len(), 3);
        assert!(errors.values().all(|key| *key == "validation-required"));
    }

    #[test]
    fn short_password_is_rejected() {
        let state = State {
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            password: "12345".to_string(),
            ..State::default()
        };
        let errors = state.validate();
        assert_eq!(errors.get("password"), Some(&"validation-min-length"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn complete_form_passes_validation() {
        let state = State {
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            password: "123456".to_string(),
            ..State::default()
        };
        assert!(state.validate().is_empty());
    }
}
