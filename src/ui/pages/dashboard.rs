// SPDX-License-Identifier: MPL-2.0
//! Dashboard: greeting for the signed-in user with navigation to the
//! profile page and sign-out.

use crate::api::User;
use crate::i18n::fluent::I18n;
use crate::ui::components::{link_button, submit_button};
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use iced::widget::{container, text, Column, Row};
use iced::{Border, Element, Length, Theme};

#[derive(Debug, Clone)]
pub enum Message {
    EditProfile,
    SignOut,
}

pub fn view<'a>(user: &'a User, i18n: &'a I18n) -> Element<'a, Message> {
    let initial = user
        .name
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default();

    let avatar = container(text(initial).size(typography::TITLE).style(
        |_theme: &Theme| text::Style {
            color: Some(palette::ORANGE_500),
        },
    ))
    .center(sizing::AVATAR_SIZE)
    .style(avatar_style);

    let greeting = Column::new()
        .spacing(spacing::XXS)
        .push(
            text(i18n.tr("dashboard-welcome"))
                .size(typography::BODY)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::PLACEHOLDER),
                }),
        )
        .push(
            text(i18n.tr_with_args("dashboard-greeting", &[("name", &user.name)]))
                .size(typography::TITLE),
        );

    let header = Row::new()
        .spacing(spacing::MD)
        .push(avatar)
        .push(greeting);

    let content = Column::new()
        .spacing(spacing::LG)
        .width(sizing::FORM_WIDTH)
        .push(header)
        .push(submit_button(
            i18n.tr("dashboard-profile-button"),
            Some(Message::EditProfile),
        ))
        .push(link_button(
            i18n.tr("dashboard-signout-button"),
            false,
            Message::SignOut,
        ));

    container(content).center(Length::Fill).into()
}

fn avatar_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(
            palette::ORANGE_500
                .scale_alpha(opacity::OVERLAY_SUBTLE)
                .into(),
        ),
        border: Border {
            radius: radius::ROUND.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_renders_for_a_signed_in_user() {
        let user = User {
            id: "user-1".to_string(),
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            avatar_url: None,
        };
        let _ = view(&user, &I18n::default());
    }
}
