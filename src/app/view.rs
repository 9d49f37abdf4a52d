// SPDX-License-Identifier: MPL-2.0
//! Top-level view composition.
//!
//! Renders the current page and stacks the toast overlay on top of it.

use super::session::Session;
use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::palette;
use crate::ui::notifications::{Manager, Toast};
use crate::ui::pages::{dashboard, forgot_password, profile, sign_in, sign_up};
use iced::widget::{container, Container, Stack};
use iced::{Element, Length, Theme};

/// Borrows of the state the view layer reads.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub session: Option<&'a Session>,
    pub sign_in: &'a sign_in::State,
    pub sign_up: &'a sign_up::State,
    pub forgot_password: &'a forgot_password::State,
    pub profile: &'a profile::State,
    pub notifications: &'a Manager,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let page: Element<'a, Message> = match ctx.screen {
        Screen::SignIn => sign_in::view(ctx.sign_in, ctx.i18n).map(Message::SignIn),
        Screen::SignUp => sign_up::view(ctx.sign_up, ctx.i18n).map(Message::SignUp),
        Screen::ForgotPassword => {
            forgot_password::view(ctx.forgot_password, ctx.i18n).map(Message::ForgotPassword)
        }
        Screen::Profile => profile::view(ctx.profile, ctx.i18n).map(Message::Profile),
        Screen::Dashboard => match ctx.session {
            Some(session) => dashboard::view(&session.user, ctx.i18n).map(Message::Dashboard),
            // Unreachable in practice; update signs out before this renders.
            None => sign_in::view(ctx.sign_in, ctx.i18n).map(Message::SignIn),
        },
    };

    let background = Container::new(page)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(background_style);

    let overlay = Toast::view_overlay(ctx.notifications).map(Message::Notification);

    Stack::new().push(background).push(overlay).into()
}

fn background_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(palette::BACKGROUND)),
        text_color: Some(palette::TEXT),
        ..container::Style::default()
    }
}
