// SPDX-License-Identifier: MPL-2.0
//! Form building blocks: text inputs with inline validation errors and the
//! primary submit button.

use crate::ui::design_tokens::{border, palette, radius, shadow, spacing, typography};
use iced::widget::{button, text, text_input, Column};
use iced::{Border, Element, Length, Theme};

/// A labeled text input with an optional validation error line below it.
///
/// `error` is display-ready text (already localized); when present the
/// input border and the error line render in the error color.
pub fn form_field<'a, Message: Clone + 'a>(
    placeholder: &str,
    value: &str,
    error: Option<String>,
    secure: bool,
    on_input: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    let has_error = error.is_some();

    let input = text_input(placeholder, value)
        .on_input(on_input)
        .secure(secure)
        .padding(spacing::SM)
        .size(typography::BODY)
        .style(move |theme: &Theme, status| input_style(theme, status, has_error));

    let mut column = Column::new().spacing(spacing::XXS).push(input);

    if let Some(message) = error {
        column = column.push(
            text(message)
                .size(typography::CAPTION)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::ERROR_500),
                }),
        );
    }

    column.width(Length::Fill).into()
}

/// The orange primary action button used by every form page.
pub fn submit_button<'a, Message: Clone + 'a>(
    label: String,
    on_press: Option<Message>,
) -> Element<'a, Message> {
    let mut submit = button(
        text(label)
            .size(typography::SUBTITLE)
            .width(Length::Fill)
            .center(),
    )
    .padding(spacing::SM)
    .width(Length::Fill)
    .style(submit_button_style);

    if let Some(message) = on_press {
        submit = submit.on_press(message);
    }

    submit.into()
}

/// A borderless text button used for navigation links below forms.
///
/// `accent` renders the label in orange, for the call-to-action link
/// ("Create account"); otherwise the label uses the regular text color.
pub fn link_button<'a, Message: Clone + 'a>(
    label: String,
    accent: bool,
    on_press: Message,
) -> Element<'a, Message> {
    button(text(label).size(typography::BODY))
        .padding(spacing::XS)
        .style(move |theme: &Theme, status| link_button_style(theme, status, accent))
        .on_press(on_press)
        .into()
}

fn input_style(_theme: &Theme, status: text_input::Status, has_error: bool) -> text_input::Style {
    let border_color = if has_error {
        palette::ERROR_500
    } else {
        match status {
            text_input::Status::Focused { .. } => palette::ORANGE_500,
            _ => palette::INPUT,
        }
    };

    text_input::Style {
        background: palette::INPUT.into(),
        border: Border {
            color: border_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        icon: palette::PLACEHOLDER,
        placeholder: palette::PLACEHOLDER,
        value: palette::TEXT,
        selection: palette::ORANGE_600,
    }
}

fn submit_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Active => palette::ORANGE_500,
        button::Status::Hovered => palette::ORANGE_400,
        button::Status::Pressed => palette::ORANGE_600,
        button::Status::Disabled => palette::GRAY_400,
    };

    button::Style {
        background: Some(iced::Background::Color(background)),
        text_color: palette::SURFACE,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

fn link_button_style(_theme: &Theme, status: button::Status, accent: bool) -> button::Style {
    let base = if accent {
        palette::ORANGE_500
    } else {
        palette::TEXT
    };
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => {
            if accent {
                palette::ORANGE_400
            } else {
                palette::PLACEHOLDER
            }
        }
        _ => base,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}
