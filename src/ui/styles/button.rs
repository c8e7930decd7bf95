// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Whole-area button behind the empty drop zone.
///
/// The outline turns to the brand color on hover or while files are dragged
/// over the window.
pub fn drop_zone(drag_active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let highlighted = drag_active || matches!(status, button::Status::Hovered);
        let text_color = theme.extended_palette().background.base.text;

        let (background, outline) = if highlighted {
            (
                Some(Background::Color(Color {
                    a: opacity::DROP_HIGHLIGHT,
                    ..palette::PRIMARY_500
                })),
                palette::PRIMARY_500,
            )
        } else {
            (None, palette::GRAY_200)
        };

        button::Style {
            background,
            text_color,
            border: Border {
                color: outline,
                width: border::WIDTH_MD,
                radius: radius::LG.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Small borderless icon button, used for the remove control.
pub fn ghost(theme: &Theme, status: button::Status) -> button::Style {
    let text_color = theme.extended_palette().background.base.text;
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(Background::Color(Color {
            a: opacity::DROP_HIGHLIGHT,
            ..palette::GRAY_400
        })),
        _ => None,
    };

    button::Style {
        background,
        text_color,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
