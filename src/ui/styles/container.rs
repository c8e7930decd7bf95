// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Drop zone outline while a file is selected (the zone is no longer a
/// click target, but drops still land on it).
pub fn drop_zone(drag_active: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let outline = if drag_active {
            palette::PRIMARY_500
        } else {
            palette::GRAY_200
        };
        container::Style {
            border: Border {
                color: outline,
                width: border::WIDTH_MD,
                radius: radius::LG.into(),
            },
            ..Default::default()
        }
    }
}

/// Card summarising the selected file.
///
/// Derived from the theme background so it reads in light and dark modes.
pub fn file_card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.weak.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::MD.into(),
            width: border::WIDTH_SM,
            color: palette.background.strong.color,
        },
        ..Default::default()
    }
}

/// Pill-shaped badge with a tinted background.
pub fn badge(background: Color, text: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        text_color: Some(text),
        background: Some(Background::Color(background)),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
