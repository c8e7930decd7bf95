// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::{styles, uploader};
use crate::upload::SelectedFile;
use iced::widget::{button, container, row, Column, Text};
use iced::{Alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub uploader: &'a uploader::State,
    pub selected: Option<&'a SelectedFile>,
    pub config_warning: Option<&'a str>,
}

/// Status line under the uploader, reflecting what the parent was told.
pub fn status_text(i18n: &I18n, selected: Option<&SelectedFile>) -> String {
    match selected {
        Some(file) => i18n.tr_with_args("status-ready", &[("name", file.name())]),
        None => i18n.tr("status-no-file"),
    }
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut content = Column::new()
        .spacing(spacing::LG)
        .align_x(Alignment::Center)
        .max_width(sizing::DROP_ZONE_MAX_WIDTH);

    if let Some(key) = ctx.config_warning {
        content = content.push(view_warning(ctx.i18n, key));
    }

    content = content
        .push(Text::new(ctx.i18n.tr("window-title")).size(typography::TITLE_MD))
        .push(ctx.uploader.view(ctx.i18n).map(Message::Uploader))
        .push(
            Text::new(status_text(ctx.i18n, ctx.selected))
                .size(typography::BODY)
                .color(palette::GRAY_500),
        );

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XL)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

fn view_warning<'a>(i18n: &'a I18n, key: &str) -> Element<'a, Message> {
    let banner = row![
        Text::new(i18n.tr(key))
            .size(typography::CAPTION)
            .width(Length::Fill),
        button(Text::new("×").size(typography::BODY))
            .on_press(Message::DismissWarning)
            .style(styles::button::ghost),
    ]
    .spacing(spacing::XS)
    .align_y(Alignment::Center);

    container(banner)
        .padding([spacing::XS, spacing::SM])
        .width(Length::Fill)
        .style(styles::container::badge(
            palette::WARNING_100,
            palette::WARNING_500,
        ))
        .into()
}
