// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::uploader::{self, Event as UploaderEvent};
use crate::upload::SelectedFile;
use iced::Task;

/// Mutable state the handlers need.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub uploader: &'a mut uploader::State,
    pub selected: &'a mut Option<SelectedFile>,
}

/// Forwards a message to the uploader and records the selection it reports.
pub fn handle_uploader_message(
    ctx: &mut UpdateContext<'_>,
    message: uploader::Message,
) -> Task<Message> {
    let (event, task) = ctx.uploader.update(message, ctx.i18n);

    match event {
        UploaderEvent::None => {}
        UploaderEvent::FileSelected(file) => {
            match &file {
                Some(file) => tracing::info!(
                    path = %file.path().display(),
                    size_bytes = file.size_bytes(),
                    "document selected"
                ),
                None => tracing::info!("document removed"),
            }
            *ctx.selected = file;
        }
    }

    task.map(Message::Uploader)
}
