// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes native window drag-and-drop events to the uploader. Each file of a
//! drag is reported separately: hovered first, then dropped.

use super::Message;
use crate::ui::uploader;
use iced::{event, window, Subscription};

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| {
        let event::Event::Window(window_event) = event else {
            return None;
        };

        let message = match window_event {
            window::Event::FileHovered(path) => uploader::Message::FileHovered(path),
            window::Event::FileDropped(path) => uploader::Message::FileDropped(path),
            window::Event::FilesHoveredLeft => uploader::Message::FilesHoveredLeft,
            _ => return None,
        };
        Some(Message::Uploader(message))
    })
}
