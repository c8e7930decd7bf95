// SPDX-License-Identifier: MPL-2.0
//! Application root state.
//!
//! The `App` struct hosts the uploader and acts as its parent: it keeps the
//! document the uploader last reported and shows it in a status line. Startup
//! wires in the config file, localization and CLI overrides.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::i18n::fluent::I18n;
use crate::ui::uploader;
use crate::upload::SelectedFile;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    uploader: uploader::State,
    /// The document as last reported by the uploader.
    selected: Option<SelectedFile>,
    /// Fluent key of a startup warning, shown until dismissed.
    config_warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("selected", &self.selected.as_ref().map(SelectedFile::name))
            .field("config_warning", &self.config_warning)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 480;
pub const WINDOW_DEFAULT_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 360;
pub const MIN_WINDOW_WIDTH: u32 = 420;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires the boot function to be Fn; flags are consumed once
    // and a repeated boot falls back to defaults.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads config and localization, then builds the uploader with the
    /// resulting constraints.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (mut config, config_warning) = config::load();
        if let Some(max_size_mb) = flags.max_size_mb {
            config.upload.max_size_mb = Some(max_size_mb);
        }

        let i18n = I18n::new(flags.lang, &config);
        let constraints = config.constraints();
        tracing::info!(
            locale = %i18n.current_locale(),
            max_size_bytes = constraints.max_size_bytes(),
            types = %constraints.type_label(),
            "uploader ready"
        );

        let app = App {
            i18n,
            uploader: uploader::State::new(constraints),
            selected: None,
            config_warning,
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match &self.selected {
            Some(file) => format!("{} - {app_name}", file.name()),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Uploader(uploader_message) => {
                let mut ctx = update::UpdateContext {
                    i18n: &self.i18n,
                    uploader: &mut self.uploader,
                    selected: &mut self.selected,
                };
                update::handle_uploader_message(&mut ctx, uploader_message)
            }
            Message::DismissWarning => {
                self.config_warning = None;
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            uploader: &self.uploader,
            selected: self.selected.as_ref(),
            config_warning: self.config_warning.as_deref(),
        })
    }
}
