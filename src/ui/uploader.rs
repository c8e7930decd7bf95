// SPDX-License-Identifier: MPL-2.0
//! Single-file uploader component.
//!
//! Shows a clickable drop zone while nothing is selected and a summary card
//! with a remove control once a file is picked or dropped. Window drag events
//! and picker results feed the [`DropZone`]; its outcomes drive the
//! [`SelectionController`], whose notifications leave the component as
//! [`Event::FileSelected`].

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::upload::{
    format_bytes, merge_refs, DropOutcome, DropZone, DropZoneOptions, FileInput, FileProbe,
    ForwardingRef, FsProbe, InputHandle, NotificationQueue, SelectedFile, SelectionConstraints,
    SelectionController,
};
use iced::font::Weight;
use iced::widget::text::Wrapping;
use iced::widget::{button, column, container, mouse_area, opaque, row, tooltip, Space, Text};
use iced::{mouse, Alignment, Element, Font, Length, Task};
use std::path::PathBuf;

/// Messages handled by the uploader.
#[derive(Debug, Clone)]
pub enum Message {
    /// The drop zone was clicked, either empty or around the file card.
    OpenPicker,
    /// The file dialog closed, with the chosen path unless cancelled.
    PickerClosed(Option<PathBuf>),
    FileHovered(PathBuf),
    FileDropped(PathBuf),
    FilesHoveredLeft,
    RemovePressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// The selection logically changed. `None` means it was cleared.
    FileSelected(Option<SelectedFile>),
}

/// What the selected-file card displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSummary {
    pub name: String,
    pub size_label: String,
}

/// Uploader state. Dropping it unmounts the component.
#[derive(Debug)]
pub struct State<P = FsProbe> {
    controller: SelectionController<NotificationQueue>,
    drop_zone: DropZone<P>,
    /// Drop zone revision last mirrored into the controller.
    synced_revision: u64,
    /// The picker input element shared by the drop zone and the reset bridge.
    input: InputHandle,
    input_binding: ForwardingRef,
}

impl State<FsProbe> {
    pub fn new(constraints: SelectionConstraints) -> Self {
        Self::with_probe(constraints, FsProbe)
    }
}

impl<P: FileProbe> State<P> {
    pub fn with_probe(constraints: SelectionConstraints, probe: P) -> Self {
        let options = DropZoneOptions {
            single_file: true,
            constraints,
        };
        let drop_zone = DropZone::with_probe(options, probe);
        let controller = SelectionController::new(NotificationQueue::new());

        let mut input_binding = merge_refs(
            controller.bridge().slot(),
            Some(drop_zone.input_ref_target()),
        );
        let input = FileInput::new();
        input_binding.attach(Some(input.clone()));

        Self {
            synced_revision: drop_zone.revision(),
            controller,
            drop_zone,
            input,
            input_binding,
        }
    }

    pub fn selected(&self) -> Option<&SelectedFile> {
        self.controller.selected()
    }

    pub fn constraints(&self) -> &SelectionConstraints {
        self.drop_zone.constraints()
    }

    #[must_use]
    pub fn is_drag_active(&self) -> bool {
        self.drop_zone.is_drag_active()
    }

    /// Current value of the picker input element.
    pub fn input_value(&self) -> Option<PathBuf> {
        self.input.value()
    }

    /// Name and formatted size of the selected file.
    pub fn summary(&self) -> Option<FileSummary> {
        self.selected().map(|file| FileSummary {
            name: file.name().to_string(),
            size_label: format_bytes(file.size_bytes()),
        })
    }

    /// Static hint under the call to action, e.g. "PDF (max 20 MB)".
    pub fn hint(&self, i18n: &I18n) -> String {
        let constraints = self.constraints();
        i18n.tr_with_args(
            "uploader-hint",
            &[
                ("types", constraints.type_label().as_str()),
                ("size", format_bytes(constraints.max_size_bytes()).as_str()),
            ],
        )
    }

    /// Swaps the constraints. The drop zone re-validates its list; any change
    /// is mirrored without telling the parent.
    pub fn set_constraints(&mut self, constraints: SelectionConstraints) {
        self.drop_zone.set_constraints(constraints);
        self.sync_from_drop_zone();
    }

    /// Unbinds the input element from every slot it was written to.
    pub fn unmount(mut self) {
        self.input_binding.detach();
    }

    pub fn update(&mut self, message: Message, i18n: &I18n) -> (Event, Task<Message>) {
        match message {
            Message::OpenPicker => (Event::None, self.open_picker(i18n)),
            Message::PickerClosed(path) => {
                let outcome = self.drop_zone.file_picked(path);
                (self.apply(outcome), Task::none())
            }
            Message::FileHovered(path) => {
                self.drop_zone.file_hovered(&path);
                (Event::None, Task::none())
            }
            Message::FileDropped(path) => {
                let outcome = self.drop_zone.file_dropped(path);
                (self.apply(outcome), Task::none())
            }
            Message::FilesHoveredLeft => {
                self.drop_zone.files_hovered_left();
                (Event::None, Task::none())
            }
            Message::RemovePressed => {
                self.controller.clear_selection();
                (self.take_event(), Task::none())
            }
        }
    }

    fn apply(&mut self, outcome: Option<DropOutcome>) -> Event {
        let Some(outcome) = outcome else {
            return Event::None;
        };
        self.controller.handle_drop_event(&outcome.accepted);
        self.sync_from_drop_zone();
        self.take_event()
    }

    fn sync_from_drop_zone(&mut self) {
        let revision = self.drop_zone.revision();
        if revision != self.synced_revision {
            self.synced_revision = revision;
            self.controller
                .sync_from_adapter_state(self.drop_zone.accepted_files());
        }
    }

    /// One message changes the selection at most once.
    fn take_event(&mut self) -> Event {
        self.controller
            .observer_mut()
            .drain()
            .pop()
            .map_or(Event::None, Event::FileSelected)
    }

    fn open_picker(&self, i18n: &I18n) -> Task<Message> {
        let filter_name = i18n.tr("uploader-dialog-filter");
        let extensions: Vec<String> = self
            .constraints()
            .extensions()
            .into_iter()
            .map(str::to_string)
            .collect();

        Task::perform(
            async move {
                let mut dialog = rfd::AsyncFileDialog::new();
                if !extensions.is_empty() {
                    dialog = dialog.add_filter(filter_name, &extensions);
                }
                dialog.pick_file().await.map(|handle| handle.path().to_path_buf())
            },
            Message::PickerClosed,
        )
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let zone = match self.selected() {
            None => self.view_empty(i18n),
            Some(file) => self.view_selected(file, i18n),
        };

        container(zone)
            .width(Length::Fill)
            .max_width(sizing::DROP_ZONE_MAX_WIDTH)
            .into()
    }

    fn view_empty<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let drag_active = self.is_drag_active();

        let call_to_action: Element<'a, Message> = if drag_active {
            Text::new(i18n.tr("uploader-drop-active"))
                .size(typography::BODY_LG)
                .into()
        } else {
            row![
                Text::new(i18n.tr("uploader-cta-strong"))
                    .size(typography::BODY_LG)
                    .font(Font {
                        weight: Weight::Bold,
                        ..Font::default()
                    }),
                Text::new(i18n.tr("uploader-cta-rest")).size(typography::BODY_LG),
            ]
            .spacing(spacing::XXS)
            .into()
        };

        let content = column![
            icons::sized(icons::upload(), sizing::ICON_LG),
            call_to_action,
            Text::new(self.hint(i18n)).size(typography::CAPTION),
        ]
        .spacing(spacing::SM)
        .align_x(Alignment::Center)
        .width(Length::Fill);

        button(content)
            .on_press(Message::OpenPicker)
            .padding(spacing::XL)
            .width(Length::Fill)
            .style(styles::button::drop_zone(drag_active))
            .into()
    }

    // The card swallows presses, so only the padding around it opens the
    // picker and remove never does.
    fn view_selected<'a>(&'a self, file: &'a SelectedFile, i18n: &'a I18n) -> Element<'a, Message> {
        let details = column![
            Text::new(file.name())
                .size(typography::BODY)
                .wrapping(Wrapping::None),
            Text::new(format_bytes(file.size_bytes())).size(typography::CAPTION),
        ]
        .spacing(spacing::XXS);

        let remove = tooltip(
            button(icons::sized(icons::cross(), sizing::ICON_SM))
                .on_press(Message::RemovePressed)
                .padding(spacing::XS)
                .style(styles::button::ghost),
            Text::new(i18n.tr("uploader-remove")),
            tooltip::Position::Bottom,
        )
        .gap(4);

        let card = container(
            row![
                icons::sized(icons::document(), sizing::ICON_MD),
                container(details)
                    .max_width(sizing::FILE_NAME_MAX_WIDTH)
                    .clip(true),
                Space::new().width(Length::Fill),
                remove,
            ]
            .spacing(spacing::SM)
            .align_y(Alignment::Center),
        )
        .padding(spacing::SM)
        .width(Length::Fill)
        .style(styles::container::file_card);

        let zone = container(opaque(card))
            .padding(spacing::MD)
            .width(Length::Fill)
            .style(styles::container::drop_zone(self.is_drag_active()));

        mouse_area(zone)
            .on_press(Message::OpenPicker)
            .interaction(mouse::Interaction::Pointer)
            .into()
    }
}
