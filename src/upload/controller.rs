// SPDX-License-Identifier: MPL-2.0
//! Single-file selection state machine.
//!
//! The drop zone reports one logical change through two paths:
//!
//! 1. [`SelectionController::handle_drop_event`] runs once per gesture with
//!    the accepted files. This is the **only** path that notifies the
//!    observer.
//! 2. [`SelectionController::sync_from_adapter_state`] runs whenever the drop
//!    zone's own accepted-files list changes, which includes right after
//!    every drop. It mirrors the list into the state and **never** notifies,
//!    otherwise each drop would reach the observer twice.
//!
//! A list change that does not come with a drop event is therefore mirrored
//! silently. That asymmetry is intentional; do not add a notification to the
//! sync path.

use super::file::{SelectedFile, SelectionState};
use super::input::InputResetBridge;

/// Receives the selection every time it logically changes.
pub trait SelectionObserver {
    fn on_file_select(&mut self, file: Option<&SelectedFile>);
}

impl<F> SelectionObserver for F
where
    F: FnMut(Option<&SelectedFile>),
{
    fn on_file_select(&mut self, file: Option<&SelectedFile>) {
        self(file);
    }
}

/// Queues notifications for callers that drain them later, such as an
/// Elm-style component turning them into events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationQueue {
    pending: Vec<Option<SelectedFile>>,
}

impl NotificationQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_slice(&self) -> &[Option<SelectedFile>] {
        &self.pending
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Takes every queued notification, oldest first.
    pub fn drain(&mut self) -> Vec<Option<SelectedFile>> {
        std::mem::take(&mut self.pending)
    }
}

impl SelectionObserver for NotificationQueue {
    fn on_file_select(&mut self, file: Option<&SelectedFile>) {
        self.pending.push(file.cloned());
    }
}

/// Owns the selection and decides when the observer hears about it.
#[derive(Debug)]
pub struct SelectionController<O> {
    state: SelectionState,
    /// The value the observer was last told about.
    observed: Option<SelectedFile>,
    bridge: InputResetBridge,
    observer: O,
}

impl<O: SelectionObserver> SelectionController<O> {
    pub fn new(observer: O) -> Self {
        Self::with_bridge(observer, InputResetBridge::new())
    }

    pub fn with_bridge(observer: O, bridge: InputResetBridge) -> Self {
        Self {
            state: SelectionState::Empty,
            observed: None,
            bridge,
            observer,
        }
    }

    #[must_use]
    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    #[must_use]
    pub fn selected(&self) -> Option<&SelectedFile> {
        self.state.file()
    }

    #[must_use]
    pub fn bridge(&self) -> &InputResetBridge {
        &self.bridge
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Applies one drop or pick gesture.
    ///
    /// Only the first accepted file is kept; the rest are ignored without
    /// any rejection signal. An empty list clears the selection. Returns
    /// whether the observer was notified.
    pub fn handle_drop_event(&mut self, accepted: &[SelectedFile]) -> bool {
        if accepted.len() > 1 {
            tracing::debug!(
                ignored = accepted.len() - 1,
                "single-file selection, keeping the first file"
            );
        }

        let next = SelectionState::from_first(accepted);
        let changed = next != self.state;
        let stale = next.file() != self.observed.as_ref();
        self.state = next;

        if changed || stale {
            self.notify();
            true
        } else {
            false
        }
    }

    /// Mirrors the drop zone's accepted-files list. Never notifies.
    pub fn sync_from_adapter_state(&mut self, current_accepted: &[SelectedFile]) {
        let next = SelectionState::from_first(current_accepted);
        if next != self.state {
            tracing::trace!(selected = ?next.file().map(SelectedFile::name), "selection mirrored");
            self.state = next;
        }
    }

    /// Drops the selection and resets the input element.
    ///
    /// Safe to call at any time. The observer hears `None` when a selection
    /// is dropped or when it still holds a file, so clearing twice notifies
    /// once. Returns whether the observer was notified.
    pub fn clear_selection(&mut self) -> bool {
        let was_selected = !self.state.is_empty();
        self.state = SelectionState::Empty;
        self.bridge.reset();

        if was_selected || self.observed.is_some() {
            self.notify();
            true
        } else {
            false
        }
    }

    fn notify(&mut self) {
        self.observed = self.state.file().cloned();
        match &self.observed {
            Some(file) => tracing::debug!(
                name = file.name(),
                size_bytes = file.size_bytes(),
                "file selected"
            ),
            None => tracing::debug!("selection cleared"),
        }
        self.observer.on_file_select(self.state.file());
    }
}
