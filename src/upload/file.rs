// SPDX-License-Identifier: MPL-2.0
//! Selection value types.

use std::path::{Path, PathBuf};

/// A file chosen by the user.
///
/// Immutable once built: a new selection replaces the value wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    path: PathBuf,
    name: String,
    size_bytes: u64,
    mime_type: String,
}

impl SelectedFile {
    /// Builds a file value, taking its display name from the last path
    /// component.
    pub fn new(path: impl Into<PathBuf>, size_bytes: u64, mime_type: impl Into<String>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        Self {
            path,
            name,
            size_bytes,
            mime_type: mime_type.into(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    #[must_use]
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Lowercased extension without the leading dot, if any.
    #[must_use]
    pub fn extension(&self) -> Option<String> {
        self.path
            .extension()
            .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
    }
}

/// What the widget currently holds.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    Empty,
    Selected(SelectedFile),
}

impl SelectionState {
    /// State mirroring the first file of a list, ignoring the rest.
    #[must_use]
    pub fn from_first(files: &[SelectedFile]) -> Self {
        files
            .first()
            .cloned()
            .map_or(SelectionState::Empty, SelectionState::Selected)
    }

    #[must_use]
    pub fn file(&self) -> Option<&SelectedFile> {
        match self {
            SelectionState::Empty => None,
            SelectionState::Selected(file) => Some(file),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, SelectionState::Empty)
    }
}
