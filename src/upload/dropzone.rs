// SPDX-License-Identifier: MPL-2.0
//! Drop zone: turns window drag events and picker results into gestures.
//!
//! Window systems report a multi-file drag one path at a time: every file is
//! first hovered, then dropped. The zone counts hovered paths and closes the
//! gesture once as many paths have been dropped. When a platform skips the
//! hover events, each drop is a gesture of its own.
//!
//! Each closed gesture is validated against the [`SelectionConstraints`] and
//! reported once as a [`DropOutcome`]. The zone also keeps its own list of
//! accepted files, versioned by a revision counter, for observers that
//! mirror it.

use super::constraints::{RejectionReason, SelectionConstraints};
use super::file::SelectedFile;
use super::input::{InputRef, RefTarget};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Reads the metadata the zone needs from a candidate path.
pub trait FileProbe {
    /// Size in bytes of a regular file.
    fn size_of(&self, path: &Path) -> io::Result<u64>;
}

/// Probe backed by the real file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe;

impl FileProbe for FsProbe {
    fn size_of(&self, path: &Path) -> io::Result<u64> {
        let metadata = fs::metadata(path)?;
        if metadata.is_dir() {
            return Err(io::Error::other("is a directory"));
        }
        Ok(metadata.len())
    }
}

/// A candidate that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedFile {
    pub path: PathBuf,
    pub reasons: Vec<RejectionReason>,
}

/// Result of one gesture, in drop order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropOutcome {
    pub accepted: Vec<SelectedFile>,
    pub rejected: Vec<RejectedFile>,
    /// Valid files past the first in a single-file zone. They are neither
    /// accepted nor rejected.
    pub ignored: Vec<SelectedFile>,
}

/// Registration options.
#[derive(Debug, Clone)]
pub struct DropZoneOptions {
    /// Keep only the first valid file of a gesture; the rest go to
    /// [`DropOutcome::ignored`].
    pub single_file: bool,
    pub constraints: SelectionConstraints,
}

impl Default for DropZoneOptions {
    fn default() -> Self {
        Self {
            single_file: true,
            constraints: SelectionConstraints::default(),
        }
    }
}

#[derive(Debug)]
pub struct DropZone<P = FsProbe> {
    options: DropZoneOptions,
    probe: P,
    /// The zone's own reference to the picker input element.
    input_ref: InputRef,
    hovered: usize,
    dropped: Vec<PathBuf>,
    accepted_files: Vec<SelectedFile>,
    revision: u64,
}

impl DropZone<FsProbe> {
    pub fn new(options: DropZoneOptions) -> Self {
        Self::with_probe(options, FsProbe)
    }
}

impl<P: FileProbe> DropZone<P> {
    pub fn with_probe(options: DropZoneOptions, probe: P) -> Self {
        Self {
            options,
            probe,
            input_ref: InputRef::new(),
            hovered: 0,
            dropped: Vec::new(),
            accepted_files: Vec::new(),
            revision: 0,
        }
    }

    pub fn constraints(&self) -> &SelectionConstraints {
        &self.options.constraints
    }

    #[must_use]
    pub fn is_single_file(&self) -> bool {
        self.options.single_file
    }

    /// Files accepted by the latest gesture or reprocessing pass.
    pub fn accepted_files(&self) -> &[SelectedFile] {
        &self.accepted_files
    }

    /// Bumped on every change of [`Self::accepted_files`].
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Whether files are currently dragged over the window.
    #[must_use]
    pub fn is_drag_active(&self) -> bool {
        self.hovered > 0
    }

    /// Reference target to merge with the consumer's own slot, so both point
    /// at the same input element.
    pub fn input_ref_target(&self) -> RefTarget {
        RefTarget::Cell(self.input_ref.clone())
    }

    pub fn file_hovered(&mut self, path: &Path) {
        tracing::trace!(path = %path.display(), "file hovered");
        self.hovered += 1;
    }

    /// The drag left the window without dropping anything.
    pub fn files_hovered_left(&mut self) {
        self.hovered = 0;
        self.dropped.clear();
    }

    /// Records one dropped path. Returns the outcome once the gesture is
    /// complete.
    pub fn file_dropped(&mut self, path: PathBuf) -> Option<DropOutcome> {
        self.dropped.push(path);
        if self.hovered > 0 && self.dropped.len() < self.hovered {
            return None;
        }

        self.hovered = 0;
        let paths = std::mem::take(&mut self.dropped);
        self.process(paths)
    }

    /// Handles the picker dialog result. A cancelled dialog is not a gesture.
    pub fn file_picked(&mut self, path: Option<PathBuf>) -> Option<DropOutcome> {
        let path = path?;
        self.process(vec![path])
    }

    /// Replaces the constraints and re-validates the accepted list.
    ///
    /// The list may change here without any gesture.
    pub fn set_constraints(&mut self, constraints: SelectionConstraints) {
        self.options.constraints = constraints;
        self.reprocess();
    }

    /// Re-validates the accepted list against the current constraints and
    /// file system, dropping files that no longer pass.
    pub fn reprocess(&mut self) {
        let paths: Vec<PathBuf> = self
            .accepted_files
            .iter()
            .map(|f| f.path().to_path_buf())
            .collect();
        let outcome = self.validate(paths);
        if outcome.accepted != self.accepted_files {
            log_rejections(&outcome.rejected);
            self.accepted_files = outcome.accepted;
            self.revision += 1;
        }
    }

    fn process(&mut self, paths: Vec<PathBuf>) -> Option<DropOutcome> {
        let first = paths.first()?;
        if let Some(input) = self.input_ref.get() {
            if !input.select(first) {
                tracing::debug!(path = %first.display(), "same path selected again, no change");
                return None;
            }
        }

        let outcome = self.validate(paths);
        log_rejections(&outcome.rejected);

        self.accepted_files = outcome.accepted.clone();
        self.revision += 1;
        Some(outcome)
    }

    fn validate(&self, paths: Vec<PathBuf>) -> DropOutcome {
        let constraints = &self.options.constraints;
        let mut outcome = DropOutcome::default();

        for path in paths {
            let size_bytes = match self.probe.size_of(&path) {
                Ok(size) => size,
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "cannot read dropped file");
                    outcome.rejected.push(RejectedFile {
                        path,
                        reasons: vec![RejectionReason::FileUnreadable(err.to_string())],
                    });
                    continue;
                }
            };

            let mime_type = constraints.mime_type_for(&path);
            let candidate = SelectedFile::new(path, size_bytes, mime_type);
            match constraints.check(&candidate) {
                Ok(()) => outcome.accepted.push(candidate),
                Err(reasons) => outcome.rejected.push(RejectedFile {
                    path: candidate.path().to_path_buf(),
                    reasons,
                }),
            }
        }

        if self.options.single_file && outcome.accepted.len() > 1 {
            outcome.ignored = outcome.accepted.split_off(1);
            tracing::debug!(
                ignored = outcome.ignored.len(),
                "single-file zone, keeping the first valid file"
            );
        }

        outcome
    }
}

fn log_rejections(rejected: &[RejectedFile]) {
    for file in rejected {
        let codes: Vec<&str> = file.reasons.iter().map(RejectionReason::code).collect();
        tracing::debug!(path = %file.path.display(), reasons = ?codes, "file rejected");
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::upload::constraints::DEFAULT_MAX_SIZE_BYTES;
    use crate::upload::input::{merge_refs, FileInput};
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    /// In-memory probe; paths without an entry are unreadable.
    #[derive(Debug, Clone, Default)]
    pub(crate) struct MemoryProbe {
        sizes: Rc<RefCell<HashMap<PathBuf, u64>>>,
    }

    impl MemoryProbe {
        pub(crate) fn with(self, path: &str, size: u64) -> Self {
            self.sizes.borrow_mut().insert(PathBuf::from(path), size);
            self
        }

        pub(crate) fn remove(&self, path: &str) {
            self.sizes.borrow_mut().remove(Path::new(path));
        }
    }

    impl FileProbe for MemoryProbe {
        fn size_of(&self, path: &Path) -> io::Result<u64> {
            self.sizes
                .borrow()
                .get(path)
                .copied()
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))
        }
    }

    fn zone(probe: MemoryProbe) -> DropZone<MemoryProbe> {
        DropZone::with_probe(DropZoneOptions::default(), probe)
    }

    #[test]
    fn picked_pdf_is_accepted() {
        let mut dz = zone(MemoryProbe::default().with("/docs/resume.pdf", 1024));

        let outcome = dz
            .file_picked(Some(PathBuf::from("/docs/resume.pdf")))
            .expect("pick should produce a gesture");

        assert_eq!(outcome.accepted.len(), 1);
        assert_eq!(outcome.accepted[0].mime_type(), "application/pdf");
        assert!(outcome.rejected.is_empty());
        assert_eq!(dz.accepted_files(), outcome.accepted.as_slice());
        assert_eq!(dz.revision(), 1);
    }

    #[test]
    fn cancelled_picker_is_not_a_gesture() {
        let mut dz = zone(MemoryProbe::default());
        assert!(dz.file_picked(None).is_none());
        assert_eq!(dz.revision(), 0);
    }

    #[test]
    fn oversized_and_wrong_type_files_are_rejected() {
        let mut dz = zone(
            MemoryProbe::default()
                .with("/docs/huge.pdf", DEFAULT_MAX_SIZE_BYTES + 1)
                .with("/docs/photo.png", 10),
        );

        let big = dz.file_picked(Some(PathBuf::from("/docs/huge.pdf"))).unwrap();
        assert!(big.accepted.is_empty());
        assert_eq!(big.rejected[0].reasons[0].code(), "file-too-large");

        let png = dz.file_picked(Some(PathBuf::from("/docs/photo.png"))).unwrap();
        assert!(png.accepted.is_empty());
        assert_eq!(png.rejected[0].reasons[0].code(), "file-invalid-type");
        assert!(dz.accepted_files().is_empty());
    }

    #[test]
    fn unreadable_file_is_rejected() {
        let mut dz = zone(MemoryProbe::default());
        let outcome = dz.file_picked(Some(PathBuf::from("/gone.pdf"))).unwrap();
        assert_eq!(outcome.rejected[0].reasons[0].code(), "file-unreadable");
    }

    #[test]
    fn multi_file_drag_is_one_gesture() {
        let mut dz = zone(
            MemoryProbe::default()
                .with("/a.pdf", 1)
                .with("/b.pdf", 2),
        );

        dz.file_hovered(Path::new("/a.pdf"));
        dz.file_hovered(Path::new("/b.pdf"));
        assert!(dz.is_drag_active());

        assert!(dz.file_dropped(PathBuf::from("/a.pdf")).is_none());
        let outcome = dz.file_dropped(PathBuf::from("/b.pdf")).unwrap();

        assert_eq!(outcome.accepted.len(), 1);
        assert_eq!(outcome.accepted[0].name(), "a.pdf");
        assert_eq!(outcome.ignored.len(), 1);
        assert_eq!(outcome.ignored[0].name(), "b.pdf");
        assert_eq!(dz.accepted_files(), outcome.accepted.as_slice());
        assert!(!dz.is_drag_active());
        assert_eq!(dz.revision(), 1);
    }

    #[test]
    fn multi_file_zone_keeps_every_valid_file() {
        let probe = MemoryProbe::default()
            .with("/a.pdf", 1)
            .with("/b.png", 2)
            .with("/c.pdf", 3);
        let options = DropZoneOptions {
            single_file: false,
            ..DropZoneOptions::default()
        };
        let mut dz = DropZone::with_probe(options, probe);
        assert!(!dz.is_single_file());

        for path in ["/a.pdf", "/b.png", "/c.pdf"] {
            dz.file_hovered(Path::new(path));
        }
        dz.file_dropped(PathBuf::from("/a.pdf"));
        dz.file_dropped(PathBuf::from("/b.png"));
        let outcome = dz.file_dropped(PathBuf::from("/c.pdf")).unwrap();

        let names: Vec<&str> = outcome.accepted.iter().map(SelectedFile::name).collect();
        assert_eq!(names, vec!["a.pdf", "c.pdf"]);
        assert_eq!(outcome.rejected.len(), 1);
        assert!(outcome.ignored.is_empty());
        assert_eq!(dz.accepted_files().len(), 2);
    }

    #[test]
    fn single_file_zone_skips_rejected_before_capping() {
        let mut dz = zone(
            MemoryProbe::default()
                .with("/photo.png", 1)
                .with("/a.pdf", 2)
                .with("/b.pdf", 3),
        );
        assert!(dz.is_single_file());

        for path in ["/photo.png", "/a.pdf", "/b.pdf"] {
            dz.file_hovered(Path::new(path));
        }
        dz.file_dropped(PathBuf::from("/photo.png"));
        dz.file_dropped(PathBuf::from("/a.pdf"));
        let outcome = dz.file_dropped(PathBuf::from("/b.pdf")).unwrap();

        assert_eq!(outcome.accepted[0].name(), "a.pdf");
        assert_eq!(outcome.rejected[0].path, PathBuf::from("/photo.png"));
        assert_eq!(outcome.ignored[0].name(), "b.pdf");
    }

    #[test]
    fn drop_without_hover_is_its_own_gesture() {
        let mut dz = zone(MemoryProbe::default().with("/a.pdf", 1));
        assert!(dz.file_dropped(PathBuf::from("/a.pdf")).is_some());
    }

    #[test]
    fn hover_left_discards_partial_gesture() {
        let mut dz = zone(MemoryProbe::default().with("/a.pdf", 1));
        dz.file_hovered(Path::new("/a.pdf"));
        dz.files_hovered_left();

        assert!(!dz.is_drag_active());
        assert_eq!(dz.revision(), 0);
    }

    #[test]
    fn bound_input_suppresses_identical_reselection() {
        let mut dz = zone(MemoryProbe::default().with("/a.pdf", 1));
        let local = InputRef::new();
        let mut forwarder = merge_refs(local.clone(), Some(dz.input_ref_target()));
        let element = FileInput::new();
        forwarder.attach(Some(element.clone()));

        assert!(dz.file_picked(Some(PathBuf::from("/a.pdf"))).is_some());
        assert!(dz.file_picked(Some(PathBuf::from("/a.pdf"))).is_none());

        element.clear();
        assert!(dz.file_picked(Some(PathBuf::from("/a.pdf"))).is_some());
    }

    #[test]
    fn unbound_input_treats_every_pick_as_change() {
        let mut dz = zone(MemoryProbe::default().with("/a.pdf", 1));
        assert!(dz.file_picked(Some(PathBuf::from("/a.pdf"))).is_some());
        assert!(dz.file_picked(Some(PathBuf::from("/a.pdf"))).is_some());
        assert_eq!(dz.revision(), 2);
    }

    #[test]
    fn tightening_constraints_reprocesses_list() {
        let mut dz = zone(MemoryProbe::default().with("/a.pdf", 4096));
        dz.file_picked(Some(PathBuf::from("/a.pdf")));
        assert_eq!(dz.accepted_files().len(), 1);

        dz.set_constraints(SelectionConstraints::default().with_max_size_bytes(1024));

        assert!(dz.accepted_files().is_empty());
        assert_eq!(dz.revision(), 2);
    }

    #[test]
    fn reprocess_without_change_keeps_revision() {
        let probe = MemoryProbe::default().with("/a.pdf", 10);
        let mut dz = zone(probe.clone());
        dz.file_picked(Some(PathBuf::from("/a.pdf")));

        dz.reprocess();
        assert_eq!(dz.revision(), 1);

        probe.remove("/a.pdf");
        dz.reprocess();
        assert_eq!(dz.revision(), 2);
        assert!(dz.accepted_files().is_empty());
    }
}
