// SPDX-License-Identifier: MPL-2.0
//! Single-file selection core, independent of any rendering.
//!
//! # Data flow
//!
//! ```text
//! window drag events / picker result
//!         │
//!         ▼
//!    DropZone ── validates against SelectionConstraints
//!         │  DropOutcome (accepted, rejected)
//!         ▼
//!    SelectionController ── notifies SelectionObserver once per change
//!         │
//!         └─ clear → InputResetBridge resets the FileInput
//! ```
//!
//! - [`file`] - `SelectedFile` and `SelectionState` values
//! - [`constraints`] - size and type allowlist
//! - [`dropzone`] - gesture assembly and validation
//! - [`controller`] - the selection state machine
//! - [`input`] - picker input element, reference slots, reset bridge
//! - [`size`] - byte size formatting

pub mod constraints;
pub mod controller;
pub mod dropzone;
pub mod file;
pub mod input;
pub mod size;

pub use constraints::{RejectionReason, SelectionConstraints, DEFAULT_MAX_SIZE_BYTES};
pub use controller::{NotificationQueue, SelectionController, SelectionObserver};
pub use dropzone::{DropOutcome, DropZone, DropZoneOptions, FileProbe, FsProbe, RejectedFile};
pub use file::{SelectedFile, SelectionState};
pub use input::{merge_refs, FileInput, ForwardingRef, InputHandle, InputRef, InputResetBridge, RefTarget};
pub use size::{format_bytes, format_size};
