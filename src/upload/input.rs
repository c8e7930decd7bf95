// SPDX-License-Identifier: MPL-2.0
//! The picker input element and the references that point at it.
//!
//! Like a native file input, [`FileInput`] remembers the last path it was
//! given and stays silent when handed the same path again. Clearing a
//! selection must therefore also clear the element, otherwise re-picking the
//! identical file goes unnoticed.
//!
//! Two parties need to reach the same element: the drop zone (to decide
//! whether a pick is a change) and the selection controller (to reset it).
//! [`merge_refs`] builds a forwarder that writes one element into both.

use std::cell::RefCell;
use std::fmt;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// The input element itself.
#[derive(Debug, Default)]
pub struct FileInput {
    value: RefCell<Option<PathBuf>>,
}

/// Shared handle to a live input element.
pub type InputHandle = Rc<FileInput>;

impl FileInput {
    #[must_use]
    pub fn new() -> InputHandle {
        Rc::new(Self::default())
    }

    /// Stores `path` as the current value.
    ///
    /// Returns `false` when the element already held this exact path, in
    /// which case no change event should be emitted.
    pub fn select(&self, path: &Path) -> bool {
        let mut value = self.value.borrow_mut();
        if value.as_deref() == Some(path) {
            return false;
        }
        *value = Some(path.to_path_buf());
        true
    }

    #[must_use]
    pub fn value(&self) -> Option<PathBuf> {
        self.value.borrow().clone()
    }

    pub fn clear(&self) {
        self.value.borrow_mut().take();
    }
}

/// Cell-style reference slot, bound to at most one element at a time.
///
/// Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct InputRef {
    slot: Rc<RefCell<Option<InputHandle>>>,
}

impl InputRef {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `element`, replacing any previous binding. `None` detaches.
    pub fn set(&self, element: Option<InputHandle>) {
        *self.slot.borrow_mut() = element;
    }

    #[must_use]
    pub fn get(&self) -> Option<InputHandle> {
        self.slot.borrow().clone()
    }

    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.slot.borrow().is_some()
    }
}

/// Where a forwarded element should also be written.
pub enum RefTarget {
    /// Called with every new binding (including `None` on detach).
    Callback(Box<dyn FnMut(Option<InputHandle>)>),
    /// Written in place.
    Cell(InputRef),
}

impl fmt::Debug for RefTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RefTarget::Callback(_) => f.write_str("RefTarget::Callback(..)"),
            RefTarget::Cell(slot) => f.debug_tuple("RefTarget::Cell").field(slot).finish(),
        }
    }
}

impl From<InputRef> for RefTarget {
    fn from(slot: InputRef) -> Self {
        RefTarget::Cell(slot)
    }
}

/// Forwarder produced by [`merge_refs`].
#[derive(Debug)]
pub struct ForwardingRef {
    local: InputRef,
    provided: Option<RefTarget>,
}

impl ForwardingRef {
    /// Writes `element` to the local slot, then to the provided target.
    pub fn attach(&mut self, element: Option<InputHandle>) {
        self.local.set(element.clone());
        match &mut self.provided {
            Some(RefTarget::Callback(callback)) => callback(element),
            Some(RefTarget::Cell(slot)) => slot.set(element),
            None => {}
        }
    }

    pub fn detach(&mut self) {
        self.attach(None);
    }
}

/// Combines a local slot with an externally owned reference so both observe
/// the same element. A missing external reference only feeds the local slot.
pub fn merge_refs(local: InputRef, provided: Option<RefTarget>) -> ForwardingRef {
    ForwardingRef { local, provided }
}

/// Resets the bound element so the next identical pick is seen as a change.
#[derive(Debug, Clone, Default)]
pub struct InputResetBridge {
    slot: InputRef,
}

impl InputResetBridge {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The slot this bridge resets; hand it to [`merge_refs`] as the local side.
    #[must_use]
    pub fn slot(&self) -> InputRef {
        self.slot.clone()
    }

    /// Clears the bound element's value.
    ///
    /// With no element bound (not mounted yet, or detached) this does
    /// nothing and returns `false`.
    pub fn reset(&self) -> bool {
        match self.slot.get() {
            Some(input) => {
                input.clear();
                true
            }
            None => {
                tracing::debug!("no input element bound, skipping reset");
                false
            }
        }
    }
}
