// SPDX-License-Identifier: MPL-2.0
//! Acceptance rules for candidate files.
//!
//! A candidate passes when its size does not exceed the configured maximum
//! and its type is allowed. Either the MIME type or the extension may match.

use super::file::SelectedFile;
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

/// Default maximum size: 20 MB.
pub const DEFAULT_MAX_SIZE_BYTES: u64 = 20 * 1024 * 1024;

/// MIME type reported for files whose extension is not recognized.
pub const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

/// Why a candidate was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectionReason {
    /// Declared size exceeds the limit.
    FileTooLarge { size_bytes: u64, max_size_bytes: u64 },
    /// Neither MIME type nor extension is on the allowlist.
    FileInvalidType { mime_type: String },
    /// Metadata could not be read (vanished file, permissions, directory).
    FileUnreadable(String),
}

impl RejectionReason {
    /// Stable machine-readable code for this reason.
    pub fn code(&self) -> &'static str {
        match self {
            RejectionReason::FileTooLarge { .. } => "file-too-large",
            RejectionReason::FileInvalidType { .. } => "file-invalid-type",
            RejectionReason::FileUnreadable(_) => "file-unreadable",
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectionReason::FileTooLarge {
                size_bytes,
                max_size_bytes,
            } => write!(f, "File is {size_bytes} bytes, larger than {max_size_bytes}"),
            RejectionReason::FileInvalidType { mime_type } => {
                write!(f, "File type must be an accepted type, got {mime_type}")
            }
            RejectionReason::FileUnreadable(msg) => write!(f, "File is unreadable: {msg}"),
        }
    }
}

/// Size and type limits applied to every candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionConstraints {
    max_size_bytes: u64,
    /// MIME type → extensions (stored lowercase, without leading dot).
    accepted_types: BTreeMap<String, Vec<String>>,
}

impl Default for SelectionConstraints {
    fn default() -> Self {
        let mut accepted_types = BTreeMap::new();
        accepted_types.insert("application/pdf".to_string(), vec!["pdf".to_string()]);
        Self {
            max_size_bytes: DEFAULT_MAX_SIZE_BYTES,
            accepted_types,
        }
    }
}

impl SelectionConstraints {
    /// Builds constraints from a MIME → extensions map.
    ///
    /// Extensions may be given as `".pdf"` or `"pdf"`; they are normalized.
    /// A zero maximum is raised to one byte so the limit stays positive.
    pub fn new<I, M, E>(max_size_bytes: u64, accepted_types: I) -> Self
    where
        I: IntoIterator<Item = (M, Vec<E>)>,
        M: Into<String>,
        E: AsRef<str>,
    {
        let accepted_types = accepted_types
            .into_iter()
            .map(|(mime, exts)| {
                let exts = exts
                    .iter()
                    .map(|e| normalize_extension(e.as_ref()))
                    .filter(|e| !e.is_empty())
                    .collect();
                let mime: String = mime.into();
                (mime.to_ascii_lowercase(), exts)
            })
            .collect();
        Self {
            max_size_bytes: max_size_bytes.max(1),
            accepted_types,
        }
    }

    #[must_use]
    pub fn max_size_bytes(&self) -> u64 {
        self.max_size_bytes
    }

    #[must_use]
    pub fn with_max_size_bytes(mut self, max_size_bytes: u64) -> Self {
        self.max_size_bytes = max_size_bytes.max(1);
        self
    }

    pub fn accepted_types(&self) -> &BTreeMap<String, Vec<String>> {
        &self.accepted_types
    }

    /// All accepted extensions in map order, without duplicates.
    pub fn extensions(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for ext in self.accepted_types.values().flatten() {
            if !out.contains(&ext.as_str()) {
                out.push(ext.as_str());
            }
        }
        out
    }

    /// Short label for the accepted types, e.g. `"PDF"` or `"PDF, DOCX"`.
    #[must_use]
    pub fn type_label(&self) -> String {
        self.extensions()
            .iter()
            .map(|e| e.to_ascii_uppercase())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Whether a MIME type is allowed. Supports `type/*` wildcards.
    #[must_use]
    pub fn accepts_mime(&self, mime_type: &str) -> bool {
        let mime_type = mime_type.to_ascii_lowercase();
        self.accepted_types.keys().any(|accepted| {
            match accepted.strip_suffix("/*") {
                Some(family) => mime_type
                    .split_once('/')
                    .is_some_and(|(base, _)| base == family),
                None => *accepted == mime_type,
            }
        })
    }

    #[must_use]
    pub fn accepts_extension(&self, extension: &str) -> bool {
        let extension = normalize_extension(extension);
        self.accepted_types
            .values()
            .flatten()
            .any(|e| *e == extension)
    }

    /// Resolves the MIME type of a path from its extension.
    ///
    /// Configured types win over `mime_guess` so custom allowlists report the
    /// MIME type they were declared with.
    #[must_use]
    pub fn mime_type_for(&self, path: &Path) -> String {
        let Some(ext) = path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
        else {
            return FALLBACK_MIME_TYPE.to_string();
        };

        self.accepted_types
            .iter()
            .find(|(mime, exts)| !mime.ends_with("/*") && exts.contains(&ext))
            .map(|(mime, _)| mime.clone())
            .or_else(|| mime_guess::from_path(path).first_raw().map(str::to_string))
            .unwrap_or_else(|| FALLBACK_MIME_TYPE.to_string())
    }

    /// Checks a candidate, returning every reason it fails.
    pub fn check(&self, file: &SelectedFile) -> Result<(), Vec<RejectionReason>> {
        let mut reasons = Vec::new();

        let type_ok = self.accepts_mime(file.mime_type())
            || file
                .extension()
                .is_some_and(|ext| self.accepts_extension(&ext));
        if !type_ok {
            reasons.push(RejectionReason::FileInvalidType {
                mime_type: file.mime_type().to_string(),
            });
        }

        if file.size_bytes() > self.max_size_bytes {
            reasons.push(RejectionReason::FileTooLarge {
                size_bytes: file.size_bytes(),
                max_size_bytes: self.max_size_bytes,
            });
        }

        if reasons.is_empty() {
            Ok(())
        } else {
            Err(reasons)
        }
    }
}

fn normalize_extension(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_ascii_lowercase()
}
