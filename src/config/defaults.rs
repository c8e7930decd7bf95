// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Upload**: Maximum file size bounds
//! - **Locale**: Fallback language

// ==========================================================================
// Upload Defaults
// ==========================================================================

/// Default maximum file size in megabytes.
pub const DEFAULT_MAX_SIZE_MB: u32 = 20;

/// Minimum allowed maximum file size in megabytes.
pub const MIN_MAX_SIZE_MB: u32 = 1;

/// Maximum allowed maximum file size in megabytes.
pub const MAX_MAX_SIZE_MB: u32 = 1024;

/// Bytes per configured megabyte.
pub const BYTES_PER_MB: u64 = 1024 * 1024;

// ==========================================================================
// Locale Defaults
// ==========================================================================

/// Locale used when neither CLI, config, nor OS provide a supported one.
pub const DEFAULT_LOCALE: &str = "en-US";
