// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[upload]` - Maximum file size and accepted types
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` or set `ICED_UPLOADER_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_uploader::config;
//!
//! let (mut config, _warning) = config::load();
//! config.upload.max_size_mb = Some(50);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::upload::SelectionConstraints;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Warning key returned when an existing config file cannot be parsed.
pub const CONFIG_LOAD_WARNING: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Upload acceptance settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UploadConfig {
    /// Largest accepted file, in megabytes.
    #[serde(default = "default_max_size_mb", skip_serializing_if = "Option::is_none")]
    pub max_size_mb: Option<u32>,

    /// MIME type → accepted extensions, e.g. `"application/pdf" = [".pdf"]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accepted_types: Option<BTreeMap<String, Vec<String>>>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_size_mb: default_max_size_mb(),
            accepted_types: None,
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub upload: UploadConfig,
}

impl Config {
    /// Maximum size in megabytes, clamped to the supported range.
    #[must_use]
    pub fn max_size_mb(&self) -> u32 {
        clamp_max_size_mb(self.upload.max_size_mb.unwrap_or(DEFAULT_MAX_SIZE_MB))
    }

    /// Builds the selection constraints described by this config.
    ///
    /// An absent or empty type table keeps the PDF-only default.
    #[must_use]
    pub fn constraints(&self) -> SelectionConstraints {
        let max_size_bytes = u64::from(self.max_size_mb()) * BYTES_PER_MB;
        match &self.upload.accepted_types {
            Some(types) if !types.is_empty() => {
                SelectionConstraints::new(max_size_bytes, types.clone())
            }
            _ => SelectionConstraints::default().with_max_size_bytes(max_size_bytes),
        }
    }
}

/// Keeps size limits inside the supported range so a hand-edited config
/// cannot request a zero or absurd limit.
#[must_use]
pub fn clamp_max_size_mb(value: u32) -> u32 {
    value.clamp(MIN_MAX_SIZE_MB, MAX_MAX_SIZE_MB)
}

fn default_max_size_mb() -> Option<u32> {
    Some(DEFAULT_MAX_SIZE_MB)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default config");
                    return (Config::default(), Some(CONFIG_LOAD_WARNING.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
