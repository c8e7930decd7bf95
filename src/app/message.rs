// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::uploader;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Uploader(uploader::Message),
    /// Hide the config warning banner.
    DismissWarning,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_UPLOADER_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional size limit in megabytes, overriding the config file.
    pub max_size_mb: Option<u32>,
}
