// SPDX-License-Identifier: MPL-2.0
//! `iced_uploader` is a single-file document uploader built with the Iced GUI
//! framework.
//!
//! The selection core in [`upload`] is free of rendering: it validates
//! picked or dropped files, keeps at most one of them, and tells its observer
//! exactly once per change. [`ui`] renders it, and [`app`] hosts it in a
//! window with Fluent localization and a TOML config file.

#![doc(html_root_url = "https://docs.rs/iced_uploader/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod ui;
pub mod upload;
