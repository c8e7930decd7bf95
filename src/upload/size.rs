// SPDX-License-Identifier: MPL-2.0
//! Human-readable byte sizes for display.
//!
//! Sizes use binary multiples (1 KB = 1024 bytes). Values below 10 in their
//! unit keep one decimal, everything else is shown as a whole number. Plain
//! byte counts never carry decimals.

const UNIT: f64 = 1024.0;
const UNITS: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];

/// Formats a byte count, e.g. `1536.0` becomes `"1.5 KB"`.
///
/// Non-finite input (NaN, infinities) yields `"0 B"`. Negative values keep
/// their sign.
#[must_use]
pub fn format_size(bytes: f64) -> String {
    if bytes == 0.0 || !bytes.is_finite() {
        return "0 B".to_string();
    }

    let sign = if bytes < 0.0 { "-" } else { "" };
    let mut value = bytes.abs();
    let mut unit_index = 0;
    while value >= UNIT && unit_index < UNITS.len() - 1 {
        value /= UNIT;
        unit_index += 1;
    }

    if value >= 10.0 || unit_index == 0 {
        format!("{sign}{} {}", value.round(), UNITS[unit_index])
    } else {
        // f64::round goes half away from zero, so 1.25 shows as 1.3
        let tenths = (value * 10.0).round() / 10.0;
        format!("{sign}{tenths:.1} {}", UNITS[unit_index])
    }
}

/// Convenience wrapper for integral sizes such as file metadata lengths.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_bytes(bytes: u64) -> String {
    // Exact up to 2^53 bytes (8 PB).
    format_size(bytes as f64)
}
