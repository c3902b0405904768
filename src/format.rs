//! Display helpers for file sizes and timestamps.

use chrono::{DateTime, NaiveDateTime};

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Human-readable size with 1024-based units and at most two decimals.
///
/// `0` renders as `"0 Bytes"`; sizes beyond the GB range stay in GB.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = format!("{:.2}", value);
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, SIZE_UNITS[unit])
}

/// Render an ISO-8601 timestamp as `YYYY/MM/DD HH:MM`.
///
/// Accepts RFC 3339 with an offset as well as naive timestamps with or
/// without fractional seconds. Returns `None` for anything else.
pub fn format_date(timestamp: &str) -> Option<String> {
    const DISPLAY: &str = "%Y/%m/%d %H:%M";

    if let Ok(dt) = DateTime::parse_from_rfc3339(timestamp) {
        return Some(dt.format(DISPLAY).to_string());
    }
    NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.format(DISPLAY).to_string())
}
