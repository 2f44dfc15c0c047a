//! Display formatting for dates, previews, and plan usage.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const PREVIEW_CHARS: usize = 100;

/// Render a backend timestamp as `dd/mm/yyyy HH:MM`.
///
/// Accepts RFC 3339, naive `YYYY-MM-DDTHH:MM:SS[.fff]`, and bare dates
/// (shown at 00:00). Anything else is returned unchanged. Offsets are not
/// converted to the viewer's timezone.
pub fn format_datetime(raw: &str) -> String {
    const OUT: &str = "%d/%m/%Y %H:%M";
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(OUT).to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format(OUT).to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M") {
        return dt.format(OUT).to_string();
    }
    if let Some(dt) = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
    {
        return dt.format(OUT).to_string();
    }
    raw.to_owned()
}

/// Render a backend date as `dd/mm/yyyy`, or unchanged if unparseable.
pub fn format_date(raw: &str) -> String {
    let full = format_datetime(raw);
    match full.split_once(' ') {
        Some((date, _)) if full != raw.trim() => date.to_owned(),
        _ => full,
    }
}

/// First 100 characters of `text` followed by `...`.
pub fn preview(text: &str) -> String {
    let head: String = text.chars().take(PREVIEW_CHARS).collect();
    format!("{head}...")
}

/// Share of the monthly quota used, rounded to a whole percent.
///
/// A zero limit counts as one so a fresh account never divides by zero.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn usage_percent(used: u32, limit: u32) -> u32 {
    let limit = limit.max(1);
    (f64::from(used) / f64::from(limit) * 100.0).round() as u32
}

/// Progress bar width in percent, capped at 100.
pub fn usage_bar_width(used: u32, limit: u32) -> u32 {
    usage_percent(used, limit).min(100)
}
