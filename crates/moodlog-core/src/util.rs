//! Shared date/text helpers used across multiple modules.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

/// Parse a timestamp in any of the shapes the remote table or user input
/// produces: RFC 3339, offset-less `timestamp`, or a bare date.
///
/// Returns epoch milliseconds; offset-less values are read as UTC.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<i64> {
    let raw = raw.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.timestamp_millis());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(parsed.and_utc().timestamp_millis());
        }
    }
    if let Ok(parsed) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(parsed.and_hms_opt(0, 0, 0)?.and_utc().timestamp_millis());
    }

    None
}

/// Render epoch milliseconds as an RFC 3339 timestamp for the remote table.
#[must_use]
pub fn format_timestamp(timestamp_ms: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(timestamp_ms).map_or_else(
        || timestamp_ms.to_string(),
        |parsed| parsed.to_rfc3339_opts(SecondsFormat::Millis, true),
    )
}

/// Render epoch milliseconds as a calendar date (UTC) for display.
#[must_use]
pub fn format_date(timestamp_ms: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(timestamp_ms).map_or_else(
        || timestamp_ms.to_string(),
        |parsed| parsed.format("%Y-%m-%d").to_string(),
    )
}

/// Inclusive epoch-millisecond bounds of one calendar month (UTC).
///
/// Returns `None` for out-of-range months.
#[must_use]
pub fn month_range(year: i32, month: u32) -> Option<(i64, i64)> {
    let begin = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };

    let begin_ms = begin.and_hms_opt(0, 0, 0)?.and_utc().timestamp_millis();
    let end_ms = next.and_hms_opt(0, 0, 0)?.and_utc().timestamp_millis() - 1;
    Some((begin_ms, end_ms))
}

/// Truncate text to at most 180 characters for error messages.
#[must_use]
pub fn compact_text(value: &str) -> String {
    value.trim().chars().take(180).collect()
}
