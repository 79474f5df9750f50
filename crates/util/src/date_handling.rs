//! # Date Handling Utilities
//!
//! Records carry dates as strings. This module recognises the common shapes
//! (RFC 3339 timestamps and plain `YYYY-MM-DD` / `YYYY/MM/DD` dates) so they
//! can be ordered chronologically and reformatted for display.

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

/// Returns true if a JSON key looks like a date field.
///
/// Checks for common date field patterns like suffixes (`_at`, `_on`,
/// `_date`) and specific field names (`created`, `updated`, `posted`).
///
/// # Example
/// ```rust
/// use tabview_util::date_handling::is_date_like_key;
///
/// assert!(is_date_like_key("created_at"));
/// assert!(is_date_like_key("Settlement Date"));
/// assert!(!is_date_like_key("amount"));
/// ```
pub fn is_date_like_key(key: &str) -> bool {
    let normalized_key = normalize_date_key(key);
    normalized_key.ends_with("_at")
        || normalized_key.ends_with("_on")
        || normalized_key.ends_with("_date")
        || matches!(normalized_key.as_str(), "date" | "created" | "updated" | "posted")
}

fn normalize_date_key(key: &str) -> String {
    key.to_ascii_lowercase()
        .replace([' ', '-'], "_")
        .replace("createdat", "created_at")
        .replace("updatedat", "updated_at")
}

/// Parses a date-like string into a naive UTC timestamp.
///
/// RFC 3339 timestamps are normalised to UTC; plain dates map to midnight.
/// Returns `None` for anything else, including impossible dates.
pub fn parse_date_like(date_string: &str) -> Option<NaiveDateTime> {
    let trimmed = date_string.trim();
    // Cheap rejection before trying the parsers: every accepted shape starts
    // with a four-digit year.
    if trimmed.len() < 10 || !trimmed.as_bytes()[..4].iter().all(u8::is_ascii_digit) {
        return None;
    }

    if let Ok(date_time) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(date_time.naive_utc());
    }

    ["%Y-%m-%d", "%Y/%m/%d"]
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
        .map(|date| date.and_time(NaiveTime::MIN))
}

/// Reformats a date-like string with a chrono pattern.
///
/// # Example
/// ```rust
/// use tabview_util::date_handling::format_date;
///
/// assert_eq!(format_date("2023-12-25T10:30:00Z", "%m/%d/%Y"), Some("12/25/2023".to_string()));
/// assert_eq!(format_date("2023/06/15", "%d %b %Y"), Some("15 Jun 2023".to_string()));
/// assert_eq!(format_date("invalid", "%Y"), None);
/// assert_eq!(format_date("2023-12-25", "%Y %z"), None);
/// ```
pub fn format_date(date_string: &str, pattern: &str) -> Option<String> {
    let date_time = parse_date_like(date_string)?;
    let mut out = String::new();
    write!(out, "{}", date_time.format(pattern)).ok()?;
    Some(out)
}

/// Whether `pattern` can render a parsed date.
///
/// Rejects unknown specifiers and a dangling `%`, and also specifiers that
/// need data a parsed date does not carry, such as the `%z` offset.
pub fn is_valid_date_pattern(pattern: &str) -> bool {
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return false;
    }
    let mut sink = String::new();
    write!(sink, "{}", NaiveDateTime::default().format(pattern)).is_ok()
}
