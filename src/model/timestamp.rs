use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Timestamp forms the host and its older exports have been seen to emit.
/// Offsets are folded into UTC wall-clock time; naive forms are taken as-is.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y, %I:%M:%S %p",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

const HOST_TIMESTAMP_FORMAT: &str = "%m/%d/%Y %H:%M:%S";

pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let text = raw.trim();
    if text.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.naive_utc());
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, fmt) {
            return Some(dt);
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(text, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }
    None
}

/// Ordering key for a record: missing or unreadable timestamps sort as the epoch.
pub fn ordering_key(raw: Option<&str>) -> NaiveDateTime {
    raw.and_then(parse_timestamp).unwrap_or_default()
}

/// `MM/DD/YYYY`, or the input unchanged when it cannot be read as a date.
pub fn format_display_date(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    match parse_timestamp(raw) {
        Some(dt) => dt.format("%m/%d/%Y").to_string(),
        None => raw.to_string(),
    }
}

/// `MM/DD/YYYY hh:mm AM`, used for note timestamps.
pub fn format_display_datetime(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(dt) => dt.format("%m/%d/%Y %I:%M %p").to_string(),
        None => raw.to_string(),
    }
}

/// Converts a `YYYY-MM-DD` entry date to the host's `MM/DD/YYYY` form.
/// Anything else is passed through.
pub fn to_host_date(raw: &str) -> String {
    let parts: Vec<&str> = raw.split('-').collect();
    if parts.len() != 3 {
        return raw.to_string();
    }
    let parsed = (
        parts[0].trim().parse::<i32>(),
        parts[1].trim().parse::<u32>(),
        parts[2].trim().parse::<u32>(),
    );
    match parsed {
        (Ok(y), Ok(m), Ok(d)) => match NaiveDate::from_ymd_opt(y, m, d) {
            Some(date) => date.format("%m/%d/%Y").to_string(),
            None => raw.to_string(),
        },
        _ => raw.to_string(),
    }
}

pub fn format_host_timestamp(dt: NaiveDateTime) -> String {
    dt.format(HOST_TIMESTAMP_FORMAT).to_string()
}

/// ISO-8601 with millisecond precision and a `Z` suffix.
pub fn format_iso_millis(dt: DateTime<chrono::Utc>) -> String {
    dt.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/timestamp.rs"]
mod tests;
