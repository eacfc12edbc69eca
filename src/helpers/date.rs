//! Date helper functions

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Serialize, Serializer};
use std::fmt;

/// Shown in place of a date that could not be parsed
pub const INVALID_DATE: &str = "Invalid date";

/// A post's calendar date, or a marker for a missing/unparsable one
///
/// Invalid dates order before every valid date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PostDate {
    Invalid,
    Valid(NaiveDateTime),
}

impl PostDate {
    /// Parse a raw metadata date; absent input is invalid
    pub fn parse(raw: Option<&str>) -> Self {
        raw.and_then(parse_date_string)
            .map(PostDate::Valid)
            .unwrap_or(PostDate::Invalid)
    }
}

impl fmt::Display for PostDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostDate::Valid(dt) => write!(f, "{}", dt.format("%Y-%m-%d")),
            PostDate::Invalid => f.write_str(INVALID_DATE),
        }
    }
}

impl Serialize for PostDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PostDate::Valid(dt) => {
                serializer.serialize_str(&dt.format("%Y-%m-%dT%H:%M:%S").to_string())
            }
            PostDate::Invalid => serializer.serialize_none(),
        }
    }
}

/// Format a date string in long US style (like "January 5, 2021")
///
/// Never fails: unparsable input yields "Invalid date".
pub fn format_display_date(date: &str) -> String {
    match PostDate::parse(Some(date)) {
        PostDate::Valid(dt) => dt.format("%B %-d, %Y").to_string(),
        PostDate::Invalid => INVALID_DATE.to_string(),
    }
}

/// Timestamp line shown above a post; empty when the post has no date
pub fn post_timestamp(date: Option<&str>) -> String {
    match date {
        Some(date) if !date.is_empty() => format_display_date(date),
        _ => String::new(),
    }
}

/// Parse a date string in various formats, keeping its wall-clock time
fn parse_date_string(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
    ];

    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    // Numeric offsets are dropped, not applied
    let offset_formats = [
        "%Y-%m-%d %H:%M:%S %z",
        "%Y-%m-%d %H:%M:%S%z",
        "%Y-%m-%dT%H:%M:%S%.f%z",
        "%Y-%m-%d %H:%M %z",
    ];

    for fmt in offset_formats {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Some(dt.naive_local());
        }
    }

    let date_formats = [
        "%Y-%m-%d",
        "%Y/%m/%d",
        "%B %d, %Y",
        "%b %d, %Y",
        "%B %d %Y",
        "%b %d %Y",
    ];

    for fmt in date_formats {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }

    parse_partial_date(s)
}

/// `YYYY` or `YYYY-MM`, taken as the first day of that year or month
fn parse_partial_date(s: &str) -> Option<NaiveDateTime> {
    let mut parts = s.splitn(2, '-');
    let year = parts.next().filter(|y| y.len() == 4)?;
    let month = parts.next().unwrap_or("1");

    if !year.chars().all(|c| c.is_ascii_digit())
        || month.is_empty()
        || month.len() > 2
        || !month.chars().all(|c| c.is_ascii_digit())
    {
        return None;
    }

    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)?.and_hms_opt(0, 0, 0)
}
