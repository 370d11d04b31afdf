//! Shared utility functions used across the Brewlog crates.

use crate::{BrewLogError, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Wire format of entry dates.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses an ISO-8601 calendar date.
///
/// Plain `YYYY-MM-DD` is the expected form. RFC 3339 timestamps and naive
/// `YYYY-MM-DDTHH:MM:SS` timestamps are accepted too, keeping their calendar
/// date as written.
pub fn parse_iso_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, ISO_DATE_FORMAT) {
        return Ok(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(timestamp.date_naive());
    }

    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S")
        .map(|timestamp| timestamp.date())
        .map_err(|e| BrewLogError::parse_with_source(format!("Invalid date '{trimmed}'"), e))
}

/// Formats a date the way it travels on the wire.
#[must_use]
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

/// `count / total`, or `0.0` when `total` is zero.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn ratio(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}

/// Truncates a string to a maximum number of characters with ellipsis.
#[must_use]
pub fn truncate_string(input: &str, max_chars: usize) -> String {
    if input.chars().count() <= max_chars {
        input.to_string()
    } else {
        let kept: String = input.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

/// Excerpt of at most `max_chars` characters that keeps the first
/// case-insensitive occurrence of `needle` in view.
///
/// Falls back to [`truncate_string`] when the needle is empty, absent, or
/// already inside the leading excerpt.
#[must_use]
pub fn excerpt_around(input: &str, needle: &str, max_chars: usize) -> String {
    let chars: Vec<char> = input.chars().collect();
    if chars.len() <= max_chars {
        return input.to_string();
    }
    let Some(hit) = find_ignore_case(input, needle) else {
        return truncate_string(input, max_chars);
    };

    let body = max_chars.saturating_sub(6);
    let lead = body.saturating_sub(needle.chars().count()) / 2;
    let start = hit.saturating_sub(lead);
    if start == 0 {
        return truncate_string(input, max_chars);
    }

    let tail = max_chars.saturating_sub(3);
    if start + tail >= chars.len() {
        let kept: String = chars[chars.len() - tail..].iter().collect();
        return format!("...{kept}");
    }
    let kept: String = chars[start..start + body].iter().collect();
    format!("...{kept}...")
}

/// Character index of the first case-insensitive occurrence of `needle`.
fn find_ignore_case(haystack: &str, needle: &str) -> Option<usize> {
    let needle = needle.to_lowercase();
    if needle.is_empty() {
        return None;
    }
    haystack
        .char_indices()
        .position(|(byte, _)| haystack[byte..].to_lowercase().starts_with(&needle))
}

/// Serde adapter for [`NaiveDate`] fields stored as ISO-8601 strings.
pub mod iso_date {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    /// Serializes as `YYYY-MM-DD`.
    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_iso_date(*date))
    }

    /// Deserializes with [`super::parse_iso_date`].
    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_iso_date(&raw).map_err(de::Error::custom)
    }
}

/// Serde adapter for optional categories where a blank string means absent.
pub mod blank_as_none {
    use serde::{Deserialize, Deserializer};

    /// Deserializes `null`, `""` and whitespace-only strings to `None`.
    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: From<String>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw
            .filter(|value| !value.trim().is_empty())
            .map(T::from))
    }
}
