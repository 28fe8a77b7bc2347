//! Headline records and timestamp parsing.

use crate::month::MonthKey;
use crate::sentiment::Sentiment;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Offset-aware formats, interpreted in their own wall-clock time.
const OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%z", "%Y-%m-%dT%H:%M:%S%.f%z"];

/// Naive date-time formats.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// One labeled headline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadlineRecord {
    /// Publication timestamp (wall-clock time of the source)
    pub published: NaiveDateTime,

    /// Headline text, absent when the source row had none
    pub headline: Option<String>,

    /// Precomputed sentiment label
    pub sentiment: Sentiment,
}

impl HeadlineRecord {
    /// Create a new record.
    pub const fn new(
        published: NaiveDateTime,
        headline: Option<String>,
        sentiment: Sentiment,
    ) -> Self {
        Self {
            published,
            headline,
            sentiment,
        }
    }

    /// Month the headline was published in.
    pub fn month(&self) -> MonthKey {
        MonthKey::from_datetime(&self.published)
    }

    /// Headline text if present and not blank.
    pub fn text(&self) -> Option<&str> {
        self.headline
            .as_deref()
            .filter(|text| !text.trim().is_empty())
    }
}

/// Parse a publication timestamp.
///
/// Accepts RFC 3339, `+HHMM` offsets, space or `T` separated naive
/// date-times, and bare dates (midnight). Offset-aware values keep their
/// local wall-clock time.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }
    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(value, format) {
            return Some(dt.naive_local());
        }
    }
    for format in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}
