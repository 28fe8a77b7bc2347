//! Calendar month keys and inclusive month ranges.

use crate::error::{DataError, Result};
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A (year, month) pair used as the grouping key for headlines.
///
/// Ordering is chronological. The textual form is `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    /// Create a month key, returning `None` if `month` is not in `1..=12`.
    pub const fn new(year: i32, month: u32) -> Option<Self> {
        if month >= 1 && month <= 12 {
            Some(Self { year, month })
        } else {
            None
        }
    }

    /// Month of a publication timestamp.
    pub fn from_datetime(timestamp: &NaiveDateTime) -> Self {
        Self {
            year: timestamp.year(),
            month: timestamp.month(),
        }
    }

    /// Calendar year.
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Calendar month, `1..=12`.
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// The following month.
    pub const fn succ(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Human readable label such as `January 2024`.
    pub fn label(&self) -> String {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .map_or_else(|| self.to_string(), |d| d.format("%B %Y").to_string())
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || DataError::InvalidMonth(s.to_string());
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.is_empty() || month.len() > 2 {
            return Err(invalid());
        }
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month).ok_or_else(invalid)
    }
}

impl TryFrom<String> for MonthKey {
    type Error = DataError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<MonthKey> for String {
    fn from(key: MonthKey) -> Self {
        key.to_string()
    }
}

/// Inclusive range of months a dataset supports.
///
/// Deserialization goes through [`MonthRange::new`], so an inverted range
/// is rejected at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RangeBounds")]
pub struct MonthRange {
    /// First supported month
    pub start: MonthKey,
    /// Last supported month
    pub end: MonthKey,
}

#[derive(Deserialize)]
struct RangeBounds {
    start: MonthKey,
    end: MonthKey,
}

impl TryFrom<RangeBounds> for MonthRange {
    type Error = DataError;

    fn try_from(bounds: RangeBounds) -> Result<Self> {
        Self::new(bounds.start, bounds.end)
    }
}

impl MonthRange {
    /// Create a range, rejecting `start > end`.
    pub fn new(start: MonthKey, end: MonthKey) -> Result<Self> {
        if start > end {
            return Err(DataError::InvalidRange {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self { start, end })
    }

    /// Returns true if `month` lies within the range.
    pub fn contains(&self, month: MonthKey) -> bool {
        self.start <= month && month <= self.end
    }

    /// Returns true if the range is well formed.
    pub fn is_valid(&self) -> bool {
        self.start <= self.end
    }

    /// Every month in the range, in order.
    pub fn months(&self) -> Vec<MonthKey> {
        let mut months = Vec::new();
        let mut current = self.start;
        while current <= self.end {
            months.push(current);
            current = current.succ();
        }
        months
    }
}

impl Default for MonthRange {
    fn default() -> Self {
        Self {
            start: MonthKey {
                year: 2024,
                month: 1,
            },
            end: MonthKey {
                year: 2025,
                month: 3,
            },
        }
    }
}

impl fmt::Display for MonthRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}
