//! Immutable, validated collection of headline records.

use crate::month::{MonthKey, MonthRange};
use crate::record::HeadlineRecord;
use polars::prelude::*;
use std::collections::BTreeSet;

/// Ordered headline records, read-only after load.
///
/// A dataset may carry the month range it was restricted to; month filters
/// treat months outside that range as empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<HeadlineRecord>,
    range: Option<MonthRange>,
}

impl Dataset {
    /// Create a dataset from already validated records.
    pub const fn new(records: Vec<HeadlineRecord>) -> Self {
        Self {
            records,
            range: None,
        }
    }

    /// Create an empty dataset with the same supported range.
    pub const fn empty_like(&self) -> Self {
        Self {
            records: Vec::new(),
            range: self.range,
        }
    }

    /// Keep only records inside `range` and remember it as the supported range.
    pub fn restrict_to(self, range: MonthRange) -> Self {
        let before = self.records.len();
        let records: Vec<_> = self
            .records
            .into_iter()
            .filter(|r| range.contains(r.month()))
            .collect();
        log::debug!(
            "Restricted dataset to {}: kept {} of {} records",
            range,
            records.len(),
            before
        );
        Self {
            records,
            range: Some(range),
        }
    }

    /// Build a dataset that keeps this one's range, from a subset of records.
    pub(crate) const fn with_records(&self, records: Vec<HeadlineRecord>) -> Self {
        Self {
            records,
            range: self.range,
        }
    }

    /// Supported month range, if the dataset was restricted.
    pub const fn range(&self) -> Option<MonthRange> {
        self.range
    }

    /// Returns true if `month` can be selected from this dataset.
    pub fn supports(&self, month: MonthKey) -> bool {
        self.range.is_none_or(|range| range.contains(month))
    }

    /// Records in original order.
    pub fn records(&self) -> &[HeadlineRecord] {
        &self.records
    }

    /// Iterate over records in original order.
    pub fn iter(&self) -> std::slice::Iter<'_, HeadlineRecord> {
        self.records.iter()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if there are no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Keep the records matching `predicate`, preserving order and range.
    pub fn filter<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&HeadlineRecord) -> bool,
    {
        self.with_records(
            self.records
                .iter()
                .filter(|r| predicate(r))
                .cloned()
                .collect(),
        )
    }

    /// Distinct months present in the data, sorted chronologically.
    pub fn months(&self) -> Vec<MonthKey> {
        self.records
            .iter()
            .map(HeadlineRecord::month)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Convert to a DataFrame with columns `published`, `month`, `headline`
    /// and `sentiment`, all as strings.
    pub fn to_frame(&self) -> PolarsResult<DataFrame> {
        let published: Vec<String> = self
            .records
            .iter()
            .map(|r| r.published.format("%Y-%m-%d %H:%M:%S").to_string())
            .collect();
        let months: Vec<String> = self.records.iter().map(|r| r.month().to_string()).collect();
        let headlines: Vec<Option<&str>> =
            self.records.iter().map(|r| r.headline.as_deref()).collect();
        let sentiments: Vec<&str> = self
            .records
            .iter()
            .map(|r| r.sentiment.label())
            .collect();

        DataFrame::new(vec![
            Series::new("published".into(), published).into(),
            Series::new("month".into(), months).into(),
            Series::new("headline".into(), headlines).into(),
            Series::new("sentiment".into(), sentiments).into(),
        ])
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a HeadlineRecord;
    type IntoIter = std::slice::Iter<'a, HeadlineRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<HeadlineRecord> for Dataset {
    fn from_iter<I: IntoIterator<Item = HeadlineRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
