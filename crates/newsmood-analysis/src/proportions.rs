//! Normalized sentiment counts.

use newsmood_data::{Dataset, Sentiment};
use serde::Serialize;
use std::collections::BTreeMap;

/// Fraction of headlines carrying each requested sentiment label.
///
/// Over the full sentiment set the fractions sum to 1 whenever at least one
/// headline was counted, and are all zero otherwise.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SentimentProportions {
    counts: BTreeMap<Sentiment, usize>,
    proportions: BTreeMap<Sentiment, f64>,
    total: usize,
}

impl SentimentProportions {
    /// Proportion for `sentiment`, or 0.0 if it was not requested.
    pub fn get(&self, sentiment: Sentiment) -> f64 {
        self.proportions.get(&sentiment).copied().unwrap_or(0.0)
    }

    /// Raw count for `sentiment`.
    pub fn count(&self, sentiment: Sentiment) -> usize {
        self.counts.get(&sentiment).copied().unwrap_or(0)
    }

    /// Number of headlines the proportions were computed over.
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Returns true if no headlines were counted.
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Sum of the requested proportions.
    pub fn sum(&self) -> f64 {
        self.proportions.values().sum()
    }

    /// Requested labels with their proportions, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Sentiment, f64)> + '_ {
        self.proportions.iter().map(|(s, p)| (*s, *p))
    }

    /// Sentiment with the largest share, if any headline was counted.
    pub fn dominant(&self) -> Option<Sentiment> {
        if self.is_empty() {
            return None;
        }
        self.iter()
            .fold(None, |best: Option<(Sentiment, f64)>, (s, p)| match best {
                Some((_, best_p)) if best_p >= p => best,
                _ => Some((s, p)),
            })
            .map(|(s, _)| s)
    }
}

/// Share of each label in `sentiments` among all records of `dataset`.
///
/// The denominator is the total number of records. Labels absent from the
/// data map to 0.0, and an empty dataset maps every label to 0.0.
pub fn sentiment_proportions(dataset: &Dataset, sentiments: &[Sentiment]) -> SentimentProportions {
    let total = dataset.len();

    let mut counts: BTreeMap<Sentiment, usize> = sentiments.iter().map(|s| (*s, 0)).collect();
    for record in dataset {
        if let Some(count) = counts.get_mut(&record.sentiment) {
            *count += 1;
        }
    }

    let proportions = counts
        .iter()
        .map(|(s, count)| {
            let share = if total == 0 {
                0.0
            } else {
                *count as f64 / total as f64
            };
            (*s, share)
        })
        .collect();

    SentimentProportions {
        counts,
        proportions,
        total,
    }
}
