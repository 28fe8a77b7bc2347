//! Headline selection and text concatenation.

use newsmood_data::{Dataset, HeadlineRecord, Sentiment};

/// Up to `limit` headline texts labeled `sentiment`, in dataset order.
///
/// Records without headline text are skipped.
pub fn top_headlines(dataset: &Dataset, sentiment: Sentiment, limit: usize) -> Vec<String> {
    dataset
        .iter()
        .filter(|r| r.sentiment == sentiment)
        .filter_map(HeadlineRecord::text)
        .take(limit)
        .map(str::to_string)
        .collect()
}

/// All non-empty headline texts joined by a single space.
pub fn concatenated_text(dataset: &Dataset) -> String {
    dataset
        .iter()
        .filter_map(HeadlineRecord::text)
        .collect::<Vec<_>>()
        .join(" ")
}
