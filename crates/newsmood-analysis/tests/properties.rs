//! Pipeline properties over a small multi-month dataset.

use newsmood_analysis::{
    concatenated_text, filter_by_entity, filter_by_month, sentiment_proportions, top_headlines,
};
use newsmood_data::{Dataset, HeadlineRecord, MonthKey, MonthRange, Sentiment, parse_timestamp};
use rstest::{fixture, rstest};

fn record(date: &str, headline: Option<&str>, sentiment: Sentiment) -> HeadlineRecord {
    HeadlineRecord::new(
        parse_timestamp(date).unwrap(),
        headline.map(str::to_string),
        sentiment,
    )
}

#[fixture]
fn dataset() -> Dataset {
    Dataset::new(vec![
        record("2024-01-05T09:00:00+0000", Some("Trump wins big"), Sentiment::Positive),
        record("2024-01-06T09:00:00+0000", Some("TRUMP faces court"), Sentiment::Negative),
        record("2024-01-10T09:00:00+0000", Some("Biden responds"), Sentiment::Neutral),
        record("2024-01-12T09:00:00+0000", None, Sentiment::Neutral),
        record("2024-07-21T09:00:00+0000", Some("Biden exits; Harris rises"), Sentiment::Neutral),
        record("2024-07-22T09:00:00+0000", Some("harris gains"), Sentiment::Positive),
        record("2024-07-23T09:00:00+0000", Some("Trump attacks Harris"), Sentiment::Negative),
        record("2024-11-06T09:00:00+0000", Some("Trump wins election"), Sentiment::Positive),
        record("2025-01-20T09:00:00+0000", Some("Trump sworn in"), Sentiment::Neutral),
    ])
    .restrict_to(MonthRange::default())
}

#[rstest]
fn proportions_sum_to_one_or_zero(dataset: Dataset) {
    for month in MonthRange::default().months() {
        let month_data = filter_by_month(&dataset, month);
        for entity in ["Trump", "Biden", "Harris"] {
            let matched = filter_by_entity(&month_data, entity);
            let props = sentiment_proportions(&matched, &Sentiment::all());
            if matched.is_empty() {
                assert!(props.iter().all(|(_, p)| p == 0.0), "{month} {entity}");
            } else {
                assert!((props.sum() - 1.0).abs() < 1e-9, "{month} {entity}");
            }
        }
    }
}

#[rstest]
#[case("2024-01", "Trump", 2)]
#[case("2024-01", "Biden", 1)]
#[case("2024-07", "Harris", 3)]
#[case("2024-07", "Biden", 1)]
#[case("2024-11", "Harris", 0)]
fn entity_counts(
    dataset: Dataset,
    #[case] month: &str,
    #[case] entity: &str,
    #[case] expected: usize,
) {
    let month: MonthKey = month.parse().unwrap();
    let matched = filter_by_entity(&filter_by_month(&dataset, month), entity);
    assert_eq!(matched.len(), expected);
}

#[rstest]
fn top_headlines_are_bounded_and_ordered(dataset: Dataset) {
    let trump = filter_by_entity(&dataset, "trump");
    let positive = top_headlines(&trump, Sentiment::Positive, 3);
    assert_eq!(positive, vec!["Trump wins big", "Trump wins election"]);

    let one = top_headlines(&trump, Sentiment::Positive, 1);
    assert_eq!(one, vec!["Trump wins big"]);
}

#[rstest]
fn months_outside_range_are_empty(dataset: Dataset) {
    for month in ["2023-12", "2025-04", "2026-01"] {
        let filtered = filter_by_month(&dataset, month.parse().unwrap());
        assert!(filtered.is_empty());
        assert_eq!(concatenated_text(&filtered), "");
    }
}

#[rstest]
fn concatenation_skips_missing_text(dataset: Dataset) {
    let january = filter_by_month(&dataset, "2024-01".parse().unwrap());
    assert_eq!(
        concatenated_text(&january),
        "Trump wins big TRUMP faces court Biden responds"
    );
}
