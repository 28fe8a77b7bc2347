//! Monthly Sentiment Aggregator
//!
//! Runs the month filter, entity filter and sentiment aggregation for every
//! tracked entity and collects the presentation payload for one month.

use crate::error::{AnalysisError, Result};
use crate::filter::{filter_by_entity, filter_by_month, fold_entity};
use crate::headlines::{concatenated_text, top_headlines};
use crate::proportions::{SentimentProportions, sentiment_proportions};
use crate::words::{StopWords, WordFrequency, word_frequencies};
use newsmood_data::{Dataset, MonthKey, Sentiment};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Configuration for the monthly aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregatorConfig {
    /// Entity names to track, in display order (default: Trump, Biden, Harris)
    pub entities: Vec<String>,
    /// Sentiment labels to report (default: all three)
    pub sentiments: Vec<Sentiment>,
    /// Maximum example headlines per entity and sentiment (default: 3)
    pub headline_limit: usize,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            entities: vec![
                "Trump".to_string(),
                "Biden".to_string(),
                "Harris".to_string(),
            ],
            sentiments: Sentiment::all(),
            headline_limit: 3,
        }
    }
}

impl AggregatorConfig {
    /// Check that the configuration can produce a meaningful report.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidConfig`] for an empty or blank entity
    /// list, duplicate entities (compared case-insensitively), an empty or
    /// repeated sentiment set, or a zero headline limit.
    pub fn validate(&self) -> Result<()> {
        if self.entities.is_empty() {
            return Err(AnalysisError::InvalidConfig(
                "at least one entity is required".to_string(),
            ));
        }
        if self.entities.iter().any(|e| e.trim().is_empty()) {
            return Err(AnalysisError::InvalidConfig(
                "entity names must not be blank".to_string(),
            ));
        }
        let mut seen = HashSet::new();
        if let Some(entity) = self.entities.iter().find(|e| !seen.insert(fold_entity(e))) {
            return Err(AnalysisError::InvalidConfig(format!(
                "entity `{}` is listed more than once",
                entity.trim()
            )));
        }
        if self.sentiments.is_empty() {
            return Err(AnalysisError::InvalidConfig(
                "at least one sentiment is required".to_string(),
            ));
        }
        let mut seen = HashSet::new();
        if let Some(sentiment) = self.sentiments.iter().find(|s| !seen.insert(**s)) {
            return Err(AnalysisError::InvalidConfig(format!(
                "sentiment `{}` is listed more than once",
                sentiment
            )));
        }
        if self.headline_limit == 0 {
            return Err(AnalysisError::InvalidConfig(
                "headline_limit must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Aggregation result for one entity in one month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntitySummary {
    /// Entity name as configured
    pub entity: String,
    /// Number of headlines mentioning the entity
    pub headline_count: usize,
    /// Sentiment shares among those headlines
    pub proportions: SentimentProportions,
    /// Matching headline texts joined by spaces
    pub text: String,
    /// Example headlines per sentiment, in dataset order
    pub top_headlines: BTreeMap<Sentiment, Vec<String>>,
}

impl EntitySummary {
    /// Returns false when no headline mentioned the entity this month.
    pub const fn has_data(&self) -> bool {
        self.headline_count > 0
    }

    /// Example headlines for `sentiment`.
    pub fn headlines(&self, sentiment: Sentiment) -> &[String] {
        self.top_headlines
            .get(&sentiment)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Word frequencies of the entity's headline text.
    pub fn word_frequencies(&self, stop_words: &StopWords) -> Vec<WordFrequency> {
        word_frequencies(&self.text, stop_words)
    }
}

/// Aggregation results for every tracked entity in one month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyReport {
    /// Selected month
    pub month: MonthKey,
    /// Sentiment labels reported, in display order
    pub sentiments: Vec<Sentiment>,
    /// Headlines published in the month, across all entities
    pub month_headlines: usize,
    /// Per-entity results, in configured order
    pub entities: Vec<EntitySummary>,
}

impl MonthlyReport {
    /// Summary for `entity`, matched case-insensitively.
    pub fn entity(&self, entity: &str) -> Option<&EntitySummary> {
        let entity = fold_entity(entity);
        self.entities
            .iter()
            .find(|s| fold_entity(&s.entity) == entity)
    }

    /// Returns true if any entity has matching headlines.
    pub fn has_data(&self) -> bool {
        self.entities.iter().any(EntitySummary::has_data)
    }

    /// Entity by sentiment proportion matrix, rows in entity order.
    pub fn proportion_table(&self) -> Vec<(String, Vec<f64>)> {
        self.entities
            .iter()
            .map(|s| {
                let row = self
                    .sentiments
                    .iter()
                    .map(|sentiment| s.proportions.get(*sentiment))
                    .collect();
                (s.entity.clone(), row)
            })
            .collect()
    }

    /// Proportion matrix as a DataFrame for charting.
    ///
    /// Columns: `entity`, one `f64` column per sentiment label, and
    /// `headlines` with the matched count.
    pub fn to_frame(&self) -> Result<DataFrame> {
        let mut columns: Vec<Column> = Vec::with_capacity(self.sentiments.len() + 2);

        let entities: Vec<&str> = self.entities.iter().map(|s| s.entity.as_str()).collect();
        columns.push(Series::new("entity".into(), entities).into());

        for sentiment in &self.sentiments {
            let values: Vec<f64> = self
                .entities
                .iter()
                .map(|s| s.proportions.get(*sentiment))
                .collect();
            columns.push(Series::new(sentiment.label().into(), values).into());
        }

        let counts: Vec<u64> = self
            .entities
            .iter()
            .map(|s| s.headline_count as u64)
            .collect();
        columns.push(Series::new("headlines".into(), counts).into());

        Ok(DataFrame::new(columns)?)
    }
}

/// Computes monthly per-entity sentiment reports.
#[derive(Debug, Clone, Default)]
pub struct MonthlyAggregator {
    config: AggregatorConfig,
}

impl MonthlyAggregator {
    /// Create an aggregator with the default entities and sentiments.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an aggregator with a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation.
    pub fn with_config(config: AggregatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration.
    pub const fn config(&self) -> &AggregatorConfig {
        &self.config
    }

    /// Aggregate one entity over an already month-filtered dataset.
    pub fn summarize_entity(&self, month_data: &Dataset, entity: &str) -> EntitySummary {
        let matched = filter_by_entity(month_data, entity);
        let top_headlines = self
            .config
            .sentiments
            .iter()
            .map(|s| (*s, top_headlines(&matched, *s, self.config.headline_limit)))
            .collect();

        EntitySummary {
            entity: entity.to_string(),
            headline_count: matched.len(),
            proportions: sentiment_proportions(&matched, &self.config.sentiments),
            text: concatenated_text(&matched),
            top_headlines,
        }
    }

    /// Build the report for `month`.
    ///
    /// Months outside the dataset's range, and months without headlines,
    /// produce a report whose entities all lack data.
    pub fn aggregate(&self, dataset: &Dataset, month: MonthKey) -> MonthlyReport {
        let month_data = filter_by_month(dataset, month);
        let entities: Vec<EntitySummary> = self
            .config
            .entities
            .iter()
            .map(|entity| self.summarize_entity(&month_data, entity))
            .collect();

        log::info!(
            "Aggregated {} ({} headlines, {} entities)",
            month,
            month_data.len(),
            entities.len()
        );

        MonthlyReport {
            month,
            sentiments: self.config.sentiments.clone(),
            month_headlines: month_data.len(),
            entities,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;
    use newsmood_data::{HeadlineRecord, MonthRange, parse_timestamp};

    fn record(date: &str, headline: &str, sentiment: Sentiment) -> HeadlineRecord {
        HeadlineRecord::new(
            parse_timestamp(date).unwrap(),
            Some(headline.to_string()),
            sentiment,
        )
    }

    fn sample() -> Dataset {
        Dataset::new(vec![
            record("2024-01-05", "Trump wins big", Sentiment::Positive),
            record("2024-01-10", "Biden responds", Sentiment::Neutral),
            record("2024-02-01", "Trump again", Sentiment::Negative),
        ])
        .restrict_to(MonthRange::default())
    }

    #[test]
    fn test_default_config() {
        let config = AggregatorConfig::default();
        assert_eq!(config.entities, vec!["Trump", "Biden", "Harris"]);
        assert_eq!(config.sentiments.len(), 3);
        assert_eq!(config.headline_limit, 3);
        assert!(config.validate().is_ok());
    }

    #[rstest]
    #[case::empty_entities(AggregatorConfig { entities: vec![], ..Default::default() })]
    #[case::blank_entity(AggregatorConfig { entities: vec!["  ".to_string()], ..Default::default() })]
    #[case::duplicate_entity(AggregatorConfig {
        entities: vec!["Trump".to_string(), " trump".to_string()],
        ..Default::default()
    })]
    #[case::no_sentiments(AggregatorConfig { sentiments: vec![], ..Default::default() })]
    #[case::duplicate_sentiment(AggregatorConfig {
        sentiments: vec![Sentiment::Positive, Sentiment::Positive],
        ..Default::default()
    })]
    #[case::zero_limit(AggregatorConfig { headline_limit: 0, ..Default::default() })]
    fn test_invalid_configs(#[case] config: AggregatorConfig) {
        assert!(matches!(
            MonthlyAggregator::with_config(config),
            Err(AnalysisError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_entity_lookup_folds_non_ascii() {
        let config = AggregatorConfig {
            entities: vec!["Élysée".to_string()],
            ..Default::default()
        };
        let report = MonthlyAggregator::with_config(config)
            .unwrap()
            .aggregate(&sample(), "2024-01".parse().unwrap());
        assert!(report.entity("ÉLYSÉE").is_some());
        assert!(report.entity(" élysée ").is_some());
    }

    #[test]
    fn test_aggregate_january_example() {
        let report = MonthlyAggregator::new().aggregate(&sample(), "2024-01".parse().unwrap());

        assert_eq!(report.month_headlines, 2);
        assert_eq!(report.entities.len(), 3);

        let trump = report.entity("trump").unwrap();
        assert_eq!(trump.headline_count, 1);
        assert_relative_eq!(trump.proportions.get(Sentiment::Positive), 1.0);
        assert_eq!(trump.proportions.get(Sentiment::Neutral), 0.0);
        assert_eq!(trump.proportions.get(Sentiment::Negative), 0.0);
        assert_eq!(trump.text, "Trump wins big");
        assert_eq!(trump.headlines(Sentiment::Positive), ["Trump wins big"]);
        assert!(trump.headlines(Sentiment::Negative).is_empty());

        let harris = report.entity("Harris").unwrap();
        assert!(!harris.has_data());
        assert_eq!(harris.proportions.sum(), 0.0);
        assert_eq!(harris.text, "");
    }

    #[test]
    fn test_aggregate_out_of_range_month() {
        let report = MonthlyAggregator::new().aggregate(&sample(), "2026-01".parse().unwrap());
        assert_eq!(report.month_headlines, 0);
        assert!(!report.has_data());
    }

    #[test]
    fn test_proportion_table_and_frame() {
        let report = MonthlyAggregator::new().aggregate(&sample(), "2024-01".parse().unwrap());

        let table = report.proportion_table();
        assert_eq!(table[0], ("Trump".to_string(), vec![1.0, 0.0, 0.0]));
        assert_eq!(table[1], ("Biden".to_string(), vec![0.0, 1.0, 0.0]));
        assert_eq!(table[2], ("Harris".to_string(), vec![0.0, 0.0, 0.0]));

        let df = report.to_frame().unwrap();
        assert_eq!(df.height(), 3);
        let names: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|n| n.to_string())
            .collect();
        assert_eq!(
            names,
            vec!["entity", "positive", "neutral", "negative", "headlines"]
        );
        let neutral = df.column("neutral").unwrap().as_materialized_series().f64().unwrap();
        assert_eq!(neutral.get(1), Some(1.0));
    }

    #[test]
    fn test_headline_limit_respected() {
        let dataset = Dataset::new(
            (1..=5)
                .map(|day| {
                    record(
                        &format!("2024-03-0{day}"),
                        &format!("Harris day {day}"),
                        Sentiment::Positive,
                    )
                })
                .collect(),
        );
        let config = AggregatorConfig {
            headline_limit: 2,
            ..Default::default()
        };
        let report = MonthlyAggregator::with_config(config)
            .unwrap()
            .aggregate(&dataset, "2024-03".parse().unwrap());

        let harris = report.entity("Harris").unwrap();
        assert_eq!(
            harris.headlines(Sentiment::Positive),
            ["Harris day 1", "Harris day 2"]
        );
        assert_eq!(harris.headline_count, 5);
    }

    #[test]
    fn test_report_serializes() {
        let report = MonthlyAggregator::new().aggregate(&sample(), "2024-01".parse().unwrap());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["month"], "2024-01");
        assert_eq!(json["entities"][0]["entity"], "Trump");
        assert_eq!(
            json["entities"][0]["top_headlines"]["positive"][0],
            "Trump wins big"
        );
    }
}
