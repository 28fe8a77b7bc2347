//! Export of monthly reports to CSV and JSON.
//!
//! CSV output is flat: one row per entity and sentiment for proportions,
//! one row per example headline for listings.

use newsmood_analysis::MonthlyReport;
use newsmood_data::MonthKey;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur during export operations.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV serialization error.
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid format error.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

/// Export format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-separated values format.
    Csv,

    /// Compact JSON format.
    Json,

    /// Pretty-printed JSON format.
    PrettyJson,
}

impl ExportFormat {
    /// Get the file extension for this format.
    pub const fn extension(&self) -> &str {
        match self {
            Self::Csv => "csv",
            Self::Json | Self::PrettyJson => "json",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "pretty-json" | "pretty_json" | "prettyjson" => Ok(Self::PrettyJson),
            _ => Err(ExportError::InvalidFormat(s.to_string())),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => f.write_str("csv"),
            Self::Json => f.write_str("json"),
            Self::PrettyJson => f.write_str("pretty-json"),
        }
    }
}

/// One cell of the entity by sentiment proportion table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProportionRow {
    /// Month in `YYYY-MM` form.
    pub month: String,

    /// Entity name.
    pub entity: String,

    /// Sentiment label.
    pub sentiment: String,

    /// Share of the entity's headlines with this label.
    pub proportion: f64,

    /// Number of the entity's headlines with this label.
    pub count: usize,
}

impl ProportionRow {
    /// Flatten a report into proportion rows, entity-major.
    pub fn from_report(report: &MonthlyReport) -> Vec<Self> {
        let month = report.month.to_string();
        report
            .entities
            .iter()
            .flat_map(|summary| {
                let month = month.clone();
                report.sentiments.iter().map(move |sentiment| Self {
                    month: month.clone(),
                    entity: summary.entity.clone(),
                    sentiment: sentiment.label().to_string(),
                    proportion: summary.proportions.get(*sentiment),
                    count: summary.proportions.count(*sentiment),
                })
            })
            .collect()
    }
}

/// One example headline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HeadlineRow {
    /// Entity name.
    pub entity: String,

    /// Sentiment label.
    pub sentiment: String,

    /// 1-based position within the entity and sentiment bucket.
    pub rank: usize,

    /// Headline text.
    pub headline: String,
}

/// Example headlines of a report, flattened for export.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HeadlineListing {
    /// Month the headlines were published in.
    pub month: MonthKey,

    /// Headlines in entity, sentiment, rank order.
    pub rows: Vec<HeadlineRow>,
}

impl HeadlineListing {
    /// Collect the example headlines of `report`.
    pub fn from_report(report: &MonthlyReport) -> Self {
        let mut rows = Vec::new();
        for summary in &report.entities {
            for sentiment in &report.sentiments {
                for (i, headline) in summary.headlines(*sentiment).iter().enumerate() {
                    rows.push(HeadlineRow {
                        entity: summary.entity.clone(),
                        sentiment: sentiment.label().to_string(),
                        rank: i + 1,
                        headline: headline.clone(),
                    });
                }
            }
        }
        Self {
            month: report.month,
            rows,
        }
    }

    /// Returns true if there are no headlines.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Trait for exporting data in various formats.
pub trait Exporter {
    /// Export data to a string in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError>;

    /// Export data to a file in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or file writing fails.
    fn export_to_file(&self, path: &Path, format: ExportFormat) -> Result<(), ExportError> {
        let content = self.export_to_string(format)?;
        let mut file = File::create(path)?;
        file.write_all(content.as_bytes())?;
        Ok(())
    }
}

fn csv_string<T: Serialize>(records: &[T]) -> Result<String, ExportError> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    for record in records {
        wtr.serialize(record)?;
    }
    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    String::from_utf8(bytes).map_err(|e| ExportError::InvalidFormat(e.to_string()))
}

impl Exporter for MonthlyReport {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Csv => csv_string(&ProportionRow::from_report(self)),
            ExportFormat::Json => Ok(serde_json::to_string(self)?),
            ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

impl Exporter for HeadlineListing {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Csv => csv_string(&self.rows),
            ExportFormat::Json => Ok(serde_json::to_string(self)?),
            ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use newsmood_analysis::MonthlyAggregator;
    use newsmood_data::{Dataset, HeadlineRecord, Sentiment, parse_timestamp};
    use rstest::rstest;

    fn report() -> MonthlyReport {
        let dataset = Dataset::new(vec![
            HeadlineRecord::new(
                parse_timestamp("2024-01-05").unwrap(),
                Some("Trump wins big".to_string()),
                Sentiment::Positive,
            ),
            HeadlineRecord::new(
                parse_timestamp("2024-01-10").unwrap(),
                Some("Biden, Trump trade barbs".to_string()),
                Sentiment::Negative,
            ),
        ]);
        MonthlyAggregator::new().aggregate(&dataset, "2024-01".parse().unwrap())
    }

    #[test]
    fn test_proportion_rows() {
        let rows = ProportionRow::from_report(&report());
        assert_eq!(rows.len(), 9);
        assert_eq!(rows[0].entity, "Trump");
        assert_eq!(rows[0].sentiment, "positive");
        assert_eq!(rows[0].proportion, 0.5);
        assert_eq!(rows[0].count, 1);
        assert_eq!(rows[8].entity, "Harris");
        assert_eq!(rows[8].proportion, 0.0);
    }

    #[test]
    fn test_report_export_csv() {
        let csv = report().export_to_string(ExportFormat::Csv).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("month,entity,sentiment,proportion,count")
        );
        assert_eq!(lines.next(), Some("2024-01,Trump,positive,0.5,1"));
        assert_eq!(csv.lines().count(), 10);
    }

    #[test]
    fn test_report_export_json() {
        let json = report().export_to_string(ExportFormat::Json).unwrap();
        assert!(json.contains("\"month\":\"2024-01\""));
        assert!(json.contains("\"Trump\""));
    }

    #[test]
    fn test_report_export_pretty_json() {
        let json = report().export_to_string(ExportFormat::PrettyJson).unwrap();
        assert!(json.contains("  ")); // Indentation indicates pretty format
    }

    #[test]
    fn test_headline_listing_csv_quotes_commas() {
        let listing = HeadlineListing::from_report(&report());
        assert_eq!(listing.rows.len(), 3);

        let csv = listing.export_to_string(ExportFormat::Csv).unwrap();
        assert!(csv.starts_with("entity,sentiment,rank,headline\n"));
        assert!(csv.contains("Trump,positive,1,Trump wins big"));
        assert!(csv.contains("Biden,negative,1,\"Biden, Trump trade barbs\""));
    }

    #[test]
    fn test_headline_listing_empty_month() {
        let report = MonthlyAggregator::new().aggregate(&Dataset::default(), "2024-02".parse().unwrap());
        let listing = HeadlineListing::from_report(&report);
        assert!(listing.is_empty());
        let json = listing.export_to_string(ExportFormat::Json).unwrap();
        assert_eq!(json, "{\"month\":\"2024-02\",\"rows\":[]}");
    }

    #[test]
    fn test_export_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.csv");

        report().export_to_file(&path, ExportFormat::Csv).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("Harris"));
    }

    #[rstest]
    #[case("csv", ExportFormat::Csv)]
    #[case("JSON", ExportFormat::Json)]
    #[case("pretty-json", ExportFormat::PrettyJson)]
    fn test_format_parse(#[case] input: &str, #[case] expected: ExportFormat) {
        assert_eq!(input.parse::<ExportFormat>().unwrap(), expected);
        assert_eq!(expected.to_string().parse::<ExportFormat>().unwrap(), expected);
    }

    #[test]
    fn test_format_parse_rejects_unknown() {
        assert!(matches!(
            "xml".parse::<ExportFormat>(),
            Err(ExportError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_export_format_extension() {
        assert_eq!(ExportFormat::Csv.extension(), "csv");
        assert_eq!(ExportFormat::Json.extension(), "json");
        assert_eq!(ExportFormat::PrettyJson.extension(), "json");
    }
}
