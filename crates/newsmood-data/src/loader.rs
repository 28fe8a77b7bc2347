//! Dataset loading and load-time validation.
//!
//! Every record is checked once here; queries over the resulting
//! [`Dataset`] cannot fail.

use crate::dataset::Dataset;
use crate::error::{DataError, Field, Result};
use crate::record::{HeadlineRecord, parse_timestamp};
use crate::sentiment::Sentiment;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Names of the source columns holding each record field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnMapping {
    /// Publication timestamp column
    pub timestamp: String,
    /// Headline text column
    pub headline: String,
    /// Sentiment label column
    pub sentiment: String,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            timestamp: "pub_date".to_string(),
            headline: "main_headline".to_string(),
            sentiment: "headline_sentiment_vader".to_string(),
        }
    }
}

/// Load and validate a CSV file with a header row.
///
/// All columns are read as strings so that timestamps and labels go through
/// the same validation regardless of how a type inferrer would see them.
///
/// # Errors
///
/// Returns [`DataError::Io`] if the file cannot be read,
/// [`DataError::MissingColumn`] if a mapped column is absent, and
/// [`DataError::DataQuality`] for the first malformed record.
pub fn load_csv<P: AsRef<Path>>(path: P, columns: &ColumnMapping) -> Result<Dataset> {
    let path = path.as_ref();
    std::fs::metadata(path)?;

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;

    let dataset = Dataset::from_frame(&df, columns)?;
    log::info!(
        "Loaded {} headlines from {}",
        dataset.len(),
        path.display()
    );
    Ok(dataset)
}

impl Dataset {
    /// Validate a DataFrame and convert it into a dataset.
    ///
    /// Non-string columns are cast to strings first, so datetime columns are
    /// accepted as well.
    ///
    /// # Errors
    ///
    /// Fails on a missing mapped column or on the first row whose timestamp
    /// or sentiment is missing or unparseable. Missing headline text is
    /// allowed.
    pub fn from_frame(df: &DataFrame, columns: &ColumnMapping) -> Result<Self> {
        let timestamps = string_column(df, &columns.timestamp)?;
        let headlines = string_column(df, &columns.headline)?;
        let sentiments = string_column(df, &columns.sentiment)?;

        let rows = timestamps
            .str()?
            .into_iter()
            .zip(headlines.str()?)
            .zip(sentiments.str()?);

        let mut records = Vec::with_capacity(df.height());
        for (row, ((timestamp, headline), sentiment)) in rows.enumerate() {
            records.push(HeadlineRecord::new(
                validate_timestamp(row, timestamp)?,
                headline.map(str::to_string),
                validate_sentiment(row, sentiment)?,
            ));
        }

        Ok(Self::new(records))
    }
}

fn string_column(df: &DataFrame, name: &str) -> Result<Series> {
    let column = df
        .column(name)
        .map_err(|_| DataError::MissingColumn(name.to_string()))?;
    Ok(column.as_materialized_series().cast(&DataType::String)?)
}

fn validate_timestamp(row: usize, value: Option<&str>) -> Result<chrono::NaiveDateTime> {
    let value = value.ok_or_else(|| DataError::quality(row, Field::Timestamp, "missing value"))?;
    parse_timestamp(value).ok_or_else(|| {
        DataError::quality(
            row,
            Field::Timestamp,
            format!("unparseable timestamp `{}`", value),
        )
    })
}

fn validate_sentiment(row: usize, value: Option<&str>) -> Result<Sentiment> {
    let value = value.ok_or_else(|| DataError::quality(row, Field::Sentiment, "missing value"))?;
    value
        .parse::<Sentiment>()
        .map_err(|e| DataError::quality(row, Field::Sentiment, e.to_string()))
}
