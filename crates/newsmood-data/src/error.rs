//! Error types for data operations.

use std::fmt;
use thiserror::Error;

/// Result type for data operations.
pub type Result<T> = std::result::Result<T, DataError>;

/// Required record field, used to point data-quality errors at a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Publication timestamp
    Timestamp,
    /// Sentiment label
    Sentiment,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timestamp => f.write_str("timestamp"),
            Self::Sentiment => f.write_str("sentiment"),
        }
    }
}

/// Errors that can occur during data operations.
#[derive(Debug, Error)]
pub enum DataError {
    /// A record has a missing or malformed required field
    #[error("Data quality error at row {row}, field {field}: {reason}")]
    DataQuality {
        /// Zero-based row index in the source table
        row: usize,
        /// Offending field
        field: Field,
        /// What was wrong with the value
        reason: String,
    },

    /// Source table lacks a required column
    #[error("Missing column: {0}")]
    MissingColumn(String),

    /// Month key could not be parsed
    #[error("Invalid month: {0}")]
    InvalidMonth(String),

    /// Invalid month range
    #[error("Invalid month range: start {start} is after end {end}")]
    InvalidRange {
        /// Start month of the range
        start: String,
        /// End month of the range
        end: String,
    },

    /// Polars error
    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DataError {
    /// Build a data-quality error for the given row and field.
    pub fn quality(row: usize, field: Field, reason: impl Into<String>) -> Self {
        Self::DataQuality {
            row,
            field,
            reason: reason.into(),
        }
    }
}
