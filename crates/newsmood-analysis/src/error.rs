//! Error types for aggregation.

use thiserror::Error;

/// Result type for aggregation operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Errors raised while configuring or exporting an aggregation.
///
/// The query operations themselves are total and never return these.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Aggregator configuration is unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Polars error
    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),
}
