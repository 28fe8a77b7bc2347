//! A loaded dataset together with the configuration it was loaded under.

use newsmood::{ConfigError, DashboardConfig, load_dataset};
use newsmood_analysis::{AnalysisError, MonthlyAggregator, MonthlyReport, filter_by_month};
use newsmood_data::{DataError, Dataset, MonthKey};
use std::path::Path;

/// Error type for session setup.
#[derive(Debug, thiserror::Error)]
pub(crate) enum SessionError {
    /// Configuration could not be resolved.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Dataset could not be loaded.
    #[error(transparent)]
    Data(#[from] DataError),
    /// Aggregator rejected the configuration.
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

/// Configuration, dataset and aggregator for one invocation.
#[derive(Debug)]
pub(crate) struct Session {
    /// Resolved configuration.
    pub config: DashboardConfig,
    /// Headlines restricted to the configured range.
    pub dataset: Dataset,
    aggregator: MonthlyAggregator,
}

impl Session {
    /// Resolve configuration and load `data` under it.
    pub(crate) fn open(data: &Path, config: Option<&Path>) -> Result<Self, SessionError> {
        Self::load(data, DashboardConfig::resolve(config)?)
    }

    /// Load `data` under an already resolved configuration.
    pub(crate) fn load(data: &Path, config: DashboardConfig) -> Result<Self, SessionError> {
        let aggregator = MonthlyAggregator::with_config(config.aggregator_config())?;
        let dataset = load_dataset(data, &config)?;
        log::debug!(
            "Session ready: {} headlines in {}",
            dataset.len(),
            config.range
        );
        Ok(Self {
            config,
            dataset,
            aggregator,
        })
    }

    /// Aggregator built from the session configuration.
    pub(crate) const fn aggregator(&self) -> &MonthlyAggregator {
        &self.aggregator
    }

    /// Months present in the data, in order, with their headline counts.
    pub(crate) fn month_counts(&self) -> Vec<(MonthKey, usize)> {
        self.dataset
            .months()
            .into_iter()
            .map(|month| (month, filter_by_month(&self.dataset, month).len()))
            .collect()
    }

    /// Report for `month`; months outside the configured range are empty.
    pub(crate) fn report(&self, month: MonthKey) -> MonthlyReport {
        self.aggregator.aggregate(&self.dataset, month)
    }
}
