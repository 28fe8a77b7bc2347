//! Dashboard configuration.
//!
//! Settings are read from JSON. Resolution order is an explicit file, then
//! `newsmood/config.json` under the platform config directory, then the
//! built-in defaults. Every field may be omitted.

use newsmood_analysis::AggregatorConfig;
use newsmood_data::{ColumnMapping, Dataset, MonthRange, Sentiment, load_csv};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while reading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error
    #[error("IO error reading {path}: {source}")]
    Io {
        /// File that could not be read
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// Malformed JSON
    #[error("Invalid JSON in config: {0}")]
    Json(#[from] serde_json::Error),

    /// Parsed but unusable settings
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Configuration shared by loading, aggregation and presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Source column names
    pub columns: ColumnMapping,

    /// Months offered for selection (default: 2024-01 to 2025-03)
    pub range: MonthRange,

    /// Tracked entities in display order
    pub entities: Vec<String>,

    /// Reported sentiment labels in display order
    pub sentiments: Vec<Sentiment>,

    /// Example headlines per entity and sentiment
    pub headline_limit: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        let aggregation = AggregatorConfig::default();
        Self {
            columns: ColumnMapping::default(),
            range: MonthRange::default(),
            entities: aggregation.entities,
            sentiments: aggregation.sentiments,
            headline_limit: aggregation.headline_limit,
        }
    }
}

impl DashboardConfig {
    /// Default location of the user configuration file.
    ///
    /// - Linux: `~/.config/newsmood/config.json`
    /// - macOS: `~/Library/Application Support/newsmood/config.json`
    /// - Windows: `%APPDATA%\newsmood\config.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("newsmood").join("config.json"))
    }

    /// Parse and validate a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the settings are invalid.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is malformed, or holds
    /// invalid settings.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Read configuration from {}", path.display());
        Self::from_json(&json)
    }

    /// Resolve the active configuration.
    ///
    /// An explicit path must exist. The default path is used only when
    /// present; otherwise the defaults apply.
    ///
    /// # Errors
    ///
    /// Returns an error if the selected file cannot be used.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        Self::resolve_with(explicit, Self::default_path().as_deref())
    }

    /// [`DashboardConfig::resolve`] with the fallback location supplied by
    /// the caller.
    ///
    /// # Errors
    ///
    /// Returns an error if the selected file cannot be used.
    pub fn resolve_with(
        explicit: Option<&Path>,
        fallback: Option<&Path>,
    ) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match fallback {
            Some(path) if path.is_file() => Self::from_file(path),
            _ => {
                log::debug!("No configuration file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Check the settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for an inverted month range, an empty
    /// or repeated entity list, an empty or repeated sentiment set, or a zero
    /// headline limit.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.range.is_valid() {
            return Err(ConfigError::Invalid(format!(
                "range start {} is after end {}",
                self.range.start, self.range.end
            )));
        }
        self.aggregator_config()
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Aggregation settings derived from this configuration.
    pub fn aggregator_config(&self) -> AggregatorConfig {
        AggregatorConfig {
            entities: self.entities.clone(),
            sentiments: self.sentiments.clone(),
            headline_limit: self.headline_limit,
        }
    }
}

/// Load a headline CSV using the configured columns and month range.
///
/// # Errors
///
/// Returns the loader's error if the file is unreadable or fails validation.
pub fn load_dataset<P: AsRef<Path>>(
    path: P,
    config: &DashboardConfig,
) -> newsmood_data::Result<Dataset> {
    Ok(load_csv(path, &config.columns)?.restrict_to(config.range))
}
