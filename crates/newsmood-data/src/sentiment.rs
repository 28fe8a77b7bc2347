//! Sentiment label definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Categorical tone of a headline, precomputed upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    /// Positive
    Positive,

    /// Neutral
    Neutral,

    /// Negative
    Negative,
}

impl Sentiment {
    /// Returns all sentiment labels in display order.
    pub fn all() -> Vec<Self> {
        vec![Self::Positive, Self::Neutral, Self::Negative]
    }

    /// Returns the lowercase label used in source data.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }

    /// Returns the capitalized label used in headings.
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Neutral => "Neutral",
            Self::Negative => "Negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Error returned when a label is not one of the known sentiments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSentiment(pub String);

impl fmt::Display for UnknownSentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown sentiment label `{}`", self.0)
    }
}

impl std::error::Error for UnknownSentiment {}

impl FromStr for Sentiment {
    type Err = UnknownSentiment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "positive" => Ok(Self::Positive),
            "neutral" => Ok(Self::Neutral),
            "negative" => Ok(Self::Negative),
            _ => Err(UnknownSentiment(s.to_string())),
        }
    }
}
