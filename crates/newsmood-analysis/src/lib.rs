#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/newsmood/newsmood/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod aggregator;
pub mod error;
pub mod filter;
pub mod headlines;
pub mod proportions;
pub mod words;

pub use aggregator::{AggregatorConfig, EntitySummary, MonthlyAggregator, MonthlyReport};
pub use error::{AnalysisError, Result};
pub use filter::{filter_by_entity, filter_by_month, mentions};
pub use headlines::{concatenated_text, top_headlines};
pub use proportions::{SentimentProportions, sentiment_proportions};
pub use words::{StopWords, WordFrequency, tokenize, word_frequencies};
