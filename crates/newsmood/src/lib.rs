#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/newsmood/newsmood/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod config;

// Re-export main types from sub-crates
pub use newsmood_analysis as analysis;
pub use newsmood_data as data;
pub use newsmood_output as output;

pub use config::{ConfigError, DashboardConfig, load_dataset};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
