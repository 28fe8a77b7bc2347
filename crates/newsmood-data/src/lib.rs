#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/newsmood/newsmood/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod dataset;
pub mod error;
pub mod loader;
pub mod month;
pub mod record;
pub mod sentiment;

pub use dataset::Dataset;
pub use error::{DataError, Field, Result};
pub use loader::{ColumnMapping, load_csv};
pub use month::{MonthKey, MonthRange};
pub use record::{HeadlineRecord, parse_timestamp};
pub use sentiment::Sentiment;

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
