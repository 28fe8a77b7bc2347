#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/newsmood/newsmood/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod export;
pub mod render;

pub use export::{ExportError, ExportFormat, Exporter, HeadlineListing, HeadlineRow, ProportionRow};
pub use render::{NO_HEADLINES, RenderOptions, render_markdown, render_text};
