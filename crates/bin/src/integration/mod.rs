//! Glue between the command line and the library crates.
//!
//! Resolves configuration, loads the dataset once and hands out aggregators
//! built from the same settings.

pub(crate) mod format;
pub(crate) mod session;
