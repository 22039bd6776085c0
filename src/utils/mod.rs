//! Utility functions shared across layers.
//!
//! - [`sql_identifier`] - Validation and quoting of configured SQL names

pub mod sql_identifier;
