//! Data models for the scanner.
//!
//! This module re-exports the parameter and option types used by the query
//! wrappers.

pub mod query;

pub use query::{DEFAULT_EXPECTED_SIZE, QueryOptions, QueryParam};
