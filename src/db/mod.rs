//! Row scanning on top of sqlx.
//!
//! This module provides:
//! - Scan destinations and the `Slot` trait
//! - Target resolution (`ScanTarget`, `FieldMap`, `scan_map`)
//! - A step-wise cursor over sqlx row streams
//! - Row materialization and query wrappers
//! - Parameter binding per backend

pub mod cursor;
pub mod executor;
#[macro_use]
pub mod macros;
pub mod params;
pub mod target;
pub mod types;

pub use cursor::RowCursor;
pub use executor::{query_all, query_one, scan_all, scan_one};
pub use params::{BindParam, BoundQuery};
pub use target::{FieldMap, ScanTarget, scan_map};
pub use types::{Destination, Slot};
