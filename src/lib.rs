//! sqlx-scanner
//!
//! Scan SQL query results into your own structs without wiring every column
//! by hand. A result type implements `ScanTarget` by mapping column names
//! to its fields; the scanner creates one `T::default()` per row and fills
//! it in place.
//!
//! # Basic Usage
//!
//! ```ignore
//! use sqlx::Sqlite;
//! use sqlx_scanner::{Destination, ScanTarget, scan_map};
//!
//! #[derive(Default)]
//! struct User {
//!     id: i64,
//!     name: String,
//!     age: i32,
//! }
//!
//! impl ScanTarget<Sqlite> for User {
//!     fn scan_targets<'a>(&'a mut self, columns: &[String]) -> Vec<Destination<'a, Sqlite>> {
//!         scan_map!(columns, {
//!             "id" => self.id,
//!             "name" => self.name,
//!             "age" => self.age,
//!         })
//!     }
//! }
//! ```
//!
//! # Query Single Row
//!
//! ```ignore
//! let user: User = query_one(&pool, "SELECT id, name, age FROM users WHERE id = ?", &[1.into()]).await?;
//! ```
//!
//! `ScanError::NotFound` signals an empty result; every other failure is a
//! `ScanError::Driver` tagged with the phase it happened in.
//!
//! # Query Multiple Rows
//!
//! ```ignore
//! let users: Vec<User> = query_all(
//!     &pool,
//!     "SELECT id, name, age FROM users",
//!     &[],
//!     QueryOptions::new().with_expected_size(1000),
//! )
//! .await?;
//! ```
//!
//! The expected size only pre-allocates the result vector.
//!
//! # Custom Targets
//!
//! `scan_targets` may build its list by hand, for example to keep only one
//! column:
//!
//! ```ignore
//! impl ScanTarget<Sqlite> for AuditLog {
//!     fn scan_targets<'a>(&'a mut self, columns: &[String]) -> Vec<Destination<'a, Sqlite>> {
//!         let mut targets: Vec<_> = columns.iter().map(|_| Destination::discard()).collect();
//!         if let Some(i) = columns.iter().position(|col| col == "payload") {
//!             targets[i] = Destination::field(&mut self.payload);
//!         }
//!         targets
//!     }
//! }
//! ```
//!
//! # Low-Level API
//!
//! ```ignore
//! let mut cursor = RowCursor::new(sqlx::query("SELECT * FROM users").fetch(&pool));
//! let users: Vec<User> = scan_all(&mut cursor, QueryOptions::default()).await?;
//! ```

pub mod db;
pub mod error;
pub mod models;

pub use db::{
    BindParam, Destination, FieldMap, RowCursor, ScanTarget, Slot, query_all, query_one,
    scan_all, scan_map, scan_one,
};
pub use error::{Phase, ScanError, ScanResult};
pub use models::{QueryOptions, QueryParam};
