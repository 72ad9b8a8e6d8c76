//! Scan target resolution.
//!
//! `ScanTarget` is the one trait a result type implements: given the column
//! names of a result set, hand back one destination per column. Most
//! implementations build a `FieldMap` of their fields and let `scan_map`
//! line it up with the columns.

use crate::db::types::{Destination, Slot};
use sqlx::Database;
use std::collections::HashMap;
use std::fmt;

/// A type that knows which of its fields receive which result columns.
///
/// The returned vector must have exactly one entry per column, in column
/// order.
///
/// # Example
///
/// ```ignore
/// impl ScanTarget<Sqlite> for User {
///     fn scan_targets<'a>(&'a mut self, columns: &[String]) -> Vec<Destination<'a, Sqlite>> {
///         scan_map!(columns, {
///             "id" => self.id,
///             "name" => self.name,
///         })
///     }
/// }
/// ```
pub trait ScanTarget<DB: Database> {
    fn scan_targets<'a>(&'a mut self, columns: &[String]) -> Vec<Destination<'a, DB>>;
}

/// Column name to field mapping for one value.
pub struct FieldMap<'a, DB: Database> {
    fields: HashMap<&'a str, &'a mut dyn Slot<DB>>,
}

impl<'a, DB: Database> FieldMap<'a, DB> {
    pub fn new() -> Self {
        Self {
            fields: HashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: HashMap::with_capacity(capacity),
        }
    }

    /// Map column `name` to `slot`, builder style.
    pub fn field<T: Slot<DB>>(mut self, name: &'a str, slot: &'a mut T) -> Self {
        self.insert(name, slot);
        self
    }

    /// Map column `name` to `slot`. A previous mapping for the same name is
    /// replaced.
    pub fn insert(&mut self, name: &'a str, slot: &'a mut dyn Slot<DB>) {
        self.fields.insert(name, slot);
    }

    /// Whether column `name` has a mapped slot.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Number of mapped column names.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether no column name is mapped.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<DB: Database> Default for FieldMap<'_, DB> {
    fn default() -> Self {
        Self::new()
    }
}

impl<DB: Database> fmt::Debug for FieldMap<'_, DB> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.fields.keys()).finish()
    }
}

/// Line `mapping` up with `columns`.
///
/// Mapped columns get their field, every other column gets
/// `Destination::Discard`, so the result always has `columns.len()`
/// entries. A field can only be borrowed once: when a column name repeats,
/// the last occurrence is mapped and the earlier ones are discarded, so the
/// field ends up holding the last duplicate's value.
pub fn scan_map<'a, DB: Database>(
    columns: &[String],
    mut mapping: FieldMap<'a, DB>,
) -> Vec<Destination<'a, DB>> {
    let mut targets: Vec<_> = columns.iter().map(|_| Destination::Discard).collect();
    for (index, column) in columns.iter().enumerate().rev() {
        if let Some(slot) = mapping.fields.remove(column.as_str()) {
            targets[index] = Destination::Field(slot);
        }
    }
    targets
}
