//! Scan destination types.
//!
//! A `Slot` is anything that can decode one column of a row into itself.
//! Every type sqlx knows how to decode is a slot, so struct fields such as
//! `i64`, `String` or `Option<chrono::NaiveDateTime>` can be handed to the
//! scanner directly.
//!
//! A `Destination` is one entry of a target list: either a borrowed slot or
//! a discard marker for columns the caller does not care about.

use sqlx::{ColumnIndex, Database, Decode, Row, Type};
use std::fmt;

/// A write location for one decoded column value.
pub trait Slot<DB: Database> {
    /// Decode column `index` of `row` into `self`.
    fn fill(&mut self, row: &DB::Row, index: usize) -> Result<(), sqlx::Error>;
}

impl<DB, T> Slot<DB> for T
where
    DB: Database,
    T: for<'r> Decode<'r, DB> + Type<DB>,
    usize: ColumnIndex<DB::Row>,
{
    fn fill(&mut self, row: &DB::Row, index: usize) -> Result<(), sqlx::Error> {
        *self = row.try_get(index)?;
        Ok(())
    }
}

/// One scan target, positionally aligned to a result column.
pub enum Destination<'a, DB: Database> {
    /// Decode the column into a caller-owned slot.
    Field(&'a mut dyn Slot<DB>),
    /// Accept the column and drop its value.
    Discard,
}

impl<'a, DB: Database> Destination<'a, DB> {
    /// Borrow `slot` as a destination.
    pub fn field<T: Slot<DB>>(slot: &'a mut T) -> Self {
        Self::Field(slot)
    }

    pub fn discard() -> Self {
        Self::Discard
    }

    pub fn is_discard(&self) -> bool {
        matches!(self, Self::Discard)
    }

    /// Write column `index` of `row` into this destination.
    ///
    /// A discarded column is still looked up, so an out-of-range index fails
    /// the same way it would for a mapped field.
    pub fn fill(&mut self, row: &DB::Row, index: usize) -> Result<(), sqlx::Error>
    where
        usize: ColumnIndex<DB::Row>,
    {
        match self {
            Self::Field(slot) => (**slot).fill(row, index),
            Self::Discard => row.try_get_raw(index).map(|_| ()),
        }
    }
}

impl<DB: Database> fmt::Debug for Destination<'_, DB> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(_) => f.write_str("Field"),
            Self::Discard => f.write_str("Discard"),
        }
    }
}
