//! Row cursor over a sqlx result stream.
//!
//! sqlx hands back query results as a stream of rows. `RowCursor` turns that
//! into a step-wise cursor: advance, look at the current row, scan it into a
//! target list, and after exhaustion ask whether the stream ended with an
//! error. Dropping the stream releases the underlying connection, so
//! `close` (or simply dropping the cursor) is the only cleanup there is.

use crate::db::types::Destination;
use futures_util::StreamExt;
use futures_util::stream::BoxStream;
use sqlx::{Column, ColumnIndex, Database, Row};
use tracing::trace;

/// Step-wise cursor over the rows of one query.
pub struct RowCursor<'c, DB: Database> {
    rows: Option<BoxStream<'c, Result<DB::Row, sqlx::Error>>>,
    current: Option<DB::Row>,
    error: Option<sqlx::Error>,
    rows_read: usize,
}

impl<'c, DB: Database> RowCursor<'c, DB> {
    /// Wrap a row stream, typically the result of `sqlx::query(..).fetch(..)`.
    pub fn new(rows: BoxStream<'c, Result<DB::Row, sqlx::Error>>) -> Self {
        Self {
            rows: Some(rows),
            current: None,
            error: None,
            rows_read: 0,
        }
    }

    /// Move to the next row.
    ///
    /// Returns `false` once the stream is exhausted or failed; the failure,
    /// if any, is kept for `take_error`. The cursor closes itself at that
    /// point.
    pub async fn advance(&mut self) -> bool {
        let Some(rows) = self.rows.as_mut() else {
            return false;
        };

        match rows.next().await {
            Some(Ok(row)) => {
                self.current = Some(row);
                self.rows_read += 1;
                true
            }
            Some(Err(err)) => {
                trace!(rows_read = self.rows_read, error = %err, "Row stream failed");
                self.error = Some(err);
                self.close();
                false
            }
            None => {
                trace!(rows_read = self.rows_read, "Row stream exhausted");
                self.close();
                false
            }
        }
    }

    /// Column names of the current row.
    pub fn columns(&self) -> Result<Vec<String>, sqlx::Error> {
        let row = self.current_row()?;
        Ok(row
            .columns()
            .iter()
            .map(|col| col.name().to_string())
            .collect())
    }

    /// Decode the current row into `targets`, one target per column.
    pub fn scan(&self, targets: &mut [Destination<'_, DB>]) -> Result<(), sqlx::Error>
    where
        usize: ColumnIndex<DB::Row>,
    {
        let row = self.current_row()?;
        let len = row.len();
        if targets.len() != len {
            return Err(sqlx::Error::ColumnIndexOutOfBounds {
                index: targets.len().max(len) - 1,
                len: targets.len().min(len),
            });
        }

        for (index, target) in targets.iter_mut().enumerate() {
            target.fill(row, index)?;
        }
        Ok(())
    }

    /// Take the error that ended iteration, if any.
    pub fn take_error(&mut self) -> Option<sqlx::Error> {
        self.error.take()
    }

    /// Release the underlying stream. Safe to call repeatedly.
    pub fn close(&mut self) {
        if self.rows.take().is_some() {
            trace!(rows_read = self.rows_read, "Row cursor closed");
        }
        self.current = None;
    }

    pub fn is_closed(&self) -> bool {
        self.rows.is_none()
    }

    /// Number of rows produced so far.
    pub fn rows_read(&self) -> usize {
        self.rows_read
    }

    fn current_row(&self) -> Result<&DB::Row, sqlx::Error> {
        self.current
            .as_ref()
            .ok_or_else(|| sqlx::Error::Protocol("cursor is not positioned on a row".to_string()))
    }
}

impl<DB: Database> std::fmt::Debug for RowCursor<'_, DB> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RowCursor")
            .field("closed", &self.is_closed())
            .field("has_row", &self.current.is_some())
            .field("has_error", &self.error.is_some())
            .field("rows_read", &self.rows_read)
            .finish()
    }
}
