//! Row materialization.
//!
//! This module turns cursor rows into values of a caller's `ScanTarget`
//! type:
//! - `scan_one` / `scan_all` work on an open `RowCursor`
//! - `query_one` / `query_all` issue a query through any sqlx `Executor`
//!   (pool, connection, transaction), own the cursor for the duration of the
//!   call and delegate to the scan functions
//!
//! Every value starts as `T::default()` and is filled in place from its scan
//! targets. Failures are never partial: if any row fails, the whole call
//! fails and rows scanned so far are dropped.

use crate::db::cursor::RowCursor;
use crate::db::params::BindParam;
use crate::db::target::ScanTarget;
use crate::error::{Phase, ScanError, ScanResult};
use crate::models::{QueryOptions, QueryParam};
use sqlx::{ColumnIndex, Database, Executor, IntoArguments};
use tracing::{debug, warn};

/// Scan the first row of `cursor` into a new `T`.
///
/// Fails with `ScanError::NotFound` when the cursor has no rows. The cursor
/// is left on the first row; nothing past it is read.
pub async fn scan_one<T, DB>(cursor: &mut RowCursor<'_, DB>) -> ScanResult<T>
where
    T: Default + ScanTarget<DB>,
    DB: Database,
    usize: ColumnIndex<DB::Row>,
{
    if !cursor.advance().await {
        return match cursor.take_error() {
            Some(err) => Err(stream_error(cursor, err)),
            None => Err(ScanError::NotFound),
        };
    }

    let columns = cursor.columns().map_err(ScanError::columns)?;
    materialize(cursor, &columns)
}

/// Scan every remaining row of `cursor`, in order.
///
/// Column names are read once, at the first row, and reused for the rest
/// of the result set. An empty result set yields an empty vector.
pub async fn scan_all<T, DB>(
    cursor: &mut RowCursor<'_, DB>,
    options: QueryOptions,
) -> ScanResult<Vec<T>>
where
    T: Default + ScanTarget<DB>,
    DB: Database,
    usize: ColumnIndex<DB::Row>,
{
    let mut results = Vec::with_capacity(options.expected_size);

    if cursor.advance().await {
        let columns = cursor.columns().map_err(ScanError::columns)?;
        loop {
            results.push(materialize(cursor, &columns)?);
            if !cursor.advance().await {
                break;
            }
        }
    }

    if let Some(err) = cursor.take_error() {
        return Err(stream_error(cursor, err));
    }

    if options.expected_size > 0 && results.len() > options.expected_size {
        warn!(
            rows = results.len(),
            expected_size = options.expected_size,
            "Result set exceeded expected size"
        );
    }
    debug!(
        rows = results.len(),
        expected_size = options.expected_size,
        "Scanned rows"
    );

    Ok(results)
}

/// Run `sql` with `params` and scan the first row into a new `T`.
///
/// Fails with `ScanError::NotFound` when the query returns no rows.
pub async fn query_one<'e, 'c: 'e, T, DB, E>(
    executor: E,
    sql: &'e str,
    params: &'e [QueryParam],
) -> ScanResult<T>
where
    T: Default + ScanTarget<DB>,
    DB: BindParam,
    for<'q> <DB as Database>::Arguments<'q>: IntoArguments<'q, DB>,
    usize: ColumnIndex<DB::Row>,
    E: 'e + Executor<'c, Database = DB>,
{
    debug!(sql = %sql, params = params.len(), "Executing scan query");

    let mut cursor = open_cursor(executor, sql, params);
    scan_one(&mut cursor).await
}

/// Run `sql` with `params` and scan every row.
pub async fn query_all<'e, 'c: 'e, T, DB, E>(
    executor: E,
    sql: &'e str,
    params: &'e [QueryParam],
    options: QueryOptions,
) -> ScanResult<Vec<T>>
where
    T: Default + ScanTarget<DB>,
    DB: BindParam,
    for<'q> <DB as Database>::Arguments<'q>: IntoArguments<'q, DB>,
    usize: ColumnIndex<DB::Row>,
    E: 'e + Executor<'c, Database = DB>,
{
    debug!(
        sql = %sql,
        params = params.len(),
        expected_size = options.expected_size,
        "Executing scan query"
    );

    let mut cursor = open_cursor(executor, sql, params);
    scan_all(&mut cursor, options).await
}

// =============================================================================
// Helpers
// =============================================================================

/// Issue `sql` and wrap the resulting row stream.
fn open_cursor<'e, 'c: 'e, DB, E>(
    executor: E,
    sql: &'e str,
    params: &'e [QueryParam],
) -> RowCursor<'e, DB>
where
    DB: BindParam,
    for<'q> <DB as Database>::Arguments<'q>: IntoArguments<'q, DB>,
    E: 'e + Executor<'c, Database = DB>,
{
    // When params is empty, use raw SQL to avoid prepared statement issues
    if params.is_empty() {
        return RowCursor::new(executor.fetch(sql));
    }
    let query = DB::bind_all(sqlx::query::<DB>(sql), params);
    RowCursor::new(query.fetch(executor))
}

/// Build a fresh `T` from the cursor's current row.
fn materialize<T, DB>(cursor: &RowCursor<'_, DB>, columns: &[String]) -> ScanResult<T>
where
    T: Default + ScanTarget<DB>,
    DB: Database,
    usize: ColumnIndex<DB::Row>,
{
    let mut value = T::default();
    {
        let mut targets = value.scan_targets(columns);
        cursor.scan(&mut targets).map_err(ScanError::scan)?;
    }
    Ok(value)
}

/// sqlx reports prepare and execute failures on the first poll of the row
/// stream, so an error before any row belongs to the query itself.
fn stream_error<DB: Database>(cursor: &RowCursor<'_, DB>, err: sqlx::Error) -> ScanError {
    let phase = if cursor.rows_read() == 0 {
        Phase::Query
    } else {
        Phase::Iteration
    };
    ScanError::driver(phase, err)
}
