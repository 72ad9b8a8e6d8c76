//! Error types for row scanning.
//!
//! Two outcomes matter to callers: a single-row fetch that found nothing
//! (`NotFound`, an expected result) and everything the database layer
//! reported (`Driver`, a fault). Driver errors carry the phase they came
//! from so messages read "failed to scan row: ..." rather than a bare
//! sqlx message.

use std::fmt;
use thiserror::Error;

/// Where a driver failure happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Issuing the query (prepare, bind, first fetch).
    Query,
    /// Reading the column names of the result set.
    ///
    /// The scan functions only ask for columns right after a successful
    /// advance, so this surfaces when a `RowCursor` driven by hand is asked
    /// for columns while it is not positioned on a row.
    Columns,
    /// Decoding a row into its scan targets.
    Scan,
    /// Advancing the cursor after at least one row was produced.
    Iteration,
}

impl Phase {
    fn describe(self) -> &'static str {
        match self {
            Phase::Query => "failed to execute query",
            Phase::Columns => "failed to get columns",
            Phase::Scan => "failed to scan row",
            Phase::Iteration => "rows iteration error",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("no rows in result set")]
    NotFound,

    #[error("{phase}: {source}")]
    Driver {
        phase: Phase,
        #[source]
        source: sqlx::Error,
    },
}

impl ScanError {
    /// Wrap a sqlx error with the phase it came from.
    pub fn driver(phase: Phase, source: sqlx::Error) -> Self {
        Self::Driver { phase, source }
    }

    pub fn query(source: sqlx::Error) -> Self {
        Self::driver(Phase::Query, source)
    }

    pub fn columns(source: sqlx::Error) -> Self {
        Self::driver(Phase::Columns, source)
    }

    pub fn scan(source: sqlx::Error) -> Self {
        Self::driver(Phase::Scan, source)
    }

    pub fn iteration(source: sqlx::Error) -> Self {
        Self::driver(Phase::Iteration, source)
    }

    /// True when a single-row fetch produced no rows.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    /// True for every failure reported by the database layer.
    pub fn is_driver_error(&self) -> bool {
        matches!(self, Self::Driver { .. })
    }

    /// Phase of a driver failure, `None` for `NotFound`.
    pub fn phase(&self) -> Option<Phase> {
        match self {
            Self::Driver { phase, .. } => Some(*phase),
            Self::NotFound => None,
        }
    }

    /// The underlying sqlx error, if any.
    pub fn source_error(&self) -> Option<&sqlx::Error> {
        match self {
            Self::Driver { source, .. } => Some(source),
            Self::NotFound => None,
        }
    }

    /// Get a hint for resolving this error, if one applies.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::NotFound => Some("Verify the query conditions match existing data"),
            Self::Driver { source, phase } => match source {
                sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
                    Some("Check that the target field types match the selected column types")
                }
                sqlx::Error::ColumnIndexOutOfBounds { .. } => {
                    Some("Return exactly one scan target per selected column")
                }
                sqlx::Error::Database(_) if *phase == Phase::Query => {
                    Some("Check the SQL syntax and referenced objects")
                }
                sqlx::Error::Io(_) | sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                    Some("Check network connectivity and database server status")
                }
                _ => None,
            },
        }
    }
}

/// Result type alias for scan operations.
pub type ScanResult<T> = Result<T, ScanError>;
