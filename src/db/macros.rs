//! Declarative helper for building scan targets.
//!
//! `scan_map!` expands to a `FieldMap` built from `"column" => place` pairs
//! followed by a call to `scan_map`, so a `ScanTarget` implementation stays
//! a single expression.

/// Build scan targets for `columns` from `"column" => place` pairs.
///
/// Each place is borrowed mutably, so the places must be disjoint (distinct
/// struct fields are).
///
/// # Example
///
/// ```ignore
/// fn scan_targets<'a>(&'a mut self, columns: &[String]) -> Vec<Destination<'a, Sqlite>> {
///     scan_map!(columns, {
///         "id" => self.id,
///         "name" => self.name,
///     })
/// }
/// ```
#[macro_export]
macro_rules! scan_map {
    ($columns:expr, { $($name:literal => $place:expr),* $(,)? }) => {
        $crate::scan_map(
            $columns,
            $crate::FieldMap::new()$(.field($name, &mut $place))*,
        )
    };
}
