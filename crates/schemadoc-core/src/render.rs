//! Document rendering: turn collected rows into output artifacts
//!
//! Two writers share the cell conventions here: boolean cells render as a
//! check mark or blank, absent values render blank, everything else uses
//! its string form.

pub mod docx;
pub mod xlsx;

use crate::collect::FieldRow;

/// Glyph used for set boolean cells in both output formats.
pub const CHECK_MARK: &str = "✓";

/// Column headers shared by the per-table detail tables.
pub(crate) const DETAIL_COLUMNS: [&str; 7] = [
    "Name",
    "Type",
    "Primary Key",
    "Default",
    "Nullable",
    "Unique",
    "Description",
];

pub(crate) fn check_mark(flag: bool) -> &'static str {
    if flag { CHECK_MARK } else { "" }
}

/// Distinct table names, sorted. Both the document summary and the detail
/// sections iterate this order.
pub fn table_names(rows: &[FieldRow]) -> Vec<&str> {
    let mut names: Vec<&str> = rows.iter().map(|r| r.table.as_str()).collect();
    names.sort_unstable();
    names.dedup();
    names
}

/// Rows belonging to one table, in collection order.
pub(crate) fn rows_for<'a>(rows: &'a [FieldRow], table: &str) -> Vec<&'a FieldRow> {
    rows.iter().filter(|r| r.table == table).collect()
}
