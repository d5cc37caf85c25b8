//! Spreadsheet export
//!
//! One row per field under a styled header, two-level indexed by table
//! then field: consecutive rows of the same table merge their table-name
//! cell. Rows keep collection order; only the document mode sorts tables.

use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook};
use std::path::Path;
use tracing::info;

use crate::collect::FieldRow;
use crate::error::Result;
use crate::render::check_mark;

/// Fixed output name used when the caller does not supply a path.
pub const DEFAULT_FILE_NAME: &str = "database-schema.xlsx";

const HEADERS: [&str; 8] = [
    "Table",
    "Name",
    "Primary Key",
    "Type",
    "Nullable",
    "Default",
    "Unique",
    "Description",
];

const HEADER_FILL: u32 = 0x9CC2E5;

/// Serialize the collected rows to a spreadsheet at `path`.
pub fn write_workbook(rows: &[FieldRow], path: &Path) -> Result<()> {
    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(HEADER_FILL))
        .set_border(FormatBorder::Thin);
    let body_format = Format::new().set_border(FormatBorder::Thin);
    let index_format = Format::new()
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Top);

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Schema")?;

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }
    worksheet.set_column_width(0, 22)?;
    worksheet.set_column_width(1, 18)?;
    worksheet.set_column_width(3, 22)?;
    worksheet.set_column_width(5, 14)?;
    worksheet.set_column_width(7, 32)?;

    // Walk spans of consecutive rows sharing a table so the table-name
    // cell can merge across its span.
    let mut row_idx: u32 = 1;
    let mut i = 0;
    while i < rows.len() {
        let table = rows[i].table.as_str();
        let mut j = i + 1;
        while j < rows.len() && rows[j].table == table {
            j += 1;
        }

        let first = row_idx;
        let last = first + (j - i) as u32 - 1;
        if last > first {
            worksheet.merge_range(first, 0, last, 0, table, &index_format)?;
        } else {
            worksheet.write_string_with_format(first, 0, table, &index_format)?;
        }

        for row in &rows[i..j] {
            write_field_cells(worksheet, row_idx, row, &body_format)?;
            row_idx += 1;
        }
        i = j;
    }

    workbook.save(path)?;
    info!(path = %path.display(), rows = rows.len(), "spreadsheet written");
    Ok(())
}

fn write_field_cells(
    worksheet: &mut rust_xlsxwriter::Worksheet,
    row_idx: u32,
    row: &FieldRow,
    format: &Format,
) -> Result<()> {
    worksheet.write_string_with_format(row_idx, 1, &row.name, format)?;
    worksheet.write_string_with_format(row_idx, 2, check_mark(row.primary_key), format)?;
    worksheet.write_string_with_format(row_idx, 3, &row.type_label, format)?;
    worksheet.write_string_with_format(row_idx, 4, check_mark(row.nullable), format)?;
    worksheet.write_string_with_format(row_idx, 5, row.default.as_deref().unwrap_or(""), format)?;
    worksheet.write_string_with_format(row_idx, 6, check_mark(row.unique), format)?;
    worksheet.write_string_with_format(row_idx, 7, &row.description, format)?;
    Ok(())
}
