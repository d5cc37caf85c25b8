//! Design-document export
//!
//! Layout: a title, a numbered table-of-tables summary, a page break,
//! then one heading and one 7-column detail table per table, in the same
//! sorted order as the summary. Header rows carry the shared fill color.

use docx_rs::{
    BreakType, Docx, Paragraph, Run, RunFonts, ShdType, Shading, Style, StyleType, Table,
    TableCell, TableRow,
};
use std::fs::File;
use std::path::Path;
use tracing::info;

use crate::collect::FieldRow;
use crate::error::{Error, Result};
use crate::render::{check_mark, rows_for, table_names, DETAIL_COLUMNS};

/// Fixed output name used when the caller does not supply a path.
pub const DEFAULT_FILE_NAME: &str = "database-schema.docx";

const TITLE: &str = "Database Design Specification";
const SUMMARY_HEADING: &str = "1. Table List";
const DETAIL_HEADING: &str = "2. Table Details";
const SUMMARY_COLUMNS: [&str; 3] = ["No.", "Table", "Description"];
const HEADER_FILL: &str = "9CC2E5";

/// Serialize the collected rows to a design document at `path`.
pub fn write_document(rows: &[FieldRow], path: &Path) -> Result<()> {
    let tables = table_names(rows);

    let mut docx = base_document()
        .add_paragraph(styled(TITLE, "Title"))
        .add_paragraph(styled(SUMMARY_HEADING, "Heading1"))
        .add_table(summary_table(&tables))
        .add_paragraph(Paragraph::new().add_run(Run::new().add_break(BreakType::Page)))
        .add_paragraph(styled(DETAIL_HEADING, "Heading1"));

    for table in &tables {
        docx = docx
            .add_paragraph(styled(table, "Heading2"))
            .add_table(detail_table(rows, table))
            .add_paragraph(Paragraph::new());
    }

    let file = File::create(path)
        .map_err(|e| Error::io(format!("failed to create {}", path.display()), e))?;
    docx.build()
        .pack(file)
        .map_err(|e| Error::document(format!("failed to write {}: {e}", path.display())))?;

    info!(path = %path.display(), tables = tables.len(), rows = rows.len(), "document written");
    Ok(())
}

/// Empty document with the body font, 10pt body size and heading styles.
fn base_document() -> Docx {
    Docx::new()
        .default_fonts(RunFonts::new().ascii("Times New Roman"))
        .default_size(20)
        .add_style(
            Style::new("Title", StyleType::Paragraph)
                .name("Title")
                .size(40)
                .bold(),
        )
        .add_style(
            Style::new("Heading1", StyleType::Paragraph)
                .name("Heading 1")
                .size(28)
                .bold(),
        )
        .add_style(
            Style::new("Heading2", StyleType::Paragraph)
                .name("Heading 2")
                .size(24)
                .bold(),
        )
}

fn styled(text: &str, style_id: &str) -> Paragraph {
    Paragraph::new()
        .style(style_id)
        .add_run(Run::new().add_text(text))
}

fn header_cell(text: &str) -> TableCell {
    TableCell::new()
        .shading(
            Shading::new()
                .shd_type(ShdType::Clear)
                .color("auto")
                .fill(HEADER_FILL),
        )
        .add_paragraph(Paragraph::new().add_run(Run::new().add_text(text).bold()))
}

fn body_cell(text: &str) -> TableCell {
    TableCell::new().add_paragraph(Paragraph::new().add_run(Run::new().add_text(text)))
}

/// The table-of-tables: sequence number and table name per distinct
/// table. The description column stays unfilled.
fn summary_table(tables: &[&str]) -> Table {
    let mut table_rows = vec![TableRow::new(
        SUMMARY_COLUMNS.iter().map(|c| header_cell(c)).collect(),
    )];

    for (i, name) in tables.iter().enumerate() {
        table_rows.push(TableRow::new(vec![
            body_cell(&(i + 1).to_string()),
            body_cell(name),
            body_cell(""),
        ]));
    }

    Table::new(table_rows).set_grid(vec![900, 4100, 4100])
}

fn detail_table(rows: &[FieldRow], table: &str) -> Table {
    let mut table_rows = vec![TableRow::new(
        DETAIL_COLUMNS.iter().map(|c| header_cell(c)).collect(),
    )];

    for row in rows_for(rows, table) {
        table_rows.push(TableRow::new(vec![
            body_cell(&row.name),
            body_cell(&row.type_label),
            body_cell(check_mark(row.primary_key)),
            body_cell(row.default.as_deref().unwrap_or("")),
            body_cell(check_mark(row.nullable)),
            body_cell(check_mark(row.unique)),
            body_cell(&row.description),
        ]));
    }

    Table::new(table_rows).set_grid(vec![1500, 1700, 900, 1300, 900, 900, 1900])
}
