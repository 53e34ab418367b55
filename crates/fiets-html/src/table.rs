//! Table rendering with header inference.

use fiets_doc::{Table, Text};

use crate::inline::write_text;

/// Cell content marking a separator row.
const SEPARATOR_CELL: &str = "-";

/// Whether row 0 of `table` is a header.
///
/// A header needs at least three rows, and every cell of row 1 must be a
/// single plain `-` span (the separator row). Only row 1 is inspected.
pub fn has_header(table: &Table) -> bool {
    table.rows.len() >= 3
        && table.rows[1]
            .iter()
            .all(|cell| cell.is_plain(SEPARATOR_CELL))
}

pub(crate) fn write_table(table: &Table, out: &mut String) {
    out.push_str("<table>");
    let body_start = if has_header(table) {
        tracing::debug!(rows = table.rows.len(), "Table header inferred");
        out.push_str("<thead><tr>");
        write_cells("th", &table.rows[0], out);
        out.push_str("</tr></thead>");
        // Row 1 is the separator and is not rendered.
        2
    } else {
        0
    };

    out.push_str("<tbody>");
    for row in &table.rows[body_start..] {
        out.push_str("<tr>");
        write_cells("td", row, out);
        out.push_str("</tr>");
    }
    out.push_str("</tbody></table>");
}

fn write_cells(tag: &str, cells: &[Text], out: &mut String) {
    for cell in cells {
        out.push('<');
        out.push_str(tag);
        out.push('>');
        write_text(cell, out);
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
    }
}
