use std::collections::BTreeMap;
use std::path::Path;

use crate::error::ReportError;
use crate::report::table::{Row, Table};

// ============================================================================
// CSV exporter
// ============================================================================

/// Stand-in for blank header labels, which CSV readers tend to drop.
pub const BLANK_HEADER: &str = "_";

/// Header labels as written to CSV.
pub fn csv_header(table: &Table) -> Vec<String> {
    table
        .header
        .iter()
        .map(|h| {
            if h.trim().is_empty() {
                BLANK_HEADER.to_string()
            } else {
                h.clone()
            }
        })
        .collect()
}

/// Map one row onto the header labels.
///
/// Labelled rows start filling after the label column and the label itself
/// is not written. Columns without a value are left empty.
pub fn flatten_row(header: &[String], row: &Row) -> BTreeMap<String, String> {
    let skip = usize::from(row.label.is_some());
    let mut record: BTreeMap<String, String> =
        header.iter().map(|h| (h.clone(), String::new())).collect();

    for (column, cell) in header.iter().skip(skip).zip(&row.cells) {
        record.insert(column.clone(), cell.to_string());
    }
    record
}

/// Serialize a table as CSV text: header line, then one line per row.
pub fn to_csv(table: &Table) -> String {
    let header = csv_header(table);
    let mut out = csv_line(header.iter().map(String::as_str));

    for row in &table.rows {
        let record = flatten_row(&header, row);
        out.push_str(&csv_line(
            header
                .iter()
                .map(|h| record.get(h).map(String::as_str).unwrap_or("")),
        ));
    }
    out
}

/// Write a table as CSV to `path`.
pub fn write_csv(table: &Table, path: &Path) -> Result<(), ReportError> {
    std::fs::write(path, to_csv(table)).map_err(|source| ReportError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), rows = table.rows.len(), "wrote csv");
    Ok(())
}

fn csv_line<'a>(fields: impl Iterator<Item = &'a str>) -> String {
    let fields: Vec<String> = fields.map(escape_csv).collect();
    format!("{}\n", fields.join(","))
}

/// Quote a field when it contains a delimiter, quote or line break.
pub fn escape_csv(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
