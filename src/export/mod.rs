//! Export projections.
//!
//! Turns the filtered and sorted set into row-major structures for the export
//! collaborators. Exports always cover every matching row, not just the page on
//! screen. No value formatting happens here; that belongs to the writers in
//! [`csv_export`] and [`print`].

pub mod csv_export;
pub mod print;

use crate::model::{CellValue, ColumnList, Record};
use serde::ser::{Serialize, SerializeMap, Serializer};

pub use csv_export::{export_csv, to_csv_string, write_csv, DEFAULT_CSV_FILENAME};
pub use print::{PrintDocument, PrintLayout, DEFAULT_PRINT_FILENAME};

/// One exported row: column → value, in column-list order.
///
/// A record without a key for some column yields `None` for that cell.
/// Serializes as a JSON object with keys in column order.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportRow<'a> {
    cells: Vec<(&'a str, Option<&'a CellValue>)>,
}

impl<'a> ExportRow<'a> {
    /// Value for `column`, `None` if the column is unknown or the cell is missing.
    pub fn get(&self, column: &str) -> Option<&'a CellValue> {
        self.cells
            .iter()
            .find(|(name, _)| *name == column)
            .and_then(|(_, value)| *value)
    }

    /// Cells in column order.
    pub fn cells(&self) -> &[(&'a str, Option<&'a CellValue>)] {
        &self.cells
    }
}

impl Serialize for ExportRow<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (name, value) in &self.cells {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Header plus value arrays, for the print-table target.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRows<'a> {
    /// Column names, in order.
    pub header: Vec<&'a str>,
    /// One array per record; `rows[i][j]` is record `i` at `header[j]`.
    pub rows: Vec<Vec<Option<&'a CellValue>>>,
}

/// Project records to flat column → value rows.
pub fn to_export_rows<'a>(records: &[&'a Record], columns: &'a ColumnList) -> Vec<ExportRow<'a>> {
    records
        .iter()
        .map(|record| ExportRow {
            cells: columns
                .iter()
                .map(|column| (column, record.get(column)))
                .collect(),
        })
        .collect()
}

/// Project records to a header and value arrays.
pub fn to_table_rows<'a>(records: &[&'a Record], columns: &'a ColumnList) -> TableRows<'a> {
    TableRows {
        header: columns.iter().collect(),
        rows: records
            .iter()
            .map(|record| columns.iter().map(|column| record.get(column)).collect())
            .collect(),
    }
}
