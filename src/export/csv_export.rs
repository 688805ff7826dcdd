//! CSV serializer for export rows.

use super::ExportRow;
use crate::model::{ColumnList, ExportError};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// File name used when the caller does not pick one.
pub const DEFAULT_CSV_FILENAME: &str = "data.csv";

/// Write `rows` as CSV: one header line with the column names, then one
/// line per row. Missing cells are empty; quoting is left to the `csv` crate.
///
/// # Errors
///
/// Returns `ExportError::Csv` if the underlying writer fails.
pub fn write_csv<W: Write>(
    rows: &[ExportRow<'_>],
    columns: &ColumnList,
    writer: W,
) -> Result<(), ExportError> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(columns.iter())?;
    for row in rows {
        wtr.write_record(
            row.cells()
                .iter()
                .map(|(_, value)| value.map(ToString::to_string).unwrap_or_default()),
        )?;
    }

    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Render `rows` to an in-memory CSV string.
///
/// # Errors
///
/// Returns `ExportError::Csv` if serialization fails.
pub fn to_csv_string(rows: &[ExportRow<'_>], columns: &ColumnList) -> Result<String, ExportError> {
    let mut buffer = Vec::new();
    write_csv(rows, columns, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Write `rows` as CSV to `path`, creating or truncating the file.
///
/// # Errors
///
/// Returns `ExportError::Io` if the file cannot be created and
/// `ExportError::Csv` if writing fails.
pub fn export_csv(
    path: &Path,
    rows: &[ExportRow<'_>],
    columns: &ColumnList,
) -> Result<(), ExportError> {
    let file = File::create(path).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    write_csv(rows, columns, file)?;

    info!(path = %path.display(), rows = rows.len(), "CSV export written");
    Ok(())
}
