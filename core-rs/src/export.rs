//! CSV export of result sets
//!
//! Header row of variable names, one line per row, `\n` terminated, fields
//! quoted only when they contain a delimiter, quote or line break.
//! A result without variables exports as empty lines, one per row plus the
//! header.

use std::fs;
use std::path::Path;

use crate::errors::{ExplorerError, Result};
use crate::query::ResultSet;

pub const CSV_CONTENT_TYPE: &str = "text/csv";

/// Serialize `results` into a UTF-8 CSV document
pub fn to_csv(results: &ResultSet) -> Result<String> {
    // csv writes a lone `""` for an empty record
    if results.variables().is_empty() {
        return Ok("\n".repeat(results.len() + 1));
    }

    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(results.variables())?;
    for row in results.rows() {
        writer.write_record(row.cells())?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExplorerError::Io(e.into_error()))?;

    String::from_utf8(bytes).map_err(|e| {
        ExplorerError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })
}

/// Write `results` as CSV to `path`, returning the number of data rows
pub fn write_csv<P: AsRef<Path>>(results: &ResultSet, path: P) -> Result<usize> {
    let path = path.as_ref();
    fs::write(path, to_csv(results)?)?;

    tracing::info!(path = %path.display(), rows = results.len(), "results exported");
    Ok(results.len())
}
