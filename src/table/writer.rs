use std::io::Write;
use std::path::Path;

use atomic_write_file::AtomicWriteFile;
use tracing::debug;

use super::Table;
use crate::config::OutputConfig;
use crate::error::TopsisError;
use crate::scoring::ScoreResult;

/// Append the score and rank columns to `table`, row for row.
///
/// `results` must be aligned with `table.records`. Original cells are copied
/// verbatim; the source table is left untouched.
pub fn materialize(table: &Table, results: &[ScoreResult], columns: &OutputConfig) -> Table {
    debug_assert_eq!(table.row_count(), results.len());

    let mut headers = table.headers.clone();
    headers.push(columns.score_column.clone());
    headers.push(columns.rank_column.clone());

    let records = table
        .records
        .iter()
        .zip(results)
        .map(|(record, result)| {
            let mut row = record.clone();
            row.push(format_score_cell(result.score));
            row.push(result.rank.to_string());
            row
        })
        .collect();

    Table::new(headers, records)
}

/// Shortest round-trip rendering that always keeps a fractional part
/// (`1.0`, `0.5`, `0.5342768571821003`).
pub fn format_score_cell(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{:.1}", score)
    } else {
        format!("{}", score)
    }
}

/// Serialize a table to CSV bytes.
pub fn to_csv_bytes(table: &Table) -> std::io::Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(&table.headers)?;
    for record in &table.records {
        writer.write_record(record)?;
    }
    writer.into_inner().map_err(|e| e.into_error())
}

/// Write a table to `path`, replacing any existing file atomically.
///
/// The whole table is serialized before the destination is touched, so a
/// failure never leaves a partial file behind.
pub fn write_table(path: &Path, table: &Table) -> Result<(), TopsisError> {
    let to_write_error = |source: std::io::Error| TopsisError::Write {
        path: path.to_path_buf(),
        source,
    };

    let bytes = to_csv_bytes(table).map_err(to_write_error)?;

    let mut file = AtomicWriteFile::open(path).map_err(to_write_error)?;
    file.write_all(&bytes).map_err(to_write_error)?;
    file.commit().map_err(to_write_error)?;

    debug!(path = %path.display(), bytes = bytes.len(), "wrote result table");
    Ok(())
}
