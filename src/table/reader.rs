use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use super::Table;
use crate::error::TopsisError;

/// Read a CSV table with a header row from `path`.
pub fn read_table(path: &Path) -> Result<Table, TopsisError> {
    if !path.exists() {
        return Err(TopsisError::InputNotFound(path.to_path_buf()));
    }
    let file = File::open(path).map_err(|e| TopsisError::Parse(e.to_string()))?;
    let table = read_from(file)?;
    debug!(
        path = %path.display(),
        rows = table.row_count(),
        columns = table.column_count(),
        "read input table"
    );
    Ok(table)
}

/// Read a CSV table with a header row from an in-memory buffer.
pub fn read_table_bytes(bytes: &[u8]) -> Result<Table, TopsisError> {
    read_from(bytes)
}

fn read_from<R: Read>(source: R) -> Result<Table, TopsisError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(source);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| TopsisError::Parse(e.to_string()))?
        .iter()
        .map(str::to_string)
        .collect();

    if headers.is_empty() {
        return Err(TopsisError::Parse("No columns to parse from file".to_string()));
    }

    let mut records = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| TopsisError::Parse(e.to_string()))?;
        records.push(record.iter().map(str::to_string).collect());
    }

    Ok(Table::new(headers, records))
}
