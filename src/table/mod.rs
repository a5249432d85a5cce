pub mod reader;
pub mod writer;

pub use reader::{read_table, read_table_bytes};
pub use writer::{format_score_cell, materialize, to_csv_bytes, write_table};

/// A raw table exactly as read: header names plus string cells.
///
/// The first column is the alternative identifier; every other column is a
/// criterion. Cells are kept verbatim so the result table can reproduce them.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    pub records: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>, records: Vec<Vec<String>>) -> Self {
        Self { headers, records }
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn row_count(&self) -> usize {
        self.records.len()
    }
}
