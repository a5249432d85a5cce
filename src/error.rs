use std::path::PathBuf;

use thiserror::Error;

/// Every way a single TOPSIS invocation can fail.
///
/// Each variant renders as one human-readable line; the CLI prints it and the
/// HTTP surface returns it verbatim. All of them are terminal for the call.
#[derive(Debug, Error)]
pub enum TopsisError {
    #[error("File '{}' not found.", .0.display())]
    InputNotFound(PathBuf),

    #[error("Could not read CSV file. {0}")]
    Parse(String),

    #[error("{0}")]
    Schema(String),

    #[error("All criteria columns must be numeric: non-numeric criterion '{value}' in column '{column}' (row {row}).")]
    Type {
        column: String,
        row: usize,
        value: String,
    },

    #[error("Number of {what} ({found}) must match number of criteria columns ({expected}).")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Weights must be non-negative numbers, got '{0}'.")]
    WeightParse(String),

    #[error("Impacts must be '+' or '-' only, got '{0}'.")]
    InvalidImpact(String),

    #[error("Criterion column '{0}' has zero norm (all values are zero); cannot normalize.")]
    DegenerateColumn(String),

    #[error("Could not write result to '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TopsisError {
    /// Stable tag for logs and assertions.
    pub fn kind(&self) -> &'static str {
        match self {
            TopsisError::InputNotFound(_) => "InputNotFound",
            TopsisError::Parse(_) => "ParseError",
            TopsisError::Schema(_) => "SchemaError",
            TopsisError::Type { .. } => "TypeError",
            TopsisError::ShapeMismatch { .. } => "ShapeMismatch",
            TopsisError::WeightParse(_) => "WeightParseError",
            TopsisError::InvalidImpact(_) => "InvalidImpact",
            TopsisError::DegenerateColumn(_) => "DegenerateColumn",
            TopsisError::Write { .. } => "WriteError",
        }
    }

    /// True for failures caused by the input rather than the destination.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, TopsisError::Write { .. })
    }
}
