use std::path::Path;

use tracing::{debug, info};

use crate::config::OutputConfig;
use crate::error::TopsisError;
use crate::scoring::{calculate_scores, validate_input, ScoreResult};
use crate::table::{materialize, read_table, write_table, Table};

/// Outcome of one invocation: the materialized result table plus the
/// per-row results it was built from.
#[derive(Debug, Clone)]
pub struct RankedTable {
    pub table: Table,
    pub results: Vec<ScoreResult>,
}

impl RankedTable {
    /// Row indices ordered best first; ties keep input order.
    pub fn order_by_rank(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.results.len()).collect();
        order.sort_by_key(|&i| self.results[i].rank);
        order
    }
}

/// Validate and score an in-memory table.
pub fn rank_table(
    table: &Table,
    weights: &str,
    impacts: &str,
    columns: &OutputConfig,
) -> Result<RankedTable, TopsisError> {
    let input = validate_input(table, weights, impacts)?;
    debug!(
        alternatives = input.matrix.rows(),
        criteria = input.matrix.cols(),
        "input validated"
    );
    let results = calculate_scores(&input)?;
    Ok(RankedTable {
        table: materialize(table, &results, columns),
        results,
    })
}

/// Read `input`, score it, and write the result table to `output`.
///
/// Nothing is written unless reading, validation and scoring all succeed.
pub fn run_file(
    input: &Path,
    weights: &str,
    impacts: &str,
    output: &Path,
    columns: &OutputConfig,
) -> Result<RankedTable, TopsisError> {
    let table = read_table(input)?;
    let ranked = rank_table(&table, weights, impacts, columns)?;
    write_table(output, &ranked.table)?;
    info!(
        input = %input.display(),
        output = %output.display(),
        rows = ranked.results.len(),
        "TOPSIS completed"
    );
    Ok(ranked)
}
