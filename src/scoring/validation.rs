use super::criteria::{parse_weight, split_tokens, Impact, ImpactVector, WeightVector};
use super::matrix::Matrix;
use crate::error::TopsisError;
use crate::table::Table;

/// A dataset that passed every check and is ready for scoring.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedInput {
    /// Criterion column names, in table order (identifier column excluded)
    pub criteria: Vec<String>,
    pub matrix: Matrix,
    pub weights: WeightVector,
    pub impacts: ImpactVector,
}

/// Check a raw table and the weight/impact strings before any numeric work.
///
/// Checks run in a fixed order and stop at the first failure: column count,
/// row count, numeric cells, weight count, impact count, weight values, impact
/// symbols.
pub fn validate_input(
    table: &Table,
    weights: &str,
    impacts: &str,
) -> Result<ValidatedInput, TopsisError> {
    if table.column_count() < 3 {
        return Err(TopsisError::Schema(
            "Input file must have at least 3 columns (first column names, others numeric)."
                .to_string(),
        ));
    }
    if table.row_count() == 0 {
        return Err(TopsisError::Schema(
            "Input file must have at least one data row.".to_string(),
        ));
    }

    let criteria: Vec<String> = table.headers[1..].to_vec();
    let m = criteria.len();

    let mut rows = Vec::with_capacity(table.row_count());
    for (i, record) in table.records.iter().enumerate() {
        let row = record[1..]
            .iter()
            .zip(&criteria)
            .map(|(cell, column)| parse_cell(cell, column, i + 1))
            .collect::<Result<Vec<f64>, _>>()?;
        rows.push(row);
    }

    let weight_tokens = split_tokens(weights);
    if weight_tokens.len() != m {
        return Err(TopsisError::ShapeMismatch {
            what: "weights",
            expected: m,
            found: weight_tokens.len(),
        });
    }
    let impact_tokens = split_tokens(impacts);
    if impact_tokens.len() != m {
        return Err(TopsisError::ShapeMismatch {
            what: "impacts",
            expected: m,
            found: impact_tokens.len(),
        });
    }

    let weights = weight_tokens
        .iter()
        .map(|t| parse_weight(t).ok_or_else(|| TopsisError::WeightParse(t.to_string())))
        .collect::<Result<Vec<_>, _>>()?;
    let impacts = impact_tokens
        .iter()
        .map(|t| Impact::parse(t).ok_or_else(|| TopsisError::InvalidImpact(t.to_string())))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ValidatedInput {
        criteria,
        matrix: Matrix::from_rows(rows),
        weights: WeightVector::new(weights),
        impacts: ImpactVector::new(impacts),
    })
}

fn parse_cell(cell: &str, column: &str, row: usize) -> Result<f64, TopsisError> {
    match cell.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(TopsisError::Type {
            column: column.to_string(),
            row,
            value: cell.to_string(),
        }),
    }
}
