use tracing::debug;

use super::criteria::{Impact, ImpactVector, WeightVector};
use super::matrix::Matrix;
use super::validation::ValidatedInput;
use crate::error::TopsisError;

/// Score used when a row sits on both ideal points at once (only possible when
/// every column is constant, e.g. a single alternative).
pub const DEGENERATE_ROW_SCORE: f64 = 0.5;

/// Score and rank of one alternative, aligned with its input row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreResult {
    pub score: f64,
    pub rank: usize,
}

/// Euclidean distances of one alternative to the two ideal points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Separation {
    pub to_best: f64,
    pub to_worst: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IdealPoints {
    pub best: Vec<f64>,
    pub worst: Vec<f64>,
}

/// Run the full pipeline and return one result per input row, in input order.
pub fn calculate_scores(input: &ValidatedInput) -> Result<Vec<ScoreResult>, TopsisError> {
    let normalized = normalize(&input.matrix, &input.criteria)?;
    let weighted = apply_weights(&normalized, &input.weights);
    let ideal = ideal_points(&weighted, &input.impacts);
    let separations = separations(&weighted, &ideal);

    let scores: Vec<f64> = separations.iter().map(closeness).collect();
    let ranks = competition_ranks(&scores);

    for (i, (sep, score)) in separations.iter().zip(&scores).enumerate() {
        debug!(
            row = i + 1,
            d_best = sep.to_best,
            d_worst = sep.to_worst,
            score,
            "scored alternative"
        );
    }

    Ok(scores
        .into_iter()
        .zip(ranks)
        .map(|(score, rank)| ScoreResult { score, rank })
        .collect())
}

/// Divide each column by its Euclidean norm.
///
/// Values are scaled by the column's largest magnitude before squaring, so the
/// norm never underflows or overflows for finite input. Only a column of exact
/// zeros is rejected, and it is reported by name.
pub fn normalize(matrix: &Matrix, criteria: &[String]) -> Result<Matrix, TopsisError> {
    let mut scales = Vec::with_capacity(matrix.cols());
    for j in 0..matrix.cols() {
        let max_abs = matrix.column(j).fold(0.0_f64, |acc, v| acc.max(v.abs()));
        if max_abs == 0.0 {
            let name = criteria
                .get(j)
                .cloned()
                .unwrap_or_else(|| format!("#{}", j + 1));
            return Err(TopsisError::DegenerateColumn(name));
        }
        // norm = max_abs * root, with root in [1, sqrt(rows)]
        let root = matrix
            .column(j)
            .map(|v| (v / max_abs) * (v / max_abs))
            .sum::<f64>()
            .sqrt();
        scales.push((max_abs, root));
    }
    debug!(?scales, "column scales");
    Ok(matrix.map(|_, j, v| {
        let (max_abs, root) = scales[j];
        (v / max_abs) / root
    }))
}

pub fn apply_weights(normalized: &Matrix, weights: &WeightVector) -> Matrix {
    let w = weights.as_slice();
    normalized.map(|_, j, v| v * w[j])
}

/// Per-column ideal best and worst values, oriented by each impact.
pub fn ideal_points(weighted: &Matrix, impacts: &ImpactVector) -> IdealPoints {
    let mut best = Vec::with_capacity(weighted.cols());
    let mut worst = Vec::with_capacity(weighted.cols());

    for (j, impact) in impacts.as_slice().iter().enumerate() {
        let max = weighted.column(j).fold(f64::NEG_INFINITY, f64::max);
        let min = weighted.column(j).fold(f64::INFINITY, f64::min);
        match impact {
            Impact::Benefit => {
                best.push(max);
                worst.push(min);
            }
            Impact::Cost => {
                best.push(min);
                worst.push(max);
            }
        }
    }

    IdealPoints { best, worst }
}

pub fn separations(weighted: &Matrix, ideal: &IdealPoints) -> Vec<Separation> {
    (0..weighted.rows())
        .map(|i| {
            let row = weighted.row(i);
            Separation {
                to_best: euclidean(row, &ideal.best),
                to_worst: euclidean(row, &ideal.worst),
            }
        })
        .collect()
}

fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

/// Relative closeness to the ideal solution, in `[0, 1]`.
pub fn closeness(sep: &Separation) -> f64 {
    let total = sep.to_best + sep.to_worst;
    if total == 0.0 {
        DEGENERATE_ROW_SCORE
    } else {
        sep.to_worst / total
    }
}

/// Standard competition ranking, highest score first.
///
/// Equal scores share a rank and the next distinct score skips ahead:
/// `[0.9, 0.9, 0.5]` ranks as `[1, 1, 3]`.
pub fn competition_ranks(scores: &[f64]) -> Vec<usize> {
    scores
        .iter()
        .map(|s| 1 + scores.iter().filter(|other| *other > s).count())
        .collect()
}
