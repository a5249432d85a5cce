pub mod criteria;
pub mod engine;
pub mod matrix;
pub mod validation;

pub use criteria::{Impact, ImpactVector, WeightVector};
pub use engine::{calculate_scores, ScoreResult};
pub use matrix::Matrix;
pub use validation::{validate_input, ValidatedInput};
