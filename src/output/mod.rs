pub mod formatter;

pub use formatter::{format_ranked_table, format_score, should_use_colors};
