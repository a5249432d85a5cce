use std::io::IsTerminal;
use owo_colors::OwoColorize;
use terminal_size::{Width, terminal_size};

use crate::run::RankedTable;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a closeness score for display (fixed 4 decimals)
pub fn format_score(score: f64) -> String {
    format!("{:.4}", score)
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate label to fit available width, accounting for Unicode
fn truncate_label(label: &str, max_width: usize) -> String {
    let chars: Vec<char> = label.chars().collect();
    if chars.len() <= max_width {
        label.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Format ranked alternatives best first with columns: Rank, Score, Label
/// Rank column: 4 chars (fits "999."), right-aligned
/// Score column: 6 chars ("0.6916")
pub fn format_ranked_table(ranked: &RankedTable, use_colors: bool) -> String {
    if ranked.results.is_empty() {
        return "No alternatives found.".to_string();
    }

    let term_width = get_terminal_width();
    let rank_width = 4;
    let score_width = 6;
    let separator = "  ";
    let fixed_width = rank_width + score_width + separator.len() * 2;

    ranked
        .order_by_rank()
        .into_iter()
        .map(|i| {
            let result = &ranked.results[i];
            let label = ranked.table.records[i]
                .first()
                .map(String::as_str)
                .unwrap_or_default();

            let rank_str = format!("{:>width$}", format!("{}.", result.rank), width = rank_width);
            let score_str = format_score(result.score);

            let label = match term_width {
                Some(width) if width > fixed_width + 10 => truncate_label(label, width - fixed_width),
                // Very narrow terminal, show truncated
                Some(_) => truncate_label(label, 20),
                // No terminal (pipe), don't truncate
                None => label.to_string(),
            };

            if use_colors {
                let score_colored = if result.rank == 1 {
                    score_str.green().bold().to_string()
                } else {
                    score_str.bold().to_string()
                };
                format!(
                    "{}{}{}{}{}",
                    rank_str.dimmed(),
                    separator,
                    score_colored,
                    separator,
                    label
                )
            } else {
                format!("{}{}{}{}{}", rank_str, separator, score_str, separator, label)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
