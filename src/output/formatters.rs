//! Formatting utilities for terminal output

use crate::scoring::MAX_COMPLEXITY;
use colored::Colorize;

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a complexity score as a bar on the 1-10 scale
#[must_use]
pub fn complexity_bar(complexity: u8, width: usize) -> String {
    create_progress_bar(f64::from(complexity), f64::from(MAX_COMPLEXITY), width)
}

/// Colored check/cross mark for a validity flag
#[must_use]
pub fn validity_mark(is_valid: bool) -> String {
    if is_valid {
        "✓".green().bold().to_string()
    } else {
        "✗".red().to_string()
    }
}
