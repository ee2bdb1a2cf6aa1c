//! Formatting utilities for terminal output

use crate::core::Attempt;

/// Format one transcript line as `" 3. R, Y, G, B  |  K, W"`
#[must_use]
pub fn format_attempt(number: usize, attempt: &Attempt) -> String {
    format!(
        "{number:>2}. {}  |  {}",
        attempt.guess(),
        attempt.response()
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
