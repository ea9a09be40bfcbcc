//! Report formatting utilities for terminal output
//!
//! Shared helpers for amounts, percentages, bars and dates.

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;

use crate::models::expense::SNAPSHOT_DATE_FORMAT;

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple gauge bar of `value` against `max_value`
///
/// The bar is capped at `width`; a trailing `!` marks values past the maximum.
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return format!("{} ", "░".repeat(width));
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);
    let marker = if value > max_value { '!' } else { ' ' };

    format!("{}{}{}", "█".repeat(filled), "░".repeat(width - filled), marker)
}

/// Format a date with a user strftime pattern
///
/// Falls back to `YYYY-MM-DD` if the pattern is invalid.
pub fn format_date(date: NaiveDate, pattern: &str) -> String {
    let valid = !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error));
    let pattern = if valid { pattern } else { SNAPSHOT_DATE_FORMAT };
    date.format(pattern).to_string()
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}
