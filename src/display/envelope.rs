//! Envelope display formatting
//!
//! Formats budget totals and per-envelope gauges for terminal output. Each
//! gauge fills toward the envelope's allocation and marks overspend.

use crate::services::{BudgetOverview, EnvelopeSummary, OrphanLabel};

use super::report::{format_bar, format_percentage, separator};

const BAR_WIDTH: usize = 20;

/// Format budget-wide totals
pub fn format_overview(overview: &BudgetOverview, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Monthly budget:  {:>12}\n",
        overview.monthly_budget.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Allocated:       {:>12}  ({} envelopes)\n",
        overview.total_allocated.format_with_symbol(symbol),
        overview.envelope_count
    ));

    let unallocated_note = if overview.unallocated.is_negative() {
        "  (over-allocated)"
    } else {
        ""
    };
    output.push_str(&format!(
        "Unallocated:     {:>12}{}\n",
        overview.unallocated.format_with_symbol(symbol),
        unallocated_note
    ));
    output.push_str(&format!(
        "Spent:           {:>12}  ({} expenses)\n",
        overview.total_spent.format_with_symbol(symbol),
        overview.expense_count
    ));
    output.push_str(&format!(
        "Left to spend:   {:>12}\n",
        overview.budget_remaining.format_with_symbol(symbol)
    ));

    output
}

/// Format one gauge row per envelope
pub fn format_envelope_summaries(summaries: &[EnvelopeSummary], symbol: &str) -> String {
    if summaries.is_empty() {
        return "No envelopes yet.\n\nRun 'envelope envelope add <NAME> <AMOUNT>' to create one.\n"
            .to_string();
    }

    let name_width = summaries
        .iter()
        .map(|s| s.name.chars().count())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<width$}  {:>12}  {:>12}  {:>12}  {:<bar$}  {:>5}\n",
        "Envelope",
        "Allocated",
        "Spent",
        "Remaining",
        "",
        "Used",
        width = name_width,
        bar = BAR_WIDTH + 1
    ));
    output.push_str(&separator(name_width + 2 + 12 + 2 + 12 + 2 + 12 + 2 + BAR_WIDTH + 1 + 2 + 5));
    output.push('\n');

    for summary in summaries {
        output.push_str(&format_summary_row(summary, symbol, name_width));
        output.push('\n');
    }

    output
}

fn format_summary_row(summary: &EnvelopeSummary, symbol: &str, name_width: usize) -> String {
    let used = summary
        .percent_used()
        .map(format_percentage)
        .unwrap_or_else(|| "-".to_string());

    format!(
        "{:<width$}  {:>12}  {:>12}  {:>12}  {}  {:>5}",
        summary.name,
        summary.allocated.format_with_symbol(symbol),
        summary.spent.format_with_symbol(symbol),
        summary.remaining.format_with_symbol(symbol),
        format_bar(
            summary.spent.as_units_f64(),
            summary.allocated.as_units_f64(),
            BAR_WIDTH
        ),
        used,
        width = name_width
    )
}

/// Format spend recorded under labels that have no envelope
pub fn format_orphan_labels(orphans: &[OrphanLabel], symbol: &str) -> String {
    if orphans.is_empty() {
        return String::new();
    }

    let mut output = String::new();
    output.push_str("Spending without an envelope:\n");
    for orphan in orphans {
        output.push_str(&format!(
            "  {} - {} ({} expense{})\n",
            orphan.name,
            orphan.spent.format_with_symbol(symbol),
            orphan.expense_count,
            if orphan.expense_count == 1 { "" } else { "s" }
        ));
    }

    output
}

/// Format a single envelope's details
pub fn format_envelope_details(summary: &EnvelopeSummary, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Envelope: {}\n", summary.name));
    output.push_str(&format!(
        "  Allocated: {}\n",
        summary.allocated.format_with_symbol(symbol)
    ));
    output.push_str(&format!("  Spent:     {}\n", summary.spent.format_with_symbol(symbol)));
    output.push_str(&format!(
        "  Remaining: {}{}\n",
        summary.remaining.format_with_symbol(symbol),
        if summary.is_overspent() { " (overspent)" } else { "" }
    ));
    output.push_str(&format!(
        "  {}\n",
        format_bar(
            summary.spent.as_units_f64(),
            summary.allocated.as_units_f64(),
            BAR_WIDTH
        )
    ));

    output
}
