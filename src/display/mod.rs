//! Display formatting for terminal output
//!
//! Provides utilities for formatting budget summaries and the expense
//! history for terminal display.

pub mod envelope;
pub mod expense;
pub mod report;

pub use envelope::{
    format_envelope_details, format_envelope_summaries, format_orphan_labels, format_overview,
};
pub use expense::format_expense_table;
