//! Core data models for the envelope tracker
//!
//! This module contains the data structures that represent the budgeting
//! domain: money amounts, envelopes, expenses and the budget state that
//! aggregates them.

pub mod envelope;
pub mod expense;
pub mod money;
pub mod state;

pub use envelope::{Envelope, Envelopes};
pub use expense::Expense;
pub use money::{Money, MoneyParseError};
pub use state::BudgetState;
