//! Envelope tracker - personal envelope budgeting from the terminal
//!
//! A user sets a monthly budget, splits it into named envelopes, records
//! expenses against them, and checks what is left in each one. The whole
//! budget is kept as a single JSON snapshot that is rewritten after every
//! change.
//!
//! # Architecture
//!
//! - `config`: Base directory and user settings
//! - `error`: Custom error types
//! - `models`: Money, envelopes, expenses and the budget state
//! - `storage`: Atomic JSON file I/O and the snapshot store
//! - `services`: Budget mutations and read-side summaries
//! - `display`: Terminal formatting
//! - `cli`: Command definitions and handlers
//!
//! # Example
//!
//! ```rust,no_run
//! use envelope_tracker::models::Money;
//! use envelope_tracker::services::{BudgetService, SummaryService};
//! use envelope_tracker::storage::SnapshotStore;
//!
//! # fn main() -> Result<(), envelope_tracker::EnvelopeError> {
//! let store = SnapshotStore::new("donnees_budget.json");
//! let mut state = store.load()?;
//!
//! let service = BudgetService::new(&store);
//! service.set_monthly_budget(&mut state, Money::from_units_cents(2000, 0))?;
//! service.add_envelope(&mut state, "Food", Money::from_units_cents(400, 0))?;
//!
//! let left = SummaryService::new(&state).remaining("Food");
//! # let _ = left;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{EnvelopeError, EnvelopeResult};
