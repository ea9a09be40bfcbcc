//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod envelope;
pub mod expense;

pub use budget::{handle_budget_command, BudgetCommands};
pub use envelope::{handle_envelope_command, EnvelopeCommands};
pub use expense::{handle_expense_command, ExpenseCommands};

use chrono::NaiveDate;

use crate::config::Settings;
use crate::models::expense::SNAPSHOT_DATE_FORMAT;
use crate::models::{BudgetState, Money};
use crate::services::{BudgetService, MutationOutcome};
use crate::storage::SnapshotStore;

/// Everything a command needs for one session
///
/// The state is loaded once at startup and handed to each command; mutations
/// write it back through the store.
pub struct Session {
    pub settings: Settings,
    pub store: SnapshotStore,
    pub state: BudgetState,
}

impl Session {
    /// Start a session by loading the snapshot
    pub fn open(settings: Settings, store: SnapshotStore) -> crate::error::EnvelopeResult<Self> {
        let state = store.load()?;
        Ok(Self {
            settings,
            store,
            state,
        })
    }

    /// Mutation service configured from settings, plus the state it mutates
    pub fn mutate(&mut self) -> (BudgetService<'_>, &mut BudgetState) {
        let service =
            BudgetService::new(&self.store).with_strict_envelopes(self.settings.strict_envelopes);
        (service, &mut self.state)
    }

    pub fn symbol(&self) -> &str {
        &self.settings.currency_symbol
    }
}

/// Parse a money amount argument
pub fn parse_money(s: &str) -> Result<Money, String> {
    Money::parse(s).map_err(|e| e.to_string())
}

/// Parse a money amount argument that must not be negative
pub fn parse_non_negative_money(s: &str) -> Result<Money, String> {
    let amount = parse_money(s)?;
    if amount.is_negative() {
        return Err(format!("amount cannot be negative: {}", s));
    }
    Ok(amount)
}

/// Parse a `YYYY-MM-DD` date argument
pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s.trim(), SNAPSHOT_DATE_FORMAT)
        .map_err(|e| format!("invalid date '{}' (expected YYYY-MM-DD): {}", s, e))
}

/// Print the result of a mutation
fn report_outcome(outcome: &MutationOutcome, applied: impl FnOnce() -> String) {
    match outcome {
        MutationOutcome::Applied => println!("{}", applied()),
        MutationOutcome::Unchanged => println!("No change."),
        MutationOutcome::Skipped(reason) => println!("Nothing recorded: {}", reason),
    }
}
