//! Budget service
//!
//! The three mutations on the budget: set the monthly budget, add an
//! envelope, record an expense. Each one validates its input, applies the
//! change to a copy of the state, saves that copy, and only then commits it
//! to the caller's state. A failed save leaves the caller's state untouched.
//!
//! Invalid input is soft-rejected: nothing changes, nothing is written, and
//! the reason comes back as [`MutationOutcome::Skipped`].

use std::fmt;

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::error::EnvelopeResult;
use crate::models::{BudgetState, Expense, Money};
use crate::storage::SnapshotStore;

/// Result of a mutation that did not fail on I/O
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    /// State changed and the snapshot was rewritten
    Applied,
    /// Value was already current; nothing was written
    Unchanged,
    /// Input was rejected; nothing changed
    Skipped(SkipReason),
}

impl MutationOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped(_))
    }
}

/// Why a mutation was soft-rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    EmptyEnvelopeName,
    NonPositiveAmount(Money),
    NegativeBudget(Money),
    UnknownEnvelope(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyEnvelopeName => write!(f, "envelope name is empty"),
            Self::NonPositiveAmount(amount) => {
                write!(f, "amount must be greater than zero (got {})", amount)
            }
            Self::NegativeBudget(amount) => {
                write!(f, "monthly budget cannot be negative (got {})", amount)
            }
            Self::UnknownEnvelope(name) => write!(f, "no envelope named '{}'", name),
        }
    }
}

/// Service for budget mutations
pub struct BudgetService<'a> {
    store: &'a SnapshotStore,
    strict_envelopes: bool,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service writing to the given store
    pub fn new(store: &'a SnapshotStore) -> Self {
        Self {
            store,
            strict_envelopes: false,
        }
    }

    /// Require expenses to name an existing envelope
    pub fn with_strict_envelopes(mut self, strict: bool) -> Self {
        self.strict_envelopes = strict;
        self
    }

    /// Set the monthly budget
    ///
    /// Writes only when the value actually changes.
    pub fn set_monthly_budget(
        &self,
        state: &mut BudgetState,
        amount: Money,
    ) -> EnvelopeResult<MutationOutcome> {
        if amount.is_negative() {
            return Ok(skip(SkipReason::NegativeBudget(amount)));
        }

        if state.monthly_budget == amount {
            debug!(%amount, "Monthly budget unchanged, skipping write");
            return Ok(MutationOutcome::Unchanged);
        }

        let mut next = state.clone();
        next.monthly_budget = amount;
        self.commit(state, next)?;

        debug!(%amount, "Set monthly budget");
        Ok(MutationOutcome::Applied)
    }

    /// Add an envelope, overwriting the allocation of an existing one
    pub fn add_envelope(
        &self,
        state: &mut BudgetState,
        name: &str,
        amount: Money,
    ) -> EnvelopeResult<MutationOutcome> {
        if name.is_empty() {
            return Ok(skip(SkipReason::EmptyEnvelopeName));
        }
        if !amount.is_positive() {
            return Ok(skip(SkipReason::NonPositiveAmount(amount)));
        }

        let mut next = state.clone();
        let previous = next.envelopes.insert(name, amount);
        self.commit(state, next)?;

        match previous {
            Some(old) => debug!(envelope = name, %old, new = %amount, "Overwrote envelope"),
            None => debug!(envelope = name, %amount, "Added envelope"),
        }
        Ok(MutationOutcome::Applied)
    }

    /// Record an expense against an envelope
    ///
    /// Unless strict envelopes are enabled, the envelope does not have to
    /// exist; the expense is recorded under that label anyway.
    pub fn add_expense(
        &self,
        state: &mut BudgetState,
        amount: Money,
        envelope: &str,
        description: &str,
        date: NaiveDate,
    ) -> EnvelopeResult<MutationOutcome> {
        if !amount.is_positive() {
            return Ok(skip(SkipReason::NonPositiveAmount(amount)));
        }
        if envelope.is_empty() {
            return Ok(skip(SkipReason::EmptyEnvelopeName));
        }

        if !state.envelopes.contains(envelope) {
            if self.strict_envelopes {
                return Ok(skip(SkipReason::UnknownEnvelope(envelope.to_string())));
            }
            warn!(envelope, "Recording expense against an envelope that does not exist");
        }

        let mut next = state.clone();
        next.expenses.push(Expense::new(amount, envelope, description, date));
        self.commit(state, next)?;

        debug!(envelope, %amount, %date, "Recorded expense");
        Ok(MutationOutcome::Applied)
    }

    fn commit(&self, state: &mut BudgetState, next: BudgetState) -> EnvelopeResult<()> {
        self.store.save(&next)?;
        *state = next;
        Ok(())
    }
}

fn skip(reason: SkipReason) -> MutationOutcome {
    warn!(%reason, "Ignoring invalid input");
    MutationOutcome::Skipped(reason)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, SnapshotStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(temp_dir.path().join("donnees_budget.json"));
        (temp_dir, store)
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    fn money(units: i64) -> Money {
        Money::from_units_cents(units, 0)
    }

    #[test]
    fn test_set_monthly_budget_persists() {
        let (_temp_dir, store) = create_test_store();
        let service = BudgetService::new(&store);
        let mut state = store.load().unwrap();

        let outcome = service.set_monthly_budget(&mut state, money(2000)).unwrap();

        assert_eq!(outcome, MutationOutcome::Applied);
        assert_eq!(state.monthly_budget, money(2000));
        assert_eq!(store.load().unwrap().monthly_budget, money(2000));
    }

    #[test]
    fn test_set_same_budget_does_not_write() {
        let (_temp_dir, store) = create_test_store();
        let service = BudgetService::new(&store);
        let mut state = BudgetState::new();

        // Default budget is zero, so this is a no-op and no file appears
        let outcome = service.set_monthly_budget(&mut state, Money::zero()).unwrap();
        assert_eq!(outcome, MutationOutcome::Unchanged);
        assert!(!store.exists());

        service.set_monthly_budget(&mut state, money(500)).unwrap();
        fs::remove_file(store.path()).unwrap();

        let outcome = service.set_monthly_budget(&mut state, money(500)).unwrap();
        assert_eq!(outcome, MutationOutcome::Unchanged);
        assert!(!store.exists(), "no-op must not rewrite the snapshot");
    }

    #[test]
    fn test_negative_budget_is_skipped() {
        let (_temp_dir, store) = create_test_store();
        let service = BudgetService::new(&store);
        let mut state = BudgetState::new();

        let outcome = service.set_monthly_budget(&mut state, money(-1)).unwrap();

        assert_eq!(outcome, MutationOutcome::Skipped(SkipReason::NegativeBudget(money(-1))));
        assert_eq!(state.monthly_budget, Money::zero());
        assert!(!store.exists());
    }

    #[test]
    fn test_add_envelope() {
        let (_temp_dir, store) = create_test_store();
        let service = BudgetService::new(&store);
        let mut state = BudgetState::new();

        let outcome = service.add_envelope(&mut state, "Food", money(400)).unwrap();

        assert!(outcome.is_applied());
        assert_eq!(state.envelopes.get("Food"), Some(money(400)));
        assert_eq!(store.load().unwrap(), state);
    }

    #[test]
    fn test_add_envelope_overwrites_silently() {
        let (_temp_dir, store) = create_test_store();
        let service = BudgetService::new(&store);
        let mut state = BudgetState::new();

        service.add_envelope(&mut state, "Food", money(400)).unwrap();
        let outcome = service.add_envelope(&mut state, "Food", money(250)).unwrap();

        assert!(outcome.is_applied());
        assert_eq!(state.envelopes.len(), 1);
        assert_eq!(state.envelopes.get("Food"), Some(money(250)));
    }

    #[test]
    fn test_add_envelope_soft_rejects_invalid_input() {
        let (_temp_dir, store) = create_test_store();
        let service = BudgetService::new(&store);
        let mut state = BudgetState::new();
        service.add_envelope(&mut state, "Rent", money(800)).unwrap();
        let before = state.clone();

        let empty = service.add_envelope(&mut state, "", money(50)).unwrap();
        let zero = service.add_envelope(&mut state, "Food", Money::zero()).unwrap();
        let negative = service.add_envelope(&mut state, "Food", money(-5)).unwrap();

        assert_eq!(empty, MutationOutcome::Skipped(SkipReason::EmptyEnvelopeName));
        assert_eq!(zero, MutationOutcome::Skipped(SkipReason::NonPositiveAmount(Money::zero())));
        assert_eq!(negative, MutationOutcome::Skipped(SkipReason::NonPositiveAmount(money(-5))));
        assert_eq!(state, before);
        assert_eq!(store.load().unwrap(), before);
    }

    #[test]
    fn test_whitespace_names_are_kept_as_typed() {
        let (_temp_dir, store) = create_test_store();
        let service = BudgetService::new(&store);
        let mut state = BudgetState::new();

        let blank = service.add_envelope(&mut state, " ", money(50)).unwrap();
        let padded = service.add_envelope(&mut state, " Food ", money(60)).unwrap();
        let spent = service
            .add_expense(&mut state, money(5), " ", "", date(1))
            .unwrap();

        assert!(blank.is_applied() && padded.is_applied() && spent.is_applied());
        assert_eq!(state.envelopes.get(" "), Some(money(50)));
        assert_eq!(state.envelopes.get(" Food "), Some(money(60)));
        assert!(!state.envelopes.contains("Food"));
        assert_eq!(store.load().unwrap(), state);
    }

    #[test]
    fn test_add_expense_appends() {
        let (_temp_dir, store) = create_test_store();
        let service = BudgetService::new(&store);
        let mut state = BudgetState::new();
        service.add_envelope(&mut state, "Food", money(400)).unwrap();
        service
            .add_expense(&mut state, money(10), "Food", "bread", date(1))
            .unwrap();
        let prior = state.expenses.clone();

        let outcome = service
            .add_expense(&mut state, Money::from_cents(3550), "Food", "groceries", date(5))
            .unwrap();

        assert!(outcome.is_applied());
        assert_eq!(state.expenses.len(), prior.len() + 1);
        assert_eq!(&state.expenses[..prior.len()], &prior[..]);
        let last = state.expenses.last().unwrap();
        assert_eq!(last.amount, Money::from_cents(3550));
        assert_eq!(last.description, "groceries");
        assert_eq!(store.load().unwrap().expenses, state.expenses);
    }

    #[test]
    fn test_add_expense_soft_rejects_invalid_input() {
        let (_temp_dir, store) = create_test_store();
        let service = BudgetService::new(&store);
        let mut state = BudgetState::new();

        let zero = service
            .add_expense(&mut state, Money::zero(), "Food", "", date(1))
            .unwrap();
        let no_envelope = service
            .add_expense(&mut state, money(5), "", "", date(1))
            .unwrap();

        assert!(zero.is_skipped());
        assert_eq!(no_envelope, MutationOutcome::Skipped(SkipReason::EmptyEnvelopeName));
        assert!(state.expenses.is_empty());
        assert!(!store.exists());
    }

    #[test]
    fn test_add_expense_to_unknown_envelope_is_recorded() {
        let (_temp_dir, store) = create_test_store();
        let service = BudgetService::new(&store);
        let mut state = BudgetState::new();

        let outcome = service
            .add_expense(&mut state, money(50), "Nonexistent", "x", date(1))
            .unwrap();

        assert!(outcome.is_applied());
        assert_eq!(state.expenses.len(), 1);
        assert!(!state.envelopes.contains("Nonexistent"));
    }

    #[test]
    fn test_strict_envelopes_rejects_unknown_envelope() {
        let (_temp_dir, store) = create_test_store();
        let service = BudgetService::new(&store).with_strict_envelopes(true);
        let mut state = BudgetState::new();

        let outcome = service
            .add_expense(&mut state, money(50), "Nonexistent", "x", date(1))
            .unwrap();

        assert_eq!(
            outcome,
            MutationOutcome::Skipped(SkipReason::UnknownEnvelope("Nonexistent".into()))
        );
        assert!(state.expenses.is_empty());
    }

    #[test]
    fn test_failed_save_leaves_state_untouched() {
        let temp_dir = TempDir::new().unwrap();
        // A directory where the snapshot should be makes the final rename fail
        let path = temp_dir.path().join("snapshot.json");
        fs::create_dir_all(path.join("occupied")).unwrap();
        let store = SnapshotStore::new(path);
        let service = BudgetService::new(&store);
        let mut state = BudgetState::new();

        let result = service.add_envelope(&mut state, "Food", money(400));

        assert!(result.is_err());
        assert!(state.envelopes.is_empty());
    }
}
