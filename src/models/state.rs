//! Budget state
//!
//! The root aggregate for one session: the monthly budget, the envelopes and
//! the expense history. Serialized as-is to form the snapshot document.

use serde::{Deserialize, Serialize};

use super::envelope::Envelopes;
use super::expense::Expense;
use super::money::Money;

/// Whole budget state, one instance per session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetState {
    /// Total funds available for the period (non-negative)
    #[serde(rename = "budget_mensuel", default)]
    pub monthly_budget: Money,

    /// Named sub-budgets in display order
    #[serde(rename = "enveloppes", default)]
    pub envelopes: Envelopes,

    /// Recorded expenses in insertion order (append-only)
    #[serde(rename = "depenses", default)]
    pub expenses: Vec<Expense>,
}

impl BudgetState {
    /// Empty state: budget 0, no envelopes, no expenses
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.monthly_budget.is_zero() && self.envelopes.is_empty() && self.expenses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_default_is_empty() {
        let state = BudgetState::new();
        assert!(state.is_empty());
        assert_eq!(state.monthly_budget, Money::zero());
    }

    #[test]
    fn test_document_layout() {
        let mut state = BudgetState::new();
        state.monthly_budget = Money::from_cents(200000);
        state.envelopes.insert("Food", Money::from_cents(40000));
        state.expenses.push(Expense::new(
            Money::from_cents(3550),
            "Food",
            "groceries",
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
        ));

        let value = serde_json::to_value(&state).unwrap();
        assert_eq!(value["budget_mensuel"], serde_json::json!(2000.0));
        assert_eq!(value["enveloppes"]["Food"], serde_json::json!(400.0));
        assert_eq!(value["depenses"][0]["categorie"], "Food");
        assert_eq!(value.as_object().unwrap().len(), 3);
    }

    #[test]
    fn test_missing_fields_default() {
        let state: BudgetState = serde_json::from_str(r#"{"budget_mensuel": 150}"#).unwrap();
        assert_eq!(state.monthly_budget, Money::from_cents(15000));
        assert!(state.envelopes.is_empty());
        assert!(state.expenses.is_empty());
    }
}
