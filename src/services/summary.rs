//! Summary service
//!
//! Read-side projections of the budget state: spend per envelope, what is
//! left, and the expense history. Everything is recomputed from the expense
//! list on every call; nothing is cached.

use crate::models::{BudgetState, Expense, Money};

/// Service for budget aggregation
pub struct SummaryService<'a> {
    state: &'a BudgetState,
}

/// Spend summary for one envelope
#[derive(Debug, Clone, PartialEq)]
pub struct EnvelopeSummary {
    pub name: String,
    pub allocated: Money,
    pub spent: Money,
    /// Allocated minus spent; negative when overspent
    pub remaining: Money,
}

impl EnvelopeSummary {
    pub fn is_overspent(&self) -> bool {
        self.remaining.is_negative()
    }

    /// Share of the allocation already spent, in percent
    pub fn percent_used(&self) -> Option<f64> {
        self.spent.percent_of(self.allocated)
    }
}

/// Spend recorded under a label that has no envelope
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrphanLabel {
    pub name: String,
    pub spent: Money,
    pub expense_count: usize,
}

/// Budget-wide totals
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetOverview {
    pub monthly_budget: Money,
    pub total_allocated: Money,
    /// Monthly budget minus total allocated; negative when over-allocated
    pub unallocated: Money,
    pub total_spent: Money,
    /// Monthly budget minus total spent
    pub budget_remaining: Money,
    pub envelope_count: usize,
    pub expense_count: usize,
}

impl<'a> SummaryService<'a> {
    pub fn new(state: &'a BudgetState) -> Self {
        Self { state }
    }

    /// Sum of all expenses recorded under `envelope`
    ///
    /// Works for any label, whether or not an envelope by that name exists.
    pub fn total_spent(&self, envelope: &str) -> Money {
        self.state
            .expenses
            .iter()
            .filter(|e| e.is_for(envelope))
            .map(|e| e.amount)
            .sum()
    }

    /// Allocation minus spend for an existing envelope
    ///
    /// Returns `None` if no envelope has this name. May be negative.
    pub fn remaining(&self, envelope: &str) -> Option<Money> {
        self.state
            .envelopes
            .get(envelope)
            .map(|allocated| allocated - self.total_spent(envelope))
    }

    /// Expense history in insertion order
    pub fn as_table(&self) -> &'a [Expense] {
        &self.state.expenses
    }

    /// Expenses recorded under one label, in insertion order
    pub fn expenses_for(&self, envelope: &str) -> Vec<&'a Expense> {
        self.state
            .expenses
            .iter()
            .filter(|e| e.is_for(envelope))
            .collect()
    }

    /// Summary of a single envelope
    pub fn envelope_summary(&self, envelope: &str) -> Option<EnvelopeSummary> {
        let allocated = self.state.envelopes.get(envelope)?;
        let spent = self.total_spent(envelope);
        Some(EnvelopeSummary {
            name: envelope.to_string(),
            allocated,
            spent,
            remaining: allocated - spent,
        })
    }

    /// Summaries for every envelope, in display order
    pub fn envelope_summaries(&self) -> Vec<EnvelopeSummary> {
        self.state
            .envelopes
            .iter()
            .map(|envelope| {
                let spent = self.total_spent(&envelope.name);
                EnvelopeSummary {
                    name: envelope.name.clone(),
                    allocated: envelope.allocated,
                    spent,
                    remaining: envelope.allocated - spent,
                }
            })
            .collect()
    }

    /// Labels used by expenses that match no envelope, in first-use order
    pub fn orphan_labels(&self) -> Vec<OrphanLabel> {
        let mut orphans: Vec<OrphanLabel> = Vec::new();

        for expense in &self.state.expenses {
            if self.state.envelopes.contains(&expense.envelope) {
                continue;
            }
            match orphans.iter_mut().find(|o| o.name == expense.envelope) {
                Some(orphan) => {
                    orphan.spent += expense.amount;
                    orphan.expense_count += 1;
                }
                None => orphans.push(OrphanLabel {
                    name: expense.envelope.clone(),
                    spent: expense.amount,
                    expense_count: 1,
                }),
            }
        }

        orphans
    }

    /// Budget-wide totals
    pub fn overview(&self) -> BudgetOverview {
        let total_allocated = self.state.envelopes.total_allocated();
        let total_spent: Money = self.state.expenses.iter().map(|e| e.amount).sum();

        BudgetOverview {
            monthly_budget: self.state.monthly_budget,
            total_allocated,
            unallocated: self.state.monthly_budget - total_allocated,
            total_spent,
            budget_remaining: self.state.monthly_budget - total_spent,
            envelope_count: self.state.envelopes.len(),
            expense_count: self.state.expenses.len(),
        }
    }
}
