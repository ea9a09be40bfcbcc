//! Service layer for the envelope tracker
//!
//! The service layer provides business logic on top of the storage layer:
//! validated mutations that persist through the snapshot store, and
//! read-side summaries computed from the budget state.

pub mod budget;
pub mod summary;

pub use budget::{BudgetService, MutationOutcome, SkipReason};
pub use summary::{BudgetOverview, EnvelopeSummary, OrphanLabel, SummaryService};
