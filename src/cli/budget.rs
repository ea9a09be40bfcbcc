//! Budget CLI commands
//!
//! Implements CLI commands for the monthly budget and the overall overview.

use clap::Subcommand;

use crate::display::{format_envelope_summaries, format_orphan_labels, format_overview};
use crate::error::EnvelopeResult;
use crate::models::Money;
use crate::services::SummaryService;

use super::{parse_non_negative_money, report_outcome, Session};

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set the monthly budget
    Set {
        /// Amount (e.g., "2000" or "2000.00")
        #[arg(value_parser = parse_non_negative_money, allow_negative_numbers = true)]
        amount: Money,
    },

    /// Show the budget overview and every envelope
    #[command(alias = "overview")]
    Show,
}

/// Handle a budget command
pub fn handle_budget_command(session: &mut Session, cmd: BudgetCommands) -> EnvelopeResult<()> {
    match cmd {
        BudgetCommands::Set { amount } => {
            let (service, state) = session.mutate();
            let outcome = service.set_monthly_budget(state, amount)?;
            let symbol = session.symbol();
            report_outcome(&outcome, || {
                format!("Monthly budget set to {}", amount.format_with_symbol(symbol))
            });
        }

        BudgetCommands::Show => {
            let summary = SummaryService::new(&session.state);
            let symbol = session.symbol();

            print!("{}", format_overview(&summary.overview(), symbol));
            println!();
            print!("{}", format_envelope_summaries(&summary.envelope_summaries(), symbol));

            let orphans = format_orphan_labels(&summary.orphan_labels(), symbol);
            if !orphans.is_empty() {
                println!();
                print!("{}", orphans);
            }
        }
    }

    Ok(())
}
