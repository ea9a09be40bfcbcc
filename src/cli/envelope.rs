//! Envelope CLI commands

use clap::Subcommand;

use crate::display::{
    format_envelope_details, format_envelope_summaries, format_expense_table, format_orphan_labels,
};
use crate::error::{EnvelopeError, EnvelopeResult};
use crate::models::Money;
use crate::services::SummaryService;

use super::{parse_money, report_outcome, Session};

/// Envelope subcommands
#[derive(Subcommand)]
pub enum EnvelopeCommands {
    /// Add an envelope, or replace the amount of an existing one
    Add {
        /// Envelope name (case-sensitive)
        name: String,
        /// Allocated amount (must be greater than zero)
        #[arg(value_parser = parse_money, allow_negative_numbers = true)]
        amount: Money,
    },

    /// List envelopes with spent and remaining amounts
    #[command(alias = "ls")]
    List,

    /// Show one envelope and its expenses
    Show {
        /// Envelope name
        name: String,
    },
}

/// Handle an envelope command
pub fn handle_envelope_command(
    session: &mut Session,
    cmd: EnvelopeCommands,
) -> EnvelopeResult<()> {
    match cmd {
        EnvelopeCommands::Add { name, amount } => {
            let replaced = session.state.envelopes.get(&name);
            let (service, state) = session.mutate();
            let outcome = service.add_envelope(state, &name, amount)?;
            let symbol = session.symbol();
            report_outcome(&outcome, || match replaced {
                Some(old) => format!(
                    "Envelope '{}' updated: {} -> {}",
                    name,
                    old.format_with_symbol(symbol),
                    amount.format_with_symbol(symbol)
                ),
                None => format!(
                    "Envelope '{}' added with {}",
                    name,
                    amount.format_with_symbol(symbol)
                ),
            });
        }

        EnvelopeCommands::List => {
            let summary = SummaryService::new(&session.state);
            let symbol = session.symbol();

            print!("{}", format_envelope_summaries(&summary.envelope_summaries(), symbol));
            let orphans = format_orphan_labels(&summary.orphan_labels(), symbol);
            if !orphans.is_empty() {
                println!();
                print!("{}", orphans);
            }
        }

        EnvelopeCommands::Show { name } => {
            let summary = SummaryService::new(&session.state);
            let details = summary
                .envelope_summary(&name)
                .ok_or_else(|| EnvelopeError::envelope_not_found(&name))?;
            let symbol = session.symbol();

            print!("{}", format_envelope_details(&details, symbol));
            println!();
            print!(
                "{}",
                format_expense_table(
                    summary.expenses_for(&name),
                    symbol,
                    &session.settings.date_format
                )
            );
        }
    }

    Ok(())
}
