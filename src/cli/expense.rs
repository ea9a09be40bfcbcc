//! Expense CLI commands

use chrono::{Local, NaiveDate};
use clap::Subcommand;

use crate::display::format_expense_table;
use crate::error::EnvelopeResult;
use crate::models::Money;
use crate::services::SummaryService;

use super::{parse_date, parse_money, report_outcome, Session};

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record an expense against an envelope
    Add {
        /// Amount spent (must be greater than zero)
        #[arg(value_parser = parse_money, allow_negative_numbers = true)]
        amount: Money,
        /// Envelope name
        envelope: String,
        /// Description
        #[arg(short, long, default_value = "")]
        description: String,
        /// Expense date (YYYY-MM-DD), defaults to today
        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDate>,
    },

    /// List expenses in the order they were recorded
    #[command(alias = "ls")]
    List {
        /// Only show expenses for this envelope
        #[arg(short, long)]
        envelope: Option<String>,
    },
}

/// Handle an expense command
pub fn handle_expense_command(session: &mut Session, cmd: ExpenseCommands) -> EnvelopeResult<()> {
    match cmd {
        ExpenseCommands::Add {
            amount,
            envelope,
            description,
            date,
        } => {
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            let (service, state) = session.mutate();
            let outcome = service.add_expense(state, amount, &envelope, &description, date)?;

            let summary = SummaryService::new(&session.state);
            let symbol = session.symbol();
            report_outcome(&outcome, || {
                let mut message = format!(
                    "Recorded {} in '{}' on {}",
                    amount.format_with_symbol(symbol),
                    envelope,
                    date
                );
                match summary.remaining(&envelope) {
                    Some(left) => message.push_str(&format!(
                        "\n  Remaining in '{}': {}",
                        envelope,
                        left.format_with_symbol(symbol)
                    )),
                    None => message.push_str(&format!(
                        "\n  Note: no envelope named '{}' exists",
                        envelope
                    )),
                }
                message
            });
        }

        ExpenseCommands::List { envelope } => {
            let summary = SummaryService::new(&session.state);
            let symbol = session.symbol();
            let date_format = &session.settings.date_format;

            let table = match envelope {
                Some(name) => format_expense_table(summary.expenses_for(&name), symbol, date_format),
                None => format_expense_table(summary.as_table(), symbol, date_format),
            };
            print!("{}", table);
        }
    }

    Ok(())
}
