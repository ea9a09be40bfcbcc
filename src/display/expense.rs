//! Expense display formatting
//!
//! Renders the expense history as a table, in the order expenses were recorded.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::models::Expense;

use super::report::format_date;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Envelope")]
    envelope: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Description")]
    description: String,
}

/// Format expenses as a table
pub fn format_expense_table<'a, I>(expenses: I, symbol: &str, date_format: &str) -> String
where
    I: IntoIterator<Item = &'a Expense>,
{
    let rows: Vec<ExpenseRow> = expenses
        .into_iter()
        .enumerate()
        .map(|(i, expense)| ExpenseRow {
            index: i + 1,
            date: format_date(expense.date, date_format),
            envelope: expense.envelope.clone(),
            amount: expense.amount.format_with_symbol(symbol),
            description: expense.description.clone(),
        })
        .collect();

    if rows.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .modify(Columns::single(3), Alignment::right());

    format!("{}\n", table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    #[test]
    fn test_empty_table() {
        let expenses: Vec<Expense> = Vec::new();
        assert_eq!(
            format_expense_table(&expenses, "€", "%Y-%m-%d"),
            "No expenses recorded.\n"
        );
    }

    #[test]
    fn test_table_rows_in_order() {
        let expenses = vec![
            Expense::new(
                Money::from_cents(3550),
                "Food",
                "groceries",
                NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            ),
            Expense::new(
                Money::from_cents(1200),
                "Transport",
                "bus pass",
                NaiveDate::from_ymd_opt(2024, 1, 6).unwrap(),
            ),
        ];

        let output = format_expense_table(&expenses, "€", "%d/%m/%Y");

        assert!(output.contains("05/01/2024"));
        assert!(output.contains("€35.50"));
        assert!(output.contains("bus pass"));
        let food = output.find("groceries").unwrap();
        let bus = output.find("bus pass").unwrap();
        assert!(food < bus);
    }
}
