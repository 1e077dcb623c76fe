//! Expense display formatting
//!
//! Provides utilities for formatting expense records for terminal display.

use crate::models::Expense;

/// Format a single expense for display (table row)
pub fn format_expense_row(expense: &Expense) -> String {
    format!(
        "{:<4} {:<10} {:<15} {:>10.2}  {}",
        expense.id, expense.date, expense.category, expense.amount, expense.note
    )
}

/// Format a list of expenses as a table with a header
pub fn format_expense_table(expenses: &[&Expense]) -> String {
    let mut output = String::new();
    output.push_str("ID   DATE       CATEGORY        AMOUNT      NOTE\n");
    output.push_str("---- ---------- --------------- ----------  --------------------------\n");
    for expense in expenses {
        output.push_str(&format_expense_row(expense));
        output.push('\n');
    }
    output
}
