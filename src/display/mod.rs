//! Terminal display formatting for expense-cli

pub mod expense;
pub mod summary;

pub use expense::{format_expense_row, format_expense_table};
pub use summary::{format_category_totals, format_total};
