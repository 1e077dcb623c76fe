//! Non-interactive CLI command handlers
//!
//! Implements the scripting surface over the same core operations the
//! interactive menu drives: list, total, summary, search, add, delete, and
//! export. Each handler operates on an already-loaded store; the binary is
//! responsible for loading before and saving after mutating commands.

use std::io::Write;

use clap::ValueEnum;

use crate::display::{format_category_totals, format_expense_table, format_total};
use crate::error::{ExpenseError, ExpenseResult};
use crate::export::{export_expenses_csv, export_expenses_json};
use crate::models::{ExpenseId, DEFAULT_CATEGORY, DEFAULT_DATE};
use crate::store::ExpenseStore;

/// Output format for the export command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values
    Csv,
    /// Pretty-printed JSON
    Json,
}

/// Print all expenses
pub fn handle_list(store: &ExpenseStore) {
    if store.is_empty() {
        println!("No expenses recorded.");
        return;
    }
    let all: Vec<_> = store.expenses().iter().collect();
    print!("{}", format_expense_table(&all));
}

/// Print the total amount spent
pub fn handle_total(store: &ExpenseStore) {
    println!("{}", format_total(store.total_amount()));
}

/// Print per-category totals
pub fn handle_summary(store: &ExpenseStore) {
    if store.is_empty() {
        println!("No expenses recorded.");
        return;
    }
    print!("{}", format_category_totals(&store.totals_by_category()));
}

/// Search by category (case-insensitive) or by date (exact)
///
/// Exactly one of the two filters must be given.
pub fn handle_search(
    store: &ExpenseStore,
    category: Option<&str>,
    date: Option<&str>,
) -> ExpenseResult<()> {
    let matches = match (category, date) {
        (Some(category), None) => store.find_by_category(category),
        (None, Some(date)) => store.find_by_date(date),
        _ => {
            return Err(ExpenseError::Validation(
                "Specify exactly one of --category or --date".into(),
            ))
        }
    };

    if matches.is_empty() {
        match (category, date) {
            (Some(c), _) => println!("No expenses found for category '{}'", c),
            (_, Some(d)) => println!("No expenses found for date '{}'", d),
            _ => unreachable!(),
        }
    } else {
        print!("{}", format_expense_table(&matches));
    }
    Ok(())
}

/// Add an expense from command-line arguments
///
/// The amount must be finite and non-negative; missing or empty date and
/// category fall back to the documented defaults.
pub fn handle_add(
    store: &mut ExpenseStore,
    date: Option<String>,
    category: Option<String>,
    amount: f64,
    note: Option<String>,
) -> ExpenseResult<ExpenseId> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(ExpenseError::Validation(format!(
            "Amount must be a non-negative number, got '{}'",
            amount
        )));
    }

    let date = match date {
        Some(d) if !d.is_empty() => d,
        _ => DEFAULT_DATE.to_string(),
    };
    let category = match category {
        Some(c) if !c.is_empty() => c,
        _ => DEFAULT_CATEGORY.to_string(),
    };

    let id = store.add(date, category, amount, note.unwrap_or_default());
    println!("Expense added with ID {}", id);
    Ok(id)
}

/// Delete an expense by id
pub fn handle_delete(store: &mut ExpenseStore, id: u64) -> ExpenseResult<()> {
    if !store.delete(ExpenseId::new(id)) {
        return Err(ExpenseError::expense_not_found(id.to_string()));
    }
    println!("Expense deleted.");
    Ok(())
}

/// Export the store in the requested format
pub fn handle_export<W: Write>(
    store: &ExpenseStore,
    format: ExportFormat,
    writer: &mut W,
) -> ExpenseResult<()> {
    match format {
        ExportFormat::Csv => export_expenses_csv(store, writer),
        ExportFormat::Json => export_expenses_json(store, writer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_rejects_negative_amount() {
        let mut store = ExpenseStore::new();
        let err = handle_add(&mut store, None, None, -1.0, None).unwrap_err();
        assert!(err.is_validation());
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_applies_defaults() {
        let mut store = ExpenseStore::new();
        let id = handle_add(&mut store, None, Some(String::new()), 5.0, None).unwrap();
        assert_eq!(id.value(), 1);
        let e = &store.expenses()[0];
        assert_eq!(e.date, DEFAULT_DATE);
        assert_eq!(e.category, DEFAULT_CATEGORY);
        assert_eq!(e.note, "");
    }

    #[test]
    fn test_delete_missing_id_is_not_found() {
        let mut store = ExpenseStore::new();
        let err = handle_delete(&mut store, 42).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_delete_existing_id() {
        let mut store = ExpenseStore::new();
        store.add("2024-01-01", "Food", 1.0, "");
        handle_delete(&mut store, 1).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_search_requires_exactly_one_filter() {
        let store = ExpenseStore::new();
        assert!(handle_search(&store, None, None).unwrap_err().is_validation());
        assert!(handle_search(&store, Some("Food"), Some("2024-01-01"))
            .unwrap_err()
            .is_validation());
    }

    #[test]
    fn test_export_csv() {
        let mut store = ExpenseStore::new();
        store.add("2024-01-01", "Food", 12.5, "lunch");

        let mut output = Vec::new();
        handle_export(&store, ExportFormat::Csv, &mut output).unwrap();
        let csv = String::from_utf8(output).unwrap();
        assert!(csv.contains("1,2024-01-01,Food,12.50,lunch"));
    }
}
