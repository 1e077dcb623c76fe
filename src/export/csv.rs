//! CSV export functionality
//!
//! Exports the expense store to CSV, with proper quoting of fields that
//! contain commas, quotes, or newlines.

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::store::ExpenseStore;

/// Export all expenses to CSV
pub fn export_expenses_csv<W: Write>(store: &ExpenseStore, writer: &mut W) -> ExpenseResult<()> {
    writeln!(writer, "ID,Date,Category,Amount,Note")
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    for expense in store.expenses() {
        writeln!(
            writer,
            "{},{},{},{:.2},{}",
            expense.id,
            escape_csv(&expense.date),
            escape_csv(&expense.category),
            expense.amount,
            escape_csv(&expense.note)
        )
        .map_err(|e| ExpenseError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Escape a string for CSV format
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_expenses_csv() {
        let mut store = ExpenseStore::new();
        store.add("2024-01-01", "Food", 12.5, "lunch");
        store.add("2024-01-02", "Rent", 800.0, "");

        let mut output = Vec::new();
        export_expenses_csv(&store, &mut output).unwrap();

        let csv = String::from_utf8(output).unwrap();
        assert!(csv.starts_with("ID,Date,Category,Amount,Note\n"));
        assert!(csv.contains("1,2024-01-01,Food,12.50,lunch"));
        assert!(csv.contains("2,2024-01-02,Rent,800.00,"));
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let mut store = ExpenseStore::new();
        store.add("2024-01-01", "Food", 4.0, "fish, chips");

        let mut output = Vec::new();
        export_expenses_csv(&store, &mut output).unwrap();

        let csv = String::from_utf8(output).unwrap();
        assert!(csv.contains("\"fish, chips\""));
    }

    #[test]
    fn test_quotes_are_doubled() {
        assert_eq!(escape_csv("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
