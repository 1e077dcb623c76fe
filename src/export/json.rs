//! JSON export functionality
//!
//! Exports the expense store as pretty-printed JSON, including the id
//! counter so the export is a faithful snapshot of the store state.

use std::io::Write;

use serde::Serialize;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;
use crate::store::ExpenseStore;

/// Serializable snapshot of the store
#[derive(Debug, Serialize)]
struct StoreSnapshot<'a> {
    next_id: u64,
    expenses: &'a [Expense],
}

/// Export all expenses to pretty-printed JSON
pub fn export_expenses_json<W: Write>(store: &ExpenseStore, writer: &mut W) -> ExpenseResult<()> {
    let snapshot = StoreSnapshot {
        next_id: store.next_id(),
        expenses: store.expenses(),
    };

    serde_json::to_writer_pretty(&mut *writer, &snapshot)
        .map_err(|e| ExpenseError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_expenses_json() {
        let mut store = ExpenseStore::new();
        store.add("2024-01-01", "Food", 12.5, "lunch");

        let mut output = Vec::new();
        export_expenses_json(&store, &mut output).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(value["next_id"], 2);
        assert_eq!(value["expenses"][0]["category"], "Food");
        assert_eq!(value["expenses"][0]["amount"], 12.5);
    }

    #[test]
    fn test_export_empty_store() {
        let store = ExpenseStore::new();

        let mut output = Vec::new();
        export_expenses_json(&store, &mut output).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(value["next_id"], 1);
        assert_eq!(value["expenses"].as_array().unwrap().len(), 0);
    }
}
