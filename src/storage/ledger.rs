//! Ledger persistence
//!
//! Saves and loads a whole [`ExpenseStore`] to/from its text resource. The
//! file holds the id counter on the first line, then one record per line in
//! the codec format:
//!
//! ```text
//! <next_id>
//! <id>|<date>|<category>|<amount>|<note>
//! ```
//!
//! A save fully overwrites the resource (atomic write). A missing resource
//! loads as an empty store; an existing but unreadable one is a storage
//! error.

use std::fmt::Write as _;
use std::path::Path;

use crate::error::ExpenseResult;
use crate::store::ExpenseStore;

use super::codec::{format_record, parse_record_line, RecordLine};
use super::file_io::{read_text_optional, write_text_atomic};

/// Write the store to the ledger file, replacing its previous contents
pub fn save<P: AsRef<Path>>(store: &ExpenseStore, path: P) -> ExpenseResult<()> {
    let mut contents = String::new();
    let _ = writeln!(contents, "{}", store.next_id());
    for expense in store.expenses() {
        let _ = writeln!(contents, "{}", format_record(expense));
    }
    write_text_atomic(path, &contents)
}

/// Read the ledger file into a freshly populated store
///
/// - Missing file: empty store, `next_id = 1`.
/// - First line: parsed as the id counter; only a positive value is used.
/// - Record lines: parsed by the codec; skipped lines are dropped without a
///   diagnostic. Any restored record with an id at or above the counter
///   bumps the counter to `id + 1`, so future adds never collide with
///   loaded ids regardless of what the header claimed.
pub fn load<P: AsRef<Path>>(path: P) -> ExpenseResult<ExpenseStore> {
    let mut store = ExpenseStore::new();

    let Some(contents) = read_text_optional(path)? else {
        return Ok(store);
    };

    let mut lines = contents.lines();

    if let Some(header) = lines.next() {
        if let Ok(next_id) = header.trim().parse::<u64>() {
            if next_id > 0 {
                store.set_next_id(next_id);
            }
        }
    }

    for line in lines {
        match parse_record_line(line) {
            RecordLine::Record(expense) => store.restore(expense),
            RecordLine::Skip => {}
        }
    }

    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn ledger_path(temp_dir: &TempDir) -> std::path::PathBuf {
        temp_dir.path().join("expenses_db.txt")
    }

    #[test]
    fn test_load_missing_file_yields_empty_store() {
        let temp_dir = TempDir::new().unwrap();
        let store = load(ledger_path(&temp_dir)).unwrap();
        assert!(store.is_empty());
        assert_eq!(store.next_id(), 1);
    }

    #[test]
    fn test_empty_store_round_trip_preserves_next_id() {
        let temp_dir = TempDir::new().unwrap();
        let path = ledger_path(&temp_dir);

        let mut store = ExpenseStore::new();
        store.add("2024-01-01", "Food", 1.0, "");
        store.delete(crate::models::ExpenseId::new(1));
        assert_eq!(store.next_id(), 2);

        save(&store, &path).unwrap();
        let loaded = load(&path).unwrap();
        assert!(loaded.is_empty());
        assert_eq!(loaded.next_id(), 2);
    }

    #[test]
    fn test_record_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = ledger_path(&temp_dir);

        let mut store = ExpenseStore::new();
        store.add("2024-01-01", "Food", 12.50, "lunch");
        store.add("2024-01-02", "food", 7.25, "");

        save(&store, &path).unwrap();
        let loaded = load(&path).unwrap();

        assert_eq!(loaded.expenses(), store.expenses());
        assert_eq!(loaded.next_id(), 3);

        let totals = loaded.totals_by_category();
        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].category, "Food");
        assert!((totals[0].total - 19.75).abs() < 1e-9);
    }

    #[test]
    fn test_load_skips_short_record_lines() {
        let temp_dir = TempDir::new().unwrap();
        let path = ledger_path(&temp_dir);
        fs::write(
            &path,
            "4\n1|2024-01-01|Food|12.50|lunch\n3|2024-01-03|Transport\n2|2024-01-02|Food|7.25|\n",
        )
        .unwrap();

        let store = load(&path).unwrap();
        assert_eq!(store.len(), 2);
        assert!(store.find_by_date("2024-01-03").is_empty());
    }

    #[test]
    fn test_load_bumps_next_id_past_stored_records() {
        let temp_dir = TempDir::new().unwrap();
        let path = ledger_path(&temp_dir);
        fs::write(&path, "1\n5|2024-01-01|Food|1.00|note\n").unwrap();

        let mut store = load(&path).unwrap();
        let id = store.add("2024-01-02", "Food", 2.0, "");
        assert_eq!(id.value(), 6);
    }

    #[test]
    fn test_load_ignores_garbage_header() {
        let temp_dir = TempDir::new().unwrap();
        let path = ledger_path(&temp_dir);
        fs::write(&path, "not-a-number\n2|2024-01-01|Food|1.00|\n").unwrap();

        let store = load(&path).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.next_id(), 3);
    }

    #[test]
    fn test_load_tolerates_blank_lines() {
        let temp_dir = TempDir::new().unwrap();
        let path = ledger_path(&temp_dir);
        fs::write(&path, "3\n\n1|2024-01-01|Food|1.00|\n\n2|2024-01-02|Rent|2.00|\n").unwrap();

        let store = load(&path).unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_load_truncates_long_fields() {
        let temp_dir = TempDir::new().unwrap();
        let path = ledger_path(&temp_dir);
        let long_category = "x".repeat(40);
        fs::write(&path, format!("2\n1|2024-01-01|{long_category}|1.00|\n")).unwrap();

        let store = load(&path).unwrap();
        assert_eq!(
            store.expenses()[0].category.chars().count(),
            crate::models::MAX_CATEGORY_LEN
        );
    }

    #[test]
    fn test_amount_written_to_cent_precision() {
        let temp_dir = TempDir::new().unwrap();
        let path = ledger_path(&temp_dir);

        let mut store = ExpenseStore::new();
        store.add("2024-01-01", "Food", 12.509, "");

        save(&store, &path).unwrap();
        let loaded = load(&path).unwrap();
        // Lossy beyond cents.
        assert_eq!(loaded.expenses()[0].amount, 12.51);
    }
}
