//! Interactive menu shell
//!
//! The numbered-menu presentation layer that drives the expense store and the
//! ledger persistence. The session is generic over its input and output
//! streams so the whole loop can be exercised in tests with in-memory
//! buffers.
//!
//! End-of-input on the interactive stream cancels whatever is in progress: a
//! partially entered expense is discarded, and at the menu prompt it is
//! treated as an exit request (the store is still saved once).

use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::display::{format_category_totals, format_expense_table, format_total};
use crate::error::ExpenseResult;
use crate::models::{ExpenseId, DEFAULT_CATEGORY, DEFAULT_DATE};
use crate::storage;
use crate::store::ExpenseStore;

/// One interactive session over an expense store
pub struct Session<R: BufRead, W: Write> {
    store: ExpenseStore,
    ledger_path: PathBuf,
    reader: R,
    writer: W,
    pause_after_action: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session over an already-loaded store
    pub fn new(
        store: ExpenseStore,
        ledger_path: PathBuf,
        reader: R,
        writer: W,
        pause_after_action: bool,
    ) -> Self {
        Self {
            store,
            ledger_path,
            reader,
            writer,
            pause_after_action,
        }
    }

    /// Run the menu loop until the user exits or input ends
    ///
    /// On exit the store is saved exactly once; a save failure is reported
    /// but does not prevent the exit.
    pub fn run(&mut self) -> ExpenseResult<()> {
        loop {
            self.print_menu()?;
            let Some(choice) = self.read_trimmed()? else {
                // End of input at the menu prompt is an exit request.
                return self.exit();
            };

            match choice.parse::<u32>() {
                Ok(1) => self.add_expense()?,
                Ok(2) => self.display_all()?,
                Ok(3) => self.summary_total()?,
                Ok(4) => self.summary_by_category()?,
                Ok(5) => self.search_by_category()?,
                Ok(6) => self.search_by_date()?,
                Ok(7) => self.delete_expense()?,
                Ok(8) => self.save_ledger()?,
                Ok(9) => self.load_ledger()?,
                Ok(0) => return self.exit(),
                _ => writeln!(self.writer, "Invalid option.")?,
            }
            self.pause()?;
        }
    }

    /// Take the store back out of the session (used by tests)
    pub fn into_store(self) -> ExpenseStore {
        self.store
    }

    fn print_menu(&mut self) -> ExpenseResult<()> {
        writeln!(self.writer, "\n=== Personal Expense Tracker ===")?;
        writeln!(self.writer, "1. Add Expense")?;
        writeln!(self.writer, "2. Display All Expenses")?;
        writeln!(self.writer, "3. Summary: Total Spent")?;
        writeln!(self.writer, "4. Summary: By Category")?;
        writeln!(self.writer, "5. Search By Category")?;
        writeln!(self.writer, "6. Search By Date")?;
        writeln!(self.writer, "7. Delete Expense")?;
        writeln!(self.writer, "8. Save to File")?;
        writeln!(self.writer, "9. Load from File")?;
        writeln!(self.writer, "0. Exit")?;
        write!(self.writer, "Choose option: ")?;
        self.writer.flush()?;
        Ok(())
    }

    /// Read one line, trimmed; `None` means end of input
    fn read_trimmed(&mut self) -> ExpenseResult<Option<String>> {
        let mut line = String::new();
        let bytes = self.reader.read_line(&mut line)?;
        if bytes == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt(&mut self, text: &str) -> ExpenseResult<Option<String>> {
        write!(self.writer, "{}", text)?;
        self.writer.flush()?;
        self.read_trimmed()
    }

    /// Prompt for an amount until the input is a finite, non-negative number
    ///
    /// No retry bound; the only way out without a value is end of input,
    /// which cancels the in-progress entry.
    fn prompt_amount(&mut self) -> ExpenseResult<Option<f64>> {
        loop {
            let Some(line) = self.prompt("Enter amount: ")? else {
                return Ok(None);
            };
            if line.is_empty() {
                continue;
            }
            match line.parse::<f64>() {
                Ok(value) if value.is_finite() && value >= 0.0 => return Ok(Some(value)),
                _ => continue,
            }
        }
    }

    /// Prompt for all fields of a new expense and add it
    ///
    /// End of input at any prompt discards the partial record.
    fn add_expense(&mut self) -> ExpenseResult<()> {
        let Some(date) = self.prompt("Enter date (YYYY-MM-DD): ")? else {
            return Ok(());
        };
        let date = if date.is_empty() {
            DEFAULT_DATE.to_string()
        } else {
            date
        };

        let Some(category) = self.prompt("Enter category: ")? else {
            return Ok(());
        };
        let category = if category.is_empty() {
            DEFAULT_CATEGORY.to_string()
        } else {
            category
        };

        let Some(amount) = self.prompt_amount()? else {
            return Ok(());
        };

        let Some(note) = self.prompt("Enter note (optional): ")? else {
            return Ok(());
        };

        let id = self.store.add(date, category, amount, note);
        writeln!(self.writer, "\nExpense added with ID {}", id)?;
        Ok(())
    }

    fn display_all(&mut self) -> ExpenseResult<()> {
        if self.store.is_empty() {
            writeln!(self.writer, "No expenses recorded.")?;
            return Ok(());
        }
        let all: Vec<_> = self.store.expenses().iter().collect();
        writeln!(self.writer)?;
        write!(self.writer, "{}", format_expense_table(&all))?;
        Ok(())
    }

    fn summary_total(&mut self) -> ExpenseResult<()> {
        writeln!(self.writer, "{}", format_total(self.store.total_amount()))?;
        Ok(())
    }

    fn summary_by_category(&mut self) -> ExpenseResult<()> {
        if self.store.is_empty() {
            writeln!(self.writer, "No expenses recorded.")?;
            return Ok(());
        }
        writeln!(self.writer)?;
        write!(
            self.writer,
            "{}",
            format_category_totals(&self.store.totals_by_category())
        )?;
        Ok(())
    }

    fn search_by_category(&mut self) -> ExpenseResult<()> {
        let Some(query) = self.prompt("Enter category to search: ")? else {
            return Ok(());
        };
        if query.is_empty() {
            return Ok(());
        }

        let matches = self.store.find_by_category(&query);
        if matches.is_empty() {
            writeln!(self.writer, "No expenses found for category '{}'", query)?;
        } else {
            writeln!(self.writer)?;
            write!(self.writer, "{}", format_expense_table(&matches))?;
        }
        Ok(())
    }

    fn search_by_date(&mut self) -> ExpenseResult<()> {
        let Some(query) = self.prompt("Enter date (YYYY-MM-DD): ")? else {
            return Ok(());
        };
        if query.is_empty() {
            return Ok(());
        }

        let matches = self.store.find_by_date(&query);
        if matches.is_empty() {
            writeln!(self.writer, "No expenses found for date '{}'", query)?;
        } else {
            writeln!(self.writer)?;
            write!(self.writer, "{}", format_expense_table(&matches))?;
        }
        Ok(())
    }

    fn delete_expense(&mut self) -> ExpenseResult<()> {
        if self.store.is_empty() {
            writeln!(self.writer, "No expenses to delete.")?;
            return Ok(());
        }

        let Some(line) = self.prompt("Enter expense ID: ")? else {
            return Ok(());
        };
        let Ok(id) = line.parse::<ExpenseId>() else {
            return Ok(());
        };
        if id.value() == 0 {
            return Ok(());
        }

        if self.store.delete(id) {
            writeln!(self.writer, "Expense deleted.")?;
        } else {
            writeln!(self.writer, "ID not found.")?;
        }
        Ok(())
    }

    fn save_ledger(&mut self) -> ExpenseResult<()> {
        match storage::save(&self.store, &self.ledger_path) {
            Ok(()) => writeln!(
                self.writer,
                "Saved {} record(s) to {}",
                self.store.len(),
                self.ledger_path.display()
            )?,
            Err(e) => writeln!(self.writer, "Error: {}", e)?,
        }
        Ok(())
    }

    fn load_ledger(&mut self) -> ExpenseResult<()> {
        match storage::load(&self.ledger_path) {
            Ok(store) => {
                self.store = store;
                writeln!(self.writer, "Loaded {} record(s).", self.store.len())?;
            }
            Err(e) => writeln!(self.writer, "Error: {}", e)?,
        }
        Ok(())
    }

    fn exit(&mut self) -> ExpenseResult<()> {
        if let Err(e) = storage::save(&self.store, &self.ledger_path) {
            writeln!(self.writer, "Error: {}", e)?;
        }
        writeln!(self.writer, "Goodbye!")?;
        Ok(())
    }

    fn pause(&mut self) -> ExpenseResult<()> {
        if self.pause_after_action {
            write!(self.writer, "\nPress Enter to continue...")?;
            self.writer.flush()?;
            self.read_trimmed()?;
        }
        Ok(())
    }
}
