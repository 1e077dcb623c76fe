//! In-memory expense store
//!
//! An ordered, growable collection of expense records with monotonic id
//! assignment, lookup, deletion, and aggregation. The store exclusively owns
//! its records; operations hand out shared references or copies, never
//! indices or handles.

use crate::models::{Expense, ExpenseId};

/// A per-category sum produced by [`ExpenseStore::totals_by_category`]
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    /// Category label, in the casing of the first record seen for it
    pub category: String,
    /// Sum of amounts for the category
    pub total: f64,
}

/// The in-memory collection of expense records plus the id counter
///
/// Records are kept in insertion order, except that [`delete`] uses an
/// unordered (swap-with-last) removal and so breaks strict insertion order.
///
/// [`delete`]: ExpenseStore::delete
#[derive(Debug, Clone, Default)]
pub struct ExpenseStore {
    expenses: Vec<Expense>,
    next_id: u64,
}

impl ExpenseStore {
    /// Create an empty store; the first assigned id will be 1
    pub fn new() -> Self {
        Self {
            expenses: Vec::new(),
            next_id: 1,
        }
    }

    /// Add a new expense, assigning the next id
    ///
    /// Amount validation (non-negative, finite) is the caller's job; the
    /// store itself accepts whatever it is given. Returns the assigned id.
    pub fn add(
        &mut self,
        date: impl Into<String>,
        category: impl Into<String>,
        amount: f64,
        note: impl Into<String>,
    ) -> ExpenseId {
        let id = ExpenseId::new(self.next_id);
        self.next_id += 1;
        self.expenses.push(Expense::new(id, date, category, amount, note));
        id
    }

    /// Delete the record with the given id
    ///
    /// Unordered delete: the last record is swapped into the vacated slot, so
    /// relative order of the remaining records is not preserved. Returns
    /// `false` (with no mutation) if no record has the id.
    pub fn delete(&mut self, id: ExpenseId) -> bool {
        match self.expenses.iter().position(|e| e.id == id) {
            Some(idx) => {
                self.expenses.swap_remove(idx);
                true
            }
            None => false,
        }
    }

    /// All records in current internal order
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Number of records in the store
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Check whether the store has no records
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// The id that the next [`add`](ExpenseStore::add) will assign
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Sum of all amounts (0.0 for an empty store)
    pub fn total_amount(&self) -> f64 {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Per-category sums
    ///
    /// Categories are merged case-insensitively (ASCII); each entry keeps the
    /// casing of the first record seen for that category, and entries appear
    /// in first-seen order.
    pub fn totals_by_category(&self) -> Vec<CategoryTotal> {
        let mut totals: Vec<CategoryTotal> = Vec::new();
        for expense in &self.expenses {
            match totals
                .iter_mut()
                .find(|t| t.category.eq_ignore_ascii_case(&expense.category))
            {
                Some(entry) => entry.total += expense.amount,
                None => totals.push(CategoryTotal {
                    category: expense.category.clone(),
                    total: expense.amount,
                }),
            }
        }
        totals
    }

    /// Records whose category matches the query, case-insensitively (ASCII)
    pub fn find_by_category(&self, query: &str) -> Vec<&Expense> {
        self.expenses
            .iter()
            .filter(|e| e.category.eq_ignore_ascii_case(query))
            .collect()
    }

    /// Records whose date exactly matches the query (case-sensitive)
    pub fn find_by_date(&self, query: &str) -> Vec<&Expense> {
        self.expenses.iter().filter(|e| e.date == query).collect()
    }

    /// Re-insert a record loaded from disk, keeping its stored id
    ///
    /// Used by the storage layer when rebuilding a store. Bumps the id
    /// counter past the restored id so future adds never collide, regardless
    /// of what the ledger header claimed.
    pub fn restore(&mut self, expense: Expense) {
        if expense.id.value() >= self.next_id {
            self.next_id = expense.id.value() + 1;
        }
        self.expenses.push(expense);
    }

    /// Set the id counter from a ledger header line
    ///
    /// Only used by the storage layer on a freshly created store, before any
    /// records are restored; [`restore`](ExpenseStore::restore) corrects the
    /// counter upward if a stored record contradicts the header.
    pub fn set_next_id(&mut self, next_id: u64) {
        self.next_id = next_id;
    }
}
