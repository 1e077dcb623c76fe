//! Expense record model
//!
//! A single expense entry: id, date, category, amount, and an optional note.
//! String fields carry fixed maximum lengths inherited from the ledger file
//! format; anything longer is silently truncated on construction.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ids::ExpenseId;

/// Maximum significant characters in the date field (`YYYY-MM-DD`)
pub const MAX_DATE_LEN: usize = 10;

/// Maximum significant characters in the category field
pub const MAX_CATEGORY_LEN: usize = 29;

/// Maximum significant characters in the note field
pub const MAX_NOTE_LEN: usize = 99;

/// Date substituted when the user enters nothing at the date prompt
pub const DEFAULT_DATE: &str = "0000-00-00";

/// Category substituted when the user enters nothing at the category prompt
pub const DEFAULT_CATEGORY: &str = "Uncategorized";

/// A single expense record
///
/// The date is a plain string with the expected shape `YYYY-MM-DD`; it is
/// not validated as a real calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier, assigned by the store
    pub id: ExpenseId,

    /// Date string, expected shape `YYYY-MM-DD`
    pub date: String,

    /// Free-text category
    pub category: String,

    /// Non-negative amount
    pub amount: f64,

    /// Free-text note, may be empty
    #[serde(default)]
    pub note: String,
}

impl Expense {
    /// Create an expense, truncating string fields to their maximum lengths
    ///
    /// Empty-input defaults (date, category) are the prompt layer's job, not
    /// this constructor's: a record loaded from disk with an empty category
    /// keeps it empty.
    pub fn new(
        id: ExpenseId,
        date: impl Into<String>,
        category: impl Into<String>,
        amount: f64,
        note: impl Into<String>,
    ) -> Self {
        Self {
            id,
            date: truncate_chars(&date.into(), MAX_DATE_LEN),
            category: truncate_chars(&category.into(), MAX_CATEGORY_LEN),
            amount,
            note: truncate_chars(&note.into(), MAX_NOTE_LEN),
        }
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {:.2}",
            self.id, self.date, self.category, self.amount
        )
    }
}

/// Truncate a string to at most `max_len` characters
///
/// Character-based so multi-byte input cannot split a code point.
fn truncate_chars(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        s.chars().take(max_len).collect()
    }
}
