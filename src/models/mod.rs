//! Core data models for expense-cli
//!
//! This module contains the expense record and its identifier type, plus the
//! field-length constants inherited from the ledger file format.

pub mod expense;
pub mod ids;

pub use expense::{
    Expense, DEFAULT_CATEGORY, DEFAULT_DATE, MAX_CATEGORY_LEN, MAX_DATE_LEN, MAX_NOTE_LEN,
};
pub use ids::ExpenseId;
