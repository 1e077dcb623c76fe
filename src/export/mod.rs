//! Export functionality for expense-cli
//!
//! Exports the expense store to interchange formats (CSV, JSON). The ledger
//! file itself stays in the pipe-delimited format; these are one-way
//! snapshots for use in other tools.

pub mod csv;
pub mod json;

pub use csv::export_expenses_csv;
pub use json::export_expenses_json;
