//! expense-cli - Interactive command-line personal expense tracker
//!
//! Records expenses (date, category, amount, note) in memory, persists them
//! to a flat pipe-delimited text file, and offers aggregation and lookup
//! over the records. A numbered interactive menu is the primary interface;
//! the same operations are also exposed as non-interactive subcommands.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: The expense record and its identifier
//! - `store`: The in-memory expense store (id assignment, lookup, totals)
//! - `storage`: Line-oriented ledger codec and file persistence
//! - `display`: Terminal table formatting
//! - `export`: CSV/JSON export
//! - `menu`: The interactive menu shell
//! - `cli`: Non-interactive command handlers
//!
//! # Example
//!
//! ```rust
//! use expense_cli::store::ExpenseStore;
//!
//! let mut store = ExpenseStore::new();
//! store.add("2024-01-01", "Food", 12.50, "lunch");
//! assert_eq!(store.total_amount(), 12.50);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod menu;
pub mod models;
pub mod storage;
pub mod store;

pub use error::{ExpenseError, ExpenseResult};
pub use models::{Expense, ExpenseId};
pub use store::ExpenseStore;
