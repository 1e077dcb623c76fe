//! Storage layer for expense-cli
//!
//! Provides the line-oriented ledger codec and file persistence with atomic
//! writes and automatic directory creation.

pub mod codec;
pub mod file_io;
pub mod ledger;

pub use codec::{format_record, parse_record_line, RecordLine, DELIMITER};
pub use file_io::{read_text_optional, write_text_atomic};
pub use ledger::{load, save};
