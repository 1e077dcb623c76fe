//! Configuration and path management for expense-cli

pub mod paths;
pub mod settings;

pub use paths::ExpensePaths;
pub use settings::Settings;
