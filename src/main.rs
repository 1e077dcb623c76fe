use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_cli::cli::{
    handle_add, handle_delete, handle_export, handle_list, handle_search, handle_summary,
    handle_total, ExportFormat,
};
use expense_cli::config::{paths::ExpensePaths, settings::Settings};
use expense_cli::menu::Session;
use expense_cli::storage;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Interactive command-line personal expense tracker",
    long_about = "A single-user expense tracker. Run without a subcommand to get \
                  the interactive menu; use the subcommands for scripting. Records \
                  live in a plain pipe-delimited text file."
)]
struct Cli {
    /// Ledger file to use instead of the configured location
    #[arg(long, global = true, env = "EXPENSE_CLI_FILE")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List all recorded expenses
    List,

    /// Show the total amount spent
    Total,

    /// Show per-category totals
    Summary,

    /// Search expenses by category or by date
    Search {
        /// Category to match (case-insensitive)
        #[arg(short, long)]
        category: Option<String>,
        /// Date to match exactly (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Add an expense without entering the menu
    Add {
        /// Amount spent (non-negative)
        amount: f64,
        /// Date (YYYY-MM-DD), defaults to 0000-00-00
        #[arg(short, long)]
        date: Option<String>,
        /// Category, defaults to Uncategorized
        #[arg(short, long)]
        category: Option<String>,
        /// Note
        #[arg(short, long)]
        note: Option<String>,
    },

    /// Delete an expense by id
    Delete {
        /// Expense id
        id: u64,
    },

    /// Export the ledger to CSV or JSON
    Export {
        /// Output format
        #[arg(value_enum)]
        format: ExportFormat,
        /// Output file; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = ExpensePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Ledger path resolution: --file flag > settings override > default.
    let ledger_path = cli
        .file
        .clone()
        .or_else(|| settings.ledger_file.clone())
        .unwrap_or_else(|| paths.ledger_file());

    match cli.command {
        None => {
            let store = storage::load(&ledger_path)?;
            let stdin = io::stdin();
            let stdout = io::stdout();
            let mut session = Session::new(
                store,
                ledger_path,
                stdin.lock(),
                stdout.lock(),
                settings.pause_after_action,
            );
            session.run()?;
        }
        Some(Commands::List) => {
            handle_list(&storage::load(&ledger_path)?);
        }
        Some(Commands::Total) => {
            handle_total(&storage::load(&ledger_path)?);
        }
        Some(Commands::Summary) => {
            handle_summary(&storage::load(&ledger_path)?);
        }
        Some(Commands::Search { category, date }) => {
            let store = storage::load(&ledger_path)?;
            handle_search(&store, category.as_deref(), date.as_deref())?;
        }
        Some(Commands::Add {
            amount,
            date,
            category,
            note,
        }) => {
            let mut store = storage::load(&ledger_path)?;
            handle_add(&mut store, date, category, amount, note)?;
            storage::save(&store, &ledger_path)?;
        }
        Some(Commands::Delete { id }) => {
            let mut store = storage::load(&ledger_path)?;
            handle_delete(&mut store, id)?;
            storage::save(&store, &ledger_path)?;
        }
        Some(Commands::Export { format, output }) => {
            let store = storage::load(&ledger_path)?;
            match output {
                Some(path) => {
                    let file = File::create(&path)?;
                    let mut writer = BufWriter::new(file);
                    handle_export(&store, format, &mut writer)?;
                }
                None => {
                    let stdout = io::stdout();
                    let mut writer = stdout.lock();
                    handle_export(&store, format, &mut writer)?;
                }
            }
        }
        Some(Commands::Config) => {
            println!("expense-cli Configuration");
            println!("=========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Ledger file:    {}", ledger_path.display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:    {}", settings.currency_symbol);
            println!("  Pause after action: {}", settings.pause_after_action);
        }
    }

    Ok(())
}
