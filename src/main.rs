use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_tracker::cli::{handle_entry_command, handle_summary_command, EntryCommands, SummaryArgs};
use expense_tracker::config::{ExpensePaths, Settings};
use expense_tracker::display::format_catalog;
use expense_tracker::logging::init_tracing;
use expense_tracker::models::CategoryCatalog;
use expense_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Track expenses and see where the money goes",
    long_about = "Record expenses, group them into categories and see each \
                  category's share of your spending."
)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Expense entry commands
    #[command(subcommand)]
    Entry(EntryCommands),

    /// Summarize expenses by category
    Summary(SummaryArgs),

    /// List the known categories and their icons
    Categories,

    /// Create the data directory and default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = ExpensePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    if cli.verbose {
        init_tracing("expense_tracker=debug");
    } else {
        init_tracing(&settings.log_filter);
    }
    tracing::debug!(base_dir = %paths.base_dir().display(), "resolved paths");

    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Entry(cmd)) => handle_entry_command(&storage, &settings, cmd)?,
        Some(Commands::Summary(args)) => handle_summary_command(&storage, &settings, args)?,
        Some(Commands::Categories) => print!("{}", format_catalog(&CategoryCatalog::standard())),
        Some(Commands::Init) => {
            settings.save(&paths)?;
            storage.save_all()?;
            println!("Initialized expense tracker at: {}", paths.base_dir().display());
        }
        Some(Commands::Config) => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Entries file:    {}", paths.entries_file().display());
            println!("Initialized:     {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Currency symbol:     {}", settings.currency_symbol);
            println!("  Summary order:       {:?}", settings.summary_order);
            println!("  Percentage rounding: {:?}", settings.percentage_rounding);
            println!("  Log filter:          {}", settings.log_filter);
        }
        None => {
            println!("expenses - track where the money goes");
            println!();
            println!("Run 'expenses --help' for usage information.");
        }
    }

    Ok(())
}
