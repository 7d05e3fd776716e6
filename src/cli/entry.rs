//! Entry CLI commands

use std::fs::File;
use std::path::PathBuf;

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_amount, format_entry_table, format_expense_count};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{CategoryCatalog, EntryId, ExpenseEntry, Money};
use crate::storage::{import_csv, Storage};

/// Entry subcommands
#[derive(Subcommand, Debug)]
pub enum EntryCommands {
    /// Record an expense
    Add {
        /// What the money was spent on
        description: String,
        /// Amount (e.g. "12.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category name (unknown names are filed under "Other")
        #[arg(short, long, default_value = "")]
        category: String,
        /// Date text (defaults to today, YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
        /// The expense has a receipt photo
        #[arg(long)]
        photo: bool,
        /// Explicit entry id (generated when omitted)
        #[arg(long)]
        id: Option<String>,
    },

    /// List recorded expenses
    #[command(alias = "ls")]
    List,

    /// Import expenses from a CSV file
    Import {
        /// Path to CSV file (description,category,amount,date[,has_photo][,id])
        file: PathBuf,
    },

    /// Remove an expense by id
    #[command(alias = "rm")]
    Remove {
        /// Entry id
        id: String,
    },
}

/// Handle an entry command
pub fn handle_entry_command(
    storage: &Storage,
    settings: &Settings,
    cmd: EntryCommands,
) -> ExpenseResult<()> {
    let catalog = CategoryCatalog::standard();

    match cmd {
        EntryCommands::Add {
            description,
            amount,
            category,
            date,
            photo,
            id,
        } => {
            let amount = Money::parse(&amount)
                .map_err(|e| ExpenseError::Validation(e.to_string()))?;
            let date = date.unwrap_or_else(|| {
                chrono::Local::now()
                    .date_naive()
                    .format("%Y-%m-%d")
                    .to_string()
            });

            let mut entry = ExpenseEntry::new(description, category, amount, date).with_photo(photo);
            if let Some(id) = id {
                entry = entry.with_id(id);
            }

            let filed_under = catalog.resolve(&entry.category_name).name.clone();
            let summary_line = format!(
                "Recorded {} for '{}' under {} (id: {})",
                format_amount(entry.amount, &settings.currency_symbol),
                entry.description,
                filed_under,
                entry.id
            );

            storage.entries.add(entry)?;
            storage.entries.save()?;
            println!("{}", summary_line);
        }

        EntryCommands::List => {
            let entries = storage.entries.all()?;
            println!(
                "{}",
                format_entry_table(&entries, &catalog, &settings.currency_symbol)
            );
        }

        EntryCommands::Import { file } => {
            let reader = File::open(&file).map_err(|e| {
                ExpenseError::Import(format!("Failed to open {}: {}", file.display(), e))
            })?;
            let entries = import_csv(reader)?;
            let added = storage.entries.extend(entries)?;
            storage.entries.save()?;
            println!(
                "Imported {} from {}",
                format_expense_count(added),
                file.display()
            );
        }

        EntryCommands::Remove { id } => {
            let removed = storage.entries.remove(&EntryId::new(id))?;
            storage.entries.save()?;
            println!("Removed '{}'", removed.description);
        }
    }

    Ok(())
}
