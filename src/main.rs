use anyhow::Result;
use clap::{Parser, Subcommand};

use rickshaw::cli::{
    handle_amend_command, handle_dashboard_command, handle_entry_command, handle_export_command,
    handle_report_command,
};
use rickshaw::config::{paths::LedgerPaths, settings::Settings};
use rickshaw::storage::Storage;

#[derive(Parser)]
#[command(
    name = "rickshaw",
    version,
    about = "Daily earnings settlement for a shared auto-rickshaw",
    long_about = "rickshaw-ledger tracks one entry per working day and settles it \
                  between the vehicle owner and the driver: the CNG fill comes off \
                  the top, the remainder splits 50/50, and online payments and the \
                  driver pass are reconciled on top of the base split."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Daily entry commands
    #[command(subcommand)]
    Entry(rickshaw::cli::EntryCommands),

    /// Online amendment commands
    #[command(subcommand)]
    Amend(rickshaw::cli::AmendCommands),

    /// Today's settlement at a glance
    #[command(alias = "dash")]
    Dashboard {
        /// Treat this date as "today" (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Period reports
    #[command(subcommand)]
    Report(rickshaw::cli::ReportCommands),

    /// Export ledger data
    #[command(subcommand)]
    Export(rickshaw::cli::ExportCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Entry(cmd)) => {
            handle_entry_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Amend(cmd)) => {
            handle_amend_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Dashboard { date }) => {
            handle_dashboard_command(&storage, &settings, date)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Export(cmd)) => {
            handle_export_command(&storage, cmd)?;
        }
        Some(Commands::Config) => {
            println!("rickshaw-ledger Configuration");
            println!("=============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data file:      {}", paths.entries_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Recent days:     {}", settings.recent_days);
        }
        None => {
            println!("rickshaw-ledger - Daily earnings settlement");
            println!();
            println!("Run 'rickshaw --help' for usage information.");
            println!("Run 'rickshaw dashboard' to see today's settlement.");
        }
    }

    Ok(())
}
