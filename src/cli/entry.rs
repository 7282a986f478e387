//! Entry CLI commands
//!
//! Implements CLI commands for daily entry management.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_currency, format_entry_details, format_entry_list};
use crate::error::{LedgerError, LedgerResult};
use crate::models::Settlement;
use crate::services::{
    AmendmentInput, CreateEntryInput, EntryService, EntrySort, UpdateEntryInput,
};
use crate::storage::Storage;

/// Entry subcommands
#[derive(Subcommand)]
pub enum EntryCommands {
    /// Record a day's earnings
    Add {
        /// Gross earnings for the day (e.g., "1450.50")
        gross: f64,
        /// CNG fill cost for the day
        cng: f64,
        /// Entry date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Online payment received, repeatable (e.g., "--online 250")
        #[arg(short, long, allow_negative_numbers = true)]
        online: Vec<f64>,
        /// Driver pass was bought this day
        #[arg(long)]
        pass: bool,
        /// Driver pass amount (only counts with --pass)
        #[arg(long, default_value_t = 0.0)]
        pass_amount: f64,
        /// Number of trips
        #[arg(short, long, default_value_t = 0)]
        trips: u32,
        /// Hours worked
        #[arg(long, default_value_t = 0.0)]
        hours: f64,
        /// Odometer reading at the start of the day
        #[arg(long, default_value_t = 0.0)]
        km_start: f64,
        /// Odometer reading at the end of the day
        #[arg(long, default_value_t = 0.0)]
        km_end: f64,
        /// Notes
        #[arg(short, long)]
        notes: Option<String>,
    },
    /// List entries
    List {
        /// Sort order (date, earnings, trips, hours)
        #[arg(short, long, default_value = "date")]
        sort: String,
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
    /// Show entry details with the full settlement breakdown
    Show {
        /// Entry ID (full or short form)
        id: String,
    },
    /// Edit an entry
    Edit {
        /// Entry ID (full or short form)
        id: String,
        /// New gross earnings
        #[arg(short, long)]
        gross: Option<f64>,
        /// New CNG cost
        #[arg(short, long)]
        cng: Option<f64>,
        /// Driver pass was bought this day
        #[arg(long)]
        pass: Option<bool>,
        /// New driver pass amount
        #[arg(long)]
        pass_amount: Option<f64>,
        /// New trip count
        #[arg(short, long)]
        trips: Option<u32>,
        /// New hours worked
        #[arg(long)]
        hours: Option<f64>,
        /// New odometer start
        #[arg(long)]
        km_start: Option<f64>,
        /// New odometer end
        #[arg(long)]
        km_end: Option<f64>,
        /// New notes
        #[arg(short, long)]
        notes: Option<String>,
    },
    /// Delete an entry
    Delete {
        /// Entry ID (full or short form)
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle an entry command
pub fn handle_entry_command(
    storage: &Storage,
    settings: &Settings,
    cmd: EntryCommands,
) -> LedgerResult<()> {
    let service = EntryService::new(storage);

    match cmd {
        EntryCommands::Add {
            gross,
            cng,
            date,
            online,
            pass,
            pass_amount,
            trips,
            hours,
            km_start,
            km_end,
            notes,
        } => {
            // Default to today when no date given
            let date =
                date.unwrap_or_else(|| chrono::Local::now().date_naive().format("%Y-%m-%d").to_string());

            let amendments = online
                .into_iter()
                .map(|amount| AmendmentInput {
                    amount,
                    description: None,
                })
                .collect();

            let input = CreateEntryInput {
                date,
                gross_earnings: gross,
                cng,
                amendments,
                driver_pass_used: pass,
                driver_pass_amount: pass_amount,
                trips,
                hours_worked: hours,
                km_start,
                km_end,
                notes,
            };

            let entry = service.create(input)?;
            let settlement = Settlement::of(&entry);
            let symbol = settings.currency_symbol.as_str();

            println!("Recorded entry:");
            println!("  ID:     {}", entry.id);
            println!("  Date:   {}", entry.date);
            println!("  Net:    {}", format_currency(settlement.net_earnings, symbol));
            println!("  Owner:  {}", format_currency(settlement.final_owner_earnings, symbol));
            println!("  Driver: {}", format_currency(settlement.final_driver_earnings, symbol));
        }

        EntryCommands::List { sort, limit } => {
            let sort = match sort.to_lowercase().as_str() {
                "date" => EntrySort::Date,
                "earnings" => EntrySort::HighestEarnings,
                "trips" => EntrySort::HighestTrips,
                "hours" => EntrySort::MostHours,
                _ => {
                    return Err(LedgerError::Validation(format!(
                        "Invalid sort: '{}'. Use date, earnings, trips, or hours",
                        sort
                    )))
                }
            };

            let entries = service.list(sort, Some(limit))?;
            print!("{}", format_entry_list(&entries, settings));

            println!("\nShowing {} entries", entries.len());
        }

        EntryCommands::Show { id } => {
            let entry = service
                .find(&id)?
                .ok_or_else(|| LedgerError::entry_not_found(&id))?;

            print!("{}", format_entry_details(&entry, settings));
        }

        EntryCommands::Edit {
            id,
            gross,
            cng,
            pass,
            pass_amount,
            trips,
            hours,
            km_start,
            km_end,
            notes,
        } => {
            let entry = service
                .find(&id)?
                .ok_or_else(|| LedgerError::entry_not_found(&id))?;

            let input = UpdateEntryInput {
                gross_earnings: gross,
                cng,
                driver_pass_used: pass,
                driver_pass_amount: pass_amount,
                trips,
                hours_worked: hours,
                km_start,
                km_end,
                notes,
            };

            let updated = service.update(entry.id, input)?;
            let settlement = Settlement::of(&updated);
            let symbol = settings.currency_symbol.as_str();

            println!("Updated entry: {}", updated.id);
            println!("  Date:   {}", updated.date);
            println!("  Gross:  {}", format_currency(updated.gross_earnings, symbol));
            println!("  CNG:    {}", format_currency(updated.cng, symbol));
            println!("  Owner:  {}", format_currency(settlement.final_owner_earnings, symbol));
            println!("  Driver: {}", format_currency(settlement.final_driver_earnings, symbol));
        }

        EntryCommands::Delete { id, force } => {
            let entry = service
                .find(&id)?
                .ok_or_else(|| LedgerError::entry_not_found(&id))?;

            if !force {
                let settlement = Settlement::of(&entry);
                let symbol = settings.currency_symbol.as_str();

                println!("About to delete entry:");
                println!("  Date:   {}", entry.date);
                println!("  Gross:  {}", format_currency(entry.gross_earnings, symbol));
                println!("  Net:    {}", format_currency(settlement.net_earnings, symbol));
                println!();
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            let deleted = service.delete(entry.id)?;
            println!("Deleted entry: {} ({})", deleted.id, deleted.date);
        }
    }

    Ok(())
}
