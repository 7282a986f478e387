//! Amendment CLI commands
//!
//! Implements CLI commands for the online-payment amendment ledger.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_currency, format_signed_currency};
use crate::error::{LedgerError, LedgerResult};
use crate::models::Settlement;
use crate::services::EntryService;
use crate::storage::Storage;

/// Amendment subcommands
#[derive(Subcommand)]
pub enum AmendCommands {
    /// Record an online amendment against an entry
    Add {
        /// Entry ID (full or short form)
        entry: String,
        /// Signed amount (positive moves money to the driver)
        #[arg(allow_negative_numbers = true)]
        amount: f64,
        /// Description (e.g., "Paytm ride")
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Remove an online amendment from an entry
    Remove {
        /// Entry ID (full or short form)
        entry: String,
        /// Amendment ID (full or short form)
        amendment: String,
    },
}

/// Handle an amendment command
pub fn handle_amend_command(
    storage: &Storage,
    settings: &Settings,
    cmd: AmendCommands,
) -> LedgerResult<()> {
    let service = EntryService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        AmendCommands::Add {
            entry,
            amount,
            description,
        } => {
            let entry = service
                .find(&entry)?
                .ok_or_else(|| LedgerError::entry_not_found(&entry))?;

            let (updated, amendment_id) = service.add_amendment(entry.id, amount, description)?;
            let settlement = Settlement::of(&updated);

            println!("Recorded amendment on {} ({}):", updated.date, updated.id);
            println!("  ID:           {}", amendment_id);
            println!("  Amount:       {}", format_signed_currency(amount, symbol));
            println!(
                "  Online Total: {}",
                format_currency(settlement.online_total, symbol)
            );
            println!(
                "  Owner:        {}",
                format_currency(settlement.final_owner_earnings, symbol)
            );
            println!(
                "  Driver:       {}",
                format_currency(settlement.final_driver_earnings, symbol)
            );
        }

        AmendCommands::Remove { entry, amendment } => {
            let entry = service
                .find(&entry)?
                .ok_or_else(|| LedgerError::entry_not_found(&entry))?;

            let target = service
                .find_amendment(&entry, &amendment)
                .ok_or_else(|| LedgerError::amendment_not_found(&amendment))?;

            let updated = service.remove_amendment(entry.id, target.id)?;
            let settlement = Settlement::of(&updated);

            println!(
                "Removed amendment {} ({}) from {}",
                target.id,
                format_signed_currency(target.amount, symbol),
                updated.date
            );
            println!(
                "  Online Total: {}",
                format_currency(settlement.online_total, symbol)
            );
            println!(
                "  Owner:        {}",
                format_currency(settlement.final_owner_earnings, symbol)
            );
            println!(
                "  Driver:       {}",
                format_currency(settlement.final_driver_earnings, symbol)
            );
        }
    }

    Ok(())
}
