//! CLI commands for period reports
//!
//! Builds a date selector from the arguments, generates the period
//! report, and prints it or exports it as CSV.

use crate::config::Settings;
use crate::error::{LedgerError, LedgerResult};
use crate::models::DateSelector;
use crate::reports::PeriodReport;
use crate::storage::Storage;
use chrono::NaiveDate;
use clap::Subcommand;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Report on a single date
    Date {
        /// Date (YYYY-MM-DD), defaults to today
        date: Option<String>,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Report on an inclusive date range
    Range {
        /// Start date (YYYY-MM-DD)
        start: String,

        /// End date (YYYY-MM-DD)
        end: String,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Report on a calendar month
    Month {
        /// Month (YYYY-MM, e.g., "2025-03"), defaults to the current month
        month: Option<String>,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Report on the last N days up to today
    Recent {
        /// Number of trailing days to include
        #[arg(short, long)]
        days: Option<u32>,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle report commands
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> LedgerResult<()> {
    let today = chrono::Local::now().date_naive();

    let (selector, output) = match cmd {
        ReportCommands::Date { date, output } => {
            let date = match date {
                Some(date_str) => parse_iso_date(&date_str)?.format("%Y-%m-%d").to_string(),
                None => today.format("%Y-%m-%d").to_string(),
            };
            (DateSelector::date(date), output)
        }

        ReportCommands::Range { start, end, output } => {
            let start_date = parse_iso_date(&start)?;
            let end_date = parse_iso_date(&end)?;
            if end_date < start_date {
                return Err(LedgerError::Validation(format!(
                    "End date {} is before start date {}",
                    end, start
                )));
            }
            (DateSelector::range(start, end), output)
        }

        ReportCommands::Month { month, output } => {
            let selector = match month {
                Some(month_str) => DateSelector::month_from_str(&month_str)
                    .map_err(|e| LedgerError::Validation(e.to_string()))?,
                None => {
                    use chrono::Datelike;
                    DateSelector::month(today.year(), today.month())
                }
            };
            (selector, output)
        }

        ReportCommands::Recent { days, output } => {
            let days = days.unwrap_or(settings.recent_days);
            if days == 0 {
                return Err(LedgerError::Validation(
                    "Recent window must cover at least one day".to_string(),
                ));
            }
            // N calendar dates ending today
            (DateSelector::last_n_days(days - 1, today), output)
        }
    };

    let report = PeriodReport::generate(storage, selector)?;

    if let Some(path) = output {
        let file = File::create(&path).map_err(|e| {
            LedgerError::Export(format!("Failed to create file {}: {}", path.display(), e))
        })?;
        let mut writer = BufWriter::new(file);
        report.export_csv(&mut writer)?;
        println!("Period report exported to: {}", path.display());
    } else {
        println!("{}", report.format_terminal(settings));
    }

    Ok(())
}

fn parse_iso_date(s: &str) -> LedgerResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
        LedgerError::Validation(format!("Invalid date format: '{}'. Use YYYY-MM-DD", s))
    })
}
