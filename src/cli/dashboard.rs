//! Dashboard CLI command
//!
//! Today's settlement at a glance plus the recent window.

use chrono::NaiveDate;

use crate::config::Settings;
use crate::error::{LedgerError, LedgerResult};
use crate::reports::DashboardReport;
use crate::storage::Storage;

/// Handle the dashboard command
///
/// `date` overrides "today", mainly for scripting and tests.
pub fn handle_dashboard_command(
    storage: &Storage,
    settings: &Settings,
    date: Option<String>,
) -> LedgerResult<()> {
    let today = if let Some(date_str) = date {
        NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
            LedgerError::Validation(format!(
                "Invalid date format: '{}'. Use YYYY-MM-DD",
                date_str
            ))
        })?
    } else {
        chrono::Local::now().date_naive()
    };

    let report = DashboardReport::generate(storage, today, settings.recent_days)?;
    println!("{}", report.format_terminal(settings));

    Ok(())
}
