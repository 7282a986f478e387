//! Display formatting for terminal output
//!
//! Provides utilities for formatting entries and period summaries for
//! terminal display, plus the shared currency/distance/date formatters.

pub mod entry;
pub mod summary;

pub use entry::{format_entry_details, format_entry_list};
pub use summary::format_summary;

use chrono::NaiveDate;

use crate::models::DATE_FORMAT;

/// Format an amount with the currency symbol, two decimals, sign leading
/// (e.g. `₹1000.00`, `-₹50.00`)
pub fn format_currency(amount: f64, symbol: &str) -> String {
    if amount < 0.0 {
        format!("-{}{:.2}", symbol, amount.abs())
    } else {
        format!("{}{:.2}", symbol, amount)
    }
}

/// Format an amount always showing its sign (e.g. `+₹250.00`)
pub fn format_signed_currency(amount: f64, symbol: &str) -> String {
    if amount < 0.0 {
        format!("-{}{:.2}", symbol, amount.abs())
    } else {
        format!("+{}{:.2}", symbol, amount)
    }
}

/// Format a distance in kilometres with one decimal
pub fn format_distance(km: f64) -> String {
    format!("{:.1} km", km)
}

/// Format a duration in hours with one decimal
pub fn format_hours(hours: f64) -> String {
    format!("{:.1}h", hours)
}

/// Render an ISO date with the given strftime format.
/// Falls back to the raw string if it does not parse.
pub fn format_date(iso: &str, format: &str) -> String {
    match NaiveDate::parse_from_str(iso, DATE_FORMAT) {
        Ok(date) => date.format(format).to_string(),
        Err(_) => iso.to_string(),
    }
}
