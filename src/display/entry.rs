//! Entry display formatting
//!
//! Formats daily entries for terminal output in table and detail views.
//! The detail view walks the whole settlement in calculation order so the
//! owner and driver can check every step of the split.

use crate::config::Settings;
use crate::models::Entry;

use super::{format_currency, format_date, format_distance, format_hours, format_signed_currency};

/// Format a list of entries as a table, one row per day
pub fn format_entry_list(entries: &[Entry], settings: &Settings) -> String {
    if entries.is_empty() {
        return "No entries found.".to_string();
    }

    let symbol = settings.currency_symbol.as_str();
    let mut output = String::new();

    output.push_str(&format!(
        "{:<12}  {:<12}  {:>10}  {:>9}  {:>9}  {:>10}  {:>10}  {:>10}  {:>5}  {:>6}\n",
        "Date", "ID", "Gross", "CNG", "Online", "Net", "Owner", "Driver", "Trips", "Hours"
    ));
    output.push_str(&format!(
        "{:-<12}  {:-<12}  {:->10}  {:->9}  {:->9}  {:->10}  {:->10}  {:->10}  {:->5}  {:->6}\n",
        "", "", "", "", "", "", "", "", "", ""
    ));

    for entry in entries {
        let settlement = entry.settlement();
        output.push_str(&format!(
            "{:<12}  {:<12}  {:>10}  {:>9}  {:>9}  {:>10}  {:>10}  {:>10}  {:>5}  {:>6}\n",
            entry.date,
            entry.id.to_string(),
            format_currency(entry.gross_earnings, symbol),
            format_currency(entry.cng, symbol),
            format_currency(settlement.online_total, symbol),
            format_currency(settlement.net_earnings, symbol),
            format_currency(settlement.final_owner_earnings, symbol),
            format_currency(settlement.final_driver_earnings, symbol),
            entry.trips,
            format_hours(entry.hours_worked),
        ));
    }

    output
}

/// Format a single entry with its full settlement breakdown
pub fn format_entry_details(entry: &Entry, settings: &Settings) -> String {
    let symbol = settings.currency_symbol.as_str();
    let settlement = entry.settlement();

    let mut output = String::new();

    output.push_str(&format!(
        "Entry: {} ({})\n",
        entry.id,
        format_date(&entry.date, &settings.date_format)
    ));
    output.push_str(&format!("  Full ID:        {}\n", entry.id.as_uuid()));
    output.push_str(&format!(
        "  Recorded:       {}\n",
        entry.created_at.format("%Y-%m-%d %H:%M UTC")
    ));
    output.push('\n');

    output.push_str(&format!(
        "  Gross Earnings: {}\n",
        format_currency(entry.gross_earnings, symbol)
    ));
    output.push_str(&format!(
        "  CNG Cost:       {}\n",
        format_currency(entry.cng, symbol)
    ));
    output.push_str(&format!(
        "  Net Earnings:   {}\n",
        format_currency(settlement.net_earnings, symbol)
    ));
    output.push('\n');

    output.push_str("  Base Split (50/50)\n");
    output.push_str(&format!(
        "    Owner:        {}\n",
        format_currency(settlement.base_owner_share, symbol)
    ));
    output.push_str(&format!(
        "    Driver:       {}\n",
        format_currency(settlement.base_driver_share, symbol)
    ));

    if !entry.online_amendments.is_empty() || entry.driver_pass_used {
        output.push('\n');
        output.push_str("  Online Settlement\n");
        for amendment in entry.online_amendments.iter() {
            output.push_str(&format!(
                "    {:<12}  {:>10}  {}\n",
                amendment.id.to_string(),
                format_signed_currency(amendment.amount, symbol),
                amendment.description,
            ));
        }
        output.push_str(&format!(
            "    Online Total: {}\n",
            format_currency(settlement.online_total, symbol)
        ));
        if entry.driver_pass_used {
            output.push_str(&format!(
                "    Less Pass:    {}\n",
                format_currency(-entry.driver_pass_amount, symbol)
            ));
        }
        output.push_str(&format!(
            "    Net Online:   {}\n",
            format_currency(settlement.net_online_settlement, symbol)
        ));
        output.push_str(&format!(
            "    Owner After:  {}\n",
            format_currency(settlement.owner_after_online, symbol)
        ));
        output.push_str(&format!(
            "    Driver After: {}\n",
            format_currency(settlement.driver_after_online, symbol)
        ));
    }

    if entry.driver_pass_used && entry.driver_pass_amount > 0.0 {
        output.push('\n');
        output.push_str("  Driver Pass (shared 50/50)\n");
        output.push_str(&format!(
            "    Pass Amount:  {}\n",
            format_currency(entry.driver_pass_amount, symbol)
        ));
        output.push_str(&format!(
            "    Owner Pays:   {}\n",
            format_currency(settlement.owner_pass_contribution, symbol)
        ));
        output.push_str(&format!(
            "    Driver Pays:  {}\n",
            format_currency(settlement.driver_pass_contribution, symbol)
        ));
    }

    output.push('\n');
    output.push_str(&format!(
        "  Owner Earnings:  {}\n",
        format_currency(settlement.final_owner_earnings, symbol)
    ));
    output.push_str(&format!(
        "  Driver Earnings: {}\n",
        format_currency(settlement.final_driver_earnings, symbol)
    ));
    output.push('\n');

    output.push_str(&format!(
        "  Distance: {} ({} to {})\n",
        format_distance(settlement.km_distance),
        format_distance(entry.km_start),
        format_distance(entry.km_end),
    ));
    output.push_str(&format!(
        "  Trips: {}   Hours: {}\n",
        entry.trips,
        format_hours(entry.hours_worked)
    ));

    if !entry.notes.is_empty() {
        output.push('\n');
        output.push_str(&format!("  Notes: {}\n", entry.notes));
    }

    for warning in entry_warnings(entry) {
        output.push('\n');
        output.push_str(&format!("  Warning: {}\n", warning));
    }

    output
}

/// Anomalies worth flagging without rejecting the entry
pub fn entry_warnings(entry: &Entry) -> Vec<String> {
    let settlement = entry.settlement();
    let mut warnings = Vec::new();

    if settlement.km_distance < 0.0 {
        warnings.push(format!(
            "odometer end ({:.1}) is behind start ({:.1}), check the readings",
            entry.km_end, entry.km_start
        ));
    }
    if settlement.net_earnings < 0.0 {
        warnings.push("loss day: CNG cost exceeded gross earnings".to_string());
    }
    if entry.driver_pass_used && entry.driver_pass_amount == 0.0 {
        warnings.push("driver pass marked used but its amount is zero".to_string());
    }

    warnings
}
