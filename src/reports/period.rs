//! Period Report
//!
//! Aggregates the daily entries selected by a [`DateSelector`] into period
//! totals plus a per-day breakdown, for the report commands and exports.

use std::collections::BTreeMap;
use std::io::Write;

use crate::config::Settings;
use crate::display::{format_currency, format_summary};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{DateSelector, Entry, PeriodSummary};
use crate::storage::Storage;

/// Settled totals for one calendar date within a period
#[derive(Debug, Clone, Default)]
pub struct DailyBreakdown {
    /// The calendar date
    pub date: String,
    /// Number of entries recorded for this date
    pub entry_count: usize,
    /// Gross earnings
    pub gross: f64,
    /// CNG cost
    pub cng: f64,
    /// Net earnings
    pub net: f64,
    /// Net online settlement after the pass deduction
    pub online_settlement: f64,
    /// Final owner earnings
    pub owner_earnings: f64,
    /// Final driver earnings
    pub driver_earnings: f64,
    /// Trips completed
    pub trips: u32,
    /// Hours worked
    pub hours: f64,
    /// Kilometres covered
    pub km: f64,
}

/// Period Report
#[derive(Debug, Clone)]
pub struct PeriodReport {
    /// The period this report covers
    pub selector: DateSelector,
    /// Entries in the period, oldest first
    pub entries: Vec<Entry>,
    /// Aggregated totals
    pub summary: PeriodSummary,
    /// Per-day settled totals, oldest first
    pub daily: Vec<DailyBreakdown>,
}

impl PeriodReport {
    /// Generate a report for the entries matching the selector
    pub fn generate(storage: &Storage, selector: DateSelector) -> LedgerResult<Self> {
        let entries = storage.entries.get_by_selector(&selector)?;
        let summary = PeriodSummary::aggregate(entries.iter());
        let daily = daily_breakdown(&entries);

        Ok(Self {
            selector,
            entries,
            summary,
            daily,
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, settings: &Settings) -> String {
        let symbol = settings.currency_symbol.as_str();
        let mut output = String::new();

        output.push_str(&format!("Period Report: {}\n", self.selector));
        output.push_str(&"=".repeat(78));
        output.push('\n');

        if self.entries.is_empty() {
            output.push_str("No entries recorded for this period.\n");
            return output;
        }

        output.push_str(&format_summary(&self.summary, settings));
        output.push('\n');

        output.push_str(&format!(
            "{:<12}  {:>7}  {:>10}  {:>10}  {:>10}  {:>10}  {:>5}\n",
            "Date", "Entries", "Gross", "Net", "Owner", "Driver", "Trips"
        ));
        output.push_str(&"-".repeat(78));
        output.push('\n');

        for day in &self.daily {
            output.push_str(&format!(
                "{:<12}  {:>7}  {:>10}  {:>10}  {:>10}  {:>10}  {:>5}\n",
                day.date,
                day.entry_count,
                format_currency(day.gross, symbol),
                format_currency(day.net, symbol),
                format_currency(day.owner_earnings, symbol),
                format_currency(day.driver_earnings, symbol),
                day.trips,
            ));
        }

        output.push_str(&"-".repeat(78));
        output.push('\n');
        output.push_str(&format!(
            "{:<12}  {:>7}  {:>10}  {:>10}  {:>10}  {:>10}  {:>5}\n",
            "TOTAL",
            self.summary.entry_count,
            format_currency(self.summary.total_gross, symbol),
            format_currency(self.summary.total_net, symbol),
            format_currency(self.summary.total_owner_earnings, symbol),
            format_currency(self.summary.total_driver_earnings, symbol),
            self.summary.total_trips,
        ));

        output
    }

    /// Export the per-day breakdown to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> LedgerResult<()> {
        writeln!(
            writer,
            "Date,Entries,Gross,CNG,Net,Online Settlement,Owner,Driver,Trips,Hours,Km"
        )
        .map_err(|e| LedgerError::Export(e.to_string()))?;

        for day in &self.daily {
            writeln!(
                writer,
                "{},{},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{},{:.1},{:.1}",
                day.date,
                day.entry_count,
                day.gross,
                day.cng,
                day.net,
                day.online_settlement,
                day.owner_earnings,
                day.driver_earnings,
                day.trips,
                day.hours,
                day.km,
            )
            .map_err(|e| LedgerError::Export(e.to_string()))?;
        }

        writeln!(
            writer,
            "TOTAL,{},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{},{:.1},{:.1}",
            self.summary.entry_count,
            self.summary.total_gross,
            self.summary.total_cng,
            self.summary.total_net,
            self.summary.total_net_online_settlement,
            self.summary.total_owner_earnings,
            self.summary.total_driver_earnings,
            self.summary.total_trips,
            self.summary.total_hours,
            self.summary.total_km,
        )
        .map_err(|e| LedgerError::Export(e.to_string()))?;

        writeln!(
            writer,
            "AVERAGE DAILY GROSS,,{:.2},,,,,,,,",
            self.summary.average_daily_gross()
        )
        .map_err(|e| LedgerError::Export(e.to_string()))?;

        Ok(())
    }
}

/// Fold entries into per-day settled totals, oldest date first
pub fn daily_breakdown(entries: &[Entry]) -> Vec<DailyBreakdown> {
    let mut days: BTreeMap<String, DailyBreakdown> = BTreeMap::new();

    for entry in entries {
        let settlement = entry.settlement();
        let day = days
            .entry(entry.date.clone())
            .or_insert_with(|| DailyBreakdown {
                date: entry.date.clone(),
                ..Default::default()
            });

        day.entry_count += 1;
        day.gross += entry.gross_earnings;
        day.cng += entry.cng;
        day.net += settlement.net_earnings;
        day.online_settlement += settlement.net_online_settlement;
        day.owner_earnings += settlement.final_owner_earnings;
        day.driver_earnings += settlement.final_driver_earnings;
        day.trips += entry.trips;
        day.hours += entry.hours_worked;
        day.km += settlement.km_distance;
    }

    days.into_values().collect()
}
