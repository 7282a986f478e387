//! Dashboard Report
//!
//! A snapshot for one day: that day's entries and settlement, the trailing
//! recent window, and the all-time entry count. "Today" is supplied by the
//! caller so the report itself never reads the clock.

use chrono::NaiveDate;

use crate::config::Settings;
use crate::display::{format_currency, format_summary};
use crate::error::LedgerResult;
use crate::models::{DateSelector, Entry, PeriodSummary, DATE_FORMAT};
use crate::storage::Storage;

use super::period::{daily_breakdown, DailyBreakdown};

/// Dashboard Report
#[derive(Debug, Clone)]
pub struct DashboardReport {
    /// The date shown as "today", ISO format
    pub date: String,
    /// Entries recorded for that date
    pub today_entries: Vec<Entry>,
    /// Settled totals for that date
    pub today_summary: PeriodSummary,
    /// Length of the recent window in calendar days
    pub recent_days: u32,
    /// Aggregated totals for the recent window
    pub recent_summary: PeriodSummary,
    /// Per-day settled totals for the recent window, oldest first
    pub recent_daily: Vec<DailyBreakdown>,
    /// All-time entry count
    pub total_entries: usize,
}

impl DashboardReport {
    /// Generate a dashboard for the given "today"
    ///
    /// The recent window covers `recent_days` calendar dates ending at
    /// today, matching a "last 7 days" strip of 7 day buckets.
    pub fn generate(storage: &Storage, today: NaiveDate, recent_days: u32) -> LedgerResult<Self> {
        let date = today.format(DATE_FORMAT).to_string();

        let today_entries = storage.entries.get_by_date(&date)?;
        let today_summary = PeriodSummary::aggregate(today_entries.iter());

        let selector = DateSelector::last_n_days(recent_days.saturating_sub(1), today);
        let recent_entries = storage.entries.get_by_selector(&selector)?;
        let recent_summary = PeriodSummary::aggregate(recent_entries.iter());
        let recent_daily = daily_breakdown(&recent_entries);

        let total_entries = storage.entries.count()?;

        Ok(Self {
            date,
            today_entries,
            today_summary,
            recent_days,
            recent_summary,
            recent_daily,
            total_entries,
        })
    }

    /// Format the dashboard for terminal display
    pub fn format_terminal(&self, settings: &Settings) -> String {
        let symbol = settings.currency_symbol.as_str();
        let mut output = String::new();

        output.push_str(&format!("Dashboard: {}\n", self.date));
        output.push_str(&"=".repeat(78));
        output.push('\n');

        output.push_str("Today\n");
        if self.today_entries.is_empty() {
            output.push_str("  No entry recorded for today.\n");
        } else {
            output.push_str(&format_summary(&self.today_summary, settings));
        }
        output.push('\n');

        output.push_str(&format!("Last {} Days\n", self.recent_days));
        if self.recent_daily.is_empty() {
            output.push_str("  No entries in this window.\n");
        } else {
            for day in &self.recent_daily {
                output.push_str(&format!(
                    "  {:<12}  gross {:>10}  net {:>10}  owner {:>10}  driver {:>10}\n",
                    day.date,
                    format_currency(day.gross, symbol),
                    format_currency(day.net, symbol),
                    format_currency(day.owner_earnings, symbol),
                    format_currency(day.driver_earnings, symbol),
                ));
            }
            output.push_str(&format!(
                "  Window total: gross {}, net {}, owner {}, driver {}\n",
                format_currency(self.recent_summary.total_gross, symbol),
                format_currency(self.recent_summary.total_net, symbol),
                format_currency(self.recent_summary.total_owner_earnings, symbol),
                format_currency(self.recent_summary.total_driver_earnings, symbol),
            ));
        }
        output.push('\n');

        output.push_str(&format!("All time: {} entries recorded\n", self.total_entries));

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::LedgerPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn add_entry(storage: &Storage, date: &str, gross: f64) {
        let mut entry = Entry::new(date);
        entry.gross_earnings = gross;
        entry.cng = 100.0;
        storage.entries.upsert(entry).unwrap();
    }

    #[test]
    fn test_generate_dashboard() {
        let (_temp_dir, storage) = create_test_storage();
        add_entry(&storage, "2025-03-14", 1000.0);
        add_entry(&storage, "2025-03-10", 600.0);
        add_entry(&storage, "2025-02-01", 900.0);

        let today = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        let report = DashboardReport::generate(&storage, today, 7).unwrap();

        assert_eq!(report.date, "2025-03-14");
        assert_eq!(report.today_entries.len(), 1);
        assert_eq!(report.today_summary.total_gross, 1000.0);
        // window is 2025-03-08 to 2025-03-14, so February stays out
        assert_eq!(report.recent_summary.entry_count, 2);
        assert_eq!(report.recent_summary.total_gross, 1600.0);
        assert_eq!(report.total_entries, 3);
    }

    #[test]
    fn test_window_is_seven_calendar_dates() {
        let (_temp_dir, storage) = create_test_storage();
        // 2025-03-08 is the first date inside a 7-day window ending 03-14
        add_entry(&storage, "2025-03-08", 100.0);
        add_entry(&storage, "2025-03-07", 999.0);

        let today = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        let report = DashboardReport::generate(&storage, today, 7).unwrap();

        assert_eq!(report.recent_summary.entry_count, 1);
        assert_eq!(report.recent_summary.total_gross, 100.0);
    }

    #[test]
    fn test_format_terminal_no_entry_today() {
        let (_temp_dir, storage) = create_test_storage();
        add_entry(&storage, "2025-03-10", 600.0);

        let today = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        let report = DashboardReport::generate(&storage, today, 7).unwrap();
        let output = report.format_terminal(&Settings::default());

        assert!(output.contains("Dashboard: 2025-03-14"));
        assert!(output.contains("No entry recorded for today"));
        assert!(output.contains("Last 7 Days"));
        assert!(output.contains("2025-03-10"));
        assert!(output.contains("All time: 1 entries recorded"));
    }

    #[test]
    fn test_format_terminal_with_today_entry() {
        let (_temp_dir, storage) = create_test_storage();
        add_entry(&storage, "2025-03-14", 1000.0);

        let today = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        let report = DashboardReport::generate(&storage, today, 7).unwrap();
        let output = report.format_terminal(&Settings::default());

        assert!(output.contains("Gross Earnings:   ₹1000.00"));
        assert!(output.contains("Window total: gross ₹1000.00"));
    }
}
