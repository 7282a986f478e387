//! Period summary display formatting

use crate::config::Settings;
use crate::models::PeriodSummary;

use super::{format_currency, format_distance, format_hours};

/// Format an aggregated period summary as a labelled block
pub fn format_summary(summary: &PeriodSummary, settings: &Settings) -> String {
    let symbol = settings.currency_symbol.as_str();
    let mut output = String::new();

    output.push_str(&format!(
        "  Entries:          {} across {} day{}\n",
        summary.entry_count,
        summary.distinct_day_count(),
        if summary.distinct_day_count() == 1 { "" } else { "s" }
    ));
    output.push_str(&format!(
        "  Gross Earnings:   {}\n",
        format_currency(summary.total_gross, symbol)
    ));
    output.push_str(&format!(
        "  CNG Cost:         {}\n",
        format_currency(summary.total_cng, symbol)
    ));
    output.push_str(&format!(
        "  Net Earnings:     {}\n",
        format_currency(summary.total_net, symbol)
    ));
    output.push_str(&format!(
        "  Online Total:     {}\n",
        format_currency(summary.total_online, symbol)
    ));
    output.push_str(&format!(
        "  Driver Pass:      {}\n",
        format_currency(summary.total_pass_amount, symbol)
    ));
    output.push_str(&format!(
        "  Owner Earnings:   {}\n",
        format_currency(summary.total_owner_earnings, symbol)
    ));
    output.push_str(&format!(
        "  Driver Earnings:  {}\n",
        format_currency(summary.total_driver_earnings, symbol)
    ));
    output.push_str(&format!("  Trips:            {}\n", summary.total_trips));
    output.push_str(&format!(
        "  Hours:            {}\n",
        format_hours(summary.total_hours)
    ));
    output.push_str(&format!(
        "  Distance:         {}\n",
        format_distance(summary.total_km)
    ));
    output.push_str(&format!(
        "  Avg Daily Gross:  {}\n",
        format_currency(summary.average_daily_gross(), symbol)
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Entry;

    #[test]
    fn test_format_summary() {
        let mut first = Entry::new("2025-03-14");
        first.gross_earnings = 1000.0;
        first.cng = 200.0;
        first.trips = 12;

        let mut second = Entry::new("2025-03-15");
        second.gross_earnings = 600.0;
        second.cng = 100.0;
        second.trips = 8;

        let summary = PeriodSummary::aggregate([&first, &second]);
        let output = format_summary(&summary, &Settings::default());

        assert!(output.contains("2 across 2 days"));
        assert!(output.contains("Gross Earnings:   ₹1600.00"));
        assert!(output.contains("Net Earnings:     ₹1300.00"));
        assert!(output.contains("Trips:            20"));
        assert!(output.contains("Avg Daily Gross:  ₹800.00"));
    }

    #[test]
    fn test_format_empty_summary() {
        let summary = PeriodSummary::aggregate([]);
        let output = format_summary(&summary, &Settings::default());
        assert!(output.contains("0 across 0 days"));
        assert!(output.contains("Avg Daily Gross:  ₹0.00"));
    }
}
