//! Period aggregation
//!
//! Rolls many settled entries up into one [`PeriodSummary`]: every numeric
//! settlement field summed, plus raw counters (trips, hours, distance) and
//! the average daily gross. Aggregation is pure and order-independent, and
//! summaries merge: aggregating two halves of a sequence and merging the
//! results equals aggregating the whole sequence in one pass (within
//! floating-point rounding).
//!
//! The average divides by the number of distinct calendar dates present,
//! not the raw entry count, so a date with two records is still one day.
//! To keep merging exact the summary carries the date set itself.

use std::collections::BTreeSet;

use super::entry::Entry;

/// Aggregated totals over a set of daily entries
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PeriodSummary {
    /// Sum of gross earnings
    pub total_gross: f64,
    /// Sum of CNG cost
    pub total_cng: f64,
    /// Sum of net earnings
    pub total_net: f64,
    /// Sum of online amendment totals
    pub total_online: f64,
    /// Sum of net online settlements
    pub total_net_online_settlement: f64,
    /// Sum of base owner shares
    pub total_base_owner_share: f64,
    /// Sum of base driver shares
    pub total_base_driver_share: f64,
    /// Sum of owner shares after the online transfer
    pub total_owner_after_online: f64,
    /// Sum of driver shares after the online transfer
    pub total_driver_after_online: f64,
    /// Sum of owner pass contributions
    pub total_owner_pass_contribution: f64,
    /// Sum of driver pass contributions
    pub total_driver_pass_contribution: f64,
    /// Sum of final owner earnings
    pub total_owner_earnings: f64,
    /// Sum of final driver earnings
    pub total_driver_earnings: f64,
    /// Sum of effective pass amounts
    pub total_pass_amount: f64,
    /// Sum of trips
    pub total_trips: u32,
    /// Sum of hours worked
    pub total_hours: f64,
    /// Sum of kilometers driven
    pub total_km: f64,
    /// Number of raw entries aggregated
    pub entry_count: usize,

    days: BTreeSet<String>,
}

impl PeriodSummary {
    /// An empty summary; aggregating nothing yields exactly this
    pub fn new() -> Self {
        Self::default()
    }

    /// Aggregate a sequence of entries. The sequence may be empty and may
    /// arrive in any order.
    pub fn aggregate<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'a Entry>,
    {
        let mut summary = Self::new();
        for entry in entries {
            summary.add_entry(entry);
        }
        summary
    }

    /// Fold one entry into the summary
    pub fn add_entry(&mut self, entry: &Entry) {
        let s = entry.settlement();

        self.total_gross += entry.gross_earnings;
        self.total_cng += entry.cng;
        self.total_net += s.net_earnings;
        self.total_online += s.online_total;
        self.total_net_online_settlement += s.net_online_settlement;
        self.total_base_owner_share += s.base_owner_share;
        self.total_base_driver_share += s.base_driver_share;
        self.total_owner_after_online += s.owner_after_online;
        self.total_driver_after_online += s.driver_after_online;
        self.total_owner_pass_contribution += s.owner_pass_contribution;
        self.total_driver_pass_contribution += s.driver_pass_contribution;
        self.total_owner_earnings += s.final_owner_earnings;
        self.total_driver_earnings += s.final_driver_earnings;
        self.total_pass_amount += entry.effective_pass_amount();
        self.total_trips += entry.trips;
        self.total_hours += entry.hours_worked;
        self.total_km += s.km_distance;
        self.entry_count += 1;

        self.days.insert(entry.date.clone());
    }

    /// Merge another summary into this one. Dates shared by both sides
    /// still count as one day.
    pub fn merge(&mut self, other: &PeriodSummary) {
        self.total_gross += other.total_gross;
        self.total_cng += other.total_cng;
        self.total_net += other.total_net;
        self.total_online += other.total_online;
        self.total_net_online_settlement += other.total_net_online_settlement;
        self.total_base_owner_share += other.total_base_owner_share;
        self.total_base_driver_share += other.total_base_driver_share;
        self.total_owner_after_online += other.total_owner_after_online;
        self.total_driver_after_online += other.total_driver_after_online;
        self.total_owner_pass_contribution += other.total_owner_pass_contribution;
        self.total_driver_pass_contribution += other.total_driver_pass_contribution;
        self.total_owner_earnings += other.total_owner_earnings;
        self.total_driver_earnings += other.total_driver_earnings;
        self.total_pass_amount += other.total_pass_amount;
        self.total_trips += other.total_trips;
        self.total_hours += other.total_hours;
        self.total_km += other.total_km;
        self.entry_count += other.entry_count;

        for day in &other.days {
            self.days.insert(day.clone());
        }
    }

    /// Number of distinct calendar dates represented
    pub fn distinct_day_count(&self) -> usize {
        self.days.len()
    }

    /// Average gross per distinct day; 0 for an empty summary
    pub fn average_daily_gross(&self) -> f64 {
        if self.days.is_empty() {
            0.0
        } else {
            self.total_gross / self.days.len() as f64
        }
    }

    /// Whether anything was aggregated
    pub fn is_empty(&self) -> bool {
        self.entry_count == 0
    }
}
