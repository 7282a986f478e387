//! Reports module for rickshaw-ledger
//!
//! Provides the settlement reports: the day dashboard and the
//! period aggregation with its per-day breakdown.

pub mod dashboard;
pub mod period;

pub use dashboard::DashboardReport;
pub use period::{DailyBreakdown, PeriodReport};
