//! Core data models for rickshaw-ledger
//!
//! This module contains the settlement domain: daily entries, the online
//! amendment ledger, the pure settlement calculator, period selection, and
//! period aggregation.

pub mod amendment;
pub mod entry;
pub mod ids;
pub mod period;
pub mod settlement;
pub mod summary;

pub use amendment::{Amendment, AmendmentLedger};
pub use entry::{Entry, EntryValidationError, DATE_FORMAT};
pub use ids::{AmendmentId, EntryId};
pub use period::{DateSelector, SelectorParseError};
pub use settlement::Settlement;
pub use summary::PeriodSummary;
