//! Period selection for entry queries
//!
//! A [`DateSelector`] decides which daily entries participate in an
//! aggregation: one exact date, an inclusive range, a calendar month, or
//! the last N days. Bounds are ISO `YYYY-MM-DD` strings compared
//! lexicographically, which matches chronological order exactly as long
//! as dates are zero-padded (entry validation guarantees that).
//!
//! The last-N-days selector takes "today" as an explicit argument; the
//! caller reads the clock once at the boundary, so repeated evaluation is
//! deterministic and tests never depend on wall time.

use chrono::{Duration, NaiveDate};
use std::fmt;

use super::entry::DATE_FORMAT;

/// Selects entries for a period
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DateSelector {
    /// A single calendar date
    Date(String),

    /// An inclusive date range
    Range { start: String, end: String },

    /// A calendar month (e.g. 2025-03)
    Month { year: i32, month: u32 },

    /// The trailing window `[today - days, today]`, inclusive
    LastNDays { days: u32, today: NaiveDate },
}

impl DateSelector {
    /// Select one exact date
    pub fn date(date: impl Into<String>) -> Self {
        Self::Date(date.into())
    }

    /// Select an inclusive range
    pub fn range(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self::Range {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Select a calendar month
    pub fn month(year: i32, month: u32) -> Self {
        Self::Month { year, month }
    }

    /// Select the last `days` days ending at the given "today"
    pub fn last_n_days(days: u32, today: NaiveDate) -> Self {
        Self::LastNDays { days, today }
    }

    /// Parse a `YYYY-MM` month string
    pub fn month_from_str(s: &str) -> Result<Self, SelectorParseError> {
        let s = s.trim();
        let parts: Vec<&str> = s.split('-').collect();
        if parts.len() != 2 {
            return Err(SelectorParseError::InvalidFormat(s.to_string()));
        }
        let year: i32 = parts[0]
            .parse()
            .map_err(|_| SelectorParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = parts[1]
            .parse()
            .map_err(|_| SelectorParseError::InvalidFormat(s.to_string()))?;
        if !(1..=12).contains(&month) {
            return Err(SelectorParseError::InvalidMonth(month));
        }
        Ok(Self::Month { year, month })
    }

    /// The inclusive `[start, end]` string bounds of this selector.
    ///
    /// The month upper bound is always `YYYY-MM-31`. For short months that
    /// is a sentinel past the real month end, which is deliberate: no
    /// stored entry can carry an impossible date, so the inclusive string
    /// comparison stays correct without per-month day-count logic.
    pub fn bounds(&self) -> (String, String) {
        match self {
            Self::Date(date) => (date.clone(), date.clone()),
            Self::Range { start, end } => (start.clone(), end.clone()),
            Self::Month { year, month } => (
                format!("{:04}-{:02}-01", year, month),
                format!("{:04}-{:02}-31", year, month),
            ),
            Self::LastNDays { days, today } => {
                let start = *today - Duration::days(i64::from(*days));
                (
                    start.format(DATE_FORMAT).to_string(),
                    today.format(DATE_FORMAT).to_string(),
                )
            }
        }
    }

    /// Whether an entry dated `date` belongs to this period
    pub fn matches(&self, date: &str) -> bool {
        match self {
            Self::Date(selected) => date == selected,
            _ => {
                let (start, end) = self.bounds();
                start.as_str() <= date && date <= end.as_str()
            }
        }
    }
}

impl fmt::Display for DateSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date(date) => write!(f, "{}", date),
            Self::Range { start, end } => write!(f, "{} to {}", start, end),
            Self::Month { year, month } => write!(f, "{:04}-{:02}", year, month),
            Self::LastNDays { days, today } => {
                write!(f, "last {} days to {}", days, today.format(DATE_FORMAT))
            }
        }
    }
}

/// Error type for selector parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
}

impl fmt::Display for SelectorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectorParseError::InvalidFormat(s) => {
                write!(f, "Invalid month format: '{}'. Use YYYY-MM", s)
            }
            SelectorParseError::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
        }
    }
}

impl std::error::Error for SelectorParseError {}
