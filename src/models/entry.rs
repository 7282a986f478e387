//! Daily entry model
//!
//! One `Entry` records a single day of vehicle operation: gross earnings,
//! fuel cost, online-payment amendments, the optional prepaid driver pass,
//! and odometer/trip/hour counters. Entries are the only persisted record;
//! every settlement figure is recomputed from them on demand.
//!
//! Field names serialize in camelCase so data files stay compatible with
//! records produced by earlier exports of this ledger.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::amendment::AmendmentLedger;
use super::ids::EntryId;
use super::settlement::Settlement;

/// The date format entries are keyed by
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A raw daily record, one per calendar day per vehicle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Unique identifier
    pub id: EntryId,

    /// Calendar date, ISO `YYYY-MM-DD`, zero-padded. Kept as a string:
    /// ISO dates compare lexicographically in chronological order, which
    /// the range and month selectors rely on.
    pub date: String,

    /// Total revenue collected before any deduction
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub gross_earnings: f64,

    /// Fuel (CNG) cost for the day
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub cng: f64,

    /// Signed online-payment corrections
    #[serde(default)]
    pub online_amendments: AmendmentLedger,

    /// Whether a prepaid driver pass was purchased this day
    #[serde(default, deserialize_with = "lenient::bool_truthy")]
    pub driver_pass_used: bool,

    /// Pass cost; stored as 0 whenever the pass was not used
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub driver_pass_amount: f64,

    /// Number of trips completed
    #[serde(default, deserialize_with = "lenient::u32_or_zero")]
    pub trips: u32,

    /// Hours on the road
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub hours_worked: f64,

    /// Odometer reading at the start of the day
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub km_start: f64,

    /// Odometer reading at the end of the day
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub km_end: f64,

    /// Free-form notes
    #[serde(default)]
    pub notes: String,

    /// When the entry was created
    pub created_at: DateTime<Utc>,
}

impl Entry {
    /// Create a new entry for the given date with all counters zeroed.
    /// Identity and creation timestamp are assigned here, never by the
    /// settlement code.
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            id: EntryId::new(),
            date: date.into(),
            gross_earnings: 0.0,
            cng: 0.0,
            online_amendments: AmendmentLedger::new(),
            driver_pass_used: false,
            driver_pass_amount: 0.0,
            trips: 0,
            hours_worked: 0.0,
            km_start: 0.0,
            km_end: 0.0,
            notes: String::new(),
            created_at: Utc::now(),
        }
    }

    /// Compute the full settlement breakdown for this entry
    pub fn settlement(&self) -> Settlement {
        Settlement::of(self)
    }

    /// The pass amount that actually applies: 0 unless the pass was used
    pub fn effective_pass_amount(&self) -> f64 {
        if self.driver_pass_used {
            self.driver_pass_amount
        } else {
            0.0
        }
    }

    /// Validate the entry for human-facing boundaries (create/edit forms).
    /// The settlement calculator itself never validates; it computes a
    /// result for any entry.
    pub fn validate(&self) -> Result<(), EntryValidationError> {
        let parsed = NaiveDate::parse_from_str(&self.date, DATE_FORMAT)
            .map_err(|_| EntryValidationError::BadDate(self.date.clone()))?;
        // parse_from_str accepts "2025-3-4"; the selectors need zero padding
        if parsed.format(DATE_FORMAT).to_string() != self.date {
            return Err(EntryValidationError::BadDate(self.date.clone()));
        }

        if self.gross_earnings < 0.0 {
            return Err(EntryValidationError::Negative("gross earnings"));
        }
        if self.cng < 0.0 {
            return Err(EntryValidationError::Negative("CNG cost"));
        }
        if self.driver_pass_amount < 0.0 {
            return Err(EntryValidationError::Negative("driver pass amount"));
        }
        if self.hours_worked < 0.0 {
            return Err(EntryValidationError::Negative("hours worked"));
        }
        if self.km_start < 0.0 || self.km_end < 0.0 {
            return Err(EntryValidationError::Negative("odometer reading"));
        }

        Ok(())
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} gross {:.2}", self.date, self.gross_earnings)
    }
}

/// Validation errors for entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryValidationError {
    /// Date is not a real zero-padded ISO calendar date
    BadDate(String),
    /// A field that must be non-negative was negative
    Negative(&'static str),
}

impl fmt::Display for EntryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadDate(date) => {
                write!(f, "Invalid date '{}': use zero-padded YYYY-MM-DD", date)
            }
            Self::Negative(field) => write!(f, "{} cannot be negative", field),
        }
    }
}

impl std::error::Error for EntryValidationError {}

/// Lenient deserializers mirroring how earlier ledger records were written:
/// numbers sometimes arrive as strings (hours in particular), booleans
/// sometimes as "true"/"false", and absent numerics mean zero.
mod lenient {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawNumber {
        Num(f64),
        Text(String),
        Bool(bool),
    }

    pub(super) fn f64_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<RawNumber>::deserialize(deserializer)? {
            Some(RawNumber::Num(n)) => n,
            Some(RawNumber::Text(s)) => s.trim().parse().unwrap_or(0.0),
            Some(RawNumber::Bool(_)) | None => 0.0,
        })
    }

    pub(super) fn u32_or_zero<'de, D>(deserializer: D) -> Result<u32, D::Error>
    where
        D: Deserializer<'de>,
    {
        let n = f64_or_zero(deserializer)?;
        if n.is_finite() && n > 0.0 {
            Ok(n as u32)
        } else {
            Ok(0)
        }
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawBool {
        Bool(bool),
        Text(String),
    }

    pub(super) fn bool_truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<RawBool>::deserialize(deserializer)? {
            Some(RawBool::Bool(b)) => b,
            Some(RawBool::Text(s)) => s == "true",
            None => false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry() {
        let entry = Entry::new("2025-03-14");
        assert_eq!(entry.date, "2025-03-14");
        assert_eq!(entry.gross_earnings, 0.0);
        assert!(entry.online_amendments.is_empty());
        assert!(!entry.driver_pass_used);
        assert!(entry.validate().is_ok());
    }

    #[test]
    fn test_effective_pass_amount() {
        let mut entry = Entry::new("2025-03-14");
        entry.driver_pass_amount = 100.0;
        assert_eq!(entry.effective_pass_amount(), 0.0);

        entry.driver_pass_used = true;
        assert_eq!(entry.effective_pass_amount(), 100.0);
    }

    #[test]
    fn test_validate_rejects_bad_dates() {
        let mut entry = Entry::new("14-03-2025");
        assert!(matches!(
            entry.validate(),
            Err(EntryValidationError::BadDate(_))
        ));

        // unpadded dates break lexicographic range selection
        entry.date = "2025-3-4".into();
        assert!(matches!(
            entry.validate(),
            Err(EntryValidationError::BadDate(_))
        ));

        entry.date = "2025-02-30".into();
        assert!(entry.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_negative_amounts() {
        let mut entry = Entry::new("2025-03-14");
        entry.gross_earnings = -10.0;
        assert_eq!(
            entry.validate(),
            Err(EntryValidationError::Negative("gross earnings"))
        );
    }

    #[test]
    fn test_validate_accepts_reversed_odometer() {
        // kmEnd < kmStart is suspicious but not rejected; the display
        // layer flags it as a warning
        let mut entry = Entry::new("2025-03-14");
        entry.km_start = 500.0;
        entry.km_end = 480.0;
        assert!(entry.validate().is_ok());
    }

    #[test]
    fn test_serialization_uses_camel_case() {
        let mut entry = Entry::new("2025-03-14");
        entry.gross_earnings = 1000.0;
        entry.driver_pass_used = true;
        entry.driver_pass_amount = 100.0;

        let json = serde_json::to_value(&entry).unwrap();
        assert!(json.get("grossEarnings").is_some());
        assert!(json.get("driverPassUsed").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("gross_earnings").is_none());
    }

    #[test]
    fn test_lenient_deserialization() {
        // hours as a string, missing cng, pass flag as "true"
        let json = r#"{
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "date": "2025-03-14",
            "grossEarnings": "1000.50",
            "driverPassUsed": "true",
            "driverPassAmount": 100,
            "trips": "12",
            "hoursWorked": "8.5",
            "createdAt": "2025-03-14T18:30:00Z"
        }"#;

        let entry: Entry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.gross_earnings, 1000.50);
        assert_eq!(entry.cng, 0.0);
        assert!(entry.driver_pass_used);
        assert_eq!(entry.trips, 12);
        assert_eq!(entry.hours_worked, 8.5);
    }

    #[test]
    fn test_lenient_deserialization_garbage_to_zero() {
        let json = r#"{
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "date": "2025-03-14",
            "grossEarnings": "n/a",
            "driverPassUsed": "yes",
            "createdAt": "2025-03-14T18:30:00Z"
        }"#;

        let entry: Entry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.gross_earnings, 0.0);
        // only the literal string "true" counts as truthy
        assert!(!entry.driver_pass_used);
    }

    #[test]
    fn test_round_trip() {
        let mut entry = Entry::new("2025-03-14");
        entry.gross_earnings = 1000.0;
        entry.cng = 200.0;
        let (ledger, _) = entry
            .online_amendments
            .with_amendment(150.0, None)
            .unwrap();
        entry.online_amendments = ledger;

        let json = serde_json::to_string(&entry).unwrap();
        let back: Entry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
