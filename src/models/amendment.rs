//! Online amendment ledger
//!
//! Each daily entry carries an ordered list of signed online-payment
//! corrections: money collected through the online channel that belongs to
//! the driver but was initially attributed to the owner (or the reverse,
//! for negative amounts). The ledger is a value object; adding or removing
//! an amendment produces a new ledger rather than mutating in place.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::AmendmentId;
use crate::error::{LedgerError, LedgerResult};

/// Default description for a positive amendment
pub const DEFAULT_PAYMENT_DESCRIPTION: &str = "Online payment";

/// Default description for a negative amendment
pub const DEFAULT_ADJUSTMENT_DESCRIPTION: &str = "Adjustment";

/// A single signed online-payment correction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Amendment {
    /// Unique identifier, assigned when the amendment is added
    pub id: AmendmentId,

    /// Signed amount; positive moves money to the driver, negative to the owner
    pub amount: f64,

    /// Human-readable reason (e.g. "Online payment", "Cancellation fee")
    #[serde(default)]
    pub description: String,
}

impl fmt::Display for Amendment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:+.2}", self.description, self.amount)
    }
}

/// Ordered sequence of amendments attached to one day's entry
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AmendmentLedger {
    amendments: Vec<Amendment>,
}

impl AmendmentLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of amendments
    pub fn len(&self) -> usize {
        self.amendments.len()
    }

    /// Whether the ledger has no amendments
    pub fn is_empty(&self) -> bool {
        self.amendments.is_empty()
    }

    /// Iterate amendments in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Amendment> {
        self.amendments.iter()
    }

    /// Look up an amendment by ID
    pub fn get(&self, id: AmendmentId) -> Option<&Amendment> {
        self.amendments.iter().find(|a| a.id == id)
    }

    /// Sum of all amendment amounts. Order-independent; empty ledger sums to 0.
    pub fn total(&self) -> f64 {
        self.amendments.iter().map(|a| a.amount).sum()
    }

    /// The description used when the caller supplies none
    pub fn default_description(amount: f64) -> &'static str {
        if amount < 0.0 {
            DEFAULT_ADJUSTMENT_DESCRIPTION
        } else {
            DEFAULT_PAYMENT_DESCRIPTION
        }
    }

    /// Return a new ledger with an amendment appended.
    ///
    /// Zero and non-finite amounts are rejected; a no-op amendment must
    /// never enter the ledger. Duplicate descriptions are allowed.
    pub fn with_amendment(
        &self,
        amount: f64,
        description: Option<String>,
    ) -> LedgerResult<(Self, AmendmentId)> {
        if !amount.is_finite() {
            return Err(LedgerError::Validation(
                "Amendment amount must be a finite number".into(),
            ));
        }
        if amount == 0.0 {
            return Err(LedgerError::Validation(
                "Amendment amount cannot be zero".into(),
            ));
        }

        let description = match description {
            Some(d) if !d.trim().is_empty() => d,
            _ => Self::default_description(amount).to_string(),
        };

        let id = AmendmentId::new();
        let mut amendments = self.amendments.clone();
        amendments.push(Amendment {
            id,
            amount,
            description,
        });
        Ok((Self { amendments }, id))
    }

    /// Return a new ledger with the given amendment excluded
    pub fn without_amendment(&self, id: AmendmentId) -> LedgerResult<Self> {
        if self.get(id).is_none() {
            return Err(LedgerError::amendment_not_found(id.to_string()));
        }
        let amendments = self
            .amendments
            .iter()
            .filter(|a| a.id != id)
            .cloned()
            .collect();
        Ok(Self { amendments })
    }
}

impl FromIterator<Amendment> for AmendmentLedger {
    fn from_iter<I: IntoIterator<Item = Amendment>>(iter: I) -> Self {
        Self {
            amendments: iter.into_iter().collect(),
        }
    }
}
