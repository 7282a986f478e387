//! Entry service
//!
//! Provides business logic for daily entries: creation with validation and
//! pass-amount normalization, lookup by full or short id, list ordering,
//! edits, and the online-amendment operations.

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Amendment, AmendmentId, DateSelector, Entry, EntryId};
use crate::storage::Storage;

/// Service for daily entry management
pub struct EntryService<'a> {
    storage: &'a Storage,
}

/// Sort order for entry listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntrySort {
    /// Newest date first (default)
    #[default]
    Date,
    /// Highest gross earnings first
    HighestEarnings,
    /// Most trips first
    HighestTrips,
    /// Most hours worked first
    MostHours,
}

/// One online amendment supplied at entry creation
#[derive(Debug, Clone)]
pub struct AmendmentInput {
    /// Signed amount; zero is rejected
    pub amount: f64,
    /// Optional description; defaults by sign when absent
    pub description: Option<String>,
}

/// Input for creating a new entry
#[derive(Debug, Clone, Default)]
pub struct CreateEntryInput {
    pub date: String,
    pub gross_earnings: f64,
    pub cng: f64,
    pub amendments: Vec<AmendmentInput>,
    pub driver_pass_used: bool,
    pub driver_pass_amount: f64,
    pub trips: u32,
    pub hours_worked: f64,
    pub km_start: f64,
    pub km_end: f64,
    pub notes: Option<String>,
}

/// Input for updating an entry
///
/// Unset fields keep their current values. The date is fixed at creation
/// and cannot be changed; delete and re-record the day instead.
#[derive(Debug, Clone, Default)]
pub struct UpdateEntryInput {
    pub gross_earnings: Option<f64>,
    pub cng: Option<f64>,
    pub driver_pass_used: Option<bool>,
    pub driver_pass_amount: Option<f64>,
    pub trips: Option<u32>,
    pub hours_worked: Option<f64>,
    pub km_start: Option<f64>,
    pub km_end: Option<f64>,
    pub notes: Option<String>,
}

impl<'a> EntryService<'a> {
    /// Create a new entry service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new daily entry
    pub fn create(&self, input: CreateEntryInput) -> LedgerResult<Entry> {
        let mut entry = Entry::new(input.date);
        entry.gross_earnings = input.gross_earnings;
        entry.cng = input.cng;
        entry.driver_pass_used = input.driver_pass_used;
        entry.driver_pass_amount = input.driver_pass_amount;
        entry.trips = input.trips;
        entry.hours_worked = input.hours_worked;
        entry.km_start = input.km_start;
        entry.km_end = input.km_end;

        if let Some(notes) = input.notes {
            entry.notes = notes.trim().to_string();
        }

        for amendment in input.amendments {
            let (ledger, _) = entry
                .online_amendments
                .with_amendment(amendment.amount, amendment.description)?;
            entry.online_amendments = ledger;
        }

        // The pass amount only counts on days the pass was bought
        if !entry.driver_pass_used {
            entry.driver_pass_amount = 0.0;
        }

        entry
            .validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        self.storage.entries.upsert(entry.clone())?;
        self.storage.entries.save()?;

        Ok(entry)
    }

    /// Get an entry by ID
    pub fn get(&self, id: EntryId) -> LedgerResult<Option<Entry>> {
        self.storage.entries.get(id)
    }

    /// Find an entry by ID string
    ///
    /// Accepts a full UUID, a `ent-` prefixed UUID, or an unambiguous
    /// prefix of the UUID as shown in listings (at least 4 hex chars).
    pub fn find(&self, identifier: &str) -> LedgerResult<Option<Entry>> {
        if let Ok(id) = identifier.parse::<EntryId>() {
            return self.storage.entries.get(id);
        }

        let needle: String = identifier
            .strip_prefix(EntryId::prefix())
            .unwrap_or(identifier)
            .chars()
            .filter(|c| *c != '-')
            .collect::<String>()
            .to_lowercase();

        if needle.len() < 4 || !needle.chars().all(|c| c.is_ascii_hexdigit()) {
            return Ok(None);
        }

        let mut found: Option<Entry> = None;
        for entry in self.storage.entries.get_all()? {
            if entry
                .id
                .as_uuid()
                .simple()
                .to_string()
                .starts_with(&needle)
            {
                if found.is_some() {
                    return Err(LedgerError::Validation(format!(
                        "ID '{}' matches more than one entry, use more characters",
                        identifier
                    )));
                }
                found = Some(entry);
            }
        }

        Ok(found)
    }

    /// List entries with the given sort order and optional limit
    pub fn list(&self, sort: EntrySort, limit: Option<usize>) -> LedgerResult<Vec<Entry>> {
        let mut entries = self.storage.entries.get_all()?;

        match sort {
            // get_all already returns newest first
            EntrySort::Date => {}
            EntrySort::HighestEarnings => {
                entries.sort_by(|a, b| b.gross_earnings.total_cmp(&a.gross_earnings));
            }
            EntrySort::HighestTrips => {
                entries.sort_by(|a, b| b.trips.cmp(&a.trips));
            }
            EntrySort::MostHours => {
                entries.sort_by(|a, b| b.hours_worked.total_cmp(&a.hours_worked));
            }
        }

        if let Some(limit) = limit {
            entries.truncate(limit);
        }

        Ok(entries)
    }

    /// Get entries matching a date selector, oldest first
    pub fn list_for_selector(&self, selector: &DateSelector) -> LedgerResult<Vec<Entry>> {
        self.storage.entries.get_by_selector(selector)
    }

    /// Get entries recorded for a specific date
    pub fn list_for_date(&self, date: &str) -> LedgerResult<Vec<Entry>> {
        self.storage.entries.get_by_date(date)
    }

    /// Update an entry
    pub fn update(&self, id: EntryId, input: UpdateEntryInput) -> LedgerResult<Entry> {
        let mut entry = self
            .storage
            .entries
            .get(id)?
            .ok_or_else(|| LedgerError::entry_not_found(id.to_string()))?;

        if let Some(gross) = input.gross_earnings {
            entry.gross_earnings = gross;
        }
        if let Some(cng) = input.cng {
            entry.cng = cng;
        }
        if let Some(used) = input.driver_pass_used {
            entry.driver_pass_used = used;
        }
        if let Some(amount) = input.driver_pass_amount {
            entry.driver_pass_amount = amount;
        }
        if let Some(trips) = input.trips {
            entry.trips = trips;
        }
        if let Some(hours) = input.hours_worked {
            entry.hours_worked = hours;
        }
        if let Some(km_start) = input.km_start {
            entry.km_start = km_start;
        }
        if let Some(km_end) = input.km_end {
            entry.km_end = km_end;
        }
        if let Some(notes) = input.notes {
            entry.notes = notes.trim().to_string();
        }

        if !entry.driver_pass_used {
            entry.driver_pass_amount = 0.0;
        }

        entry
            .validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        self.storage.entries.upsert(entry.clone())?;
        self.storage.entries.save()?;

        Ok(entry)
    }

    /// Delete an entry
    pub fn delete(&self, id: EntryId) -> LedgerResult<Entry> {
        let entry = self
            .storage
            .entries
            .get(id)?
            .ok_or_else(|| LedgerError::entry_not_found(id.to_string()))?;

        self.storage.entries.delete(id)?;
        self.storage.entries.save()?;

        Ok(entry)
    }

    /// Record an online amendment against an entry
    ///
    /// Returns the updated entry and the id of the new amendment.
    pub fn add_amendment(
        &self,
        id: EntryId,
        amount: f64,
        description: Option<String>,
    ) -> LedgerResult<(Entry, AmendmentId)> {
        let mut entry = self
            .storage
            .entries
            .get(id)?
            .ok_or_else(|| LedgerError::entry_not_found(id.to_string()))?;

        let (ledger, amendment_id) = entry.online_amendments.with_amendment(amount, description)?;
        entry.online_amendments = ledger;

        self.storage.entries.upsert(entry.clone())?;
        self.storage.entries.save()?;

        Ok((entry, amendment_id))
    }

    /// Remove an online amendment from an entry
    pub fn remove_amendment(
        &self,
        id: EntryId,
        amendment_id: AmendmentId,
    ) -> LedgerResult<Entry> {
        let mut entry = self
            .storage
            .entries
            .get(id)?
            .ok_or_else(|| LedgerError::entry_not_found(id.to_string()))?;

        entry.online_amendments = entry.online_amendments.without_amendment(amendment_id)?;

        self.storage.entries.upsert(entry.clone())?;
        self.storage.entries.save()?;

        Ok(entry)
    }

    /// Look up one amendment on an entry by full or short id
    pub fn find_amendment(&self, entry: &Entry, identifier: &str) -> Option<Amendment> {
        if let Ok(id) = identifier.parse::<AmendmentId>() {
            if let Some(amendment) = entry.online_amendments.get(id) {
                return Some(amendment.clone());
            }
        }

        let needle: String = identifier
            .strip_prefix(AmendmentId::prefix())
            .unwrap_or(identifier)
            .chars()
            .filter(|c| *c != '-')
            .collect::<String>()
            .to_lowercase();
        if needle.len() < 4 {
            return None;
        }

        let mut found = None;
        for amendment in entry.online_amendments.iter() {
            if amendment
                .id
                .as_uuid()
                .simple()
                .to_string()
                .starts_with(&needle)
            {
                if found.is_some() {
                    return None;
                }
                found = Some(amendment.clone());
            }
        }
        found
    }

    /// Count entries
    pub fn count(&self) -> LedgerResult<usize> {
        self.storage.entries.count()
    }
}
