//! Entry repository for JSON storage
//!
//! Manages loading and saving daily entries to entries.json. Only raw
//! entries are persisted; settlement figures are recomputed from them on
//! every read and never written to disk.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::LedgerError;
use crate::models::{DateSelector, Entry, EntryId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable entries file structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct EntryData {
    entries: Vec<Entry>,
}

/// Repository for entry persistence with a date index
pub struct EntryRepository {
    path: PathBuf,
    data: RwLock<HashMap<EntryId, Entry>>,
    /// Index: date string -> entry_ids (a date can hold several entries)
    by_date: RwLock<HashMap<String, Vec<EntryId>>>,
}

impl EntryRepository {
    /// Create a new entry repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
            by_date: RwLock::new(HashMap::new()),
        }
    }

    /// Load entries from disk and build the date index
    pub fn load(&self) -> Result<(), LedgerError> {
        let file_data: EntryData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_date = self
            .by_date
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        by_date.clear();

        for entry in file_data.entries {
            by_date.entry(entry.date.clone()).or_default().push(entry.id);
            data.insert(entry.id, entry);
        }

        Ok(())
    }

    /// Save entries to disk, newest dates first
    pub fn save(&self) -> Result<(), LedgerError> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut entries: Vec<_> = data.values().cloned().collect();
        entries.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));

        let file_data = EntryData { entries };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get an entry by ID
    pub fn get(&self, id: EntryId) -> Result<Option<Entry>, LedgerError> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all entries, newest date first
    pub fn get_all(&self) -> Result<Vec<Entry>, LedgerError> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut entries: Vec<_> = data.values().cloned().collect();
        entries.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
        Ok(entries)
    }

    /// Get entries for one exact date
    pub fn get_by_date(&self, date: &str) -> Result<Vec<Entry>, LedgerError> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        let by_date = self
            .by_date
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let ids = by_date.get(date).map(|v| v.as_slice()).unwrap_or(&[]);
        let mut entries: Vec<_> = ids.iter().filter_map(|id| data.get(id).cloned()).collect();
        entries.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(entries)
    }

    /// Get entries whose date falls in the inclusive range, oldest first.
    /// Bounds compare lexicographically, which is chronological for
    /// zero-padded ISO dates.
    pub fn get_by_range(&self, start: &str, end: &str) -> Result<Vec<Entry>, LedgerError> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut entries: Vec<_> = data
            .values()
            .filter(|e| e.date.as_str() >= start && e.date.as_str() <= end)
            .cloned()
            .collect();
        entries.sort_by(|a, b| a.date.cmp(&b.date).then(a.created_at.cmp(&b.created_at)));
        Ok(entries)
    }

    /// Get all entries matched by a selector, oldest first
    pub fn get_by_selector(&self, selector: &DateSelector) -> Result<Vec<Entry>, LedgerError> {
        match selector {
            DateSelector::Date(date) => self.get_by_date(date),
            _ => {
                let (start, end) = selector.bounds();
                self.get_by_range(&start, &end)
            }
        }
    }

    /// Insert or update an entry
    pub fn upsert(&self, entry: Entry) -> Result<(), LedgerError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_date = self
            .by_date
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        // Remove from the old date bucket if updating
        if let Some(old) = data.get(&entry.id) {
            if let Some(ids) = by_date.get_mut(&old.date) {
                ids.retain(|&id| id != entry.id);
            }
        }

        by_date.entry(entry.date.clone()).or_default().push(entry.id);
        data.insert(entry.id, entry);
        Ok(())
    }

    /// Delete an entry, returning whether it existed
    pub fn delete(&self, id: EntryId) -> Result<bool, LedgerError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_date = self
            .by_date
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        if let Some(entry) = data.remove(&id) {
            if let Some(ids) = by_date.get_mut(&entry.date) {
                ids.retain(|&eid| eid != id);
            }
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Count entries
    pub fn count(&self) -> Result<usize, LedgerError> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}
