//! JSON Export functionality
//!
//! Exports the complete ledger to JSON format with schema versioning.

use crate::error::LedgerResult;
use crate::models::Entry;
use crate::storage::Storage;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io::Write;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full ledger export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// All entries, newest first
    pub entries: Vec<Entry>,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    /// Total number of entries
    pub entry_count: usize,

    /// Total number of online amendments across all entries
    pub amendment_count: usize,

    /// Date of the earliest entry
    pub earliest_entry: Option<String>,

    /// Date of the latest entry
    pub latest_entry: Option<String>,
}

impl FullExport {
    /// Create a new full export from storage
    pub fn from_storage(storage: &Storage) -> LedgerResult<Self> {
        let entries = storage.entries.get_all()?;

        let amendment_count = entries.iter().map(|e| e.online_amendments.len()).sum();
        let earliest_entry = entries.iter().map(|e| e.date.clone()).min();
        let latest_entry = entries.iter().map(|e| e.date.clone()).max();

        let metadata = ExportMetadata {
            entry_count: entries.len(),
            amendment_count,
            earliest_entry,
            latest_entry,
        };

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            entries,
            metadata,
        })
    }

    /// Validate the export structure
    pub fn validate(&self) -> Result<(), String> {
        // Check schema version
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        // Entry ids must be unique
        let mut entry_ids = HashSet::new();
        for entry in &self.entries {
            if !entry_ids.insert(entry.id) {
                return Err(format!("Duplicate entry id {}", entry.id));
            }

            // Amendment ids must be unique within their entry, and a
            // zero-amount amendment can never have been recorded
            let mut amendment_ids = HashSet::new();
            for amendment in entry.online_amendments.iter() {
                if !amendment_ids.insert(amendment.id) {
                    return Err(format!(
                        "Entry {} has duplicate amendment id {}",
                        entry.id, amendment.id
                    ));
                }
                if amendment.amount == 0.0 {
                    return Err(format!(
                        "Entry {} has a zero-amount amendment {}",
                        entry.id, amendment.id
                    ));
                }
            }
        }

        Ok(())
    }
}

/// Export the full ledger to JSON
pub fn export_full_json<W: Write>(
    storage: &Storage,
    writer: &mut W,
    pretty: bool,
) -> LedgerResult<()> {
    let export = FullExport::from_storage(storage)?;

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| crate::error::LedgerError::Export(e.to_string()))?;

    Ok(())
}

/// Import from a JSON export (for verification/restore)
pub fn import_from_json(json_str: &str) -> LedgerResult<FullExport> {
    let export: FullExport = serde_json::from_str(json_str)
        .map_err(|e| crate::error::LedgerError::Json(e.to_string()))?;

    // Validate the import
    export
        .validate()
        .map_err(crate::error::LedgerError::Validation)?;

    Ok(export)
}
