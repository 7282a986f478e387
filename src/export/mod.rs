//! Export module for rickshaw-ledger
//!
//! Provides complete data export functionality in multiple formats:
//! - CSV: For entry and amendment data (spreadsheet-compatible)
//! - JSON: For machine-readable full ledger export
//! - YAML: For human-readable full ledger export

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::{export_amendments_csv, export_entries_csv};
pub use json::{export_full_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;
