//! YAML Export functionality
//!
//! Exports the complete ledger to YAML format for human-readable backup.

use crate::error::LedgerResult;
use crate::export::json::FullExport;
use crate::storage::Storage;
use std::io::Write;

/// Export the full ledger to YAML format
pub fn export_full_yaml<W: Write>(storage: &Storage, writer: &mut W) -> LedgerResult<()> {
    let export = FullExport::from_storage(storage)?;

    // Add a header comment
    writeln!(writer, "# rickshaw-ledger Full Export")
        .map_err(|e| crate::error::LedgerError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| crate::error::LedgerError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", export.app_version)
        .map_err(|e| crate::error::LedgerError::Export(e.to_string()))?;
    writeln!(writer, "#").map_err(|e| crate::error::LedgerError::Export(e.to_string()))?;
    writeln!(
        writer,
        "# This file can be used to restore the entry ledger."
    )
    .map_err(|e| crate::error::LedgerError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| crate::error::LedgerError::Export(e.to_string()))?;

    // Serialize to YAML
    serde_yaml::to_writer(writer, &export)
        .map_err(|e| crate::error::LedgerError::Export(e.to_string()))?;

    Ok(())
}

/// Import from a YAML export
pub fn import_from_yaml(yaml_str: &str) -> LedgerResult<FullExport> {
    let export: FullExport = serde_yaml::from_str(yaml_str)
        .map_err(|e| crate::error::LedgerError::Yaml(e.to_string()))?;

    // Validate the import
    export
        .validate()
        .map_err(crate::error::LedgerError::Validation)?;

    Ok(export)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::LedgerPaths;
    use crate::models::Entry;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_yaml_export() {
        let (_temp_dir, storage) = create_test_storage();

        let mut entry = Entry::new("2025-03-14");
        entry.gross_earnings = 1000.0;
        entry.notes = "festival day".to_string();
        storage.entries.upsert(entry).unwrap();

        let mut yaml_output = Vec::new();
        export_full_yaml(&storage, &mut yaml_output).unwrap();

        let yaml_string = String::from_utf8(yaml_output).unwrap();

        // Verify header comments
        assert!(yaml_string.contains("# rickshaw-ledger Full Export"));

        // Verify data
        assert!(yaml_string.contains("2025-03-14"));
        assert!(yaml_string.contains("festival day"));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let (_temp_dir, storage) = create_test_storage();

        let mut entry = Entry::new("2025-03-14");
        entry.gross_earnings = 1000.0;
        storage.entries.upsert(entry).unwrap();

        let mut yaml_output = Vec::new();
        export_full_yaml(&storage, &mut yaml_output).unwrap();

        let yaml_string = String::from_utf8(yaml_output).unwrap();

        // Skip the comment lines for parsing
        let yaml_content: String = yaml_string
            .lines()
            .filter(|line| !line.starts_with('#'))
            .collect::<Vec<_>>()
            .join("\n");

        // Import back
        let imported = import_from_yaml(&yaml_content).unwrap();

        assert_eq!(imported.entries.len(), 1);
        assert_eq!(imported.entries[0].gross_earnings, 1000.0);
    }
}
