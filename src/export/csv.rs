//! CSV Export functionality
//!
//! Exports daily entries with their full recomputed settlement breakdown,
//! and the amendment ledger as a separate flat table.

use crate::error::LedgerResult;
use crate::storage::Storage;
use std::io::Write;

/// Export all entries to CSV, one row per entry with settlement columns
pub fn export_entries_csv<W: Write>(storage: &Storage, writer: &mut W) -> LedgerResult<()> {
    writeln!(
        writer,
        "ID,Date,Gross,CNG,Online Total,Net Online Settlement,Net Earnings,\
         Owner Base,Driver Base,Owner After Online,Driver After Online,\
         Pass Used,Pass Amount,Owner Pass Share,Driver Pass Share,\
         Owner Earnings,Driver Earnings,Trips,Hours,Km Start,Km End,Distance,\
         Notes,Created At"
    )
    .map_err(|e| crate::error::LedgerError::Export(e.to_string()))?;

    let entries = storage.entries.get_all()?;

    for entry in entries {
        let s = entry.settlement();
        writeln!(
            writer,
            "{},{},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{},{:.2},{:.2},{:.2},{:.2},{:.2},{},{:.1},{:.1},{:.1},{:.1},{},{}",
            entry.id.as_uuid(),
            entry.date,
            entry.gross_earnings,
            entry.cng,
            s.online_total,
            s.net_online_settlement,
            s.net_earnings,
            s.base_owner_share,
            s.base_driver_share,
            s.owner_after_online,
            s.driver_after_online,
            entry.driver_pass_used,
            entry.driver_pass_amount,
            s.owner_pass_contribution,
            s.driver_pass_contribution,
            s.final_owner_earnings,
            s.final_driver_earnings,
            entry.trips,
            entry.hours_worked,
            entry.km_start,
            entry.km_end,
            s.km_distance,
            escape_csv(&entry.notes),
            entry.created_at.to_rfc3339(),
        )
        .map_err(|e| crate::error::LedgerError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Export every online amendment to CSV, one row per amendment
pub fn export_amendments_csv<W: Write>(storage: &Storage, writer: &mut W) -> LedgerResult<()> {
    writeln!(writer, "Entry ID,Date,Amendment ID,Description,Amount")
        .map_err(|e| crate::error::LedgerError::Export(e.to_string()))?;

    let entries = storage.entries.get_all()?;

    for entry in entries {
        for amendment in entry.online_amendments.iter() {
            writeln!(
                writer,
                "{},{},{},{},{:.2}",
                entry.id.as_uuid(),
                entry.date,
                amendment.id.as_uuid(),
                escape_csv(&amendment.description),
                amendment.amount,
            )
            .map_err(|e| crate::error::LedgerError::Export(e.to_string()))?;
        }
    }

    Ok(())
}

/// Escape a string for CSV format
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
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
    fn test_export_entries_csv() {
        let (_temp_dir, storage) = create_test_storage();

        let mut entry = Entry::new("2025-03-14");
        entry.gross_earnings = 1000.0;
        entry.cng = 200.0;
        entry.notes = "festival, heavy traffic".to_string();
        storage.entries.upsert(entry).unwrap();

        let mut csv_output = Vec::new();
        export_entries_csv(&storage, &mut csv_output).unwrap();

        let csv_string = String::from_utf8(csv_output).unwrap();
        assert!(csv_string.contains("ID,Date,Gross"));
        assert!(csv_string.contains("2025-03-14,1000.00,200.00"));
        // settlement columns are recomputed
        assert!(csv_string.contains("800.00,400.00,400.00"));
        // notes with commas get quoted
        assert!(csv_string.contains("\"festival, heavy traffic\""));
    }

    #[test]
    fn test_export_amendments_csv() {
        let (_temp_dir, storage) = create_test_storage();

        let mut entry = Entry::new("2025-03-14");
        let (ledger, _) = entry
            .online_amendments
            .with_amendment(250.0, Some("GPay".into()))
            .unwrap();
        let (ledger, _) = ledger.with_amendment(-50.0, None).unwrap();
        entry.online_amendments = ledger;
        storage.entries.upsert(entry).unwrap();

        let mut csv_output = Vec::new();
        export_amendments_csv(&storage, &mut csv_output).unwrap();

        let csv_string = String::from_utf8(csv_output).unwrap();
        assert!(csv_string.contains("Entry ID,Date,Amendment ID"));
        assert!(csv_string.contains("GPay,250.00"));
        assert!(csv_string.contains("Adjustment,-50.00"));
    }

    #[test]
    fn test_escape_csv() {
        assert_eq!(escape_csv("plain"), "plain");
        assert_eq!(escape_csv("a,b"), "\"a,b\"");
        assert_eq!(escape_csv("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
