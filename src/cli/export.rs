//! CLI commands for data export
//!
//! Provides commands for exporting the ledger in various formats.

use crate::error::LedgerResult;
use crate::export::{csv, json, yaml};
use crate::storage::Storage;
use clap::{Subcommand, ValueEnum};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (entries with settlement columns)
    Csv,
    /// JSON format (full ledger)
    Json,
    /// YAML format (full ledger, human-readable)
    Yaml,
}

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export all data to a file
    All {
        /// Output file path
        output: PathBuf,

        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Export entries with settlement columns to CSV
    Entries {
        /// Output file path
        output: PathBuf,
    },

    /// Export online amendments to CSV
    Amendments {
        /// Output file path
        output: PathBuf,
    },

    /// Show export information without writing files
    Info,
}

/// Handle export commands
pub fn handle_export_command(storage: &Storage, cmd: ExportCommands) -> LedgerResult<()> {
    match cmd {
        ExportCommands::All {
            output,
            format,
            pretty,
        } => handle_export_all(storage, output, format, pretty),
        ExportCommands::Entries { output } => handle_export_entries(storage, output),
        ExportCommands::Amendments { output } => handle_export_amendments(storage, output),
        ExportCommands::Info => handle_export_info(storage),
    }
}

/// Handle full export
fn handle_export_all(
    storage: &Storage,
    output: PathBuf,
    format: ExportFormat,
    pretty: bool,
) -> LedgerResult<()> {
    let file = File::create(&output).map_err(|e| {
        crate::error::LedgerError::Export(format!(
            "Failed to create file {}: {}",
            output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Csv => {
            // For CSV, export entries as the primary data
            csv::export_entries_csv(storage, &mut writer)?;
            println!("Entries exported to: {}", output.display());
            println!(
                "Note: CSV format exports entries only. Use JSON or YAML for full ledger export."
            );
        }
        ExportFormat::Json => {
            json::export_full_json(storage, &mut writer, pretty)?;
            println!("Full ledger exported to: {}", output.display());
        }
        ExportFormat::Yaml => {
            yaml::export_full_yaml(storage, &mut writer)?;
            println!("Full ledger exported to: {}", output.display());
        }
    }

    Ok(())
}

/// Handle entries export
fn handle_export_entries(storage: &Storage, output: PathBuf) -> LedgerResult<()> {
    let file = File::create(&output).map_err(|e| {
        crate::error::LedgerError::Export(format!(
            "Failed to create file {}: {}",
            output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);

    csv::export_entries_csv(storage, &mut writer)?;

    let count = storage.entries.count()?;
    println!("Exported {} entries to: {}", count, output.display());

    Ok(())
}

/// Handle amendments export
fn handle_export_amendments(storage: &Storage, output: PathBuf) -> LedgerResult<()> {
    let file = File::create(&output).map_err(|e| {
        crate::error::LedgerError::Export(format!(
            "Failed to create file {}: {}",
            output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);

    csv::export_amendments_csv(storage, &mut writer)?;

    let count: usize = storage
        .entries
        .get_all()?
        .iter()
        .map(|e| e.online_amendments.len())
        .sum();
    println!("Exported {} amendments to: {}", count, output.display());

    Ok(())
}

/// Show export information
fn handle_export_info(storage: &Storage) -> LedgerResult<()> {
    let export = json::FullExport::from_storage(storage)?;

    println!("Export Information");
    println!("==================\n");

    println!("Schema Version: {}", export.schema_version);
    println!("App Version:    {}", export.app_version);
    println!();

    println!("Data Summary:");
    println!("  Entries:     {}", export.metadata.entry_count);
    println!("  Amendments:  {}", export.metadata.amendment_count);
    println!();

    if let Some(earliest) = &export.metadata.earliest_entry {
        println!("Entry Date Range:");
        println!("  Earliest: {}", earliest);
    }
    if let Some(latest) = &export.metadata.latest_entry {
        println!("  Latest:   {}", latest);
    }

    println!("\nAvailable Export Formats:");
    println!("  csv  - CSV format (entries or amendments)");
    println!("  json - JSON format (full ledger, machine-readable)");
    println!("  yaml - YAML format (full ledger, human-readable)");

    println!("\nExamples:");
    println!("  rickshaw export all backup.json --format json --pretty");
    println!("  rickshaw export entries entries.csv");
    println!("  rickshaw export amendments amendments.csv");

    Ok(())
}
