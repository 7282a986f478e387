//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod amend;
pub mod dashboard;
pub mod entry;
pub mod export;
pub mod report;

pub use amend::{handle_amend_command, AmendCommands};
pub use dashboard::handle_dashboard_command;
pub use entry::{handle_entry_command, EntryCommands};
pub use export::{handle_export_command, ExportCommands, ExportFormat};
pub use report::{handle_report_command, ReportCommands};
