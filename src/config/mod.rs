//! Configuration module for rickshaw-ledger
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence
//! - Application preferences

pub mod paths;
pub mod settings;

pub use paths::LedgerPaths;
pub use settings::Settings;
