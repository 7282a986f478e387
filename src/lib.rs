//! rickshaw-ledger - Daily earnings settlement for a shared auto-rickshaw
//!
//! This library provides the core functionality for the rickshaw-ledger
//! application. It records one entry per working day (gross earnings, CNG
//! fill cost, online payments, driver pass) and settles the day between
//! the vehicle owner and the driver: fuel comes off the top, the remainder
//! splits 50/50, online collections and the shared pass are reconciled on
//! top of the base split.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (entries, amendments, settlements, summaries)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `reports`: Dashboard and period reports
//! - `display`: Terminal formatting
//! - `export`: CSV/JSON/YAML export
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use rickshaw::config::{paths::LedgerPaths, settings::Settings};
//!
//! let paths = LedgerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::LedgerError;
