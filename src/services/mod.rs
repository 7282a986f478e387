//! Service layer for rickshaw-ledger
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, computed fields, and the amendment operations.

pub mod entry;

pub use entry::{AmendmentInput, CreateEntryInput, EntryService, EntrySort, UpdateEntryInput};
