//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`.
//! This crate contains the record repositories, the expense ledger and the
//! shared tracing setup.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - In-memory storage only
//! - `json-file` - Collections persisted as JSON array files

pub mod database;
pub mod ledger;
pub mod telemetry;

// Re-exports - In-Memory
pub use database::{InMemoryPostRepository, InMemoryRepository, InMemoryUserRepository};
pub use ledger::InMemoryExpenseLedger;
pub use telemetry::{TelemetryConfig, init_telemetry};

// Re-exports - JSON files
#[cfg(feature = "json-file")]
pub use database::{JsonFilePostRepository, JsonFileRepository, JsonFileUserRepository};
