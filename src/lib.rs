//! # Integritydb - Persistent file-integrity hash store
//!
//! Maps file paths to integrity hashes in a single SQLite table, exposed
//! through an `init`/`run` command interface.
//!
//! Integritydb provides:
//! - SQLite-backed storage keyed by file path with upsert semantics
//! - A validated command model for the four supported actions
//!   (insert, select, delete_one, delete_all)
//! - A service boundary that converts every failure into a structured reply

pub mod command;
pub mod config;
pub mod service;
pub mod storage;

// Re-exports for convenient access
pub use command::{Command, InitParams, Reply, RunParams, Status};
pub use service::IntegrityService;
pub use storage::IntegrityStore;

/// Result type alias for Integritydb operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Integritydb operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Database not initialized")]
    NotInitialized,

    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Unknown action")]
    UnknownAction(Option<String>),

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
