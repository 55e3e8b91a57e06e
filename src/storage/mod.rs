//! Storage Layer - SQLite-backed persistence
//!
//! System of record is SQLite with a single table:
//! - integrity(file, hash)

pub mod schema;
pub mod sqlite;

pub use sqlite::IntegrityStore;
