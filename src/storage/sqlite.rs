//! SQLite storage implementation

use std::path::Path;

use rusqlite::{Connection, OptionalExtension, params};

use super::schema;
use crate::Result;

/// SQLite-backed store for file-integrity records
pub struct IntegrityStore {
    conn: Connection,
}

impl IntegrityStore {
    /// Open a database file (creates if doesn't exist)
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema (idempotent)
    fn initialize_schema(&self) -> Result<()> {
        for stmt in schema::all_schema_statements() {
            self.conn.execute(stmt, [])?;
        }
        Ok(())
    }

    // ========== Record Operations ==========

    /// Insert or replace the record for `file`
    pub fn upsert(&self, file: &str, hash: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO integrity (file, hash) VALUES (?1, ?2)",
            params![file, hash],
        )?;
        Ok(())
    }

    /// Get the stored hash for `file`, if any
    pub fn lookup(&self, file: &str) -> Result<Option<String>> {
        self.conn
            .query_row("SELECT hash FROM integrity WHERE file = ?1", [file], |row| row.get(0))
            .optional()
            .map_err(Into::into)
    }

    /// Delete the record for `file`; returns the number of rows removed.
    /// Deleting an absent file removes zero rows and is not an error.
    pub fn delete_one(&self, file: &str) -> Result<usize> {
        let removed = self.conn.execute("DELETE FROM integrity WHERE file = ?1", [file])?;
        Ok(removed)
    }

    /// Delete all records, keeping the table structure
    pub fn delete_all(&self) -> Result<usize> {
        let removed = self.conn.execute("DELETE FROM integrity", [])?;
        Ok(removed)
    }

    /// Count all records
    pub fn count_records(&self) -> Result<usize> {
        let count: i64 =
            self.conn.query_row("SELECT COUNT(*) FROM integrity", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}
