//! The `init`/`run` boundary
//!
//! [`IntegrityService`] owns the process-wide store handle and converts every
//! failure kind into a structured [`Reply`]. Nothing escapes this boundary as
//! a raw error: callers inspect `status` and `message` instead of catching
//! faults. A failed call leaves the handle usable for subsequent calls.

use std::path::Path;

use crate::command::{Command, InitParams, MISSING_HASH_SENTINEL, Reply, RunParams};
use crate::storage::IntegrityStore;
use crate::{Error, Result};

/// Command dispatcher holding the single store handle
#[derive(Default)]
pub struct IntegrityService {
    store: Option<IntegrityStore>,
}

impl IntegrityService {
    /// Create a service with no store attached; `init` must be called
    /// before any `run`
    pub fn new() -> Self {
        Self { store: None }
    }

    /// Open (or create) the store at the configured path and bootstrap the
    /// schema. Calling `init` again reopens the store at the new path.
    pub fn init(&mut self, params: &InitParams) -> Reply {
        match IntegrityStore::open(Path::new(params.path())) {
            Ok(store) => {
                tracing::debug!(path = params.path(), "integrity store opened");
                self.store = Some(store);
                Reply::ok()
            }
            Err(e) => {
                tracing::warn!(path = params.path(), error = %e, "failed to open integrity store");
                Reply::error(e.to_string())
            }
        }
    }

    /// Attach an in-memory store (for testing)
    pub fn init_in_memory(&mut self) -> Reply {
        match IntegrityStore::open_in_memory() {
            Ok(store) => {
                self.store = Some(store);
                Reply::ok()
            }
            Err(e) => Reply::error(e.to_string()),
        }
    }

    /// Validate and execute a single command
    pub fn run(&mut self, params: RunParams) -> Reply {
        match self.dispatch(params) {
            Ok(reply) => reply,
            Err(e) => Reply::error(e.to_string()),
        }
    }

    fn dispatch(&self, params: RunParams) -> Result<Reply> {
        let store = self.store.as_ref().ok_or(Error::NotInitialized)?;
        let command = Command::try_from(params)?;
        tracing::debug!(?command, "dispatching");

        match command {
            Command::Insert { file, hash } => {
                store.upsert(&file, &hash)?;
                Ok(Reply::ok_message("Inserted"))
            }
            Command::Select { file } => {
                let hash = store
                    .lookup(&file)?
                    .unwrap_or_else(|| MISSING_HASH_SENTINEL.to_string());
                Ok(Reply::lookup(file, hash))
            }
            Command::DeleteOne { file } => {
                store.delete_one(&file)?;
                Ok(Reply::ok_message(format!("Deleted {file}")))
            }
            Command::DeleteAll => {
                store.delete_all()?;
                Ok(Reply::ok_message("All rows deleted"))
            }
        }
    }

    /// Release the store handle; subsequent `run` calls fail with
    /// "Database not initialized" until `init` is called again
    pub fn close(&mut self) {
        self.store = None;
    }

    pub fn is_initialized(&self) -> bool {
        self.store.is_some()
    }
}
