//! Command model - wire parameters, validated commands, and structured replies
//!
//! Callers send loosely-typed parameter sets (`InitParams`, `RunParams`),
//! mirroring the dict-shaped payloads an embedding host constructs. They are
//! validated at the boundary into a [`Command`], one variant per recognized
//! action, so a missing field is caught before dispatch rather than mid-query.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Default database location when `init` receives no `path`
pub const DEFAULT_DB_PATH: &str = "database.db";

/// Hash value reported by `select` when no record exists for the file.
/// A missing key is a successful lookup, not an error.
pub const MISSING_HASH_SENTINEL: &str = "NULL";

/// Parameters accepted by `init`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InitParams {
    /// Filesystem location of the persistent store
    pub path: Option<String>,
}

impl InitParams {
    pub fn with_path(path: impl Into<String>) -> Self {
        Self { path: Some(path.into()) }
    }

    /// Configured path, falling back to [`DEFAULT_DB_PATH`]
    pub fn path(&self) -> &str {
        self.path.as_deref().unwrap_or(DEFAULT_DB_PATH)
    }
}

/// Parameters accepted by `run`, before validation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunParams {
    pub action: Option<String>,
    pub file: Option<String>,
    pub hash: Option<String>,
}

/// A validated command, one variant per recognized action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Insert or replace the record for `file`
    Insert { file: String, hash: String },
    /// Look up the hash stored for `file`
    Select { file: String },
    /// Remove the record for `file` if present
    DeleteOne { file: String },
    /// Remove all records, keeping the table structure
    DeleteAll,
}

impl TryFrom<RunParams> for Command {
    type Error = Error;

    fn try_from(params: RunParams) -> Result<Self> {
        match params.action.as_deref() {
            Some("insert") => Ok(Command::Insert {
                file: params.file.ok_or(Error::MissingField("file"))?,
                hash: params.hash.ok_or(Error::MissingField("hash"))?,
            }),
            Some("select") => Ok(Command::Select {
                file: params.file.ok_or(Error::MissingField("file"))?,
            }),
            Some("delete_one") => Ok(Command::DeleteOne {
                file: params.file.ok_or(Error::MissingField("file"))?,
            }),
            Some("delete_all") => Ok(Command::DeleteAll),
            other => Err(Error::UnknownAction(other.map(str::to_string))),
        }
    }
}

/// Outcome status of an `init` or `run` call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "ERROR")]
    Error,
}

/// Structured reply returned by every `init` and `run` call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Reply {
    /// Bare success, no payload
    pub fn ok() -> Self {
        Self { status: Status::Ok, file: None, hash: None, message: None }
    }

    /// Success with a confirmation message
    pub fn ok_message(message: impl Into<String>) -> Self {
        Self { status: Status::Ok, file: None, hash: None, message: Some(message.into()) }
    }

    /// Successful lookup result
    pub fn lookup(file: impl Into<String>, hash: impl Into<String>) -> Self {
        Self {
            status: Status::Ok,
            file: Some(file.into()),
            hash: Some(hash.into()),
            message: None,
        }
    }

    /// Structured failure carrying a diagnostic message
    pub fn error(message: impl Into<String>) -> Self {
        Self { status: Status::Error, file: None, hash: None, message: Some(message.into()) }
    }

    pub fn is_ok(&self) -> bool {
        self.status == Status::Ok
    }
}
