//! Error handling for the playlist-search application
//!
//! Errors are split by how they should be handled: configuration problems abort
//! before the UI starts, database failures abort the operation in progress, and
//! invariant violations are programmer errors that end the session. Empty query
//! results are never errors.

use std::path::PathBuf;
use thiserror::Error;

use rusqlite::ffi;

#[derive(Error, Debug)]
pub enum PlaylistSearchError {
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Navigation invariant violated: {0}")]
    Invariant(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Connection failed: {0}")]
    Connection(#[source] rusqlite::Error),

    #[error("Query failed: {0}")]
    Query(#[source] rusqlite::Error),

    #[error("Database file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Library schema is missing table '{table}'")]
    MissingTable { table: String },

    #[error("Database corruption detected")]
    Corruption,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Invalid config format: {0}")]
    InvalidFormat(#[from] toml::de::Error),

    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    #[error("Environment variable error: {0}")]
    Environment(#[from] std::env::VarError),
}

pub type Result<T> = std::result::Result<T, PlaylistSearchError>;

pub type DbResult<T> = std::result::Result<T, DatabaseError>;

impl From<rusqlite::Error> for DatabaseError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::SqliteFailure(
                ffi::Error {
                    code: ffi::ErrorCode::DatabaseCorrupt,
                    ..
                },
                _,
            ) => DatabaseError::Corruption,
            _ => DatabaseError::Query(err),
        }
    }
}

impl From<rusqlite::Error> for PlaylistSearchError {
    fn from(err: rusqlite::Error) -> Self {
        PlaylistSearchError::Database(err.into())
    }
}

impl From<toml::de::Error> for PlaylistSearchError {
    fn from(err: toml::de::Error) -> Self {
        PlaylistSearchError::Config(ConfigError::InvalidFormat(err))
    }
}

impl From<toml::ser::Error> for PlaylistSearchError {
    fn from(err: toml::ser::Error) -> Self {
        PlaylistSearchError::Internal(err.into())
    }
}

impl From<serde_json::Error> for PlaylistSearchError {
    fn from(err: serde_json::Error) -> Self {
        PlaylistSearchError::Internal(err.into())
    }
}
