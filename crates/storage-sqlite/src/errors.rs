//! Storage-specific error types for SQLite operations.
//!
//! This module provides error types that wrap Diesel-specific errors and convert
//! them to the storage-agnostic error types defined in `sparksave_core`.

use diesel::result::Error as DieselError;
use sparksave_core::errors::{Error, PersistenceError};
use thiserror::Error;

/// Storage-specific errors that wrap Diesel and r2d2 types.
///
/// These errors are internal to the storage layer and are converted to
/// `sparksave_core::Error` before being returned to callers.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database connection failed: {0}")]
    ConnectionFailed(#[from] diesel::ConnectionError),

    #[error("Connection pool error: {0}")]
    PoolError(#[from] r2d2::Error),

    #[error("Read query failed: {0}")]
    ReadFailed(#[source] DieselError),

    #[error("Write query failed: {0}")]
    WriteFailed(#[source] DieselError),

    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    #[error("Filesystem error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        let persistence = match err {
            StorageError::ConnectionFailed(e) => PersistenceError::ConnectionFailed(e.to_string()),
            StorageError::PoolError(e) => PersistenceError::ConnectionFailed(e.to_string()),
            StorageError::Io(e) => PersistenceError::ConnectionFailed(e.to_string()),
            StorageError::ReadFailed(e) => PersistenceError::LoadFailed(e.to_string()),
            StorageError::WriteFailed(e) => PersistenceError::SaveFailed(e.to_string()),
            StorageError::MigrationFailed(e) => PersistenceError::MigrationFailed(e),
        };
        Error::Persistence(persistence)
    }
}
