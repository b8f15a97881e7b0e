//! Core error types for SparkSave.
//!
//! This module defines storage-agnostic error types. Storage-specific errors
//! (from Diesel, SQLite, etc.) are converted to these types by the storage layer.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::goals::GoalId;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for goal operations.
///
/// `Validation` and `NotFound` are expected outcomes of user input and are
/// handed back to the presentation layer as-is. `Persistence` means the
/// backing store misbehaved.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Goal not found: {id}")]
    NotFound { id: GoalId },

    #[error("Persistence operation failed: {0}")]
    Persistence(#[from] PersistenceError),
}

impl Error {
    /// Returns the validation failure, if this is one.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Error::Validation(e) => Some(e),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}

/// Business-rule violations on goal input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Goal name cannot be empty")]
    BlankName,

    #[error("Target amount must be greater than zero (got {0})")]
    InvalidTarget(Decimal),

    #[error("Saved amount cannot be negative (got {0})")]
    InvalidSavedAmount(Decimal),

    #[error("Saved amount ({saved}) cannot be greater than the target amount ({target})")]
    SavedExceedsTarget { saved: Decimal, target: Decimal },

    #[error("Target ({target}) cannot be less than current saved amount ({saved})")]
    TargetBelowSaved { target: Decimal, saved: Decimal },

    #[error("Contribution must be greater than zero (got {0})")]
    InvalidAmount(Decimal),

    #[error("Contribution would exceed the target. Maximum you can add: {max_addable}")]
    ExceedsRemaining { max_addable: Decimal },

    #[error("Amount {amount} must be less than {max}")]
    AmountTooLarge { amount: Decimal, max: Decimal },

    #[error("Amount {amount} has more than {max_scale} decimal places")]
    TooManyDecimals { amount: Decimal, max_scale: u32 },
}

/// Storage-agnostic error type for the persistence port.
///
/// All details are strings so storage adapters can convert their own error
/// types into this shape without leaking them into the core.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// Failed to open the backing store.
    #[error("Failed to connect to storage: {0}")]
    ConnectionFailed(String),

    /// Failed to create or configure the connection pool.
    #[error("Failed to create storage pool: {0}")]
    PoolCreationFailed(String),

    /// Schema migration failed.
    #[error("Storage migration failed: {0}")]
    MigrationFailed(String),

    /// Reading the stored value failed.
    #[error("Failed to load stored value: {0}")]
    LoadFailed(String),

    /// Writing or removing the stored value failed.
    #[error("Failed to save value: {0}")]
    SaveFailed(String),

    /// The stored value could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Persistence(PersistenceError::Serialization(err.to_string()))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
