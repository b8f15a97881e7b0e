//! Persistence port.
//!
//! The core never decides where data lives. Front ends inject an
//! implementation of this trait (SQLite, browser storage, a file, memory).

use crate::errors::Result;

/// Key-value persistence capability the goal store writes through.
///
/// Implementations must make a completed `set` visible to the next `get`
/// on the same key.
pub trait KeyValueStoreTrait: Send + Sync {
    /// Returns the stored value, or `None` if the key was never written
    /// (or has been removed).
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removes the key. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
