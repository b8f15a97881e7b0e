//! SQLite storage implementation for the key-value persistence port.

mod model;
mod repository;

pub use model::AppStorageDB;
pub use repository::SqliteKeyValueStore;

// Re-export trait from core for convenience
pub use sparksave_core::storage::KeyValueStoreTrait;
