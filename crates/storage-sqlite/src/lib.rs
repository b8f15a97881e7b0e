//! SQLite storage implementation for SparkSave.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the persistence port defined in `sparksave-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - The key-value repository the goal store writes through
//!
//! # Architecture
//!
//! ```text
//! core (goal rules)      cli (presentation)
//!       │                      │
//!       └──────────┬───────────┘
//!                  │
//!                  ▼
//!          storage-sqlite (this crate)
//!                  │
//!                  ▼
//!              SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod key_value;
pub mod schema;

// Re-export database utilities
pub use db::{create_pool, get_connection, init, run_migrations, DbConnection, DbPool};

// Re-export storage errors
pub use errors::StorageError;

pub use key_value::SqliteKeyValueStore;

// Re-export from sparksave-core for convenience
pub use sparksave_core::errors::{Error, PersistenceError, Result};
