//! SparkSave Core - savings goal lifecycle and progress engine.
//!
//! This crate owns the goal rules: validation, contributions, completion
//! tracking and the aggregates the front ends display. It is storage-agnostic
//! and writes through the [`storage::KeyValueStoreTrait`] port, which is
//! implemented by the `storage-sqlite` crate (and by [`storage::InMemoryStore`]).

pub mod constants;
pub mod errors;
pub mod goals;
pub mod storage;
pub mod utils;

// Re-export the goal interface
pub use goals::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
