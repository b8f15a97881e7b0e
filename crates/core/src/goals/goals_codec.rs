//! Serialization contract for the stored goal collection.
//!
//! The collection is stored as a JSON array of goal records in collection
//! order:
//!
//! ```json
//! [{"id":1700000000000,"name":"Emergency Fund","target":10000.0,
//!   "saved":2500.0,"description":"Saving for a rainy day"}]
//! ```
//!
//! `completedAt` is present only on goals that have reached their target.

use super::goals_model::Goal;
use crate::errors::{PersistenceError, Result};

/// Serializes the collection, preserving order.
pub fn encode_goals(goals: &[Goal]) -> Result<String> {
    serde_json::to_string(goals)
        .map_err(|e| PersistenceError::Serialization(e.to_string()).into())
}

/// Parses a stored collection.
pub fn decode_goals(payload: &str) -> Result<Vec<Goal>> {
    serde_json::from_str(payload)
        .map_err(|e| PersistenceError::Serialization(e.to_string()).into())
}
