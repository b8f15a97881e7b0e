//! Storage module - the key-value persistence port and an in-memory adapter.

mod memory_store;
mod storage_traits;

pub use memory_store::InMemoryStore;
pub use storage_traits::KeyValueStoreTrait;
