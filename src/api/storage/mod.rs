//! Storage module for the API.
//!
//! Defines the storage contract and its in-memory backend.

pub mod error;
pub mod traits;

// Storage backend implementations
pub mod memory;

pub use error::StorageError;
pub use memory::MemoryStorageBackend;
pub use traits::StorageBackend;
