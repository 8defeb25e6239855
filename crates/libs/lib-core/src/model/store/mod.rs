//! # Key-Value Store
//!
//! Durable string slots used by the client: one for the session token, one
//! for the theme preference. Both live in the same substrate.

// region: --- Modules
pub mod file_store;
pub mod memory_store;
// endregion: --- Modules

// region: --- Re-exports
pub use file_store::FileKvStore;
pub use memory_store::MemoryKvStore;
// endregion: --- Re-exports

use crate::error::Result;

/// A durable map of string keys to string values.
///
/// Implementations must make each `set`/`remove` atomic with respect to
/// concurrent `get`s: a reader sees either the old value or the new one.
pub trait KvStore: Send + Sync {
    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
