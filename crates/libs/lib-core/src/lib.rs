//! # Core Library
//!
//! Configuration, the error taxonomy, and the durable key-value storage
//! substrate shared by the session and dashboard layers.

pub mod config;
pub mod error;
pub mod model;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, Result};
pub use model::store::{FileKvStore, KvStore, MemoryKvStore};
