//! # Model Layer
//!
//! Persistence primitives.

pub mod store;
