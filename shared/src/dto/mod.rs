//! # Data Transfer Objects (DTOs)
//!
//! ## Module Organization
//!
//! - [`dashboard`] - The dashboard view-model handed to renderers and exporters
//!
//! ## Serialization Format
//!
//! - **Field naming**: camelCase (`#[serde(rename_all = "camelCase")]`)
//! - **Dates**: `YYYY-MM-DD` for day buckets, RFC3339 for timestamps
//! - **All types**: Implement both `Serialize` and `Deserialize`

pub mod dashboard;

pub use dashboard::*;
