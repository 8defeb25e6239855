//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the dashboard core and whatever
//! renders it: the finished [`dto::dashboard::DashboardView`] and a few
//! display helpers.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects
//!   - **[`dto::dashboard`]**: The dashboard view-model
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::short_xp`]**: Compact XP amounts for display
//!   - **[`utils::truncate_chars`]**: Character-safe truncation
//!
//! ## Wire Format
//!
//! The view-model serializes with **camelCase** keys so exported files keep
//! the shape consumers of the dashboard already know:
//!
//! ```text
//! {
//!   "rangeDays": 90,
//!   "user": { "login": "alice", "email": "alice@example.com", "name": "Alice Liddell" },
//!   "xp": { "total": 1500, "daily": [...], "topProjects": [...] },
//!   "audit": { "up": 120, "down": 60, "ratio": "2.00" },
//!   "skills": [...],
//!   "latestProjects": [...]
//! }
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
