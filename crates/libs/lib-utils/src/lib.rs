//! # Utilities Library
//!
//! Shared utility functions for base64 encoding, environment variables, and time.

pub mod b64;
pub mod envs;
pub mod time;

// Re-export commonly used functions
pub use b64::{b64_encode, b64u_decode_lenient, b64u_decode_to_string};
pub use envs::{get_env_flag, get_env_or, get_env_parse_or};
pub use time::{day_key, lower_bound_iso, now_millis, now_utc, parse_utc};
