//! # Authentication Library
//!
//! Credentials, token claim decoding, and the persisted session slot.

pub mod credential;
pub mod session;
pub mod token;

// Re-export commonly used types
pub use credential::Credential;
pub use session::SessionStore;
pub use token::{decode_claims, decode_expiry, is_expired, is_expired_at, Claims};
