//! # Centralized Error Handling
//!
//! This module defines the application-wide error type [`AppError`] used consistently
//! across the session, transport, and dashboard layers. It follows the `thiserror`
//! pattern for ergonomic error handling.
//!
//! ## Error Categories
//!
//! 1. **Remote Errors** - the server answered, but not with what we asked for
//!    - [`RequestFailed`](AppError::RequestFailed) → non-2xx on either endpoint
//!    - [`QueryFailed`](AppError::QueryFailed) → 2xx carrying a query error list
//!    - [`LoginSucceededButNoToken`](AppError::LoginSucceededButNoToken) → 2xx sign-in without a token
//!
//! 2. **Local Errors** - detected without (or before) a round trip
//!    - [`SessionExpired`](AppError::SessionExpired) → expiry claim is in the past
//!    - [`InvalidInput`](AppError::InvalidInput) → rejected before sending
//!    - [`Config`](AppError::Config) / [`Storage`](AppError::Storage)
//!
//! 3. **Transport Errors** - the request never produced a response
//!    - [`Network`](AppError::Network) → connect/timeout/send failures
//!    - [`Decoding`](AppError::Decoding) → a 2xx body we could not read
//!
//! ## Authorization Failures
//!
//! [`AppError::is_unauthorized`] is what callers use to decide whether a failure
//! should tear the session down (HTTP 401, a token-related message, or a locally
//! expired session) or be surfaced with the session left intact.
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_core::error::{AppError, Result};
//!
//! fn check_status(status: u16, message: &str) -> Result<()> {
//!     if status >= 400 {
//!         return Err(AppError::RequestFailed {
//!             status,
//!             message: message.to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//!
//! let err = check_status(401, "invalid credentials").unwrap_err();
//! assert_eq!(err.to_string(), "[401] invalid credentials");
//! assert!(err.is_unauthorized());
//! ```

use thiserror::Error;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Marker that identifies token-related failures in server messages.
const TOKEN_MARKER: &str = "jwt";

/// Application-wide error type covering all error scenarios.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AppError {
    /// Non-2xx HTTP response on the sign-in or query endpoint.
    ///
    /// `message` is already normalized: trimmed and at most 160 characters.
    #[error("[{status}] {message}")]
    RequestFailed { status: u16, message: String },

    /// 2xx query response that carried a non-empty `errors` list.
    #[error("{message}")]
    QueryFailed { message: String },

    /// Sign-in returned 2xx but no token could be extracted from it.
    #[error("[500] Login succeeded but no token was returned")]
    LoginSucceededButNoToken,

    /// Stored token is absent or its expiry claim is in the past.
    #[error("Session expired. Please log in again.")]
    SessionExpired,

    /// The request did not produce a response (connectivity, CORS-style
    /// rejections, timeouts).
    #[error("Network error: {0}. Check your connection and that the request reached the server.")]
    Network(String),

    /// A successful response body could not be decoded.
    #[error("Decoding error: {0}")]
    Decoding(String),

    /// Durable storage could not be read or written.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration error during startup or environment loading.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input rejected before any request was sent.
    #[error("{0}")]
    InvalidInput(String),
}

impl AppError {
    /// HTTP status associated with this error, where one applies.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            AppError::RequestFailed { status, .. } => Some(*status),
            AppError::LoginSucceededButNoToken => Some(500),
            _ => None,
        }
    }

    /// Whether this failure means the session itself is no longer usable.
    ///
    /// True for HTTP 401, for request/query messages mentioning the token, and
    /// for a locally detected expiry.
    pub fn is_unauthorized(&self) -> bool {
        match self {
            AppError::RequestFailed { status: 401, .. } => true,
            AppError::RequestFailed { message, .. } | AppError::QueryFailed { message } => {
                message.to_lowercase().contains(TOKEN_MARKER)
            }
            AppError::SessionExpired => true,
            _ => false,
        }
    }
}

/// Convert `serde_json::Error` to `AppError`.
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decoding(format!("JSON error: {}", err))
    }
}

/// Convert `std::io::Error` to `AppError`.
impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}
