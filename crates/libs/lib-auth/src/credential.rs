//! # Credentials
//!
//! The identifier/secret pair a user signs in with. Never persisted; it only
//! lives for the duration of a login call.

use std::fmt;

use lib_core::error::{AppError, Result};
use lib_utils::b64::b64_encode;

/// Message shown when either half of the credential is missing.
pub const MISSING_CREDENTIAL: &str = "Enter both username/email and password.";

/// Username or email plus password.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    pub identifier: String,
    pub secret: String,
}

impl Credential {
    /// Build a credential, trimming the identifier. The secret is kept verbatim.
    pub fn new(identifier: impl AsRef<str>, secret: impl Into<String>) -> Self {
        Self {
            identifier: identifier.as_ref().trim().to_string(),
            secret: secret.into(),
        }
    }

    /// Reject credentials with an empty identifier or secret.
    pub fn validate(&self) -> Result<()> {
        if self.identifier.is_empty() || self.secret.is_empty() {
            return Err(AppError::InvalidInput(MISSING_CREDENTIAL.to_string()));
        }
        Ok(())
    }

    /// `base64(identifier:secret)` over the UTF-8 bytes, for a Basic header.
    pub fn basic_token(&self) -> String {
        b64_encode(format!("{}:{}", self.identifier, self.secret))
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("identifier", &self.identifier)
            .field("secret", &"<redacted>")
            .finish()
    }
}
