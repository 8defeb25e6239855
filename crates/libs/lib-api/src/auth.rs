//! # Session Manager
//!
//! Login turns a credential into a persisted token; logout tears it down.

use std::sync::Arc;

use lib_auth::credential::Credential;
use lib_auth::session::SessionStore;
use lib_core::error::{AppError, Result};
use serde_json::Value;

use crate::transport::Transport;

/// Body fields a token may be returned under, in lookup order.
const TOKEN_FIELDS: [&str; 3] = ["token", "jwt", "access_token"];

/// Login/logout over a [`Transport`] and a [`SessionStore`].
#[derive(Clone)]
pub struct SessionManager {
    transport: Arc<dyn Transport>,
    sessions: SessionStore,
}

impl SessionManager {
    pub fn new(transport: Arc<dyn Transport>, sessions: SessionStore) -> Self {
        Self { transport, sessions }
    }

    /// Exchange `credential` for a token and persist it.
    #[tracing::instrument(skip(self, credential), fields(identifier = %credential.identifier))]
    pub async fn login(&self, credential: &Credential) -> Result<String> {
        credential.validate()?;
        tracing::info!("Attempting login");

        let response = self
            .transport
            .exchange_credential(&credential.basic_token())
            .await?;

        let token = extract_token(response.authorization.as_deref(), &response.body);
        if token.is_empty() {
            tracing::error!("Sign-in succeeded without a token");
            return Err(AppError::LoginSucceededButNoToken);
        }

        self.sessions.save(&token)?;
        tracing::info!("Login successful");
        Ok(token)
    }

    /// Clear the stored token.
    pub fn logout(&self) {
        self.sessions.clear();
        tracing::info!("Logged out");
    }

    pub fn has_valid_session(&self) -> bool {
        self.sessions.has_valid_session()
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }
}

/// Token from a successful sign-in response.
///
/// Checked in order: a `Bearer` authorization header, a body that is a bare
/// JSON string, a JSON object's `token`/`jwt`/`access_token` field, and
/// finally the raw body when it is not JSON at all. Returns an empty string
/// when none of these yields a token.
pub fn extract_token(authorization: Option<&str>, body: &str) -> String {
    if let Some(token) = authorization.and_then(bearer_value) {
        return token.to_string();
    }

    let text = body.trim();
    if text.is_empty() {
        return String::new();
    }

    match serde_json::from_str::<Value>(text) {
        Ok(Value::String(token)) => token.trim().to_string(),
        Ok(json) => TOKEN_FIELDS
            .iter()
            .find_map(|field| {
                json.get(field)
                    .and_then(Value::as_str)
                    .filter(|value| !value.is_empty())
            })
            .unwrap_or_default()
            .trim()
            .to_string(),
        Err(_) => text.to_string(),
    }
}

/// `Bearer <token>` with a case-insensitive scheme.
fn bearer_value(header: &str) -> Option<&str> {
    let scheme = header.get(..7)?;
    scheme
        .eq_ignore_ascii_case("bearer ")
        .then(|| header[7..].trim())
}
