//! # Session Store
//!
//! Owns the single persisted token slot and answers "is there a usable
//! session?" without touching the network.
//!
//! A session is never stored as such: it is derived on demand as
//! `present(token) && !expired(token)`.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use lib_core::config::TOKEN_KEY;
use lib_core::error::Result;
use lib_core::model::store::KvStore;
use tracing::{debug, warn};

use crate::token;

/// The persisted session token slot.
#[derive(Clone)]
pub struct SessionStore {
    store: Arc<dyn KvStore>,
    key: String,
}

impl SessionStore {
    /// Session slot under the standard token key.
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self {
            store,
            key: TOKEN_KEY.to_string(),
        }
    }

    /// Overwrite the stored token.
    pub fn save(&self, token: &str) -> Result<()> {
        self.store.set(&self.key, token)?;
        debug!("Session token saved");
        Ok(())
    }

    /// The stored token, if any. Empty values and unreadable storage read as
    /// absent.
    pub fn read(&self) -> Option<String> {
        match self.store.get(&self.key) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                warn!(error = %e, "Failed to read session token; treating as absent");
                None
            }
        }
    }

    /// Remove the stored token. Never fails; storage errors are logged.
    pub fn clear(&self) {
        match self.store.remove(&self.key) {
            Ok(()) => debug!("Session token cleared"),
            Err(e) => warn!(error = %e, "Failed to clear session token"),
        }
    }

    /// Expiry of the stored token, if it carries one.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.read().as_deref().and_then(token::expiry_time)
    }

    pub fn has_valid_session_at(&self, now_ms: i64) -> bool {
        let token = self.read();
        token.is_some() && !token::is_expired_at(token.as_deref(), now_ms)
    }

    /// Whether a token is stored and not expired by the wall clock.
    pub fn has_valid_session(&self) -> bool {
        self.has_valid_session_at(lib_utils::time::now_millis())
    }
}
