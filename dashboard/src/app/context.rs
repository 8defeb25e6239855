//! # Application Context
//!
//! Everything the flow needs, built once from [`Config`] and passed around
//! explicitly.

use std::sync::Arc;

use lib_api::auth::SessionManager;
use lib_api::client::ApiClient;
use lib_api::dashboard::Aggregator;
use lib_api::transport::Transport;
use lib_auth::session::SessionStore;
use lib_core::config::Config;
use lib_core::error::Result;
use lib_core::model::store::{FileKvStore, KvStore};

#[derive(Clone)]
pub struct AppContext {
    pub config: Config,
    /// Storage substrate shared by the token and theme slots
    pub store: Arc<dyn KvStore>,
    pub sessions: SessionManager,
    pub aggregator: Aggregator,
}

impl AppContext {
    /// Context over the configured storage file and the real HTTP client.
    pub fn new(config: Config) -> Result<Self> {
        let store: Arc<dyn KvStore> = Arc::new(FileKvStore::open(&config.storage_path)?);
        let transport: Arc<dyn Transport> = Arc::new(ApiClient::new(&config)?);
        Ok(Self::with_parts(config, store, transport))
    }

    pub fn with_parts(config: Config, store: Arc<dyn KvStore>, transport: Arc<dyn Transport>) -> Self {
        let sessions = SessionManager::new(transport.clone(), SessionStore::new(store.clone()));
        let aggregator = Aggregator::new(transport);
        Self {
            config,
            store,
            sessions,
            aggregator,
        }
    }

    pub fn session_store(&self) -> &SessionStore {
        self.sessions.sessions()
    }
}
