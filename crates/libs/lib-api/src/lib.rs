//! # Dashboard API Library
//!
//! Everything between a credential and a finished dashboard view-model.
//!
//! ## Module Structure
//!
//! ```text
//! lib-api/
//! ├── transport.rs  - Transport trait, sign-in response, error message extraction
//! ├── client.rs     - ApiClient: reqwest implementation of Transport
//! ├── auth.rs       - SessionManager: login/logout over Transport + SessionStore
//! └── dashboard/    - Aggregator: the five fixed queries and their shaping
//! ```
//!
//! ## Flow
//!
//! ```text
//! Credential ─▶ SessionManager ─▶ Transport (sign-in) ─▶ SessionStore (save)
//!
//! token ─▶ Aggregator ─▶ Transport (5 queries, concurrently) ─▶ shaping ─▶ DashboardView
//! ```

pub mod auth;
pub mod client;
pub mod dashboard;
pub mod transport;

pub use auth::SessionManager;
pub use client::ApiClient;
pub use dashboard::Aggregator;
pub use transport::{SignInResponse, Transport};
