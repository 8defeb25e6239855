//! # XP Dashboard - Library Root
//!
//! Command-line client for the platform's profile analytics. This library
//! crate holds everything the binary (`main.rs`) wires together.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              dashboard (this crate)                    │
//! │  app     - AppContext + session/dashboard state machine│
//! │  debug   - tracing setup (rolling file, stderr mirror) │
//! │  ui      - theme preference, text renderer             │
//! │  export  - JSON export of the loaded view-model        │
//! └────────────────────────────────────────────────────────┘
//!          │
//!          ▼
//! ┌────────────────────────────────────────────────────────┐
//! │  lib-api   - Transport, SessionManager, Aggregator     │
//! │  lib-auth  - Credential, claims, SessionStore          │
//! │  lib-core  - Config, AppError, KvStore                 │
//! │  lib-utils - base64, env, time helpers                 │
//! │  shared    - DashboardView DTOs                        │
//! └────────────────────────────────────────────────────────┘
//! ```

pub mod app;
pub mod debug;
pub mod export;
pub mod ui;

pub use app::{App, AppContext, Phase};
