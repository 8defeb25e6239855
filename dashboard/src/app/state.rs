//! # Application State Types
//!
//! The session/dashboard state machine:
//!
//! ```text
//! LoggedOut ──login──▶ LoggingIn ──ok──▶ Loading ──ok──▶ Ready
//!     ▲                    │               │  ▲            │
//!     ├── signin failed ───┘               │  └── range ───┘
//!     ├── expired / unauthorized ──────────┤
//!     │                                    └── other error ──▶ Failed
//! ```
//!
//! Logout returns to `LoggedOut` from any state.

use shared::dto::dashboard::DashboardView;

/// Where the session/dashboard flow currently is.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    /// No usable session; `notice` explains why, when there is a reason to
    LoggedOut { notice: Option<String> },
    /// Credential exchange in flight
    LoggingIn,
    /// Session present, dashboard queries in flight
    Loading,
    /// Session present, dashboard loaded
    Ready(DashboardView),
    /// Session present, last load failed for a non-authorization reason
    Failed(String),
}

impl Phase {
    pub fn logged_out() -> Self {
        Phase::LoggedOut { notice: None }
    }

    pub fn logged_out_with(notice: impl Into<String>) -> Self {
        Phase::LoggedOut {
            notice: Some(notice.into()),
        }
    }

    /// Whether the phase implies a stored session.
    pub fn is_logged_in(&self) -> bool {
        matches!(self, Phase::Loading | Phase::Ready(_) | Phase::Failed(_))
    }

    /// Status line for the phase
    pub fn message(&self) -> Option<&str> {
        match self {
            Phase::LoggedOut { notice } => notice.as_deref(),
            Phase::LoggingIn => Some("Logging in..."),
            Phase::Loading => Some("Loading profile..."),
            Phase::Ready(_) => None,
            Phase::Failed(message) => Some(message),
        }
    }
}

/// Mutable application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub phase: Phase,
    /// Day range of the XP section
    pub range_days: u32,
    /// Last successfully loaded view-model, kept for export
    pub last_view: Option<DashboardView>,
}

impl AppState {
    pub fn new(range_days: u32) -> Self {
        Self {
            phase: Phase::logged_out(),
            range_days,
            last_view: None,
        }
    }
}
