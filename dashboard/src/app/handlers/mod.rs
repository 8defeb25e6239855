//! # Event Handlers
//!
//! Transitions of the session/dashboard state machine, split by concern.
//! Use the [`crate::app::App`] methods rather than calling these directly.

pub(crate) mod auth;
pub(crate) mod dashboard;
