//! # Authentication Handlers
//!
//! Handlers for login and logout.

use lib_auth::credential::Credential;
use lib_core::error::AppError;

use crate::app::context::AppContext;
use crate::app::state::{AppState, Phase};

/// Sign in, then load the dashboard.
///
/// Internal handler function - use [`crate::app::App::login`] instead.
pub(crate) async fn handle_login(ctx: &AppContext, state: &mut AppState, credential: Credential) {
    state.phase = Phase::LoggingIn;

    match ctx.sessions.login(&credential).await {
        Ok(_) => super::dashboard::handle_load(ctx, state).await,
        Err(AppError::InvalidInput(message)) => {
            state.phase = Phase::logged_out_with(message);
        }
        Err(e) => {
            tracing::warn!(error = %e, "Signin failed");
            state.phase = Phase::logged_out_with(format!("Signin failed: {}", e));
        }
    }
}

/// Clear the session and forget the loaded dashboard.
///
/// Internal handler function - use [`crate::app::App::logout`] instead.
pub(crate) fn handle_logout(ctx: &AppContext, state: &mut AppState) {
    ctx.sessions.logout();
    state.last_view = None;
    state.phase = Phase::logged_out();
}

/// Tear the session down with a notice for the user.
pub(crate) fn force_logout(ctx: &AppContext, state: &mut AppState, notice: String) {
    tracing::info!(%notice, "Forcing logout");
    ctx.sessions.logout();
    state.last_view = None;
    state.phase = Phase::logged_out_with(notice);
}
