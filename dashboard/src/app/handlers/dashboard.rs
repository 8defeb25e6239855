//! # Dashboard Handlers
//!
//! Loading the dashboard and reacting to range changes.

use lib_auth::token::is_expired;
use lib_core::error::{AppError, Result};

use super::auth::force_logout;
use crate::app::context::AppContext;
use crate::app::state::{AppState, Phase};

/// Load the dashboard under the stored token.
///
/// A missing or expired token, or an authorization failure from the server,
/// ends the session. Any other failure is reported with the session kept.
///
/// Internal handler function - use [`crate::app::App::load`] instead.
pub(crate) async fn handle_load(ctx: &AppContext, state: &mut AppState) {
    state.phase = Phase::Loading;

    let token = match ctx.session_store().read() {
        Some(token) if !is_expired(Some(token.as_str())) => token,
        _ => {
            force_logout(ctx, state, AppError::SessionExpired.to_string());
            return;
        }
    };

    match ctx.aggregator.load_dashboard(&token, state.range_days).await {
        Ok(view) => {
            state.last_view = Some(view.clone());
            state.phase = Phase::Ready(view);
        }
        Err(e) if e.is_unauthorized() => {
            force_logout(ctx, state, format!("Session invalid: {}", e));
        }
        Err(e) => {
            tracing::warn!(error = %e, "Dashboard load failed; session kept");
            state.phase = Phase::Failed(format!("Failed to load profile: {}", e));
        }
    }
}

/// Switch the XP range and reload.
///
/// Internal handler function - use [`crate::app::App::set_range`] instead.
pub(crate) async fn handle_range_change(
    ctx: &AppContext,
    state: &mut AppState,
    range_days: u32,
) -> Result<()> {
    if range_days == 0 {
        return Err(AppError::InvalidInput("Range must be at least one day.".to_string()));
    }

    tracing::debug!(from = state.range_days, to = range_days, "Range changed");
    state.range_days = range_days;
    handle_load(ctx, state).await;
    Ok(())
}
