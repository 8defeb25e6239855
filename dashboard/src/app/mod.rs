//! # Application Module
//!
//! The [`App`] drives the session/dashboard state machine over an explicit
//! [`AppContext`]; there is no global state.
//!
//! ```rust,no_run
//! use dashboard::app::{App, AppContext};
//! use lib_core::config::Config;
//!
//! # async fn run() -> lib_core::error::Result<()> {
//! let ctx = AppContext::new(Config::load()?)?;
//! let mut app = App::new(ctx);
//! app.resume().await;
//! if !app.phase().is_logged_in() {
//!     app.login("alice", "secret").await;
//! }
//! # Ok(())
//! # }
//! ```

pub mod context;
pub(crate) mod handlers;
pub mod state;

pub use context::AppContext;
pub use state::{AppState, Phase};

use lib_auth::credential::Credential;
use lib_core::error::Result;
use shared::dto::dashboard::DashboardView;

use crate::ui::theme::Theme;

/// Session/dashboard flow
pub struct App {
    ctx: AppContext,
    state: AppState,
}

impl App {
    /// Start in `Loading` when a valid session is already stored, else
    /// `LoggedOut`.
    pub fn new(ctx: AppContext) -> Self {
        let mut state = AppState::new(ctx.config.default_range_days);
        if ctx.sessions.has_valid_session() {
            state.phase = Phase::Loading;
        }

        tracing::debug!(phase = ?state.phase, range_days = state.range_days, "App started");
        Self { ctx, state }
    }

    /// Finish startup: load the dashboard if a session was found.
    pub async fn resume(&mut self) {
        if self.state.phase == Phase::Loading {
            self.load().await;
        }
    }

    pub async fn login(&mut self, identifier: &str, secret: &str) {
        let credential = Credential::new(identifier, secret);
        handlers::auth::handle_login(&self.ctx, &mut self.state, credential).await;
    }

    /// Reload the dashboard for the current range.
    pub async fn load(&mut self) {
        handlers::dashboard::handle_load(&self.ctx, &mut self.state).await;
    }

    pub async fn set_range(&mut self, range_days: u32) -> Result<()> {
        handlers::dashboard::handle_range_change(&self.ctx, &mut self.state, range_days).await
    }

    pub fn logout(&mut self) {
        handlers::auth::handle_logout(&self.ctx, &mut self.state);
    }

    pub fn phase(&self) -> &Phase {
        &self.state.phase
    }

    pub fn range_days(&self) -> u32 {
        self.state.range_days
    }

    /// Last successfully loaded dashboard, if the session is still alive.
    pub fn last_view(&self) -> Option<&DashboardView> {
        self.state.last_view.as_ref()
    }

    pub fn theme(&self) -> Theme {
        Theme::load(self.ctx.store.as_ref())
    }

    pub fn set_theme(&self, theme: Theme) -> Result<()> {
        theme.save(self.ctx.store.as_ref())
    }

    /// Persist and return the other theme.
    pub fn toggle_theme(&self) -> Result<Theme> {
        let theme = self.theme().toggled();
        self.set_theme(theme)?;
        Ok(theme)
    }

    pub fn context(&self) -> &AppContext {
        &self.ctx
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use lib_api::transport::{SignInResponse, Transport};
    use lib_core::config::Config;
    use lib_core::error::AppError;
    use lib_core::model::store::{FileKvStore, KvStore, MemoryKvStore};
    use serde_json::{json, Value};
    use std::sync::Arc;

    fn mint(exp: i64) -> String {
        encode(
            &Header::default(),
            &json!({ "sub": "42", "exp": exp }),
            &EncodingKey::from_secret(b"test-secret-key-must-be-at-least-32-chars-long!"),
        )
        .expect("JWT encoding should succeed")
    }

    fn fresh_token() -> String {
        mint(chrono::Utc::now().timestamp() + 3600)
    }

    fn stale_token() -> String {
        mint(chrono::Utc::now().timestamp() - 3600)
    }

    /// Transport with one scripted sign-in result and one answer for every
    /// query, optionally overridden per operation.
    struct Scripted {
        signin: Result<SignInResponse>,
        failing_query: Option<(&'static str, AppError)>,
    }

    impl Scripted {
        fn signing_in_with(token: &str) -> Self {
            Self {
                signin: Ok(SignInResponse {
                    authorization: Some(format!("Bearer {}", token)),
                    body: String::new(),
                }),
                failing_query: None,
            }
        }

        fn rejecting(err: AppError) -> Self {
            Self {
                signin: Err(err),
                failing_query: None,
            }
        }

        fn failing(mut self, operation: &'static str, err: AppError) -> Self {
            self.failing_query = Some((operation, err));
            self
        }
    }

    #[async_trait]
    impl Transport for Scripted {
        async fn exchange_credential(&self, _basic_token: &str) -> Result<SignInResponse> {
            self.signin.clone()
        }

        async fn run_query(&self, query: &str, _variables: Value, _token: &str) -> Result<Value> {
            if let Some((operation, err)) = &self.failing_query {
                if query.contains(&format!("query {}", operation)) {
                    return Err(err.clone());
                }
            }

            if query.contains("query UserProfile") {
                Ok(json!({ "user": [{ "login": "alice", "firstName": "Alice" }] }))
            } else if query.contains("query AuditStats") {
                Ok(json!({ "audit_up": { "aggregate": { "sum": { "amount": 120 } } } }))
            } else {
                Ok(json!({ "transaction": [] }))
            }
        }
    }

    fn app_with(store: Arc<dyn KvStore>, transport: Scripted) -> App {
        App::new(AppContext::with_parts(Config::default(), store, Arc::new(transport)))
    }

    fn memory() -> Arc<dyn KvStore> {
        Arc::new(MemoryKvStore::new())
    }

    fn notice(app: &App) -> Option<&str> {
        match app.phase() {
            Phase::LoggedOut { notice } => notice.as_deref(),
            other => panic!("expected LoggedOut, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_starts_logged_out_without_session() {
        let mut app = app_with(memory(), Scripted::signing_in_with(&fresh_token()));
        assert_eq!(app.phase(), &Phase::logged_out());

        app.resume().await;
        assert_eq!(app.phase(), &Phase::logged_out());
    }

    #[tokio::test]
    async fn test_login_then_ready() {
        let token = fresh_token();
        let mut app = app_with(memory(), Scripted::signing_in_with(&token));

        app.login("alice", "secret").await;

        match app.phase() {
            Phase::Ready(view) => {
                assert_eq!(view.user.name, "Alice");
                assert_eq!(view.user.email, "-");
                assert_eq!(view.audit.ratio, "∞");
                assert_eq!(view.range_days, 90);
            }
            other => panic!("expected Ready, got {:?}", other),
        }
        assert!(app.last_view().is_some());
        assert_eq!(app.context().session_store().read(), Some(token));
    }

    #[tokio::test]
    async fn test_signin_failure_returns_to_login_with_notice() {
        let mut app = app_with(
            memory(),
            Scripted::rejecting(AppError::RequestFailed {
                status: 401,
                message: "invalid credentials".to_string(),
            }),
        );

        app.login("alice", "wrong").await;

        assert_eq!(notice(&app), Some("Signin failed: [401] invalid credentials"));
    }

    #[tokio::test]
    async fn test_missing_credential_notice_has_no_prefix() {
        let mut app = app_with(memory(), Scripted::signing_in_with(&fresh_token()));

        app.login("alice", "").await;

        assert_eq!(notice(&app), Some("Enter both username/email and password."));
    }

    #[tokio::test]
    async fn test_stored_session_resumes_into_ready() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        let token = fresh_token();

        {
            let store: Arc<dyn KvStore> = Arc::new(FileKvStore::open(&path).unwrap());
            let mut app = app_with(store, Scripted::signing_in_with(&token));
            app.login("alice", "secret").await;
        }

        let store: Arc<dyn KvStore> = Arc::new(FileKvStore::open(&path).unwrap());
        let mut app = app_with(store, Scripted::signing_in_with(&token));
        assert_eq!(app.phase(), &Phase::Loading);

        app.resume().await;
        assert!(matches!(app.phase(), Phase::Ready(_)));
    }

    #[tokio::test]
    async fn test_expired_token_forces_logout() {
        let store = memory();
        store.set(lib_core::config::TOKEN_KEY, &stale_token()).unwrap();
        let mut app = app_with(store.clone(), Scripted::signing_in_with(&fresh_token()));
        assert_eq!(app.phase(), &Phase::logged_out());

        app.load().await;

        assert_eq!(notice(&app), Some("Session expired. Please log in again."));
        assert_eq!(store.get(lib_core::config::TOKEN_KEY).unwrap(), None);
    }

    #[tokio::test]
    async fn test_unauthorized_query_forces_logout() {
        let transport = Scripted::signing_in_with(&fresh_token()).failing(
            "XPByRange",
            AppError::QueryFailed {
                message: "Could not verify JWT: JWTExpired".to_string(),
            },
        );
        let mut app = app_with(memory(), transport);

        app.login("alice", "secret").await;

        assert_eq!(
            notice(&app),
            Some("Session invalid: Could not verify JWT: JWTExpired")
        );
        assert!(!app.context().sessions.has_valid_session());
        assert!(app.last_view().is_none());
    }

    #[tokio::test]
    async fn test_other_failures_keep_the_session() {
        let transport = Scripted::signing_in_with(&fresh_token()).failing(
            "AuditStats",
            AppError::RequestFailed {
                status: 500,
                message: "boom".to_string(),
            },
        );
        let mut app = app_with(memory(), transport);

        app.login("alice", "secret").await;

        assert_eq!(
            app.phase(),
            &Phase::Failed("Failed to load profile: [500] boom".to_string())
        );
        assert!(app.context().sessions.has_valid_session());
    }

    #[tokio::test]
    async fn test_range_change_reloads() {
        let mut app = app_with(memory(), Scripted::signing_in_with(&fresh_token()));
        app.login("alice", "secret").await;

        app.set_range(7).await.unwrap();

        assert_eq!(app.range_days(), 7);
        match app.phase() {
            Phase::Ready(view) => assert_eq!(view.range_days, 7),
            other => panic!("expected Ready, got {:?}", other),
        }
        assert!(matches!(app.set_range(0).await, Err(AppError::InvalidInput(_))));
        assert_eq!(app.range_days(), 7);
    }

    #[tokio::test]
    async fn test_huge_range_fails_the_load_without_logout() {
        let mut app = app_with(memory(), Scripted::signing_in_with(&fresh_token()));
        app.login("alice", "secret").await;

        app.set_range(100_000_000).await.unwrap();

        assert_eq!(
            app.phase(),
            &Phase::Failed(
                "Failed to load profile: A range of 100000000 days is out of bounds.".to_string()
            )
        );
        assert!(app.context().sessions.has_valid_session());
        assert!(app.last_view().is_some());
    }

    #[tokio::test]
    async fn test_logout_from_any_state() {
        let mut app = app_with(memory(), Scripted::signing_in_with(&fresh_token()));

        app.logout();
        assert!(!app.context().sessions.has_valid_session());

        app.login("alice", "secret").await;
        app.logout();

        assert_eq!(app.phase(), &Phase::logged_out());
        assert!(!app.context().sessions.has_valid_session());
        assert!(app.last_view().is_none());
    }

    #[test]
    fn test_theme_shares_the_store() {
        let store = memory();
        let app = app_with(store.clone(), Scripted::signing_in_with("a.b.c"));

        assert_eq!(app.theme(), Theme::Light);
        app.set_theme(Theme::Dark).unwrap();
        assert_eq!(app.theme(), Theme::Dark);
        assert_eq!(store.get(lib_core::config::THEME_KEY).unwrap().as_deref(), Some("dark"));

        assert_eq!(app.toggle_theme().unwrap(), Theme::Light);
        assert_eq!(app.theme(), Theme::Light);
        assert_eq!(app.toggle_theme().unwrap(), Theme::Dark);
        assert_eq!(store.get(lib_core::config::THEME_KEY).unwrap().as_deref(), Some("dark"));
    }
}
