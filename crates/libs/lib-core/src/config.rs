//! # Application Configuration
//!
//! This module manages application configuration loaded from environment variables.
//! All configuration is validated on startup to fail fast if misconfigured.
//!
//! The configuration is an ordinary value: load it once with [`Config::load`]
//! and hand it to whatever needs it.
//!
//! ```rust,no_run
//! use lib_core::config::Config;
//!
//! let config = Config::load().expect("valid configuration");
//! println!("signing in at {}", config.signin_url());
//! ```

use std::path::PathBuf;

use lib_utils::envs::{get_env_flag, get_env_or, get_env_parse_or};

use crate::error::{AppError, Result};

/// Remote domain used when none is configured.
pub const DEFAULT_DOMAIN: &str = "platform.zone01.gr";

/// Storage key holding the session token.
pub const TOKEN_KEY: &str = "session_token";

/// Storage key holding the UI theme preference.
pub const THEME_KEY: &str = "theme";

const SIGNIN_PATH: &str = "/api/auth/signin";
const GRAPHQL_PATH: &str = "/api/graphql-engine/v1/graphql";

/// Application configuration loaded from environment variables.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Remote domain (informational; requests go to `base_url`)
    pub domain: String,

    /// Scheme and host every endpoint hangs off, without a trailing slash
    pub base_url: String,

    /// File backing the durable key-value slots (token, theme)
    pub storage_path: PathBuf,

    /// Day range used when the caller does not pick one
    pub default_range_days: u32,

    /// HTTP client timeout in seconds
    pub request_timeout_secs: u64,

    /// Directory for rolling log files
    pub log_dir: PathBuf,

    /// Verbose logging
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            domain: DEFAULT_DOMAIN.to_string(),
            base_url: format!("https://{}", DEFAULT_DOMAIN),
            storage_path: default_storage_path(),
            default_range_days: 90,
            request_timeout_secs: 30,
            log_dir: PathBuf::from("logs"),
            debug: false,
        }
    }
}

impl Config {
    /// Load `.env` (if present), read the environment and validate the result.
    pub fn load() -> Result<Self> {
        // A missing .env file is the common case
        let _ = dotenvy::dotenv();

        let config = Self::from_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let domain = get_env_or("DASHBOARD_DOMAIN", &defaults.domain);
        let base_url = get_env_or("DASHBOARD_BASE_URL", &format!("https://{}", domain))
            .trim_end_matches('/')
            .to_string();

        let storage_path = std::env::var("DASHBOARD_STORAGE_PATH")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.storage_path);

        let default_range_days = get_env_parse_or("DASHBOARD_RANGE_DAYS", defaults.default_range_days)
            .map_err(|e| AppError::Config(format!("DASHBOARD_RANGE_DAYS must be a number: {}", e)))?;

        let request_timeout_secs =
            get_env_parse_or("DASHBOARD_TIMEOUT_SECS", defaults.request_timeout_secs).map_err(|e| {
                AppError::Config(format!("DASHBOARD_TIMEOUT_SECS must be a number: {}", e))
            })?;

        let log_dir = PathBuf::from(get_env_or("DASHBOARD_LOG_DIR", "logs"));

        Ok(Self {
            domain,
            base_url,
            storage_path,
            default_range_days,
            request_timeout_secs,
            log_dir,
            debug: get_env_flag("DASHBOARD_DEBUG"),
        })
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.domain.trim().is_empty() {
            return Err(AppError::Config("DASHBOARD_DOMAIN cannot be empty".to_string()));
        }

        if !(self.base_url.starts_with("https://") || self.base_url.starts_with("http://")) {
            return Err(AppError::Config(format!(
                "DASHBOARD_BASE_URL must start with http:// or https:// (got {})",
                self.base_url
            )));
        }

        if self.request_timeout_secs == 0 {
            return Err(AppError::Config("DASHBOARD_TIMEOUT_SECS must be at least 1".to_string()));
        }

        if self.default_range_days == 0 {
            return Err(AppError::Config("DASHBOARD_RANGE_DAYS must be at least 1".to_string()));
        }

        Ok(())
    }

    /// Credential exchange endpoint.
    pub fn signin_url(&self) -> String {
        format!("{}{}", self.base_url, SIGNIN_PATH)
    }

    /// Query endpoint.
    pub fn graphql_url(&self) -> String {
        format!("{}{}", self.base_url, GRAPHQL_PATH)
    }

    /// Configuration pointing every endpoint at `base_url`.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }
}

/// `<config dir>/dashboard/storage.json`, or `./storage.json` when the platform
/// has no config directory.
fn default_storage_path() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join("dashboard").join("storage.json"))
        .unwrap_or_else(|| PathBuf::from("storage.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoints() {
        let config = Config::default();
        assert_eq!(config.signin_url(), "https://platform.zone01.gr/api/auth/signin");
        assert_eq!(
            config.graphql_url(),
            "https://platform.zone01.gr/api/graphql-engine/v1/graphql"
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_base_url_override_strips_trailing_slash() {
        let config = Config::with_base_url("http://127.0.0.1:4000/");
        assert_eq!(config.signin_url(), "http://127.0.0.1:4000/api/auth/signin");
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::with_base_url("ftp://example.com");
        assert!(matches!(config.validate(), Err(AppError::Config(_))));

        config = Config::default();
        config.request_timeout_secs = 0;
        assert!(config.validate().is_err());

        config = Config::default();
        config.default_range_days = 0;
        assert!(config.validate().is_err());

        config = Config::default();
        config.domain = "  ".to_string();
        assert!(config.validate().is_err());
    }
}
