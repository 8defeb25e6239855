//! # Theme Preference
//!
//! Dark/light preference persisted in its own storage slot, next to (and
//! independent of) the session token.

use std::fmt;
use std::str::FromStr;

use lib_core::config::THEME_KEY;
use lib_core::error::{AppError, Result};
use lib_core::model::store::KvStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Dark,
    #[default]
    Light,
}

impl Theme {
    /// Stored preference; anything other than `dark` reads as light.
    pub fn load(store: &dyn KvStore) -> Self {
        match store.get(THEME_KEY) {
            Ok(Some(value)) if value == "dark" => Theme::Dark,
            Ok(_) => Theme::Light,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read theme preference");
                Theme::Light
            }
        }
    }

    pub fn save(self, store: &dyn KvStore) -> Result<()> {
        store.set(THEME_KEY, self.as_str())
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(AppError::InvalidInput(format!(
                "Unknown theme '{}': expected dark or light",
                other
            ))),
        }
    }
}
