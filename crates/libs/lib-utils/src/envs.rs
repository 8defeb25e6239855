//! # Environment Variables
//!
//! Utilities for reading and parsing environment variables.

use std::env;
use std::str::FromStr;

/// Get an environment variable, falling back to `default` when unset or blank.
pub fn get_env_or(name: &'static str, default: &str) -> String {
    match env::var(name) {
        Ok(val) if !val.trim().is_empty() => val,
        _ => default.to_string(),
    }
}

/// Get and parse an environment variable, falling back to `default` when unset.
///
/// A value that is set but does not parse is an error rather than a silent
/// fallback.
pub fn get_env_parse_or<T: FromStr>(name: &'static str, default: T) -> Result<T, Error> {
    match env::var(name) {
        Ok(val) if !val.trim().is_empty() => {
            val.trim().parse::<T>().map_err(|_| Error::WrongFormat(name))
        }
        _ => Ok(default),
    }
}

/// Read a `1`/`0` style flag. Anything other than `1` or `true` is off.
pub fn get_env_flag(name: &'static str) -> bool {
    env::var(name)
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

// region:    --- Error
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    WrongFormat(&'static str),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
// endregion: --- Error
