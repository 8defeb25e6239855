//! # Token Claims
//!
//! Reads the claims segment of a session token without verifying its
//! signature. The server is the authority on validity; the client only needs
//! the expiry to avoid sending requests it already knows will be rejected.
//!
//! Every malformed input decodes to "no claims" instead of an error, and a
//! token without usable claims is treated as unexpired. A garbled token never
//! locks the user out locally; the server will reject it on first use.

use chrono::{DateTime, Utc};
use lib_utils::b64::b64u_decode_to_string;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Claims carried in the middle segment of a session token.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Claims {
    /// Expiration time (seconds since the epoch). Kept raw: servers are not
    /// consistent about its JSON type.
    #[serde(default)]
    pub exp: Option<Value>,

    /// Every other claim, untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Claims {
    /// Expiry in seconds since the epoch.
    ///
    /// A missing, null or zero `exp` counts as no expiry. A non-empty string
    /// is read as a number the way JavaScript coerces it: surrounding
    /// whitespace is ignored, blank text is `0`, and anything that is not a
    /// finite number counts as no expiry.
    pub fn expiry_seconds(&self) -> Option<f64> {
        match self.exp.as_ref()? {
            Value::Number(exp) => exp.as_f64().filter(|exp| *exp != 0.0),
            Value::String(exp) if !exp.is_empty() => numeric_text(exp),
            _ => None,
        }
    }
}

fn numeric_text(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return Some(0.0);
    }
    text.parse::<f64>().ok().filter(|exp| exp.is_finite())
}

/// Decode the claims segment of `token`.
///
/// Returns `None` unless the token has exactly three dot-separated segments
/// and the middle one is base64url-encoded JSON object text.
pub fn decode_claims(token: &str) -> Option<Claims> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return None;
    }

    let payload = b64u_decode_to_string(parts[1]).ok()?;
    serde_json::from_str(&payload).ok()
}

/// Expiry claim of `token` in seconds since the epoch, if it has one.
pub fn decode_expiry(token: &str) -> Option<f64> {
    decode_claims(token).and_then(|claims| claims.expiry_seconds())
}

/// Expiry claim of `token` as a UTC timestamp, if it has one.
pub fn expiry_time(token: &str) -> Option<DateTime<Utc>> {
    let exp = decode_expiry(token)?;
    DateTime::from_timestamp_millis((exp * 1000.0) as i64)
}

/// Whether `token` is expired at `now_ms` (milliseconds since the epoch).
///
/// - absent or empty token: expired
/// - token without a usable expiry claim: not expired
/// - otherwise: expired iff `now_ms >= exp * 1000`
pub fn is_expired_at(token: Option<&str>, now_ms: i64) -> bool {
    match token {
        None | Some("") => true,
        Some(token) => match decode_expiry(token) {
            None => false,
            Some(exp) => now_ms as f64 >= exp * 1000.0,
        },
    }
}

/// [`is_expired_at`] against the wall clock.
pub fn is_expired(token: Option<&str>) -> bool {
    is_expired_at(token, lib_utils::time::now_millis())
}
