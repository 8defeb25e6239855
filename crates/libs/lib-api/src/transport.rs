//! # Transport
//!
//! The two HTTP calls the client makes, behind a trait so the session and
//! dashboard layers can be exercised without a server.
//!
//! Both calls are single-shot: no retries, no timeouts beyond what the HTTP
//! client itself enforces. Failures come back as typed [`AppError`]s:
//!
//! | Situation                      | Error                                  |
//! |--------------------------------|----------------------------------------|
//! | non-2xx on either endpoint     | `RequestFailed { status, message }`    |
//! | 2xx query with `errors`        | `QueryFailed { message }`              |
//! | no response at all             | `Network(..)`                          |
//! | 2xx body that is not JSON      | `Decoding(..)`                         |
//!
//! [`AppError`]: lib_core::error::AppError

use async_trait::async_trait;
use lib_core::error::{AppError, Result};
use serde_json::Value;
use shared::utils::truncate_chars;

/// Longest message surfaced from a server response.
pub const MAX_MESSAGE_CHARS: usize = 160;

/// Fallback when a failed sign-in carries no readable message.
pub const SIGNIN_FALLBACK: &str = "Login failed";

/// Fallback when a failed query request carries no readable message.
pub const QUERY_FALLBACK: &str = "GraphQL request failed";

/// Fallback when a query error entry has no message.
pub const QUERY_ERROR_FALLBACK: &str = "GraphQL error";

/// The parts of a successful sign-in response a token can come from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignInResponse {
    /// Raw `Authorization` response header
    pub authorization: Option<String>,
    /// Raw response body
    pub body: String,
}

/// HTTP access to the sign-in and query endpoints.
#[async_trait]
pub trait Transport: Send + Sync {
    /// POST the Basic credential (`base64(identifier:secret)`) to the sign-in
    /// endpoint.
    async fn exchange_credential(&self, basic_token: &str) -> Result<SignInResponse>;

    /// POST `{query, variables}` with a Bearer token; returns the `data` field.
    async fn run_query(&self, query: &str, variables: Value, token: &str) -> Result<Value>;
}

/// Trim `raw` and cap it at [`MAX_MESSAGE_CHARS`]; blank input yields `fallback`.
pub fn normalize_message(raw: &str, fallback: &str) -> String {
    let text = raw.trim();
    if text.is_empty() {
        fallback.to_string()
    } else {
        truncate_chars(text, MAX_MESSAGE_CHARS).to_string()
    }
}

/// Human-readable message from a failed response.
///
/// - JSON content type: the body's `message` or `error` field, else the JSON
///   text itself; an unparseable body yields `fallback`.
/// - Anything else: the body text, reading `message`/`error` out of it when it
///   happens to be JSON.
/// - `body` is `None` when the body could not be read at all.
pub fn extract_error_message(content_type: &str, body: Option<&str>, fallback: &str) -> String {
    let message = match body {
        None => None,
        Some(body) if content_type.contains("application/json") => serde_json::from_str::<Value>(body)
            .ok()
            .map(|json| message_field(&json).unwrap_or_else(|| json.to_string())),
        Some("") => None,
        Some(body) => Some(match serde_json::from_str::<Value>(body) {
            Ok(json) => message_field(&json).unwrap_or_else(|| body.to_string()),
            Err(_) => body.to_string(),
        }),
    };

    normalize_message(message.as_deref().unwrap_or_default(), fallback)
}

/// First error message of a query response, if it reported any errors.
pub fn query_error(body: &Value) -> Option<AppError> {
    let first = body.get("errors")?.as_array()?.first()?;
    let raw = first.get("message").and_then(text_value).unwrap_or_default();

    Some(AppError::QueryFailed {
        message: normalize_message(&raw, QUERY_ERROR_FALLBACK),
    })
}

fn message_field(json: &Value) -> Option<String> {
    ["message", "error"]
        .iter()
        .find_map(|key| json.get(key).and_then(text_value))
}

/// Text of a JSON value that carries something: non-empty strings as-is,
/// numbers/objects/arrays/`true` as JSON text; `null`, `false`, `0` and `""`
/// carry nothing.
fn text_value(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}
