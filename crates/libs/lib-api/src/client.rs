//! # API Client
//!
//! reqwest implementation of [`Transport`].

use std::time::{Duration, Instant};

use async_trait::async_trait;
use lib_core::config::Config;
use lib_core::error::{AppError, Result};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Response};
use serde::Serialize;
use serde_json::Value;

use crate::transport::{
    extract_error_message, query_error, SignInResponse, Transport, QUERY_FALLBACK, SIGNIN_FALLBACK,
};

const SIGNIN_ACCEPT: &str = "application/json, text/plain, */*";

/// HTTP client for the sign-in and query endpoints.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    signin_url: String,
    graphql_url: String,
}

#[derive(Serialize)]
struct QueryRequest<'a> {
    query: &'a str,
    variables: Value,
}

impl ApiClient {
    /// Create a client for the endpoints in `config`.
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            signin_url: config.signin_url(),
            graphql_url: config.graphql_url(),
        })
    }
}

#[async_trait]
impl Transport for ApiClient {
    #[tracing::instrument(skip(self, basic_token), fields(url = %self.signin_url))]
    async fn exchange_credential(&self, basic_token: &str) -> Result<SignInResponse> {
        let start = Instant::now();

        let response = self
            .client
            .post(&self.signin_url)
            .header(AUTHORIZATION, format!("Basic {}", basic_token))
            .header(ACCEPT, SIGNIN_ACCEPT)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Sign-in network error");
                transport_error(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = failure_message(response, SIGNIN_FALLBACK).await;
            tracing::warn!(
                status = status.as_u16(),
                error = %message,
                duration_ms = start.elapsed().as_millis(),
                "Sign-in rejected"
            );
            return Err(AppError::RequestFailed {
                status: status.as_u16(),
                message,
            });
        }

        let authorization = response
            .headers()
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response.text().await.map_err(transport_error)?;

        tracing::info!(duration_ms = start.elapsed().as_millis(), "Sign-in accepted");
        Ok(SignInResponse { authorization, body })
    }

    #[tracing::instrument(skip(self, query, variables, token), fields(operation = operation_name(query)))]
    async fn run_query(&self, query: &str, variables: Value, token: &str) -> Result<Value> {
        let start = Instant::now();

        let response = self
            .client
            .post(&self.graphql_url)
            .bearer_auth(token)
            .json(&QueryRequest { query, variables })
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Query network error");
                transport_error(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = failure_message(response, QUERY_FALLBACK).await;
            tracing::warn!(status = status.as_u16(), error = %message, "Query request failed");
            return Err(AppError::RequestFailed {
                status: status.as_u16(),
                message,
            });
        }

        let mut body: Value = response.json().await.map_err(transport_error)?;
        if let Some(err) = query_error(&body) {
            tracing::warn!(error = %err, "Query returned errors");
            return Err(err);
        }

        tracing::debug!(duration_ms = start.elapsed().as_millis(), "Query completed");
        Ok(body.get_mut("data").map(Value::take).unwrap_or(Value::Null))
    }
}

/// Operation name of a query document (`query Name(...) {` → `Name`).
pub(crate) fn operation_name(query: &str) -> &str {
    query
        .trim_start()
        .strip_prefix("query")
        .map(|rest| {
            rest.trim_start()
                .split(|c: char| c == '(' || c == '{' || c.is_whitespace())
                .next()
                .unwrap_or_default()
        })
        .filter(|name| !name.is_empty())
        .unwrap_or("anonymous")
}

async fn failure_message(response: Response, fallback: &str) -> String {
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let body = response.text().await.ok();

    extract_error_message(&content_type, body.as_deref(), fallback)
}

/// Map a reqwest failure: unreadable bodies are decoding errors, everything
/// else means the request never got a usable response.
fn transport_error(err: reqwest::Error) -> AppError {
    if err.is_decode() {
        AppError::Decoding(err.to_string())
    } else {
        AppError::Network(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderMap, StatusCode};
    use axum::response::IntoResponse;
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::json;

    /// Serve `app` on an ephemeral local port and return a client pointed at it.
    async fn serve(app: Router) -> ApiClient {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test listener");
        let addr = listener.local_addr().expect("listener address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("test server");
        });

        ApiClient::new(&Config::with_base_url(format!("http://{}", addr))).expect("client")
    }

    #[tokio::test]
    async fn test_signin_rejected_with_json_error() {
        let app = Router::new().route(
            "/api/auth/signin",
            post(|| async {
                (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({ "error": "invalid credentials" })),
                )
            }),
        );
        let client = serve(app).await;

        let err = client.exchange_credential("YTpi").await.unwrap_err();
        assert_eq!(
            err,
            AppError::RequestFailed {
                status: 401,
                message: "invalid credentials".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_signin_sends_basic_header_and_returns_raw_parts() {
        let app = Router::new().route(
            "/api/auth/signin",
            post(|headers: HeaderMap, body: String| async move {
                let auth = headers.get("authorization").and_then(|v| v.to_str().ok());
                let accept = headers.get("accept").and_then(|v| v.to_str().ok());
                if auth != Some("Basic YWxpY2U6c2VjcmV0")
                    || accept != Some("application/json, text/plain, */*")
                    || !body.is_empty()
                {
                    return StatusCode::BAD_REQUEST.into_response();
                }
                (
                    [("authorization", "Bearer abc.def.ghi")],
                    "\"abc.def.ghi\"",
                )
                    .into_response()
            }),
        );
        let client = serve(app).await;

        let response = client.exchange_credential("YWxpY2U6c2VjcmV0").await.unwrap();
        assert_eq!(response.authorization.as_deref(), Some("Bearer abc.def.ghi"));
        assert_eq!(response.body, "\"abc.def.ghi\"");
    }

    #[tokio::test]
    async fn test_signin_plain_text_error_is_truncated() {
        let app = Router::new().route(
            "/api/auth/signin",
            post(|| async { (StatusCode::FORBIDDEN, "x".repeat(500)) }),
        );
        let client = serve(app).await;

        match client.exchange_credential("YTpi").await {
            Err(AppError::RequestFailed { status, message }) => {
                assert_eq!(status, 403);
                assert_eq!(message.len(), 160);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_query_sends_bearer_and_returns_data() {
        let app = Router::new().route(
            "/api/graphql-engine/v1/graphql",
            post(|headers: HeaderMap, Json(body): Json<Value>| async move {
                let auth = headers.get("authorization").and_then(|v| v.to_str().ok());
                if auth != Some("Bearer tok.en.value") {
                    return (StatusCode::UNAUTHORIZED, Json(json!({ "message": "bad token" })));
                }
                (
                    StatusCode::OK,
                    Json(json!({ "data": { "echo": body["variables"]["limit"], "q": body["query"] } })),
                )
            }),
        );
        let client = serve(app).await;

        let data = client
            .run_query("query Echo { echo }", json!({ "limit": 5 }), "tok.en.value")
            .await
            .unwrap();
        assert_eq!(data, json!({ "echo": 5, "q": "query Echo { echo }" }));

        let err = client
            .run_query("query Echo { echo }", json!({}), "wrong")
            .await
            .unwrap_err();
        assert_eq!(
            err,
            AppError::RequestFailed {
                status: 401,
                message: "bad token".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_query_errors_become_query_failed() {
        let app = Router::new().route(
            "/api/graphql-engine/v1/graphql",
            post(|| async {
                Json(json!({
                    "errors": [{ "message": "Could not verify JWT: JWTExpired" }]
                }))
            }),
        );
        let client = serve(app).await;

        let err = client.run_query("query X { x }", json!({}), "t").await.unwrap_err();
        assert_eq!(
            err,
            AppError::QueryFailed {
                message: "Could not verify JWT: JWTExpired".to_string()
            }
        );
        assert!(err.is_unauthorized());
    }

    #[tokio::test]
    async fn test_query_server_error_without_body_uses_fallback() {
        let app = Router::new().route(
            "/api/graphql-engine/v1/graphql",
            post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
        let client = serve(app).await;

        let err = client.run_query("query X { x }", json!({}), "t").await.unwrap_err();
        assert_eq!(
            err,
            AppError::RequestFailed {
                status: 500,
                message: "GraphQL request failed".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_unreachable_server_is_network_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = ApiClient::new(&Config::with_base_url(format!("http://{}", addr))).unwrap();
        let err = client.exchange_credential("YTpi").await.unwrap_err();
        assert!(matches!(err, AppError::Network(_)), "{err:?}");
        let message = err.to_string();
        assert!(message.starts_with("Network error: "), "{message}");
        assert!(message.contains("Check your connection"), "{message}");
    }

    #[test]
    fn test_operation_name() {
        assert_eq!(operation_name("\n  query UserProfile {\n user }"), "UserProfile");
        assert_eq!(operation_name("query XPByRange($from: timestamptz!) {}"), "XPByRange");
        assert_eq!(operation_name("{ user { login } }"), "anonymous");
    }
}
