//! Commander API Client
//!
//! HTTP client for the commander endpoint. No retries, no timeout and no
//! caching: each call is a fresh round trip.

use async_trait::async_trait;
use reqwest::Client;

use super::error::{FetchError, FetchResult};
use super::payload::CommanderPayload;
use super::source::{commander_url, CommanderSource};

/// Commander REST API client
#[derive(Debug, Clone)]
pub struct CommanderClient {
    client: Client,
    base_url: String,
}

impl CommanderClient {
    /// Create a client for the given API base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();

        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the commander endpoint
    pub fn commander_url(&self) -> String {
        commander_url(&self.base_url)
    }
}

#[async_trait(?Send)]
impl CommanderSource for CommanderClient {
    async fn fetch_commander(&self) -> FetchResult<CommanderPayload> {
        let url = self.commander_url();
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(FetchError::status(status.as_u16(), text));
        }

        let body = response.text().await?;
        let value: serde_json::Value = serde_json::from_str(&body)
            .map_err(|e| FetchError::invalid_body(status.as_u16(), e.to_string()))?;

        Ok(CommanderPayload::new(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::get, Json, Router};
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    async fn spawn_stub(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        format!("http://{}", addr)
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = CommanderClient::new("http://localhost:3000/");
        assert_eq!(client.base_url(), "http://localhost:3000");
        assert_eq!(client.commander_url(), "http://localhost:3000/commander");
    }

    #[tokio::test]
    async fn test_fetch_returns_body_verbatim() {
        let body = json!({
            "id": "bob",
            "name": "Bob",
            "colors": ["W", "U"],
            "nested": {"cmc": 4, "legal": true}
        });
        let served = body.clone();
        let router = Router::new().route(
            "/commander",
            get(move || {
                let served = served.clone();
                async move { Json(served) }
            }),
        );

        let client = CommanderClient::new(spawn_stub(router).await);
        let payload = client.fetch_commander().await.unwrap();

        assert_eq!(payload.as_json(), &body);
    }

    #[tokio::test]
    async fn test_server_error_is_fetch_error() {
        let router = Router::new().route(
            "/commander",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );

        let client = CommanderClient::new(spawn_stub(router).await);
        let err = client.fetch_commander().await.unwrap_err();

        assert_eq!(err.status, Some(500));
        assert!(err.reason.contains("boom"));
    }

    #[tokio::test]
    async fn test_missing_route_is_fetch_error() {
        let router = Router::new().route("/commanders", get(|| async { Json(json!({})) }));

        let client = CommanderClient::new(spawn_stub(router).await);
        let err = client.fetch_commander().await.unwrap_err();

        assert_eq!(err.status, Some(404));
    }

    #[tokio::test]
    async fn test_non_json_body_is_fetch_error() {
        let router = Router::new().route("/commander", get(|| async { "not json" }));

        let client = CommanderClient::new(spawn_stub(router).await);
        let err = client.fetch_commander().await.unwrap_err();

        assert_eq!(err.status, Some(200));
        assert!(err.reason.starts_with("Parse error"));
    }

    #[tokio::test]
    async fn test_connection_refused_is_fetch_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = CommanderClient::new(format!("http://{}", addr));
        let err = client.fetch_commander().await.unwrap_err();

        assert!(err.status.is_none());
    }

    #[tokio::test]
    async fn test_every_call_hits_the_network() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        let router = Router::new().route(
            "/commander",
            get(move || {
                let n = counter.fetch_add(1, Ordering::SeqCst);
                async move { Json(json!({ "n": n })) }
            }),
        );

        let client = CommanderClient::new(spawn_stub(router).await);
        let first = client.fetch_commander().await.unwrap();
        let second = client.fetch_commander().await.unwrap();

        assert_eq!(hits.load(Ordering::SeqCst), 2);
        assert_eq!(first.as_json(), &json!({"n": 0}));
        assert_eq!(second.as_json(), &json!({"n": 1}));
    }
}
