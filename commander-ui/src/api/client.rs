//! HTTP API Client
//!
//! `gloo-net` implementation of the commander source.

use async_trait::async_trait;
use gloo_net::http::Request;

use commander_randomizer::api::commander_url;
use commander_randomizer::{CommanderPayload, CommanderSource, FetchError, FetchResult, DEFAULT_API_BASE};

/// Local storage key that overrides the built-in API base URL
pub const API_URL_STORAGE_KEY: &str = "commander_api_url";

/// Commander API client running on the browser's fetch
#[derive(Debug, Clone)]
pub struct GlooCommanderClient {
    base_url: String,
}

impl GlooCommanderClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Base URL from local storage when set, otherwise the one baked in at build
    pub fn from_storage() -> Self {
        let stored = web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(API_URL_STORAGE_KEY).ok().flatten())
            .filter(|url| !url.trim().is_empty());

        Self::new(stored.unwrap_or_else(|| DEFAULT_API_BASE.to_string()))
    }

    pub fn commander_url(&self) -> String {
        commander_url(&self.base_url)
    }
}

#[async_trait(?Send)]
impl CommanderSource for GlooCommanderClient {
    async fn fetch_commander(&self) -> FetchResult<CommanderPayload> {
        let response = Request::get(&self.commander_url())
            .send()
            .await
            .map_err(|e| FetchError::transport(format!("Network error: {}", e)))?;

        let status = response.status();
        if !response.ok() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::status(status, body));
        }

        let value: serde_json::Value = response
            .json()
            .await
            .map_err(|e| FetchError::invalid_body(status, e.to_string()))?;

        Ok(CommanderPayload::new(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commander_url() {
        let client = GlooCommanderClient::new("https://api.example.com/");
        assert_eq!(client.commander_url(), "https://api.example.com/commander");
    }
}
