use async_trait::async_trait;

use super::error::FetchResult;
use super::payload::CommanderPayload;

/// Path of the commander endpoint, appended to the base URL
pub const COMMANDER_PATH: &str = "/commander";

/// API base URL baked in at build time, overridable at deploy time
pub const DEFAULT_API_BASE: &str = match option_env!("COMMANDER_API_URL") {
    Some(url) => url,
    None => "http://localhost:3000",
};

/// Anything that can hand out a commander payload.
///
/// Futures are not required to be `Send`: both front ends run on a single
/// thread and the browser client's futures are tied to it.
#[async_trait(?Send)]
pub trait CommanderSource {
    /// Fetch one commander record
    async fn fetch_commander(&self) -> FetchResult<CommanderPayload>;
}

/// Join a base URL and the commander path, dropping trailing slashes
pub fn commander_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), COMMANDER_PATH)
}
