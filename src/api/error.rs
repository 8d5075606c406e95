//! Fetch Error Type
//!
//! Every way a commander fetch can go wrong collapses into one error:
//! transport failures, non-2xx statuses and unreadable bodies alike.

use thiserror::Error;

/// A failed commander fetch
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Fetch failed: {reason}")]
pub struct FetchError {
    /// HTTP status when the server answered, `None` for transport failures
    pub status: Option<u16>,
    /// Human-readable cause
    pub reason: String,
}

impl FetchError {
    /// Failure before any response arrived
    pub fn transport(reason: impl Into<String>) -> Self {
        Self {
            status: None,
            reason: reason.into(),
        }
    }

    /// Server answered with a non-success status
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        let reason = if body.is_empty() {
            format!("HTTP {}", status)
        } else {
            format!("HTTP {}: {}", status, body)
        };

        Self {
            status: Some(status),
            reason,
        }
    }

    /// Server answered 2xx but the body was not JSON
    pub fn invalid_body(status: u16, reason: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            reason: format!("Parse error: {}", reason.into()),
        }
    }
}

#[cfg(feature = "native")]
impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        match e.status() {
            Some(status) => Self::status(status.as_u16(), e.to_string()),
            None => Self::transport(e.to_string()),
        }
    }
}

/// Result type for fetch operations
pub type FetchResult<T> = Result<T, FetchError>;
