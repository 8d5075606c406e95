//! Commander API Access
//!
//! The single outbound dependency of the application: one GET against the
//! configured commander API.
//!
//! # Endpoint
//!
//! - `GET {base_url}/commander` - a random commander record, kept as opaque JSON
//!
//! Pages never fetch on their own. Each front end owns a [`CommanderSource`]
//! (reqwest in the terminal, gloo-net in the browser) and feeds the result
//! back to the page that asked for it.

#[cfg(feature = "native")]
mod client;
mod error;
mod payload;
mod source;

#[cfg(feature = "native")]
pub use client::CommanderClient;
pub use error::{FetchError, FetchResult};
pub use payload::CommanderPayload;
pub use source::{commander_url, CommanderSource, COMMANDER_PATH, DEFAULT_API_BASE};
