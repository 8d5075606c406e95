//! # Commander Randomizer
//!
//! Fetch a random commander from the commander API and browse it.
//!
//! ## Modules
//!
//! - [`api`]: the commander source seam and, natively, the reqwest client
//! - [`pages`]: home and commander detail view models
//! - [`router`]: routes and one-shot navigation intents
//! - [`notify`]: user-facing alerts
//! - `app`: terminal shell that mounts pages and runs their fetches
//! - `config`: TOML config with environment overrides
//!
//! The `native` feature (on by default) adds the terminal shell, the
//! reqwest client, config files and log setup. The browser front end in
//! `commander-ui` builds this crate with it turned off and supplies its own
//! [`CommanderSource`], [`Navigator`] and [`Notifier`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use commander_randomizer::{Action, App, CommanderClient, TerminalAlerts};
//! use std::rc::Rc;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let client = Rc::new(CommanderClient::new("http://localhost:3000"));
//!     let alerts = Rc::new(TerminalAlerts::new());
//!     let mut app = App::new(client, alerts.clone())
//!         .with_frame_sink(|frame| println!("{}", frame));
//!
//!     app.start("/").await;
//!     let _ = app.dispatch(Action::Randomize).await;
//!     while let Some(alert) = alerts.take() {
//!         eprintln!("{}", alert);
//!     }
//! }
//! ```

pub mod api;
#[cfg(feature = "native")]
pub mod app;
#[cfg(feature = "native")]
pub mod config;
#[cfg(feature = "native")]
pub mod logging;
pub mod notify;
pub mod pages;
pub mod router;

#[cfg(test)]
mod testing;

pub use api::{
    CommanderPayload, CommanderSource, FetchError, FetchResult, COMMANDER_PATH, DEFAULT_API_BASE,
};
#[cfg(feature = "native")]
pub use api::CommanderClient;
#[cfg(feature = "native")]
pub use app::{Action, App, ChannelNavigator, Page};
#[cfg(feature = "native")]
pub use config::{
    generate_default_config, ApiConfig, Config, ConfigError, ConfigLoad, LogFormat, LoggingConfig,
};
pub use notify::{Notifier, TerminalAlerts, LOAD_FAILED_MESSAGE};
pub use pages::{CommanderDetailPage, HomePage, LoadTicket};
pub use router::{NavigationIntent, NavigationState, Navigator, Route};
