//! Routing and Navigation
//!
//! Two routes and an explicit navigation intent. A page that wants to move
//! somewhere sends a [`NavigationIntent`] through its [`Navigator`]; the app
//! shell receives it and builds the destination page, handing the intent's
//! state to that page exactly once.

use serde::{Deserialize, Serialize};

use crate::api::CommanderPayload;

/// Application routes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Landing page with the randomize button
    Home,
    /// Commander details
    Commander,
}

impl Route {
    /// Resolve a path to a route; unknown paths fall back to home
    pub fn resolve(path: &str) -> Self {
        match path.trim().trim_matches('/') {
            "commander" => Route::Commander,
            "" => Route::Home,
            other => {
                tracing::debug!("Unknown route '{}', redirecting to home", other);
                Route::Home
            }
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Commander => "/commander",
        }
    }

    /// Page title shown for the route
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Randomize Commander - Home",
            Route::Commander => "Commander Details",
        }
    }
}

/// State carried by a single navigation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commander_data: Option<CommanderPayload>,
}

/// A request to move to another route
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationIntent {
    pub route: Route,
    pub state: Option<NavigationState>,
}

impl NavigationIntent {
    /// Go home, carrying nothing
    pub fn home() -> Self {
        Self {
            route: Route::Home,
            state: None,
        }
    }

    /// Open the commander page with a payload that was already fetched
    pub fn commander_with(payload: CommanderPayload) -> Self {
        Self {
            route: Route::Commander,
            state: Some(NavigationState {
                commander_data: Some(payload),
            }),
        }
    }

    /// Navigate by path, as when the user types a location
    pub fn to_path(path: &str) -> Self {
        Self {
            route: Route::resolve(path),
            state: None,
        }
    }

    /// Take the carried commander payload, consuming the intent
    pub fn into_commander_data(self) -> Option<CommanderPayload> {
        self.state.and_then(|s| s.commander_data)
    }
}

/// Where pages send their navigation intents.
///
/// The terminal shell queues them on a channel; the browser shell holds the
/// latest one until the page has settled.
pub trait Navigator {
    fn navigate(&self, intent: NavigationIntent);
}
