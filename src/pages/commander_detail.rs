//! Commander Detail Page
//!
//! Shows one commander. Uses the payload carried over from the home page
//! when there is one, otherwise asks for a fetch on init.

use std::rc::Rc;

use super::{LoadTicket, Tickets};
use crate::api::{CommanderPayload, FetchResult};
use crate::notify::{Notifier, LOAD_FAILED_MESSAGE};
use crate::router::{NavigationIntent, NavigationState, Navigator};

/// Commander detail page component
pub struct CommanderDetailPage {
    navigator: Rc<dyn Navigator>,
    notifier: Rc<dyn Notifier>,
    commander_info: Option<CommanderPayload>,
    is_loading: bool,
    initialized: bool,
    tickets: Tickets,
}

impl CommanderDetailPage {
    /// Build the page, adopting any commander carried by the navigation.
    ///
    /// A blank carried value (`null`, `false`, `0`, `""`) is treated as
    /// nothing carried.
    pub fn new(
        navigator: Rc<dyn Navigator>,
        notifier: Rc<dyn Notifier>,
        incoming: Option<NavigationState>,
    ) -> Self {
        let commander_info = incoming
            .and_then(|state| state.commander_data)
            .filter(|payload| !payload.is_blank());

        Self {
            navigator,
            notifier,
            commander_info,
            is_loading: false,
            initialized: false,
            tickets: Tickets::default(),
        }
    }

    pub fn commander_info(&self) -> Option<&CommanderPayload> {
        self.commander_info.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// One-time setup after construction. Returns a ticket when nothing was
    /// carried over and a fetch is owed; later calls return `None`.
    pub fn init(&mut self) -> Option<LoadTicket> {
        if self.initialized {
            return None;
        }
        self.initialized = true;

        if self.commander_info.is_some() {
            return None;
        }
        Some(self.load_commander())
    }

    /// Clear the current commander and enter the loading state
    pub fn load_commander(&mut self) -> LoadTicket {
        self.is_loading = true;
        self.commander_info = None;
        self.tickets.issue()
    }

    /// Always a fresh fetch, even when a commander is showing
    pub fn on_randomize(&mut self) -> LoadTicket {
        self.load_commander()
    }

    pub fn on_back(&self) {
        self.navigator.navigate(NavigationIntent::home());
    }

    /// Apply the outcome of a fetch started by [`Self::load_commander`]
    pub fn complete_load(&mut self, ticket: LoadTicket, result: FetchResult<CommanderPayload>) {
        if !self.tickets.is_current(ticket) {
            tracing::debug!("Discarding stale commander result {:?}", ticket);
            return;
        }

        match result {
            Ok(payload) => {
                tracing::debug!("Commander data: {}", payload);
                self.commander_info = Some(payload);
                self.is_loading = false;
            }
            Err(e) => {
                tracing::error!("Error loading commander: {}", e);
                self.is_loading = false;
                self.notifier.alert(LOAD_FAILED_MESSAGE);
            }
        }
    }
}
