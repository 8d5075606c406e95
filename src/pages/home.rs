//! Home Page
//!
//! Landing view. Randomizing fetches a commander and, on success, moves to
//! the detail page carrying the fetched payload along.

use std::rc::Rc;

use super::{LoadTicket, Tickets};
use crate::api::{CommanderPayload, FetchResult};
use crate::notify::{Notifier, LOAD_FAILED_MESSAGE};
use crate::router::{NavigationIntent, Navigator};

/// Home page component
pub struct HomePage {
    navigator: Rc<dyn Navigator>,
    notifier: Rc<dyn Notifier>,
    is_loading: bool,
    tickets: Tickets,
}

impl HomePage {
    pub fn new(navigator: Rc<dyn Navigator>, notifier: Rc<dyn Notifier>) -> Self {
        Self {
            navigator,
            notifier,
            is_loading: false,
            tickets: Tickets::default(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Start a randomize: the page shows loading until the ticket completes
    pub fn on_randomize(&mut self) -> LoadTicket {
        self.is_loading = true;
        self.tickets.issue()
    }

    /// Apply the outcome of the fetch started by [`Self::on_randomize`]
    pub fn complete_randomize(&mut self, ticket: LoadTicket, result: FetchResult<CommanderPayload>) {
        if !self.tickets.is_current(ticket) {
            tracing::debug!("Discarding stale randomize result {:?}", ticket);
            return;
        }

        match result {
            Ok(payload) => {
                self.navigator.navigate(NavigationIntent::commander_with(payload));
                self.is_loading = false;
            }
            Err(e) => {
                tracing::error!("Failed to load commander: {}", e);
                self.is_loading = false;
                self.notifier.alert(LOAD_FAILED_MESSAGE);
            }
        }
    }
}
