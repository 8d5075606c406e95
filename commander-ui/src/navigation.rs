//! Navigation Handoff
//!
//! Pages navigate by handing a [`NavigationIntent`] to their navigator. In
//! the browser the intent waits in an outbox until the page has finished
//! updating, then [`Navigation::flush`] moves the router and parks the
//! intent's state for the destination page, which takes it exactly once.

use leptos::*;
use leptos_router::NavigateOptions;
use std::rc::Rc;

use commander_randomizer::{NavigationIntent, NavigationState, Navigator};

/// Outbox and handoff slot shared by every page
#[derive(Clone, Copy)]
pub struct Navigation {
    outbox: StoredValue<Option<NavigationIntent>>,
    handoff: StoredValue<Option<NavigationState>>,
}

impl Navigation {
    pub fn new() -> Self {
        Self {
            outbox: store_value(None),
            handoff: store_value(None),
        }
    }

    /// Navigator handed to a page
    pub fn navigator(&self) -> Rc<dyn Navigator> {
        Rc::new(OutboxNavigator {
            outbox: self.outbox,
        })
    }

    /// Send the pending intent, if any, to the router
    pub fn flush(&self, navigate: &dyn Fn(&str, NavigateOptions)) {
        let Some(intent) = self.outbox.try_update_value(Option::take).flatten() else {
            return;
        };

        self.handoff.update_value(|slot| *slot = intent.state);
        navigate(intent.route.path(), NavigateOptions::default());
    }

    /// State carried by the navigation that opened the current page
    pub fn take_handoff(&self) -> Option<NavigationState> {
        self.handoff.try_update_value(Option::take).flatten()
    }
}

impl Default for Navigation {
    fn default() -> Self {
        Self::new()
    }
}

struct OutboxNavigator {
    outbox: StoredValue<Option<NavigationIntent>>,
}

impl Navigator for OutboxNavigator {
    fn navigate(&self, intent: NavigationIntent) {
        self.outbox.update_value(|slot| *slot = Some(intent));
    }
}
