//! Test doubles shared by the page and shell tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::notify::Notifier;
use crate::router::{NavigationIntent, Navigator};

#[cfg(feature = "native")]
pub use source::StubSource;

/// Remembers every alert raised
#[derive(Default)]
pub struct RecordingNotifier {
    alerts: RefCell<Vec<String>>,
}

impl RecordingNotifier {
    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}

/// Remembers every navigation requested
#[derive(Default)]
pub struct RecordingNavigator {
    intents: RefCell<VecDeque<NavigationIntent>>,
}

impl RecordingNavigator {
    pub fn next(&self) -> Option<NavigationIntent> {
        self.intents.borrow_mut().pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.intents.borrow().is_empty()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, intent: NavigationIntent) {
        self.intents.borrow_mut().push_back(intent);
    }
}

#[cfg(feature = "native")]
mod source {
    use async_trait::async_trait;
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;

    use crate::api::{CommanderPayload, CommanderSource, FetchError, FetchResult};

    /// Hands out queued responses in order and counts calls
    #[derive(Default)]
    pub struct StubSource {
        responses: RefCell<VecDeque<FetchResult<CommanderPayload>>>,
        calls: Cell<usize>,
    }

    impl StubSource {
        pub fn with(responses: Vec<FetchResult<CommanderPayload>>) -> Self {
            Self {
                responses: RefCell::new(responses.into()),
                calls: Cell::new(0),
            }
        }

        pub fn ok(value: serde_json::Value) -> Self {
            Self::with(vec![Ok(CommanderPayload::new(value))])
        }

        pub fn failing(status: u16) -> Self {
            Self::with(vec![Err(FetchError::status(status, "stub failure"))])
        }

        pub fn calls(&self) -> usize {
            self.calls.get()
        }
    }

    #[async_trait(?Send)]
    impl CommanderSource for StubSource {
        async fn fetch_commander(&self) -> FetchResult<CommanderPayload> {
            self.calls.set(self.calls.get() + 1);
            self.responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(FetchError::transport("no stubbed response left")))
        }
    }
}
