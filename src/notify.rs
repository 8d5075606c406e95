//! User-Facing Alerts
//!
//! Pages report failed fetches through a [`Notifier`]. The browser shows a
//! modal `alert`; the terminal queues alerts in [`TerminalAlerts`] and the
//! CLI holds each one on screen until the user presses Enter.

use std::cell::RefCell;
use std::collections::VecDeque;

/// Message shown whenever a commander fails to load
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load the commander. Please try again.";

/// Sink for user-visible alerts
pub trait Notifier {
    fn alert(&self, message: &str);
}

/// Alerts waiting to be acknowledged in the terminal
#[derive(Debug, Default)]
pub struct TerminalAlerts {
    pending: RefCell<VecDeque<String>>,
}

impl TerminalAlerts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next unacknowledged alert, oldest first
    pub fn take(&self) -> Option<String> {
        self.pending.borrow_mut().pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.borrow().is_empty()
    }

    /// Text drawn for an alert while it waits for Enter
    pub fn banner(message: &str) -> String {
        format!("\n  [!] {}\n  Press Enter to continue.", message)
    }
}

impl Notifier for TerminalAlerts {
    fn alert(&self, message: &str) {
        self.pending.borrow_mut().push_back(message.to_string());
    }
}
