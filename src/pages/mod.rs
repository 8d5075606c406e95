//! Pages
//!
//! The two views of the application. Each page owns its loading flag and,
//! for the detail page, the commander it shows.
//!
//! Pages never fetch. An operation that needs a commander (`on_randomize`,
//! `init`, `load_commander`) enters the loading state and hands out a
//! [`LoadTicket`]; the front end runs the request and passes the result to
//! `complete_*`, which applies it only if the ticket is still the latest
//! one issued by that page.

pub mod commander_detail;
pub mod home;

pub use commander_detail::CommanderDetailPage;
pub use home::HomePage;

/// Identifies one fetch started by a page
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadTicket(u64);

/// Per-page issuer of monotonically increasing tickets
#[derive(Debug, Default)]
struct Tickets {
    latest: u64,
}

impl Tickets {
    fn issue(&mut self) -> LoadTicket {
        self.latest += 1;
        LoadTicket(self.latest)
    }

    fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tickets_increase() {
        let mut tickets = Tickets::default();
        let first = tickets.issue();
        let second = tickets.issue();

        assert!(second > first);
        assert!(!tickets.is_current(first));
        assert!(tickets.is_current(second));
    }
}
