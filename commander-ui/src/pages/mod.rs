//! Pages
//!
//! Route components. Each one wraps the matching page from
//! `commander-randomizer` in a [`StoredValue`](leptos::StoredValue), mirrors
//! its state into signals and runs the fetches it asks for.

pub mod commander_detail;
pub mod home;

pub use commander_detail::CommanderDetail;
pub use home::Home;
