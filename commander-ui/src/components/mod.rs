//! UI Components
//!
//! Reusable Leptos components for the pages.

pub mod commander_card;
pub mod loading;

pub use commander_card::CommanderCard;
pub use loading::{InlineLoading, Loading};
