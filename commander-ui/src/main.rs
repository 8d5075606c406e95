//! Randomize Commander
//!
//! Browser front end built with Leptos (WASM). Draws a random commander
//! from the commander API and shows it on a detail page.
//!
//! # Architecture
//!
//! Client-side rendered. The page logic lives in the `commander-randomizer`
//! crate; this crate wires it to signals, the router and `gloo-net`.

use leptos::*;

mod api;
mod app;
mod components;
mod navigation;
mod notify;
mod pages;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
