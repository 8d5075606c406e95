//! Commander Card Component
//!
//! Shows a commander record as-is. The record's fields are not interpreted.

use leptos::*;

use commander_randomizer::CommanderPayload;

#[component]
pub fn CommanderCard(payload: CommanderPayload) -> impl IntoView {
    view! {
        <section class="commander-card">
            <pre>{payload.to_pretty()}</pre>
        </section>
    }
}
