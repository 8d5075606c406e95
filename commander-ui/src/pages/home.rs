//! Home Page
//!
//! Landing view with the randomize button.

use leptos::*;
use leptos_router::use_navigate;

use commander_randomizer::{HomePage, Route};

use crate::app::use_ui;
use crate::components::InlineLoading;

#[component]
pub fn Home() -> impl IntoView {
    let ui = use_ui();
    document().set_title(Route::Home.title());

    let navigation = ui.navigation;
    // Home takes no state; drop whatever an earlier navigation left behind
    navigation.take_handoff();

    let source = store_value(ui.source);
    let page = store_value(HomePage::new(navigation.navigator(), ui.notifier));
    let is_loading = create_rw_signal(false);
    let navigate = use_navigate();

    let sync = move || {
        if let Some(loading) = page.try_with_value(|p| p.is_loading()) {
            is_loading.try_set(loading);
        }
    };

    let on_randomize = move |_| {
        let Some(ticket) = page.try_update_value(|p| p.on_randomize()) else {
            return;
        };
        sync();

        let navigate = navigate.clone();
        spawn_local(async move {
            let Some(source) = source.try_get_value() else { return };
            let result = source.fetch_commander().await;

            if page
                .try_update_value(|p| p.complete_randomize(ticket, result))
                .is_none()
            {
                return;
            }
            sync();
            navigation.flush(&navigate);
        });
    };

    view! {
        <div class="home">
            <p>"Draw a random commander for your next game."</p>

            <button on:click=on_randomize disabled=move || is_loading.get()>
                "Randomize"
            </button>

            {move || is_loading.get().then(|| view! { <InlineLoading /> })}
        </div>
    }
}
