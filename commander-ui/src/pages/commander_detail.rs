//! Commander Detail Page
//!
//! Shows the commander carried over from home, or fetches one when the
//! page was opened directly.

use leptos::*;
use leptos_router::use_navigate;

use commander_randomizer::{CommanderDetailPage, LoadTicket, Route};

use crate::app::use_ui;
use crate::components::{CommanderCard, Loading};

#[component]
pub fn CommanderDetail() -> impl IntoView {
    let ui = use_ui();
    document().set_title(Route::Commander.title());

    let navigation = ui.navigation;
    let incoming = navigation.take_handoff();

    let source = store_value(ui.source);
    let page = store_value(CommanderDetailPage::new(
        navigation.navigator(),
        ui.notifier,
        incoming,
    ));
    let commander = create_rw_signal(page.with_value(|p| p.commander_info().cloned()));
    let is_loading = create_rw_signal(false);
    let navigate = use_navigate();

    let sync = move || {
        let state = page.try_with_value(|p| (p.commander_info().cloned(), p.is_loading()));
        if let Some((info, loading)) = state {
            commander.try_set(info);
            is_loading.try_set(loading);
        }
    };

    let run_fetch = move |ticket: LoadTicket| {
        sync();
        spawn_local(async move {
            let Some(source) = source.try_get_value() else { return };
            let result = source.fetch_commander().await;

            if page
                .try_update_value(|p| p.complete_load(ticket, result))
                .is_some()
            {
                sync();
            }
        });
    };

    create_effect(move |_| {
        if let Some(Some(ticket)) = page.try_update_value(|p| p.init()) {
            run_fetch(ticket);
        }
    });

    let on_randomize = move |_| {
        if let Some(ticket) = page.try_update_value(|p| p.on_randomize()) {
            run_fetch(ticket);
        }
    };

    let on_back = move |_| {
        page.with_value(|p| p.on_back());
        navigation.flush(&navigate);
    };

    view! {
        <div class="commander-detail">
            <div class="actions">
                <button on:click=on_back>"Back"</button>
                <button on:click=on_randomize disabled=move || is_loading.get()>
                    "Randomize"
                </button>
            </div>

            {move || {
                if is_loading.get() {
                    view! { <Loading /> }.into_view()
                } else {
                    match commander.get() {
                        Some(payload) => view! { <CommanderCard payload=payload /> }.into_view(),
                        None => view! { <EmptyState /> }.into_view(),
                    }
                }
            }}
        </div>
    }
}

#[component]
fn EmptyState() -> impl IntoView {
    view! {
        <p class="empty">"No commander loaded."</p>
    }
}
