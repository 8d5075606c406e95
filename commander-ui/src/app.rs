//! App Root Component
//!
//! Router, routes and the context every page reads from.

use leptos::*;
use leptos_router::*;
use std::rc::Rc;

use commander_randomizer::{CommanderSource, Notifier};

use crate::api::GlooCommanderClient;
use crate::navigation::Navigation;
use crate::notify::BrowserNotifier;
use crate::pages::{CommanderDetail, Home};

/// Shared handles provided to all pages
#[derive(Clone)]
pub struct UiContext {
    pub source: Rc<dyn CommanderSource>,
    pub notifier: Rc<dyn Notifier>,
    pub navigation: Navigation,
}

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let client = GlooCommanderClient::from_storage();
    logging::log!("Commander API: {}", client.commander_url());

    provide_context(UiContext {
        source: Rc::new(client),
        notifier: Rc::new(BrowserNotifier),
        navigation: Navigation::new(),
    });

    view! {
        <Router>
            <header>
                <h1>"Randomize Commander"</h1>
            </header>

            <main>
                <Routes>
                    <Route path="/" view=Home />
                    <Route path="/commander" view=CommanderDetail />
                    <Route path="/*any" view=|| view! { <Redirect path="/" /> } />
                </Routes>
            </main>
        </Router>
    }
}

/// Context lookup shared by the pages
pub fn use_ui() -> UiContext {
    use_context::<UiContext>().expect("UiContext not found")
}
