//! App Shell
//!
//! Terminal front end. Owns the current page, runs the fetches the pages
//! ask for, drains navigation intents and mounts the destination page for
//! each one. Every state change is pushed to an optional frame sink so the
//! CLI can redraw.

use std::ops::ControlFlow;
use std::rc::Rc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::api::CommanderSource;
use crate::notify::Notifier;
use crate::pages::{CommanderDetailPage, HomePage, LoadTicket};
use crate::router::{NavigationIntent, Navigator, Route};

/// Navigator that queues intents for the shell
#[derive(Debug, Clone)]
pub struct ChannelNavigator {
    tx: UnboundedSender<NavigationIntent>,
}

impl ChannelNavigator {
    /// Create a navigator and the receiver the shell drains
    pub fn channel() -> (Self, UnboundedReceiver<NavigationIntent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Navigator for ChannelNavigator {
    fn navigate(&self, intent: NavigationIntent) {
        tracing::debug!("Navigating to {}", intent.route.path());

        if self.tx.send(intent).is_err() {
            tracing::warn!("Navigation dropped: shell is gone");
        }
    }
}

/// The page currently on screen
pub enum Page {
    Home(HomePage),
    Commander(CommanderDetailPage),
}

impl Page {
    pub fn route(&self) -> Route {
        match self {
            Page::Home(_) => Route::Home,
            Page::Commander(_) => Route::Commander,
        }
    }

    /// Render the page for the terminal
    pub fn render(&self) -> String {
        let mut out = format!("=== {} ===\n\n", self.route().title());

        match self {
            Page::Home(page) => {
                out.push_str("Draw a random commander for your next game.\n\n");
                if page.is_loading() {
                    out.push_str("  Loading...\n");
                } else {
                    out.push_str("  [r] Randomize   [q] Quit\n");
                }
            }
            Page::Commander(page) => {
                match (page.commander_info(), page.is_loading()) {
                    (_, true) => out.push_str("  Loading...\n"),
                    (Some(payload), false) => {
                        out.push_str(&payload.to_pretty());
                        out.push('\n');
                    }
                    (None, false) => out.push_str("  No commander loaded.\n"),
                }
                out.push_str("\n  [r] Randomize   [b] Back   [q] Quit\n");
            }
        }

        out
    }
}

/// User actions understood by the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Randomize,
    Back,
    Quit,
}

impl Action {
    /// Parse a line of user input
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "r" | "randomize" => Some(Action::Randomize),
            "b" | "back" => Some(Action::Back),
            "q" | "quit" | "exit" => Some(Action::Quit),
            _ => None,
        }
    }
}

type FrameSink = Box<dyn Fn(&str)>;

/// Root application component
pub struct App {
    source: Rc<dyn CommanderSource>,
    notifier: Rc<dyn Notifier>,
    navigator: Rc<ChannelNavigator>,
    intents: UnboundedReceiver<NavigationIntent>,
    page: Page,
    frame_sink: Option<FrameSink>,
}

impl App {
    /// Create the shell, showing the home page
    pub fn new(source: Rc<dyn CommanderSource>, notifier: Rc<dyn Notifier>) -> Self {
        let (navigator, intents) = ChannelNavigator::channel();
        let navigator = Rc::new(navigator);
        let page = Page::Home(HomePage::new(navigator.clone(), Rc::clone(&notifier)));

        Self {
            source,
            notifier,
            navigator,
            intents,
            page,
            frame_sink: None,
        }
    }

    /// Receive a rendered frame after every state change
    pub fn with_frame_sink(mut self, sink: impl Fn(&str) + 'static) -> Self {
        self.frame_sink = Some(Box::new(sink));
        self
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn route(&self) -> Route {
        self.page.route()
    }

    pub fn render(&self) -> String {
        self.page.render()
    }

    /// Open the given path; unknown paths land on home
    pub async fn start(&mut self, path: &str) {
        self.navigator.navigate(NavigationIntent::to_path(path));
        self.settle().await;
    }

    /// Handle one user action
    pub async fn dispatch(&mut self, action: Action) -> ControlFlow<()> {
        match action {
            Action::Quit => return ControlFlow::Break(()),
            Action::Randomize => {
                let ticket = match &mut self.page {
                    Page::Home(page) => page.on_randomize(),
                    Page::Commander(page) => page.on_randomize(),
                };
                self.run_fetch(ticket).await;
            }
            Action::Back => match &self.page {
                Page::Commander(page) => page.on_back(),
                Page::Home(_) => tracing::debug!("Back pressed on home, ignoring"),
            },
        }

        self.settle().await;
        ControlFlow::Continue(())
    }

    /// Run the fetch a page asked for, drawing the loading frame first
    async fn run_fetch(&mut self, ticket: LoadTicket) {
        self.present();

        let result = self.source.fetch_commander().await;

        match &mut self.page {
            Page::Home(page) => page.complete_randomize(ticket, result),
            Page::Commander(page) => page.complete_load(ticket, result),
        }
    }

    /// Apply queued navigations, then redraw
    async fn settle(&mut self) {
        while let Ok(intent) = self.intents.try_recv() {
            self.mount(intent).await;
        }
        self.present();
    }

    async fn mount(&mut self, intent: NavigationIntent) {
        tracing::info!("Opening {} ({})", intent.route.title(), intent.route.path());

        let navigator: Rc<dyn Navigator> = self.navigator.clone();
        match intent.route {
            Route::Home => {
                self.page = Page::Home(HomePage::new(navigator, Rc::clone(&self.notifier)));
            }
            Route::Commander => {
                let mut page =
                    CommanderDetailPage::new(navigator, Rc::clone(&self.notifier), intent.state);
                let owed = page.init();
                self.page = Page::Commander(page);

                if let Some(ticket) = owed {
                    self.run_fetch(ticket).await;
                }
            }
        }
    }

    fn present(&self) {
        if let Some(sink) = &self.frame_sink {
            sink(&self.page.render());
        }
    }
}
