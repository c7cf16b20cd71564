use dioxus::prelude::*;
use tracing::info;

mod browser;
mod components;
mod config;
mod state;
mod views;

use state::{ListSignals, SharedStore};
use taskboard_core::DragState;
use views::{Board, NotFound};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Board {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    let config = config::init().expect("Failed to load board configuration");
    dioxus::logger::init(config.level()).expect("Failed to initialize logger");
    info!(title = %config.title, "Starting task board");

    dioxus::launch(App);
}

/// Root component. Creates the board's one project store and both list views
/// subscribed to it, and keeps them for the lifetime of the app along with the
/// state of the drag session in progress.
#[component]
fn App() -> Element {
    use_context_provider(|| config::current().clone());
    let store = use_context_provider(SharedStore::new);
    use_context_provider(|| ListSignals::attach(&store));
    use_context_provider(|| Signal::new(DragState::default()));

    rsx! {
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        Router::<Route> {}
    }
}
