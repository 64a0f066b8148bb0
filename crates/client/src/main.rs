//! Tablón client - Main entry point
//!
//! Loads the announcement data and mounts the announcements page.

#![allow(non_snake_case)]

use dioxus::prelude::*;
use tablon_client::{load_feed, views::AnnouncementsPage, FeedConfig};

// Assets
const MAIN_CSS: Asset = asset!("/assets/main.css");
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    // Initialize tracing for desktop
    #[cfg(not(target_arch = "wasm32"))]
    {
        use tracing_subscriber::EnvFilter;
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("tablon_client=debug")),
            )
            .init();
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let data = use_hook(|| load_feed(&FeedConfig::from_env()));
    use_context_provider(|| data.catalog.clone());

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }

        AnnouncementsPage { items: data.announcements }
    }
}
