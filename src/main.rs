#![allow(non_snake_case)]

use dioxus::prelude::*;
use std::rc::Rc;

// Modules
mod components;
mod hooks;
mod listing;
mod routes;
mod services;
mod stores;
mod utils;

use listing::{ListingConfig, LoadLatency, TimerLatency};
use services::{CatalogConfig, MockCatalog};
use stores::auth_store::session_storage;
use stores::{preferences_store, AuthStore, CartStore, CatalogStore};

fn main() {
    // Initialize panic hook for better error messages in browser console
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    }

    log::info!("Starting Bookline storefront");

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let listing_config = use_context_provider(ListingConfig::default);
    let latency = use_context_provider(|| Rc::new(TimerLatency) as Rc<dyn LoadLatency>);

    use_context_provider(CartStore::new);
    use_context_provider(|| AuthStore::new(session_storage()));

    let catalog = use_context_provider(|| {
        let config = CatalogConfig::default();
        let source = Rc::new(MockCatalog::new(config, Rc::clone(&latency)));
        CatalogStore::new(source, Rc::clone(&latency), config.retry)
    });

    // Initialize preferences and fetch the catalog on mount
    use_effect(move || {
        preferences_store::init_preferences();
        log::debug!(
            "Listing config: page size {}, buffer {} rows",
            listing_config.page_size,
            listing_config.buffer_rows
        );
        spawn(catalog.refresh());
    });

    rsx! {
        Router::<routes::Route> {}
    }
}
