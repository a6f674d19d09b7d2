use dioxus::prelude::*;

use crate::components::icons::{AlertTriangleIcon, RefreshIcon};
use crate::components::{ProductBrowser, ProductCardSkeleton};
use crate::stores::CatalogStore;
use crate::utils::FetchState;

#[component]
pub fn Home() -> Element {
    let catalog = use_context::<CatalogStore>();
    let state = catalog.state.read().clone();

    rsx! {
        div {
            class: "space-y-8",

            section {
                class: "text-center py-8",
                h1 { class: "text-4xl font-bold mb-2", "Welcome to Bookline" }
                p {
                    class: "text-lg text-muted-foreground",
                    "Discover your next favorite book in our extensive collection."
                }
            }

            match state {
                FetchState::Idle | FetchState::Loading => rsx! {
                    div {
                        class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
                        for i in 0..6 {
                            ProductCardSkeleton { key: "{i}" }
                        }
                    }
                },
                FetchState::Failed(error) => rsx! {
                    div {
                        class: "flex flex-col items-center justify-center py-16 text-center",
                        AlertTriangleIcon { class: "w-12 h-12 text-destructive mb-2" }
                        h3 { class: "text-xl font-semibold mb-1", "Couldn't load the catalog" }
                        p { class: "text-muted-foreground mb-4", "{error}" }
                        button {
                            class: "flex items-center gap-2 px-4 py-2 bg-primary text-primary-foreground rounded-lg hover:bg-primary/90 transition",
                            onclick: move |_| {
                                spawn(catalog.refresh());
                            },
                            RefreshIcon { class: "w-4 h-4" }
                            "Retry"
                        }
                    }
                },
                FetchState::Loaded(products) => rsx! {
                    ProductBrowser { products }
                },
            }
        }
    }
}
