use dioxus::prelude::*;

use crate::components::icons::{ChevronLeftIcon, ChevronRightIcon};
use crate::components::product_grid::{ListFooter, ProductTile};
use crate::hooks::scroll_window_to_top;
use crate::listing::{ListingConfig, Paginator, ViewMode};
use crate::services::Product;

/// Most page buttons shown at once
const MAX_PAGE_BUTTONS: usize = 5;

/// Product list split into fixed-size pages
///
/// `revision` is the filter revision the items were produced under; a new
/// revision starts over on page 1.
#[component]
pub fn PaginatedList(items: Vec<Product>, view_mode: ViewMode, revision: u64) -> Element {
    let config = use_context::<ListingConfig>();
    let mut pager = use_signal(|| Paginator::new(items.len(), config.effective_page_size()));
    let mut seen_revision = use_signal(|| revision);

    use_effect(use_reactive((&items, &revision), move |(items, revision)| {
        let new_filter = *seen_revision.peek() != revision;
        seen_revision.set(revision);
        pager.write().refresh(items.len(), new_filter);
    }));

    let mut navigate = move |step: fn(&mut Paginator) -> bool| {
        if step(&mut *pager.write()) {
            log::debug!("Switched to page {}", pager.peek().current_page());
            scroll_window_to_top();
        }
    };

    let paginator = *pager.read();
    let page_items = paginator.page_items(&items).to_vec();
    let range = paginator.page_range();
    let total = items.len();
    let current = paginator.current_page();
    let total_pages = paginator.total_pages();
    let first_shown = range.start + 1;
    let last_shown = range.end;

    let layout_class = match view_mode {
        ViewMode::List => "space-y-4",
        ViewMode::Grid => "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6",
    };

    rsx! {
        div {
            class: "space-y-6",

            div {
                class: "{layout_class}",
                for product in page_items {
                    div {
                        key: "{product.id}",
                        ProductTile { product, view_mode }
                    }
                }
            }

            if total_pages > 1 {
                nav {
                    class: "flex justify-center items-center gap-2",
                    aria_label: "Pagination",

                    button {
                        class: "flex items-center gap-1 px-3 py-2 border border-border rounded-lg hover:bg-accent transition disabled:opacity-50",
                        disabled: !paginator.has_previous(),
                        onclick: move |_| navigate(Paginator::previous),
                        ChevronLeftIcon { class: "w-4 h-4" }
                        "Previous"
                    }

                    for page in paginator.page_numbers(MAX_PAGE_BUTTONS) {
                        button {
                            key: "{page}",
                            class: if page == current {
                                "w-10 py-2 rounded-lg bg-primary text-primary-foreground"
                            } else {
                                "w-10 py-2 rounded-lg border border-border hover:bg-accent transition"
                            },
                            onclick: move |_| {
                                if pager.write().set_page(page) {
                                    log::debug!("Switched to page {}", page);
                                    scroll_window_to_top();
                                }
                            },
                            "{page}"
                        }
                    }

                    button {
                        class: "flex items-center gap-1 px-3 py-2 border border-border rounded-lg hover:bg-accent transition disabled:opacity-50",
                        disabled: !paginator.has_next(),
                        onclick: move |_| navigate(Paginator::next),
                        "Next"
                        ChevronRightIcon { class: "w-4 h-4" }
                    }
                }
            }

            if total > 0 {
                div {
                    class: "text-center text-sm text-muted-foreground",
                    "Page {current} of {total_pages} · items {first_shown}-{last_shown}"
                }
                ListFooter { shown: range.len(), total }
            }
        }
    }
}
