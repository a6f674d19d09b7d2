use dioxus::prelude::*;

use crate::components::filter_bar::{update_criteria, FilterBar, QuickFilters};
use crate::components::icons::{GridIcon, ListIcon, SearchIcon};
use crate::components::lazy_list::LazyList;
use crate::components::paginated_list::PaginatedList;
use crate::components::product_card::ProductCard;
use crate::components::virtual_list::VirtualList;
use crate::listing::filter::{apply, categories};
use crate::listing::{FilterCriteria, FilterState, RenderingMode, ViewMode};
use crate::services::Product;
use crate::stores::preferences_store;
use crate::utils::format::pluralize;

/// Number of products in the featured strip
const FEATURED_COUNT: usize = 6;

/// Catalog browser: filters, mode switches and the active rendering strategy
#[component]
pub fn ProductBrowser(products: Vec<Product>) -> Element {
    let filters = use_signal(FilterState::default);
    let mut show_featured = use_signal(|| true);

    let view_mode = preferences_store::view_mode();
    let rendering_mode = preferences_store::rendering_mode();

    let FilterState { criteria: current, revision } = filters.read().clone();
    let has_active_filters = current.is_active();
    let filtered = apply(&products, &current);
    let category_options = categories(&products);
    let featured: Vec<Product> = products.iter().take(FEATURED_COUNT).cloned().collect();

    let filtered_count = filtered.len();
    let filtered_noun = pluralize(filtered_count, "product", "products");
    let total_count = products.len();

    rsx! {
        div {
            class: "space-y-6",

            QuickFilters { filters }
            FilterBar { filters, categories: category_options }

            if *show_featured.read() && !has_active_filters && !featured.is_empty() {
                section {
                    class: "space-y-4",
                    div {
                        class: "flex items-center justify-between",
                        h2 { class: "text-2xl font-bold", "Featured Books" }
                        button {
                            class: "text-sm text-muted-foreground hover:underline",
                            onclick: move |_| show_featured.set(false),
                            "Hide"
                        }
                    }
                    div {
                        class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
                        for product in featured {
                            div {
                                key: "featured-{product.id}",
                                ProductCard { product }
                            }
                        }
                    }
                }
            }

            div {
                class: "flex flex-col md:flex-row items-start md:items-center justify-between gap-4",

                div {
                    h2 {
                        class: "text-2xl font-bold",
                        if has_active_filters { "Search Results" } else { "All Products" }
                    }
                    p {
                        class: "text-muted-foreground",
                        if has_active_filters {
                            "Found {filtered_count} {filtered_noun} matching your criteria"
                        } else {
                            "Browse our complete collection of {total_count} books"
                        }
                    }
                }

                if !*show_featured.read() && !has_active_filters {
                    button {
                        class: "px-3 py-1.5 border border-border rounded-lg text-sm hover:bg-accent transition",
                        onclick: move |_| show_featured.set(true),
                        "Show Featured"
                    }
                }

                div {
                    class: "flex flex-col md:flex-row md:items-center gap-4",

                    div {
                        class: "flex items-center gap-2",
                        span { class: "text-sm text-muted-foreground", "Mode:" }
                        div {
                            class: "flex border border-border rounded-lg overflow-hidden",
                            for mode in RenderingMode::ALL {
                                button {
                                    key: "{mode.as_str()}",
                                    class: toggle_class(mode == rendering_mode),
                                    onclick: move |_| preferences_store::set_rendering_mode(mode),
                                    "{mode.label()}"
                                }
                            }
                        }
                    }

                    div {
                        class: "flex items-center gap-2",
                        span { class: "text-sm text-muted-foreground", "View:" }
                        div {
                            class: "flex border border-border rounded-lg overflow-hidden",
                            button {
                                class: toggle_class(view_mode == ViewMode::List),
                                aria_label: "List view",
                                onclick: move |_| preferences_store::set_view_mode(ViewMode::List),
                                ListIcon { class: "w-4 h-4" }
                            }
                            button {
                                class: toggle_class(view_mode == ViewMode::Grid),
                                aria_label: "Grid view",
                                onclick: move |_| preferences_store::set_view_mode(ViewMode::Grid),
                                GridIcon { class: "w-4 h-4" }
                            }
                        }
                    }
                }
            }

            if filtered.is_empty() {
                div {
                    class: "flex flex-col items-center justify-center py-20 text-center",
                    SearchIcon { class: "w-12 h-12 text-muted-foreground mb-2" }
                    h3 { class: "text-xl font-semibold mb-1", "No products found" }
                    p { class: "text-muted-foreground mb-4", "Try adjusting your search or filters." }
                    button {
                        class: "px-4 py-2 border border-border rounded-lg hover:bg-accent transition",
                        onclick: move |_| update_criteria(filters, |c| *c = FilterCriteria::default()),
                        "Clear Filters"
                    }
                }
            } else {
                match rendering_mode {
                    RenderingMode::Virtual => rsx! { VirtualList { items: filtered, view_mode, revision } },
                    RenderingMode::Lazy => rsx! { LazyList { items: filtered, view_mode, revision } },
                    RenderingMode::Pagination => rsx! { PaginatedList { items: filtered, view_mode, revision } },
                }
            }
        }
    }
}

fn toggle_class(active: bool) -> &'static str {
    if active {
        "px-3 py-1.5 text-xs bg-primary text-primary-foreground"
    } else {
        "px-3 py-1.5 text-xs hover:bg-accent transition"
    }
}
