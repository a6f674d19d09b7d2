use dioxus::prelude::*;

use crate::components::icons::{ChevronDownIcon, ChevronUpIcon, FilterIcon, SearchIcon, XIcon};
use crate::listing::filter::{parse_price_bound, PriceRange, PRICE_PRESETS};
use crate::listing::{FilterCriteria, FilterState};
use crate::services::mock_catalog::CATEGORIES;

/// Search box, category select, price bounds and a reset button
#[component]
pub fn FilterBar(filters: Signal<FilterState>, categories: Vec<String>) -> Element {
    let current = filters.read().criteria.clone();
    let selected_category = current.category.clone().unwrap_or_default();
    let defaults = PriceRange::default();

    rsx! {
        div {
            class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4",

            div {
                class: "relative",
                span {
                    class: "absolute left-3 top-1/2 -translate-y-1/2 text-muted-foreground",
                    SearchIcon { class: "w-4 h-4" }
                }
                input {
                    r#type: "text",
                    placeholder: "Search products...",
                    value: "{current.search_term}",
                    class: "w-full pl-10 pr-3 py-2 bg-background border border-border rounded-lg text-sm",
                    oninput: move |evt| update_criteria(filters, |c| c.search_term = evt.value()),
                }
            }

            select {
                class: "w-full px-3 py-2 bg-background border border-border rounded-lg text-sm",
                value: "{selected_category}",
                onchange: move |evt| {
                    let value = evt.value();
                    update_criteria(filters, |c| c.category = if value.is_empty() { None } else { Some(value) });
                },
                option { value: "", "All Categories" }
                for category in categories {
                    option {
                        key: "{category}",
                        value: "{category}",
                        selected: category == selected_category,
                        "{category}"
                    }
                }
            }

            div {
                class: "flex gap-2",
                input {
                    r#type: "number",
                    placeholder: "Min Price",
                    value: "{current.price_range.min}",
                    class: "w-full px-3 py-2 bg-background border border-border rounded-lg text-sm",
                    oninput: move |evt| {
                        let min = parse_price_bound(&evt.value(), defaults.min);
                        update_criteria(filters, |c| c.price_range.min = min);
                    },
                }
                input {
                    r#type: "number",
                    placeholder: "Max Price",
                    value: "{current.price_range.max}",
                    class: "w-full px-3 py-2 bg-background border border-border rounded-lg text-sm",
                    oninput: move |evt| {
                        let max = parse_price_bound(&evt.value(), defaults.max);
                        update_criteria(filters, |c| c.price_range.max = max);
                    },
                }
            }

            button {
                class: "flex items-center justify-center gap-2 px-3 py-2 border border-border rounded-lg hover:bg-accent transition",
                onclick: move |_| update_criteria(filters, |c| *c = FilterCriteria::default()),
                XIcon { class: "w-4 h-4" }
                span { "Clear Filters" }
            }
        }
    }
}

/// Collapsible panel of one-click category and price filters
#[component]
pub fn QuickFilters(filters: Signal<FilterState>) -> Element {
    let mut expanded = use_signal(|| false);
    let current = filters.read().criteria.clone();

    rsx! {
        div {
            class: "bg-card border border-border rounded-xl",

            button {
                class: "w-full flex items-center justify-between px-6 py-4 font-semibold",
                onclick: move |_| {
                    let is_open = *expanded.read();
                    expanded.set(!is_open);
                },
                span {
                    class: "flex items-center gap-2",
                    FilterIcon { class: "w-4 h-4" }
                    "Quick Filters"
                }
                if *expanded.read() {
                    ChevronUpIcon { class: "w-4 h-4" }
                } else {
                    ChevronDownIcon { class: "w-4 h-4" }
                }
            }

            if *expanded.read() {
                div {
                    class: "grid grid-cols-1 md:grid-cols-2 gap-8 px-6 pb-6",

                    div {
                        h3 { class: "font-semibold mb-3", "Categories" }
                        div {
                            class: "flex flex-wrap gap-2",
                            for category in CATEGORIES {
                                button {
                                    key: "{category}",
                                    class: chip_class(current.category.as_deref() == Some(category)),
                                    onclick: move |_| {
                                        // Clicking the active chip clears it
                                        update_criteria(filters, |c| {
                                            c.category = if c.category.as_deref() == Some(category) {
                                                None
                                            } else {
                                                Some(category.to_string())
                                            };
                                        });
                                    },
                                    "{category}"
                                }
                            }
                        }
                    }

                    div {
                        h3 { class: "font-semibold mb-3", "Price" }
                        div {
                            class: "flex flex-wrap gap-2",
                            for preset in PRICE_PRESETS {
                                button {
                                    key: "{preset.label}",
                                    class: chip_class(current.price_range == preset.range),
                                    onclick: move |_| {
                                        update_criteria(filters, |c| {
                                            c.price_range = if c.price_range == preset.range {
                                                PriceRange::default()
                                            } else {
                                                preset.range
                                            };
                                        });
                                    },
                                    "{preset.label}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Apply an edit to the shared criteria, skipping no-op writes
///
/// Every effective edit bumps the filter revision, which is what the lists
/// watch to go back to page one and the first batch.
pub fn update_criteria(mut filters: Signal<FilterState>, edit: impl FnOnce(&mut FilterCriteria)) {
    let mut next = filters.peek().clone();
    if next.update(edit) {
        log::debug!("Filter criteria changed (revision {}): {:?}", next.revision, next.criteria);
        filters.set(next);
    }
}

fn chip_class(active: bool) -> &'static str {
    if active {
        "px-3 py-1 rounded-lg text-sm bg-primary text-primary-foreground"
    } else {
        "px-3 py-1 rounded-lg text-sm border border-border hover:bg-accent transition"
    }
}
