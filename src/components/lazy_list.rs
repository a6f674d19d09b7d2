use dioxus::prelude::*;

use crate::components::icons::RefreshIcon;
use crate::components::product_grid::{grid_style, ListFooter, ProductTile};
use crate::hooks::{use_incremental_list, use_infinite_scroll, use_viewport};
use crate::listing::layout::plan_with;
use crate::listing::{ListingConfig, ViewMode, Viewport};
use crate::services::Product;

/// Incrementally loaded product list
///
/// Shows the first batch, then appends a batch whenever the sentinel under
/// the last item scrolls into the container or the "Load more" button is
/// pressed. A new filter `revision` or a changed collection starts over from
/// the first batch.
#[component]
pub fn LazyList(items: Vec<Product>, view_mode: ViewMode, revision: u64) -> Element {
    let config = use_context::<ListingConfig>();
    let viewport = use_viewport(Viewport {
        height: config.container_height,
        ..Default::default()
    });
    let list = use_incremental_list(&items, revision);

    let sentinel_id = use_infinite_scroll(
        move || list.load_more(),
        list.can_load,
        Some(viewport.container_id.clone()),
    );

    let viewport_for_reset = viewport.clone();
    use_effect(use_reactive((&items, &revision), move |_| {
        viewport_for_reset.scroll_to_top();
    }));

    let state = list.loader.read().state();
    let visible = list.loader.read().visible(&items).to_vec();

    let width = viewport.viewport.read().width;
    let geometry = plan_with(&config, items.len(), view_mode, width);
    let gap = geometry.row_extent - geometry.item_extent;
    let rows_style = grid_style(geometry.columns, gap);
    let item_height = geometry.item_extent;
    let total = items.len();

    rsx! {
        div {
            id: "{viewport.container_id}",
            class: "overflow-y-auto border border-border rounded-xl p-2",
            style: "height: {config.container_height}px;",

            div {
                style: "{rows_style} row-gap: {gap}px;",
                for product in visible {
                    div {
                        key: "{product.id}",
                        style: "height: {item_height}px;",
                        ProductTile { product, view_mode }
                    }
                }
            }

            if state.is_loading {
                div {
                    class: "flex items-center justify-center gap-2 py-6 text-muted-foreground",
                    RefreshIcon { class: "w-4 h-4 animate-spin" }
                    span { "Loading more products..." }
                }
            }

            if state.has_more {
                // Sentinel: its visibility drives automatic loading
                div { id: "{sentinel_id}", class: "h-4" }

                div {
                    class: "flex justify-center py-4",
                    button {
                        class: "px-4 py-2 border border-border rounded-lg hover:bg-accent transition disabled:opacity-50",
                        disabled: state.is_loading,
                        onclick: move |_| list.load_more(),
                        "Load more"
                    }
                }
                ListFooter { shown: state.loaded_count, total }
            } else if total > 0 {
                ListFooter { shown: state.loaded_count, total, end_of_list: true }
            }
        }
    }
}
