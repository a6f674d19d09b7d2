//! Windowed product list
//!
//! Only the rows intersecting the scroll container (plus a buffer row on
//! each side) are in the DOM. A spacer with the full content height keeps the
//! scrollbar honest and the materialized rows are translated to where they
//! would sit in the full list.
//!
//! Geometry comes from the layout planner and the visible range from the
//! windowing engine; both are recomputed on every scroll and resize event.

use dioxus::prelude::*;

use crate::components::product_grid::{grid_style, ProductTile};
use crate::hooks::use_viewport;
use crate::listing::layout::plan_with;
use crate::listing::window::{compute_window_with_buffer, Window};
use crate::listing::{Geometry, ListingConfig, ViewMode, Viewport};
use crate::services::Product;

#[component]
pub fn VirtualList(items: Vec<Product>, view_mode: ViewMode, revision: u64) -> Element {
    let config = use_context::<ListingConfig>();
    let viewport = use_viewport(Viewport {
        height: config.container_height,
        ..Default::default()
    });

    // A new filter revision or collection starts from the top
    let viewport_for_reset = viewport.clone();
    use_effect(use_reactive((&items, &view_mode, &revision), move |_| {
        viewport_for_reset.scroll_to_top();
    }));

    let current = *viewport.viewport.read();
    let (geometry, window) = frame(&config, items.len(), view_mode, current);
    let visible = window.range.slice(&items);

    log::trace!(
        "VirtualList: rendering {}..{} of {} ({} columns, offset {}px)",
        window.range.start,
        window.range.end,
        items.len(),
        geometry.columns,
        window.offset
    );

    let total_extent = geometry.total_extent;
    let offset = window.offset;
    let row_extent = geometry.row_extent;
    let gap = geometry.row_extent - geometry.item_extent;
    let rows_style = grid_style(geometry.columns, gap);
    let rendered = visible.len();
    let total = items.len();
    let viewport_for_scroll = viewport.clone();

    rsx! {
        div {
            class: "space-y-2",

            div {
                class: "flex justify-between text-xs text-muted-foreground",
                span { "Rendering {rendered} of {total} items" }
                span { "{geometry.columns} columns" }
            }

            div {
                id: "{viewport.container_id}",
                class: "overflow-y-auto relative border border-border rounded-xl p-2",
                style: "height: {config.container_height}px;",
                onscroll: move |_| viewport_for_scroll.on_scroll(),

                // Spacer for the full content height (creates the scrollbar)
                div {
                    style: "height: {total_extent}px; position: relative;",

                    div {
                        style: "position: absolute; top: 0; left: 0; right: 0; transform: translateY({offset}px); {rows_style}",
                        for product in visible.iter() {
                            div {
                                key: "{product.id}",
                                style: "height: {row_extent}px; padding-bottom: {gap}px;",
                                ProductTile { product: product.clone(), view_mode }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Geometry and window for one viewport reading
///
/// A container that has not been measured yet uses the configured height.
fn frame(config: &ListingConfig, item_count: usize, view_mode: ViewMode, viewport: Viewport) -> (Geometry, Window) {
    let container_height = if viewport.height > 0.0 { viewport.height } else { config.container_height };
    let geometry = plan_with(config, item_count, view_mode, viewport.width);
    let window = compute_window_with_buffer(viewport.scroll_top, container_height, &geometry, config.buffer_rows);
    (geometry, window)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unmeasured_container_uses_configured_height() {
        let config = ListingConfig::default();
        let unmeasured = Viewport { scroll_top: 0.0, height: 0.0, width: 1280.0 };
        let measured = Viewport { height: config.container_height, ..unmeasured };

        let (_, window) = frame(&config, 200, ViewMode::Grid, unmeasured);
        assert_eq!(window, frame(&config, 200, ViewMode::Grid, measured).1);
        assert_eq!(window.range.start, 0);
        assert!(!window.range.is_empty());
    }

    #[test]
    fn test_list_window_follows_scroll() {
        let config = ListingConfig::default();
        // Ten list rows of 136px scrolled past, one buffer row kept above
        let viewport = Viewport { scroll_top: 1360.0, height: 600.0, width: 500.0 };

        let (geometry, window) = frame(&config, 200, ViewMode::List, viewport);
        assert_eq!(geometry.columns, 1);
        assert_eq!(window.range.start, 9);
        assert_eq!(window.range.end, 16);
        assert_eq!(window.offset, 9.0 * 136.0);
    }
}
