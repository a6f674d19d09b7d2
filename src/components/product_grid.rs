use dioxus::prelude::*;

use crate::components::product_card::{ProductCard, ProductListItem};
use crate::listing::ViewMode;
use crate::services::Product;

/// Card or row for one product, depending on the view mode
#[component]
pub fn ProductTile(product: Product, view_mode: ViewMode) -> Element {
    match view_mode {
        ViewMode::Grid => rsx! { ProductCard { product } },
        ViewMode::List => rsx! { ProductListItem { product } },
    }
}

/// Inline CSS for a grid of `columns` equal columns
pub fn grid_style(columns: usize, gap: f64) -> String {
    format!(
        "display: grid; grid-template-columns: repeat({}, minmax(0, 1fr)); column-gap: {}px;",
        columns.max(1),
        gap
    )
}

/// "Showing N of M products" banner under a list
#[component]
pub fn ListFooter(shown: usize, total: usize, #[props(default = false)] end_of_list: bool) -> Element {
    rsx! {
        div {
            class: "py-6 text-center text-sm text-muted-foreground",
            if end_of_list {
                p { class: "font-medium", "You've reached the end of the list" }
            }
            p { {crate::utils::showing_label(shown, total)} }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_style() {
        assert_eq!(
            grid_style(3, 24.0),
            "display: grid; grid-template-columns: repeat(3, minmax(0, 1fr)); column-gap: 24px;"
        );
        assert!(grid_style(0, 16.0).contains("repeat(1,"));
    }
}
