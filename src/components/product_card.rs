use dioxus::prelude::*;

use crate::components::icons::ShoppingCartIcon;
use crate::routes::Route;
use crate::services::Product;
use crate::stores::CartStore;
use crate::utils::format_price;

/// Grid card for one product
#[component]
pub fn ProductCard(product: Product) -> Element {
    let mut cart = use_context::<CartStore>();
    let image = product.image.clone().unwrap_or_default();
    let id = product.id;
    let product_for_cart = product.clone();

    rsx! {
        div {
            class: "h-full flex flex-col bg-card border border-border rounded-xl overflow-hidden hover:shadow-lg transition-shadow group",
            "data-testid": "product-card",

            Link {
                to: Route::ProductDetail { id },
                class: "relative block h-36 bg-muted overflow-hidden",
                img {
                    src: "{image}",
                    alt: "{product.name}",
                    loading: "lazy",
                    class: "object-cover w-full h-full transition-transform group-hover:scale-105",
                }
                span {
                    class: "absolute top-2 right-2 rounded-full bg-background/90 px-3 py-1 text-xs font-medium",
                    "{product.category}"
                }
            }

            div {
                class: "flex-1 flex flex-col p-3 gap-1",
                h3 {
                    class: "text-lg font-semibold line-clamp-1",
                    title: "{product.name}",
                    "{product.name}"
                }
                p {
                    class: "text-sm text-muted-foreground line-clamp-2",
                    title: "{product.description}",
                    "{product.description}"
                }
                div {
                    class: "mt-auto flex items-center justify-between",
                    span {
                        class: "text-xl font-bold text-green-600",
                        {format_price(product.price)}
                    }
                    span {
                        class: "text-sm text-muted-foreground",
                        "Stock: "
                        span { class: "font-bold italic", "{product.stock}" }
                    }
                }
                button {
                    class: "mt-2 w-full flex items-center justify-center gap-2 px-3 py-1.5 bg-primary text-primary-foreground rounded-lg text-sm hover:bg-primary/90 transition",
                    onclick: move |_| cart.add_item(&product_for_cart),
                    ShoppingCartIcon { class: "w-4 h-4" }
                    "Add to Cart"
                }
            }
        }
    }
}

/// Compact row for the list view
#[component]
pub fn ProductListItem(product: Product) -> Element {
    let mut cart = use_context::<CartStore>();
    let id = product.id;
    let product_for_cart = product.clone();

    rsx! {
        div {
            class: "h-full bg-card border border-border rounded-xl hover:shadow-md transition-shadow px-3 py-2",
            "data-testid": "product-list-item",

            div {
                class: "flex items-center gap-6 h-full",
                div {
                    class: "w-20 h-20 bg-muted flex items-center justify-center rounded-lg flex-shrink-0 text-2xl",
                    "📚"
                }

                div {
                    class: "flex-1 min-w-0",
                    h3 {
                        class: "text-lg font-semibold mb-1 line-clamp-1",
                        "{product.name}"
                    }
                    p {
                        class: "text-sm text-muted-foreground mb-2 line-clamp-2",
                        "{product.description}"
                    }
                    div {
                        class: "flex items-center gap-4 text-sm text-muted-foreground",
                        span { class: "bg-secondary px-2 py-1 rounded-md", "{product.category}" }
                        span {
                            "Stock: "
                            span { class: "font-bold italic", "{product.stock}" }
                        }
                    }
                }

                div {
                    class: "flex flex-col items-end gap-3 ml-4",
                    div {
                        class: "text-2xl font-bold text-green-600",
                        {format_price(product.price)}
                    }
                    div {
                        class: "flex gap-2",
                        Link {
                            to: Route::ProductDetail { id },
                            class: "px-3 py-1.5 border border-border rounded-lg text-sm hover:bg-accent transition",
                            "View"
                        }
                        button {
                            class: "flex items-center gap-2 px-3 py-1.5 bg-primary text-primary-foreground rounded-lg text-sm hover:bg-primary/90 transition",
                            onclick: move |_| cart.add_item(&product_for_cart),
                            ShoppingCartIcon { class: "w-4 h-4" }
                            "Add to Cart"
                        }
                    }
                }
            }
        }
    }
}

/// Placeholder shown while the catalog loads
#[component]
pub fn ProductCardSkeleton() -> Element {
    rsx! {
        div {
            class: "h-72 bg-card border border-border rounded-xl overflow-hidden animate-pulse",
            div { class: "h-36 bg-muted" }
            div {
                class: "p-3 space-y-2",
                div { class: "h-4 bg-muted rounded w-3/4" }
                div { class: "h-3 bg-muted rounded w-full" }
                div { class: "h-3 bg-muted rounded w-1/2" }
            }
        }
    }
}
