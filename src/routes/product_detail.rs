use dioxus::prelude::*;

use crate::components::icons::{ArrowLeftIcon, ShoppingCartIcon};
use crate::routes::Route;
use crate::stores::{CartStore, CatalogStore};
use crate::utils::format_price;

#[component]
pub fn ProductDetail(id: u32) -> Element {
    let catalog = use_context::<CatalogStore>();
    let mut cart = use_context::<CartStore>();
    let mut added = use_signal(|| false);

    // Reset the confirmation when navigating between products
    use_effect(use_reactive(&id, move |_| added.set(false)));

    if catalog.state.read().is_loading() || catalog.state.read().is_idle() {
        return rsx! {
            div {
                class: "flex justify-center py-20 text-muted-foreground",
                "Loading product..."
            }
        };
    }

    let Some(product) = catalog.find(id) else {
        log::warn!("Product {} not found", id);
        return rsx! {
            div {
                class: "flex flex-col items-center justify-center py-20 text-center",
                h2 { class: "text-2xl font-bold mb-2", "Product not found" }
                p { class: "text-muted-foreground mb-6", "The book you're looking for doesn't exist or was removed." }
                Link {
                    to: Route::Home {},
                    class: "flex items-center gap-2 px-4 py-2 border border-border rounded-lg hover:bg-accent transition",
                    ArrowLeftIcon { class: "w-4 h-4" }
                    "Back to products"
                }
            }
        };
    };

    let image = product.image.clone().unwrap_or_default();
    let price = format_price(product.price);
    let in_stock = product.stock > 0;
    let product_for_cart = product.clone();

    rsx! {
        div {
            class: "space-y-6",

            Link {
                to: Route::Home {},
                class: "inline-flex items-center gap-2 text-sm text-muted-foreground hover:underline",
                ArrowLeftIcon { class: "w-4 h-4" }
                "Back to products"
            }

            div {
                class: "grid grid-cols-1 md:grid-cols-2 gap-8",

                div {
                    class: "bg-muted rounded-xl overflow-hidden aspect-[3/4]",
                    img {
                        src: "{image}",
                        alt: "{product.name}",
                        class: "object-cover w-full h-full",
                    }
                }

                div {
                    class: "flex flex-col gap-4",
                    span {
                        class: "self-start rounded-full bg-secondary px-3 py-1 text-xs font-medium",
                        "{product.category}"
                    }
                    h1 { class: "text-3xl font-bold", "{product.name}" }
                    p { class: "text-muted-foreground", "{product.description}" }
                    div { class: "text-3xl font-bold text-green-600", "{price}" }
                    p {
                        class: "text-sm",
                        if in_stock {
                            "In stock: {product.stock}"
                        } else {
                            span { class: "text-destructive", "Out of stock" }
                        }
                    }

                    button {
                        class: "flex items-center justify-center gap-2 px-4 py-3 bg-primary text-primary-foreground rounded-lg hover:bg-primary/90 transition disabled:opacity-50",
                        disabled: !in_stock,
                        onclick: move |_| {
                            cart.add_item(&product_for_cart);
                            added.set(true);
                        },
                        ShoppingCartIcon { class: "w-5 h-5" }
                        "Add to Cart"
                    }

                    if *added.read() {
                        p {
                            class: "text-sm text-green-600",
                            "Added to cart. "
                            Link { to: Route::CartPage {}, class: "underline", "View cart" }
                        }
                    }
                }
            }
        }
    }
}
