use dioxus::prelude::*;

use crate::components::icons::{ArrowLeftIcon, PlusIcon, ShoppingCartIcon, TrashIcon};
use crate::components::CheckoutModal;
use crate::routes::Route;
use crate::stores::cart_store::{CartLine, MAX_LINE_QUANTITY};
use crate::stores::{AuthStore, CartStore};
use crate::utils::format_price;
use crate::utils::validation::parse_count;

#[component]
pub fn CartPage() -> Element {
    let mut cart = use_context::<CartStore>();
    let auth = use_context::<AuthStore>();
    let mut show_checkout = use_signal(|| false);
    let mut confirmation = use_signal(|| None::<String>);

    let lines = cart.cart.read().lines().to_vec();
    let summary = cart.summary();
    let item_count = cart.total_items();
    let tier_note = auth.user().map(|user| {
        format!(
            "{} Tier members enjoy {}% off selected titles.",
            user.tier.name(),
            user.tier.discount_percentage()
        )
    });

    let subtotal = format_price(summary.subtotal);
    let discount = format_price(summary.discount);
    let total = format_price(summary.total);
    let percentage = summary.discount_percentage;

    rsx! {
        div {
            class: "space-y-6",

            h1 {
                class: "flex items-center gap-2 text-3xl font-bold",
                ShoppingCartIcon { class: "w-7 h-7" }
                "Checkout Cart"
            }

            if let Some(message) = confirmation.read().clone() {
                div {
                    class: "p-4 rounded-lg bg-green-500/10 text-green-700 border border-green-500/30",
                    "{message}"
                }
            }

            if lines.is_empty() {
                div {
                    class: "flex flex-col items-center justify-center py-20 text-center",
                    p { class: "text-xl text-muted-foreground mb-6", "Your cart is empty" }
                    Link {
                        to: Route::Home {},
                        class: "flex items-center gap-2 px-4 py-2 bg-primary text-primary-foreground rounded-lg hover:bg-primary/90 transition",
                        ArrowLeftIcon { class: "w-4 h-4" }
                        "Continue shopping"
                    }
                }
            } else {
                div {
                    class: "grid grid-cols-1 lg:grid-cols-3 gap-8",

                    ul {
                        class: "lg:col-span-2 space-y-4",
                        for line in lines {
                            CartLineRow { key: "{line.product_id}", line }
                        }
                    }

                    aside {
                        class: "bg-card border border-border rounded-xl p-6 h-fit space-y-4",
                        h2 { class: "text-xl font-bold", "Order Summary" }
                        dl {
                            class: "space-y-2 text-sm",
                            div {
                                class: "flex justify-between",
                                dt { class: "text-muted-foreground", "Items" }
                                dd { "{item_count}" }
                            }
                            div {
                                class: "flex justify-between",
                                dt { class: "text-muted-foreground", "Subtotal" }
                                dd { "{subtotal}" }
                            }
                            if percentage > 0 {
                                div {
                                    class: "flex justify-between text-green-600",
                                    dt { "Discount ({percentage}%)" }
                                    dd { "-{discount}" }
                                }
                            }
                            div {
                                class: "flex justify-between text-lg font-bold border-t border-border pt-2",
                                dt { "Total" }
                                dd { "{total}" }
                            }
                        }
                        button {
                            class: "w-full px-4 py-3 bg-primary text-primary-foreground rounded-lg hover:bg-primary/90 transition disabled:opacity-50",
                            disabled: item_count == 0,
                            onclick: move |_| {
                                confirmation.set(None);
                                show_checkout.set(true);
                            },
                            "Proceed to Checkout"
                        }
                        button {
                            class: "w-full flex items-center justify-center gap-2 px-4 py-2 border border-border rounded-lg hover:bg-accent transition",
                            onclick: move |_| cart.clear(),
                            TrashIcon { class: "w-4 h-4" }
                            "Clear Cart"
                        }
                    }
                }
            }

            if *show_checkout.read() {
                CheckoutModal {
                    summary,
                    item_count,
                    tier_note,
                    on_confirm: move |_| {
                        let charged = cart.checkout();
                        confirmation.set(Some(format!(
                            "Checkout successful! You were charged {}.",
                            format_price(charged.total)
                        )));
                        show_checkout.set(false);
                    },
                    on_cancel: move |_| show_checkout.set(false),
                }
            }
        }
    }
}

#[component]
fn CartLineRow(line: CartLine) -> Element {
    let mut cart = use_context::<CartStore>();
    let product_id = line.product_id;
    let quantity = line.quantity as i64;
    let image = line.image.clone().unwrap_or_default();

    rsx! {
        li {
            class: "flex items-center gap-4 bg-card border border-border rounded-xl p-4",

            img {
                src: "{image}",
                alt: "{line.name}",
                class: "w-16 h-20 object-cover rounded-md bg-muted",
            }

            div {
                class: "flex-1 min-w-0",
                Link {
                    to: Route::ProductDetail { id: product_id },
                    class: "font-semibold hover:underline line-clamp-1",
                    "{line.name}"
                }
                p { class: "text-sm text-muted-foreground", {format_price(line.price)} }
            }

            div {
                class: "flex items-center gap-2",
                button {
                    class: "w-8 h-8 border border-border rounded-lg hover:bg-accent transition",
                    aria_label: "Decrease quantity",
                    onclick: move |_| cart.set_quantity(product_id, quantity - 1),
                    "-"
                }
                input {
                    r#type: "number",
                    min: "0",
                    max: "{MAX_LINE_QUANTITY}",
                    value: "{quantity}",
                    class: "w-16 px-2 py-1 text-center bg-background border border-border rounded-lg",
                    oninput: move |evt| {
                        if let Some(next) = parse_count(&evt.value()) {
                            cart.set_quantity(product_id, next as i64);
                        }
                    },
                }
                button {
                    class: "w-8 h-8 flex items-center justify-center border border-border rounded-lg hover:bg-accent transition",
                    aria_label: "Increase quantity",
                    onclick: move |_| cart.set_quantity(product_id, quantity + 1),
                    PlusIcon { class: "w-4 h-4" }
                }
            }

            div { class: "w-24 text-right font-semibold", {format_price(line.line_total())} }

            button {
                class: "p-2 text-destructive rounded-lg hover:bg-destructive/10 transition",
                aria_label: "Remove",
                onclick: move |_| cart.remove_item(product_id),
                TrashIcon { class: "w-4 h-4" }
            }
        }
    }
}
