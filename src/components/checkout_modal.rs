use dioxus::prelude::*;

use crate::stores::CheckoutSummary;
use crate::utils::format_price;

/// Order confirmation dialog shown before the cart is cleared
#[component]
pub fn CheckoutModal(
    summary: CheckoutSummary,
    item_count: u32,
    #[props(default = None)] tier_note: Option<String>,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let subtotal = format_price(summary.subtotal);
    let discount = format_price(summary.discount);
    let total = format_price(summary.total);
    let percentage = summary.discount_percentage;

    rsx! {
        // Clicking the overlay cancels
        div {
            class: "fixed inset-0 bg-black/50 z-50 flex items-center justify-center p-4",
            onclick: move |_| on_cancel.call(()),

            div {
                class: "bg-card border border-border rounded-xl max-w-sm w-full p-6 shadow-xl",
                role: "dialog",
                aria_modal: "true",
                aria_labelledby: "checkout-title",
                onclick: move |e| e.stop_propagation(),

                h2 {
                    class: "text-lg font-bold mb-4",
                    id: "checkout-title",
                    "Confirm Order"
                }

                dl {
                    class: "space-y-2 text-sm mb-6",
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
                        class: "flex justify-between font-bold border-t border-border pt-2",
                        dt { "Total" }
                        dd { "{total}" }
                    }
                }

                if let Some(note) = tier_note {
                    p { class: "text-xs text-muted-foreground mb-4", "{note}" }
                }

                div {
                    class: "flex gap-3 justify-end",
                    button {
                        class: "px-4 py-2 rounded-lg hover:bg-accent transition",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: "px-4 py-2 bg-primary text-primary-foreground rounded-lg hover:bg-primary/90 transition",
                        onclick: move |_| on_confirm.call(()),
                        "Place Order"
                    }
                }
            }
        }
    }
}
