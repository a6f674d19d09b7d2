use dioxus::prelude::*;

use crate::components::icons::{HomeIcon, LogOutIcon, ShieldIcon, ShoppingCartIcon, UserIcon};
use crate::routes::Route;
use crate::stores::{AuthStore, CartStore};

/// Top navigation bar with session info and cart badge
#[component]
pub fn Header() -> Element {
    let mut auth = use_context::<AuthStore>();
    let cart = use_context::<CartStore>();
    let navigator = navigator();

    let user = auth.user();
    let signed_in = user.is_some();
    let (tier_name, tier_color) = user
        .as_ref()
        .map(|u| (u.tier.name(), u.tier.color()))
        .unwrap_or_default();
    let cart_count = cart.total_items();

    rsx! {
        header {
            class: "sticky top-0 z-40 bg-background/95 backdrop-blur border-b border-border",
            div {
                class: "max-w-7xl mx-auto px-4 h-16 flex items-center justify-between gap-4",

                Link {
                    to: Route::Home {},
                    class: "flex items-center gap-2 text-xl font-bold hover:opacity-80 transition",
                    HomeIcon { class: "w-6 h-6" }
                    "Bookline"
                }

                nav {
                    class: "flex items-center gap-4",

                    if let Some(user) = user {
                        span {
                            class: "hidden md:flex items-center gap-2 text-sm",
                            span {
                                class: "w-3 h-3 rounded-full",
                                style: "background-color: {tier_color};",
                            }
                            "{tier_name} Tier"
                        }

                        if user.is_admin() {
                            Link {
                                to: Route::Admin {},
                                class: "flex items-center gap-1 text-sm font-medium hover:underline",
                                ShieldIcon { class: "w-4 h-4" }
                                "Welcome Admin"
                            }
                        } else {
                            span {
                                class: "flex items-center gap-1 text-sm",
                                UserIcon { class: "w-4 h-4" }
                                "Welcome, {user.name}"
                            }
                        }
                    }

                    Link {
                        to: Route::CartPage {},
                        class: "relative p-2 rounded-full hover:bg-accent transition",
                        aria_label: "Cart",
                        ShoppingCartIcon { class: "w-5 h-5" }
                        if cart_count > 0 {
                            span {
                                class: "absolute -top-1 -right-1 min-w-5 h-5 px-1 rounded-full bg-primary text-primary-foreground text-xs flex items-center justify-center",
                                "{cart_count}"
                            }
                        }
                    }

                    if signed_in {
                        button {
                            class: "flex items-center gap-1 px-3 py-1.5 border border-border rounded-lg text-sm hover:bg-accent transition",
                            onclick: move |_| {
                                auth.logout();
                                navigator.push(Route::Home {});
                            },
                            LogOutIcon { class: "w-4 h-4" }
                            "Logout"
                        }
                    } else {
                        Link {
                            to: Route::Login {},
                            class: "px-3 py-1.5 border border-border rounded-lg text-sm hover:bg-accent transition",
                            "Login"
                        }
                        Link {
                            to: Route::SignUp {},
                            class: "px-3 py-1.5 bg-primary text-primary-foreground rounded-lg text-sm hover:bg-primary/90 transition",
                            "Sign Up"
                        }
                    }
                }
            }
        }
    }
}
