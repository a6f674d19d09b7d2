use dioxus::prelude::*;

pub mod home;
pub mod product_detail;
pub mod cart;
pub mod login;
pub mod admin;

use home::Home;
use product_detail::ProductDetail;
use cart::CartPage;
use login::{Login, SignUp};
use admin::Admin;

use crate::components::Header;

/// App routes
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/")]
        Home {},

        #[route("/products/:id")]
        ProductDetail { id: u32 },

        #[route("/cart")]
        CartPage {},

        #[route("/login")]
        Login {},

        #[route("/signup")]
        SignUp {},

        #[route("/admin")]
        Admin {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div {
            class: "min-h-screen bg-background text-foreground transition-colors",

            Header {}

            main {
                class: "max-w-7xl mx-auto px-4 py-8",
                Outlet::<Route> {}
            }

            footer {
                class: "border-t border-border py-6 text-center text-sm text-muted-foreground",
                "Bookline"
            }
        }
    }
}
