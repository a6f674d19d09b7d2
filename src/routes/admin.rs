use dioxus::prelude::*;

use crate::components::icons::{EditIcon, PlusIcon, ShieldIcon, TrashIcon, XIcon};
use crate::routes::Route;
use crate::services::mock_catalog::CATEGORIES;
use crate::services::Product;
use crate::stores::{AuthStore, CatalogStore, ProductForm};
use crate::utils::format::truncate_text;
use crate::utils::format_price;

const DESCRIPTION_PREVIEW_CHARS: usize = 90;

/// Which product the editor modal is working on
#[derive(Clone, Copy, PartialEq, Debug)]
enum EditorTarget {
    New,
    Existing(u32),
}

#[component]
pub fn Admin() -> Element {
    let auth = use_context::<AuthStore>();

    if !auth.is_admin() {
        return rsx! {
            div {
                class: "flex flex-col items-center justify-center py-20 text-center",
                ShieldIcon { class: "w-12 h-12 text-muted-foreground mb-2" }
                h2 { class: "text-2xl font-bold mb-2", "Admins only" }
                p { class: "text-muted-foreground mb-6", "Sign in with an admin account to manage the catalog." }
                Link {
                    to: Route::Login {},
                    class: "px-4 py-2 bg-primary text-primary-foreground rounded-lg hover:bg-primary/90 transition",
                    "Sign In"
                }
            }
        };
    }

    rsx! { Dashboard {} }
}

#[component]
fn Dashboard() -> Element {
    let mut catalog = use_context::<CatalogStore>();
    let mut editor = use_signal(|| None::<EditorTarget>);

    let products = catalog.products();
    let product_count = products.len();

    rsx! {
        div {
            class: "space-y-8",

            div {
                class: "flex items-center justify-between",
                h1 { class: "text-3xl font-bold", "Admin Dashboard" }
                button {
                    class: "flex items-center gap-2 px-4 py-2 bg-primary text-primary-foreground rounded-lg hover:bg-primary/90 transition",
                    onclick: move |_| editor.set(Some(EditorTarget::New)),
                    PlusIcon { class: "w-4 h-4" }
                    "Add Product"
                }
            }

            div {
                class: "grid grid-cols-1 md:grid-cols-3 gap-4",
                StatCard { label: "Total Products", value: product_count.to_string() }
                StatCard { label: "Total Orders", value: "0".to_string() }
                StatCard { label: "Revenue", value: format_price(0.0) }
            }

            div {
                class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
                for product in products {
                    AdminProductCard {
                        key: "{product.id}",
                        product,
                        on_edit: move |id| editor.set(Some(EditorTarget::Existing(id))),
                        on_delete: move |id| {
                            catalog.remove(id);
                        },
                    }
                }
            }

            if let Some(target) = *editor.read() {
                ProductEditor {
                    target,
                    on_close: move |_| editor.set(None),
                }
            }
        }
    }
}

#[component]
fn StatCard(label: &'static str, value: String) -> Element {
    rsx! {
        div {
            class: "bg-card border border-border rounded-xl p-6",
            p { class: "text-sm text-muted-foreground", "{label}" }
            p { class: "text-3xl font-bold mt-1", "{value}" }
        }
    }
}

#[component]
fn AdminProductCard(product: Product, on_edit: EventHandler<u32>, on_delete: EventHandler<u32>) -> Element {
    let id = product.id;
    let price = format_price(product.price);
    let summary = truncate_text(&product.description, DESCRIPTION_PREVIEW_CHARS);

    rsx! {
        div {
            class: "bg-card border border-border rounded-xl p-4 flex flex-col gap-2",
            div {
                class: "flex items-start justify-between gap-2",
                h3 { class: "font-semibold line-clamp-1", "{product.name}" }
                span { class: "text-xs rounded-full bg-secondary px-2 py-0.5", "{product.category}" }
            }
            p { class: "text-sm text-muted-foreground", title: "{product.description}", "{summary}" }
            div {
                class: "flex items-center justify-between text-sm",
                span { class: "font-bold text-green-600", "{price}" }
                span { "Stock: {product.stock}" }
            }
            div {
                class: "flex gap-2 mt-2",
                button {
                    class: "flex-1 flex items-center justify-center gap-1 px-3 py-1.5 border border-border rounded-lg text-sm hover:bg-accent transition",
                    onclick: move |_| on_edit.call(id),
                    EditIcon { class: "w-4 h-4" }
                    "Edit"
                }
                button {
                    class: "flex-1 flex items-center justify-center gap-1 px-3 py-1.5 bg-destructive text-destructive-foreground rounded-lg text-sm hover:bg-destructive/90 transition",
                    onclick: move |_| on_delete.call(id),
                    TrashIcon { class: "w-4 h-4" }
                    "Delete"
                }
            }
        }
    }
}

/// Modal form for adding or editing a product
#[component]
fn ProductEditor(target: EditorTarget, on_close: EventHandler<()>) -> Element {
    let mut catalog = use_context::<CatalogStore>();

    let initial = match target {
        EditorTarget::New => ProductForm::default(),
        EditorTarget::Existing(id) => catalog
            .find(id)
            .map(|p| ProductForm::from_product(&p))
            .unwrap_or_default(),
    };
    let mut form = use_signal(|| initial);
    let mut error = use_signal(|| None::<String>);

    let title = match target {
        EditorTarget::New => "Add New Product",
        EditorTarget::Existing(_) => "Edit Product",
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let current = form.read().clone();
        let result = match target {
            EditorTarget::New => catalog.add(&current).map(|_| ()),
            EditorTarget::Existing(id) => catalog.update(id, &current),
        };

        match result {
            Ok(()) => on_close.call(()),
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    let current = form.read().clone();
    let input_class = "mt-1 w-full px-3 py-2 bg-background border border-border rounded-lg";

    rsx! {
        div {
            class: "fixed inset-0 bg-black/50 z-50 flex items-center justify-center p-4",
            onclick: move |_| on_close.call(()),

            div {
                class: "bg-card border border-border rounded-xl max-w-lg w-full p-6 shadow-xl",
                role: "dialog",
                aria_modal: "true",
                onclick: move |e| e.stop_propagation(),

                div {
                    class: "flex items-center justify-between mb-4",
                    h2 { class: "text-lg font-bold", "{title}" }
                    button {
                        class: "p-1 rounded-lg hover:bg-accent transition",
                        aria_label: "Close",
                        onclick: move |_| on_close.call(()),
                        XIcon { class: "w-4 h-4" }
                    }
                }

                form {
                    class: "space-y-3",
                    onsubmit: handle_submit,

                    label {
                        class: "block",
                        span { class: "text-sm font-medium", "Name" }
                        input {
                            value: "{current.name}",
                            class: input_class,
                            oninput: move |evt| form.write().name = evt.value(),
                        }
                    }
                    label {
                        class: "block",
                        span { class: "text-sm font-medium", "Description" }
                        textarea {
                            value: "{current.description}",
                            rows: "3",
                            class: input_class,
                            oninput: move |evt| form.write().description = evt.value(),
                        }
                    }
                    div {
                        class: "grid grid-cols-2 gap-3",
                        label {
                            class: "block",
                            span { class: "text-sm font-medium", "Price" }
                            input {
                                r#type: "number",
                                step: "0.01",
                                min: "0",
                                value: "{current.price}",
                                class: input_class,
                                oninput: move |evt| form.write().price = evt.value(),
                            }
                        }
                        label {
                            class: "block",
                            span { class: "text-sm font-medium", "Stock" }
                            input {
                                r#type: "number",
                                min: "0",
                                value: "{current.stock}",
                                class: input_class,
                                oninput: move |evt| form.write().stock = evt.value(),
                            }
                        }
                    }
                    label {
                        class: "block",
                        span { class: "text-sm font-medium", "Category" }
                        select {
                            class: input_class,
                            value: "{current.category}",
                            onchange: move |evt| form.write().category = evt.value(),
                            option { value: "", "Select a category" }
                            for category in CATEGORIES {
                                option {
                                    key: "{category}",
                                    value: "{category}",
                                    selected: current.category == category,
                                    "{category}"
                                }
                            }
                        }
                    }

                    if let Some(message) = error.read().clone() {
                        p { class: "text-sm text-destructive", role: "alert", "{message}" }
                    }

                    div {
                        class: "flex gap-3 justify-end pt-2",
                        button {
                            r#type: "button",
                            class: "px-4 py-2 rounded-lg hover:bg-accent transition",
                            onclick: move |_| on_close.call(()),
                            "Cancel"
                        }
                        button {
                            r#type: "submit",
                            class: "px-4 py-2 bg-primary text-primary-foreground rounded-lg hover:bg-primary/90 transition",
                            "Save"
                        }
                    }
                }
            }
        }
    }
}
