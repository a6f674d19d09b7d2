use dioxus::prelude::*;

use crate::components::icons::UserIcon;
use crate::routes::Route;
use crate::stores::AuthStore;

#[derive(Clone, Copy, PartialEq, Debug)]
enum AuthTab {
    SignIn,
    SignUp,
}

#[component]
pub fn Login() -> Element {
    rsx! { AuthForm { initial_tab: AuthTab::SignIn } }
}

#[component]
pub fn SignUp() -> Element {
    rsx! { AuthForm { initial_tab: AuthTab::SignUp } }
}

#[component]
fn AuthForm(initial_tab: AuthTab) -> Element {
    let mut auth = use_context::<AuthStore>();
    let navigator = navigator();

    let mut tab = use_signal(|| initial_tab);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    // Following the header links swaps tabs without remounting
    use_effect(use_reactive(&initial_tab, move |initial_tab| {
        tab.set(initial_tab);
        error.set(None);
    }));

    let current_tab = *tab.read();

    let mut switch_tab = move |next: AuthTab| {
        tab.set(next);
        error.set(None);
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let email_value = email.read().clone();
        let password_value = password.read().clone();

        let result = match *tab.read() {
            AuthTab::SignIn => auth.login(&email_value, &password_value),
            AuthTab::SignUp => auth.register(&email_value, &password_value, &confirm.read()),
        };

        match result {
            Ok(user) => {
                log::info!("Signed in as {}", user.email);
                error.set(None);
                password.set(String::new());
                confirm.set(String::new());
                if user.is_admin() {
                    navigator.push(Route::Admin {});
                } else {
                    navigator.push(Route::Home {});
                }
            }
            Err(e) => {
                log::warn!("Authentication failed: {}", e);
                error.set(Some(e.to_string()));
            }
        }
    };

    let tab_class = |active: bool| {
        if active {
            "flex-1 py-2 font-semibold border-b-2 border-primary"
        } else {
            "flex-1 py-2 text-muted-foreground border-b-2 border-transparent hover:text-foreground transition"
        }
    };

    rsx! {
        div {
            class: "max-w-md mx-auto bg-card border border-border rounded-xl p-8 shadow-sm",

            div {
                class: "flex flex-col items-center mb-6",
                UserIcon { class: "w-10 h-10 mb-2" }
                h1 {
                    class: "text-2xl font-bold",
                    if current_tab == AuthTab::SignIn { "Sign in to Bookline" } else { "Create your account" }
                }
            }

            div {
                class: "flex mb-6",
                role: "tablist",
                button {
                    class: tab_class(current_tab == AuthTab::SignIn),
                    role: "tab",
                    onclick: move |_| switch_tab(AuthTab::SignIn),
                    "Sign In"
                }
                button {
                    class: tab_class(current_tab == AuthTab::SignUp),
                    role: "tab",
                    onclick: move |_| switch_tab(AuthTab::SignUp),
                    "Sign Up"
                }
            }

            form {
                class: "space-y-4",
                onsubmit: handle_submit,

                label {
                    class: "block",
                    span { class: "text-sm font-medium", "Email" }
                    input {
                        r#type: "email",
                        autocomplete: "email",
                        placeholder: "you@example.com",
                        value: "{email}",
                        class: "mt-1 w-full px-3 py-2 bg-background border border-border rounded-lg",
                        oninput: move |evt| email.set(evt.value()),
                    }
                }

                label {
                    class: "block",
                    span { class: "text-sm font-medium", "Password" }
                    input {
                        r#type: "password",
                        value: "{password}",
                        class: "mt-1 w-full px-3 py-2 bg-background border border-border rounded-lg",
                        oninput: move |evt| password.set(evt.value()),
                    }
                }

                if current_tab == AuthTab::SignUp {
                    label {
                        class: "block",
                        span { class: "text-sm font-medium", "Confirm Password" }
                        input {
                            r#type: "password",
                            value: "{confirm}",
                            class: "mt-1 w-full px-3 py-2 bg-background border border-border rounded-lg",
                            oninput: move |evt| confirm.set(evt.value()),
                        }
                    }
                }

                if let Some(message) = error.read().clone() {
                    p { class: "text-sm text-destructive", role: "alert", "{message}" }
                }

                button {
                    r#type: "submit",
                    class: "w-full px-4 py-2 bg-primary text-primary-foreground rounded-lg hover:bg-primary/90 transition",
                    if current_tab == AuthTab::SignIn { "Sign In" } else { "Create Account" }
                }
            }
        }
    }
}
