//! Login page view with the email/password form.

use api::ApiClient;
use dioxus::prelude::*;
use ui::icons::{FaEye, FaEyeSlash};
use ui::{complete_login, use_session, Icon};

use crate::Route;

/// Login page component.
///
/// One-shot request/response: submit moves the form from idle to submitting;
/// success writes the session and navigates to the dashboard, failure
/// surfaces the backend message and returns the form to an editable idle
/// state. The message stays up until the next submit or field edit.
#[component]
pub fn Login() -> Element {
    let client = use_context::<ApiClient>();
    let mut session = use_session();
    let nav = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut show_password = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            error.set(None);
            loading.set(true);

            match client.login(email().trim(), &password()).await {
                Ok(data) => {
                    complete_login(&mut session, data);
                    nav.push(Route::Dashboard {});
                }
                Err(err) => {
                    loading.set(false);
                    error.set(Some(err.to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-card",
                div {
                    class: "auth-heading",
                    h1 { "Welcome Back" }
                    p { "Sign in to your account" }
                }

                if let Some(err) = error() {
                    div { class: "auth-error", "{err}" }
                }

                form {
                    class: "auth-form",
                    onsubmit: handle_login,

                    label { r#for: "email", "Email Address *" }
                    input {
                        id: "email",
                        r#type: "email",
                        required: true,
                        value: email(),
                        oninput: move |evt: FormEvent| {
                            email.set(evt.value());
                            error.set(None);
                        },
                    }

                    label { r#for: "password", "Password *" }
                    div {
                        class: "password-field",
                        input {
                            id: "password",
                            r#type: if show_password() { "text" } else { "password" },
                            required: true,
                            value: password(),
                            oninput: move |evt: FormEvent| {
                                password.set(evt.value());
                                error.set(None);
                            },
                        }
                        button {
                            r#type: "button",
                            class: "password-toggle",
                            onclick: move |_| {
                                let shown = show_password();
                                show_password.set(!shown);
                            },
                            if show_password() {
                                Icon { icon: FaEyeSlash, width: 16, height: 16 }
                            } else {
                                Icon { icon: FaEye, width: 16, height: 16 }
                            }
                        }
                    }

                    div {
                        class: "auth-aside",
                        a { href: "/forgot-password", "Forgot password?" }
                    }

                    button {
                        r#type: "submit",
                        class: "auth-submit",
                        disabled: loading(),
                        if loading() { "Login..." } else { "Login" }
                    }
                }

                p {
                    class: "auth-switch",
                    "Don't have an account? "
                    Link { to: Route::Signup {}, "Sign Up" }
                }
            }
        }
    }
}
