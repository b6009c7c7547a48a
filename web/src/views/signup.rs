//! Signup page view with the customer / service-provider form.

use api::{ApiClient, Role, SignupForm, VALID_PROFESSIONS};
use dioxus::prelude::*;
use ui::icons::{FaBuilding, FaEye, FaEyeSlash, FaUser};
use ui::Icon;

use crate::Route;

/// Signup page component.
///
/// All validation runs locally before any request is sent (see
/// [`api::SignupForm::into_request`]); success redirects to the login page
/// and never touches the session.
#[component]
pub fn Signup() -> Element {
    let client = use_context::<ApiClient>();
    let nav = use_navigator();

    let mut role = use_signal(|| Role::User);
    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut location = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut profession = use_signal(String::new);
    let mut experience_years = use_signal(|| 0i32);
    let mut hourly_rate = use_signal(|| 0f64);
    let mut bio = use_signal(String::new);

    let mut show_password = use_signal(|| false);
    let mut show_confirm = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_signup = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            error.set(None);

            let form = SignupForm {
                first_name: first_name(),
                last_name: last_name(),
                email: email(),
                phone: phone(),
                password: password(),
                confirm_password: confirm_password(),
                location: location(),
                role: Some(role()),
                profession: profession(),
                experience_years: experience_years(),
                hourly_rate: hourly_rate(),
                bio: bio(),
            };

            loading.set(true);
            match client.create_user(form).await {
                Ok(()) => {
                    nav.push(Route::Login {});
                }
                Err(err) => {
                    loading.set(false);
                    error.set(Some(err.to_string()));
                }
            }
        });
    };

    let is_provider = role() == Role::ServiceProvider;

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-card",
                div {
                    class: "auth-heading",
                    h1 { "Create Your Account" }
                }

                // Role toggle
                div {
                    class: "role-toggle",
                    button {
                        r#type: "button",
                        class: if !is_provider { "role-btn role-btn-active" } else { "role-btn" },
                        onclick: move |_| role.set(Role::User),
                        Icon { icon: FaUser, width: 14, height: 14 }
                        span { "Customer" }
                    }
                    button {
                        r#type: "button",
                        class: if is_provider { "role-btn role-btn-active" } else { "role-btn" },
                        onclick: move |_| role.set(Role::ServiceProvider),
                        Icon { icon: FaBuilding, width: 14, height: 14 }
                        span { "Service Provider" }
                    }
                }

                if let Some(err) = error() {
                    div { class: "auth-error", "{err}" }
                }

                form {
                    class: "auth-form",
                    onsubmit: handle_signup,

                    div {
                        class: "field-row",
                        input {
                            placeholder: "First Name",
                            value: first_name(),
                            oninput: move |evt: FormEvent| {
                                first_name.set(evt.value());
                                error.set(None);
                            },
                        }
                        input {
                            placeholder: "Last Name",
                            value: last_name(),
                            oninput: move |evt: FormEvent| {
                                last_name.set(evt.value());
                                error.set(None);
                            },
                        }
                    }

                    input {
                        r#type: "email",
                        placeholder: "Email",
                        value: email(),
                        oninput: move |evt: FormEvent| {
                            email.set(evt.value());
                            error.set(None);
                        },
                    }

                    input {
                        r#type: "tel",
                        placeholder: "Phone Number",
                        value: phone(),
                        oninput: move |evt: FormEvent| {
                            phone.set(evt.value());
                            error.set(None);
                        },
                    }

                    input {
                        r#type: "text",
                        placeholder: "City / Location",
                        value: location(),
                        oninput: move |evt: FormEvent| {
                            location.set(evt.value());
                            error.set(None);
                        },
                    }

                    div {
                        class: "password-field",
                        input {
                            r#type: if show_password() { "text" } else { "password" },
                            placeholder: "Password",
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
                        class: "password-field",
                        input {
                            r#type: if show_confirm() { "text" } else { "password" },
                            placeholder: "Confirm Password",
                            value: confirm_password(),
                            oninput: move |evt: FormEvent| {
                                confirm_password.set(evt.value());
                                error.set(None);
                            },
                        }
                        button {
                            r#type: "button",
                            class: "password-toggle",
                            onclick: move |_| {
                                let shown = show_confirm();
                                show_confirm.set(!shown);
                            },
                            if show_confirm() {
                                Icon { icon: FaEyeSlash, width: 16, height: 16 }
                            } else {
                                Icon { icon: FaEye, width: 16, height: 16 }
                            }
                        }
                    }

                    if is_provider {
                        select {
                            value: profession(),
                            oninput: move |evt: FormEvent| {
                                profession.set(evt.value());
                                error.set(None);
                            },
                            option { value: "", "Select Your Profession" }
                            for name in VALID_PROFESSIONS {
                                option { key: "{name}", value: "{name}", "{name}" }
                            }
                        }

                        div {
                            class: "field-row",
                            input {
                                r#type: "number",
                                min: "0",
                                placeholder: "Years of Experience",
                                value: experience_years(),
                                oninput: move |evt: FormEvent| {
                                    experience_years.set(evt.value().parse().unwrap_or(0));
                                    error.set(None);
                                },
                            }
                            input {
                                r#type: "number",
                                min: "1",
                                placeholder: "Hourly Rate ($)",
                                value: hourly_rate(),
                                oninput: move |evt: FormEvent| {
                                    hourly_rate.set(evt.value().parse().unwrap_or(0.0));
                                    error.set(None);
                                },
                            }
                        }

                        textarea {
                            rows: "4",
                            placeholder: "Short bio (optional)",
                            value: bio(),
                            oninput: move |evt: FormEvent| bio.set(evt.value()),
                        }
                    }

                    button {
                        r#type: "submit",
                        class: "auth-submit",
                        disabled: loading(),
                        if loading() { "Creating Account..." } else { "Create Account" }
                    }
                }

                p {
                    class: "auth-switch",
                    "Already have an account? "
                    Link { to: Route::Login {}, "Log in" }
                }
            }
        }
    }
}
