//! Small shared pieces: logo, loading spinner, section title.

use dioxus::prelude::*;

#[component]
pub fn Logo() -> Element {
    rsx! {
        a {
            class: "logo",
            href: "/",
            span { class: "logo-mark", "T" }
            span { class: "logo-text", "TrainerHub" }
        }
    }
}

#[component]
pub fn Loader() -> Element {
    rsx! {
        div {
            class: "loader",
            div { class: "loader-spinner" }
        }
    }
}

#[component]
pub fn SectionTitle(title: String, #[props(default)] subtitle: Option<String>) -> Element {
    rsx! {
        div {
            class: "section-heading",
            h2 { "{title}" }
            if let Some(subtitle) = subtitle {
                p { "{subtitle}" }
            }
        }
    }
}
