use dioxus::prelude::*;
use ui::{Categories, Hero, HowItWorks, JoinProviderSection, Testimonials};

/// Landing page: hero search, category grid, and the marketing sections.
#[component]
pub fn Home() -> Element {
    rsx! {
        Hero {}
        Categories {}
        div {
            class: "page-container",
            JoinProviderSection {}
            HowItWorks {}
            Testimonials {}
        }
    }
}
