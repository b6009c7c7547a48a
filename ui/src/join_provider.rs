use dioxus::prelude::*;

#[component]
pub fn JoinProviderSection() -> Element {
    rsx! {
        section {
            class: "join-provider",
            h1 { "Join As A Service Provider" }
            p {
                "Connect with thousands of clients looking for your expertise. Grow "
                "your business with our trusted platform designed for professionals "
                "like you."
            }
            a { class: "join-provider-btn", href: "/signup", "Join Now" }
        }
    }
}
