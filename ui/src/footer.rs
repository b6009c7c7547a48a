use dioxus::prelude::*;

const PAGES_LINKS: [(&str, &str); 3] = [
    ("/", "Home"),
    ("/service-providers", "Hire A Service Provider"),
    ("/signup", "Become A Service Provider"),
];

const CONTACT_INFO: [&str; 3] = [
    "123 Main Street, Downtown",
    "+880 123-456-789",
    "support@trainerhub.com",
];

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer {
            class: "site-footer",
            div {
                class: "footer-columns",
                div {
                    class: "footer-about",
                    h2 { "TrainerHub" }
                    p {
                        "TrainerHub connects you with certified personal trainers, yoga "
                        "instructors, nutrition coaches, and wellness experts. Find the "
                        "right coach for your fitness, health, and lifestyle goals — "
                        "anytime, anywhere."
                    }
                }
                div {
                    h3 { "Pages" }
                    ul {
                        for (href, label) in PAGES_LINKS {
                            li { key: "{href}",
                                a { href: "{href}", "{label}" }
                            }
                        }
                    }
                }
                div {
                    h3 { "Contact" }
                    ul {
                        for label in CONTACT_INFO {
                            li { key: "{label}", "{label}" }
                        }
                    }
                }
            }
            div {
                class: "footer-bottom",
                p { "© 2025 TrainerHub. All Rights Reserved." }
            }
        }
    }
}
