use dioxus::prelude::*;

use crate::icons::brands::{FaApple, FaGooglePlay};
use crate::search::SearchBox;
use crate::Icon;

const HERO_CSS: Asset = asset!("/assets/styling/hero.css");

#[component]
pub fn Hero() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: HERO_CSS }

        section {
            class: "hero",
            div {
                class: "hero-inner",
                span { class: "hero-badge", "Trusted by 10,000+ Client" }
                h1 { "Find the Perfect Personal Trainer Near You" }
                p {
                    "Get matched with skilled trainers for strength, weight loss, "
                    "flexibility, or overall wellness—anytime, anywhere."
                }

                SearchBox {}

                div {
                    class: "hero-cta",
                    a {
                        class: "store-btn",
                        href: "#",
                        Icon { icon: FaGooglePlay, width: 20, height: 20 }
                        span { "Google Play" }
                    }
                    a {
                        class: "store-btn",
                        href: "#",
                        Icon { icon: FaApple, width: 20, height: 20 }
                        span { "App Store" }
                    }
                }
            }
        }
    }
}
