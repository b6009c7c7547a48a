use dioxus::prelude::*;

use crate::icons::{FaCalendar, FaCircleCheck, FaComments, FaMagnifyingGlass};
use crate::Icon;

#[component]
pub fn HowItWorks() -> Element {
    rsx! {
        section {
            class: "how-it-works",
            div {
                class: "section-heading",
                h2 { "How TrainerHub Works" }
                p { "Get professional home services in just a few simple steps. It's that easy!" }
            }

            div {
                class: "steps-grid",
                StepCard {
                    number: "01",
                    title: "Choose Your Service",
                    description: "Browse verified service providers across various categories. Filter by location, rating, and service type to find the best fit for your needs.",
                    icon: rsx! { Icon { icon: FaMagnifyingGlass, width: 24, height: 24 } },
                }
                StepCard {
                    number: "02",
                    title: "Book Instantly",
                    description: "Contact service providers directly through the platform. Request quotes, discuss your requirements, and schedule your service hassle-free.",
                    icon: rsx! { Icon { icon: FaCalendar, width: 24, height: 24 } },
                }
                StepCard {
                    number: "03",
                    title: "Hire with Confidence",
                    description: "Choose the best service provider based on reviews, experience, and your budget. Enjoy professional service delivered right to your doorstep.",
                    icon: rsx! { Icon { icon: FaComments, width: 24, height: 24 } },
                }
                StepCard {
                    number: "04",
                    title: "Service Complete",
                    description: "Get your tasks done by trusted professionals. Join thousands of satisfied users who found reliable service providers through our platform.",
                    icon: rsx! { Icon { icon: FaCircleCheck, width: 24, height: 24 } },
                }
            }
        }
    }
}

#[component]
fn StepCard(number: String, title: String, description: String, icon: Element) -> Element {
    rsx! {
        div {
            class: "step-card",
            span { class: "step-number", "{number}" }
            div { class: "step-icon", {icon} }
            h3 { "{title}" }
            p { "{description}" }
        }
    }
}
