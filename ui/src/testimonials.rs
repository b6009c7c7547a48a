use dioxus::prelude::*;

use crate::icons::{FaChevronLeft, FaChevronRight, FaQuoteRight};
use crate::Icon;

struct Testimonial {
    name: &'static str,
    title: &'static str,
    quote: &'static str,
}

const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Nabila Islam",
        title: "Meditation Student",
        quote: "The meditation coach I hired helped me manage stress and build a daily mindfulness habit. The experience was seamless.",
    },
    Testimonial {
        name: "Rafi Chowdhury",
        title: "Nutrition Client",
        quote: "Working with a nutrition coach transformed my eating habits. The platform made it easy to find certified professionals.",
    },
    Testimonial {
        name: "Mithila Roy",
        title: "Dance Learner",
        quote: "I found an amazing dance instructor who matched my learning style perfectly. Booking and communication were effortless.",
    },
];

#[component]
pub fn Testimonials() -> Element {
    let mut index = use_signal(|| 0usize);

    let next = move |_| {
        index.set((index() + 1) % TESTIMONIALS.len());
    };
    let prev = move |_| {
        let i = index();
        index.set(if i == 0 { TESTIMONIALS.len() - 1 } else { i - 1 });
    };

    let current = &TESTIMONIALS[index()];

    rsx! {
        section {
            class: "testimonials",
            h2 { "What Our Users Say" }
            div {
                class: "testimonial-card",
                span { class: "quote-mark quote-mark-open",
                    Icon { icon: FaQuoteRight, width: 28, height: 28 }
                }
                p { class: "testimonial-quote", "\"{current.quote}\"" }
                h4 { "{current.name}" }
                p { class: "testimonial-title", "{current.title}" }
                span { class: "quote-mark quote-mark-close",
                    Icon { icon: FaQuoteRight, width: 28, height: 28 }
                }
            }
            div {
                class: "testimonial-controls",
                button { onclick: prev,
                    Icon { icon: FaChevronLeft, width: 18, height: 18 }
                }
                button { onclick: next,
                    Icon { icon: FaChevronRight, width: 18, height: 18 }
                }
            }
        }
    }
}
