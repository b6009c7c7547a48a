use api::ApiClient;
use dioxus::prelude::*;
use tracing::error;

use crate::icons::FaUser;
use crate::Icon;

/// "Most Popular Categories" grid. Fetched once on mount; a pulse-skeleton
/// grid renders while the request is in flight, and a fetch failure degrades
/// to the empty grid.
#[component]
pub fn Categories() -> Element {
    let client = use_context::<ApiClient>();
    let categories = use_resource(move || {
        let client = client.clone();
        async move {
            client.categories().await.unwrap_or_else(|err| {
                error!("failed to fetch categories: {err}");
                Vec::new()
            })
        }
    });

    rsx! {
        section {
            class: "categories",
            h2 { "Most Popular Categories" }

            match &*categories.read() {
                None => rsx! {
                    div {
                        class: "categories-grid",
                        for i in 0..4 {
                            div { key: "{i}", class: "category-skeleton" }
                        }
                    }
                },
                Some(list) => rsx! {
                    div {
                        class: "categories-grid",
                        for category in list.clone() {
                            a {
                                key: "{category.name}",
                                class: "category-card",
                                href: "/service-providers/categories/{category.name}",
                                div {
                                    class: "category-icon",
                                    Icon { icon: FaUser, width: 48, height: 48 }
                                }
                                h3 { "{category.name}" }
                                p { "{category.total} Providers" }
                            }
                        }
                    }
                },
            }
        }
    }
}
