//! # Debounced type-ahead provider search
//!
//! Both search surfaces (the hero search box and the header command palette)
//! share the same controller, [`TypeAhead`]. It owns the query text, the
//! result list, and the bookkeeping that keeps keystrokes, timers, and
//! network responses from trampling each other.
//!
//! ## Ticket protocol
//!
//! Every non-empty keystroke issues a fresh, monotonically increasing
//! [`Ticket`] and supersedes the previous one. A lookup then passes through
//! three gates, each checked against the controller's latest ticket:
//!
//! 1. [`TypeAhead::on_input`] — records the query; empty input clears results
//!    and hides the dropdown synchronously, anything else schedules a lookup.
//! 2. [`TypeAhead::fire`] — called when the quiet period elapses; returns the
//!    query to look up only if no newer input arrived in the meantime.
//! 3. [`TypeAhead::apply`] — called with the response; discarded if a newer
//!    ticket was issued while the request was in flight.
//!
//! Gate 3 is what closes the classic type-ahead race: a slow response to an
//! old query can never overwrite the results of a newer one, because results
//! are applied in ticket (issue) order, not arrival order.
//!
//! The controller is pure state — no timers, no network — so the whole
//! protocol is unit-tested below without an event loop. The [`SearchBox`]
//! component supplies the missing pieces: a `gloo-timers` / `tokio` sleep for
//! the quiet period and [`api::ApiClient::search_providers`] for the lookup.

use api::{ApiClient, ProviderSummary};
use dioxus::prelude::*;
use store::AppConfig;
use tracing::error;

/// Identifies one scheduled lookup. Strictly increasing per controller.
pub type Ticket = u64;

/// What [`TypeAhead::on_input`] asks the caller to do next.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Query is empty: results were cleared and the dropdown hidden; nothing
    /// to schedule.
    Clear,
    /// Start a quiet-period timer and, if the ticket survives it, fire the
    /// lookup.
    Schedule(Ticket),
}

/// State of one search surface.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TypeAhead {
    query: String,
    /// Latest ticket issued. Responses for anything older are stale.
    latest: Ticket,
    /// The scheduled lookup whose timer has not fired yet, if any.
    pending: Option<Ticket>,
    results: Vec<ProviderSummary>,
    open: bool,
}

impl TypeAhead {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a keystroke.
    ///
    /// At most one pending lookup is alive at any time: scheduling a new one
    /// invalidates the previous ticket, whether its timer fired already or
    /// not.
    pub fn on_input(&mut self, text: &str) -> Action {
        self.query = text.to_string();
        self.latest += 1;

        if text.trim().is_empty() {
            self.pending = None;
            self.results.clear();
            self.open = false;
            Action::Clear
        } else {
            self.pending = Some(self.latest);
            Action::Schedule(self.latest)
        }
    }

    /// The quiet period for `ticket` elapsed. Returns the query to look up,
    /// or `None` if the ticket was superseded — in which case no network
    /// call must be made.
    pub fn fire(&mut self, ticket: Ticket) -> Option<String> {
        if self.pending != Some(ticket) {
            return None;
        }
        self.pending = None;
        Some(self.query.trim().to_string())
    }

    /// A lookup finished. Applied only if `ticket` is still the latest;
    /// returns whether the outcome was accepted.
    ///
    /// Success replaces the result list (possibly with an empty one) and
    /// failure clears it; either way the dropdown opens so the empty state
    /// can render.
    pub fn apply(&mut self, ticket: Ticket, outcome: Result<Vec<ProviderSummary>, ()>) -> bool {
        if ticket != self.latest {
            return false;
        }
        self.results = outcome.unwrap_or_default();
        self.open = true;
        true
    }

    /// Close the dropdown without touching the query or results.
    pub fn dismiss(&mut self) {
        self.open = false;
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[ProviderSummary] {
        &self.results
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

/// Sleep for the configured quiet period.
async fn quiet_period(ms: u32) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(ms).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_millis(ms as u64)).await;
}

/// Search input with a debounced results dropdown.
///
/// Expects [`ApiClient`] and [`AppConfig`] in context.
#[component]
pub fn SearchBox(
    #[props(default = "What service are you looking for?".to_string())] placeholder: String,
    #[props(default = false)] autofocus: bool,
) -> Element {
    let client = use_context::<ApiClient>();
    let config = use_context::<AppConfig>();
    let mut state = use_signal(TypeAhead::new);
    let debounce_ms = config.search.debounce_ms;

    let oninput = move |evt: FormEvent| {
        let Action::Schedule(ticket) = state.write().on_input(&evt.value()) else {
            return;
        };
        let client = client.clone();
        spawn(async move {
            quiet_period(debounce_ms).await;
            let Some(query) = state.write().fire(ticket) else {
                return;
            };
            let outcome = match client.search_providers(&query).await {
                Ok(hits) => Ok(hits),
                Err(err) => {
                    error!("provider search failed: {err}");
                    Err(())
                }
            };
            state.write().apply(ticket, outcome);
        });
    };

    rsx! {
        div {
            class: "search-box",
            div {
                class: "search-input-row",
                crate::Icon { icon: crate::icons::FaMagnifyingGlass, width: 20, height: 20 }
                input {
                    r#type: "text",
                    class: "search-input",
                    value: "{state.read().query()}",
                    placeholder,
                    autofocus,
                    oninput,
                    onkeydown: move |evt| {
                        if evt.key() == Key::Escape {
                            state.write().dismiss();
                        }
                    },
                }
                button { class: "search-submit", "Search" }
            }

            if state.read().is_open() {
                ResultsDropdown {
                    results: state.read().results().to_vec(),
                    on_select: move |_| state.write().dismiss(),
                }
            }
        }
    }
}

/// The dropdown under a search input: grouped hits, or the empty state.
#[component]
pub fn ResultsDropdown(results: Vec<ProviderSummary>, on_select: EventHandler<String>) -> Element {
    rsx! {
        div {
            class: "search-dropdown",
            if results.is_empty() {
                div { class: "search-empty", "No results found." }
            } else {
                div { class: "search-group-heading", "Service Providers" }
                for provider in results {
                    a {
                        key: "{provider.id}",
                        class: "search-hit",
                        href: "/service-providers/{provider.id}",
                        onclick: {
                            let id = provider.id.clone();
                            move |_| on_select.call(id.clone())
                        },
                        p { class: "search-hit-name", "{provider.first_name} {provider.last_name}" }
                        p { class: "search-hit-meta", "{provider.profession}" }
                        p { class: "search-hit-meta", "Rate: {provider.hourly_rate}" }
                        p { class: "search-hit-meta", "{provider.location}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(id: &str) -> ProviderSummary {
        ProviderSummary {
            id: id.to_string(),
            first_name: "Test".into(),
            last_name: "Provider".into(),
            profession: "Yoga Instructor".into(),
            hourly_rate: "15".into(),
            location: "Dhaka".into(),
        }
    }

    #[test]
    fn test_empty_input_clears_synchronously() {
        let mut ta = TypeAhead::new();
        let Action::Schedule(ticket) = ta.on_input("yo") else {
            panic!("expected a scheduled lookup");
        };
        let query = ta.fire(ticket).unwrap();
        assert!(ta.apply(ticket, Ok(vec![hit("a")])));
        assert_eq!(query, "yo");
        assert!(ta.is_open());

        // Clearing the input hides the dropdown before any timer runs.
        assert_eq!(ta.on_input(""), Action::Clear);
        assert!(ta.results().is_empty());
        assert!(!ta.is_open());
    }

    #[test]
    fn test_whitespace_only_counts_as_empty() {
        let mut ta = TypeAhead::new();
        assert_eq!(ta.on_input("   "), Action::Clear);
    }

    #[test]
    fn test_superseded_ticket_never_fires() {
        let mut ta = TypeAhead::new();
        let Action::Schedule(t1) = ta.on_input("y") else {
            panic!()
        };
        let Action::Schedule(t2) = ta.on_input("yo") else {
            panic!()
        };
        let Action::Schedule(t3) = ta.on_input("yog") else {
            panic!()
        };

        // Only the newest ticket survives its quiet period; rapid inputs
        // within the period produce at most one lookup, for the last query.
        assert_eq!(ta.fire(t1), None);
        assert_eq!(ta.fire(t2), None);
        assert_eq!(ta.fire(t3), Some("yog".to_string()));
        // Firing is one-shot.
        assert_eq!(ta.fire(t3), None);
    }

    #[test]
    fn test_fired_query_is_trimmed() {
        let mut ta = TypeAhead::new();
        let Action::Schedule(ticket) = ta.on_input("  yoga  ") else {
            panic!()
        };
        assert_eq!(ta.fire(ticket), Some("yoga".to_string()));
        assert_eq!(ta.query(), "  yoga  ");
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut ta = TypeAhead::new();
        let Action::Schedule(t1) = ta.on_input("box") else {
            panic!()
        };
        ta.fire(t1);

        // A newer query goes out while the first response is in flight.
        let Action::Schedule(t2) = ta.on_input("boxing") else {
            panic!()
        };
        ta.fire(t2);
        assert!(ta.apply(t2, Ok(vec![hit("new")])));

        // The slow first response arrives last and must not clobber.
        assert!(!ta.apply(t1, Ok(vec![hit("old")])));
        assert_eq!(ta.results(), &[hit("new")]);
    }

    #[test]
    fn test_clearing_input_invalidates_in_flight_response() {
        let mut ta = TypeAhead::new();
        let Action::Schedule(t1) = ta.on_input("dance") else {
            panic!()
        };
        ta.fire(t1);
        ta.on_input("");

        assert!(!ta.apply(t1, Ok(vec![hit("late")])));
        assert!(ta.results().is_empty());
        assert!(!ta.is_open());
    }

    #[test]
    fn test_failure_opens_empty_dropdown() {
        let mut ta = TypeAhead::new();
        let Action::Schedule(t1) = ta.on_input("chiro") else {
            panic!()
        };
        ta.fire(t1);
        assert!(ta.apply(t1, Err(())));

        assert!(ta.is_open());
        assert!(ta.results().is_empty());
    }

    #[test]
    fn test_empty_success_still_opens_dropdown() {
        let mut ta = TypeAhead::new();
        let Action::Schedule(t1) = ta.on_input("zzz") else {
            panic!()
        };
        ta.fire(t1);
        assert!(ta.apply(t1, Ok(vec![])));

        assert!(ta.is_open());
        assert!(ta.results().is_empty());
    }

    #[test]
    fn test_dismiss_keeps_results() {
        let mut ta = TypeAhead::new();
        let Action::Schedule(t1) = ta.on_input("yoga") else {
            panic!()
        };
        ta.fire(t1);
        ta.apply(t1, Ok(vec![hit("a")]));

        ta.dismiss();
        assert!(!ta.is_open());
        assert_eq!(ta.results().len(), 1);
    }
}
