use dioxus::prelude::*;
use ui::{use_session, Loader, Logo};

use crate::Route;

/// Minimal signed-in landing page. Anonymous visitors are sent to the login
/// page once the session finishes rehydrating.
#[component]
pub fn Dashboard() -> Element {
    let session = use_session();
    let nav = use_navigator();

    let state = session();
    if state.loading {
        return rsx! { Loader {} };
    }
    if !state.is_authenticated() {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    // User profile is only available for logins made in this tab; a session
    // rehydrated from stored tokens has no profile to show.
    let greeting = match &state.user {
        Some(user) => format!("Welcome back, {}!", user.first_name),
        None => "Welcome back!".to_string(),
    };

    rsx! {
        div {
            class: "dashboard",
            header {
                class: "dashboard-header",
                Logo {}
                ui::SignOutButton {}
            }
            main {
                class: "dashboard-main",
                h1 { "{greeting}" }
                if let Some(user) = &state.user {
                    p { "Signed in as {user.email}" }
                }
                p { "Your bookings and messages will appear here." }
            }
        }
    }
}
