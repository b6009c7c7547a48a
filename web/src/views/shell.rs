use dioxus::prelude::*;
use ui::{Footer, Header};

use crate::Route;

/// Page chrome around every route. Dashboard pages get neither header nor
/// footer, matching the standalone account area.
#[component]
pub fn Shell() -> Element {
    let route: Route = use_route();
    let chrome = !matches!(route, Route::Dashboard {});

    rsx! {
        if chrome {
            Header {}
        }
        Outlet::<Route> {}
        if chrome {
            Footer {}
        }
    }
}
