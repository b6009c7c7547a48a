//! Site header: logo, navigation menus, theme toggle, command-palette
//! search, and the login/user area.

use dioxus::prelude::*;

use crate::icons::{FaMagnifyingGlass, FaMoon, FaRightFromBracket, FaSun, FaUser};
use crate::search::SearchBox;
use crate::session::{sign_out, use_session};
use crate::theme::{apply_theme, ThemeSignal};
use crate::Icon;
use crate::Logo;

const HEADER_CSS: Asset = asset!("/assets/styling/header.css");

#[derive(PartialEq)]
struct NavLink {
    title: &'static str,
    href: &'static str,
    description: &'static str,
}

const SERVICES_MENU: [NavLink; 4] = [
    NavLink {
        title: "Fitness",
        href: "/service-providers?category=fitness",
        description: "Find personal trainers for strength and fitness",
    },
    NavLink {
        title: "Yoga",
        href: "/service-providers?category=yoga",
        description: "Hire certified yoga and flexibility trainers",
    },
    NavLink {
        title: "Nutrition",
        href: "/service-providers?category=nutrition",
        description: "Get expert dietary and wellness coaching",
    },
    NavLink {
        title: "Therapy",
        href: "/service-providers?category=therapy",
        description: "Book chiropractors and physical therapy experts",
    },
];

const ACTIONS_MENU: [NavLink; 2] = [
    NavLink {
        title: "Hire A Service Provider",
        href: "/service-providers",
        description: "Find and connect with verified professionals",
    },
    NavLink {
        title: "Become A Service Provider",
        href: "/signup",
        description: "Offer your services and grow your client base",
    },
];

#[component]
pub fn Header() -> Element {
    let session = use_session();
    let mut theme = use_context::<ThemeSignal>();
    let mut palette_open = use_signal(|| false);
    let mut menu_open = use_signal(|| false);

    // Cmd/Ctrl-K opens the search palette from anywhere on the page.
    #[cfg(target_arch = "wasm32")]
    use_effect(move || {
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::JsCast;

        let closure = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(
            move |evt: web_sys::KeyboardEvent| {
                if evt.key() == "k" && (evt.meta_key() || evt.ctrl_key()) {
                    evt.prevent_default();
                    let open = *palette_open.peek();
                    palette_open.set(!open);
                }
            },
        );
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        }
        // Listener lives for the whole page; never detached.
        closure.forget();
    });

    let dark = theme().as_deref() == Some("dark");
    let toggle_theme = move |_| {
        let next = if dark { "light" } else { "dark" };
        apply_theme(Some(next));
        theme.set(Some(next.to_string()));
    };

    rsx! {
        document::Link { rel: "stylesheet", href: HEADER_CSS }

        header {
            class: "site-header",
            div {
                class: "header-inner",
                Logo {}

                nav {
                    class: "header-nav",
                    a { class: "nav-link", href: "/", "Home" }
                    NavMenu { title: "Services", links: &SERVICES_MENU }
                    NavMenu { title: "Actions", links: &ACTIONS_MENU }
                }

                div {
                    class: "header-actions",
                    button {
                        class: "header-icon-btn",
                        title: "Search (Ctrl+K)",
                        onclick: move |_| palette_open.set(true),
                        Icon { icon: FaMagnifyingGlass, width: 16, height: 16 }
                    }
                    button {
                        class: "header-icon-btn",
                        title: "Toggle theme",
                        onclick: toggle_theme,
                        if dark {
                            Icon { icon: FaSun, width: 16, height: 16 }
                        } else {
                            Icon { icon: FaMoon, width: 16, height: 16 }
                        }
                    }

                    if let Some(user) = session().user {
                        div {
                            class: "user-menu",
                            button {
                                class: "user-menu-trigger",
                                onclick: move |_| {
                                    let open = menu_open();
                                    menu_open.set(!open);
                                },
                                Icon { icon: FaUser, width: 16, height: 16 }
                                span { "{user.first_name}" }
                            }
                            if menu_open() {
                                div {
                                    class: "user-menu-dropdown",
                                    a {
                                        class: "user-menu-item",
                                        href: "/user/dashboard",
                                        "Dashboard"
                                    }
                                    LogoutItem {}
                                }
                            }
                        }
                    } else {
                        a { class: "header-btn header-btn-ghost", href: "/login", "Login" }
                        a { class: "header-btn header-btn-solid", href: "/signup", "Get Started" }
                    }
                }
            }
        }

        SearchPalette { open: palette_open }
    }
}

#[component]
fn NavMenu(title: &'static str, links: &'static [NavLink]) -> Element {
    let mut open = use_signal(|| false);

    rsx! {
        div {
            class: "nav-menu",
            onmouseenter: move |_| open.set(true),
            onmouseleave: move |_| open.set(false),
            span { class: "nav-link", "{title}" }
            if open() {
                div {
                    class: "nav-menu-panel",
                    for link in links {
                        a {
                            key: "{link.href}",
                            class: "nav-menu-item",
                            href: "{link.href}",
                            span { class: "nav-menu-title", "{link.title}" }
                            span { class: "nav-menu-desc", "{link.description}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn LogoutItem() -> Element {
    let mut session = use_session();

    rsx! {
        button {
            class: "user-menu-item",
            onclick: move |_| sign_out(&mut session),
            Icon { icon: FaRightFromBracket, width: 14, height: 14 }
            span { "Logout" }
        }
    }
}

/// Full-screen search overlay, toggled by the header button or Cmd/Ctrl-K.
#[component]
pub fn SearchPalette(open: Signal<bool>) -> Element {
    if !open() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "palette-backdrop",
            onclick: move |_| open.set(false),
            onkeydown: move |evt| {
                if evt.key() == Key::Escape {
                    open.set(false);
                }
            },
            div {
                class: "palette-panel",
                onclick: move |evt| evt.stop_propagation(),
                SearchBox {
                    placeholder: "Search service providers...",
                    autofocus: true,
                }
            }
        }
    }
}
