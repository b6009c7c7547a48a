//! Light/dark theme, persisted to localStorage on the web.

use dioxus::prelude::*;

/// Theme context: `None` = system, `Some("dark")`, `Some("light")`.
pub type ThemeSignal = Signal<Option<String>>;

#[cfg(target_arch = "wasm32")]
const THEME_KEY: &str = "theme";

/// Read the saved theme (if any) into the signal and apply it to the DOM.
/// Call once at app start, after the context is provided.
pub fn load_theme_from_storage(theme: &mut ThemeSignal) {
    #[cfg(target_arch = "wasm32")]
    {
        let saved = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|s| s.get_item(THEME_KEY).ok().flatten())
            .filter(|s| !s.is_empty());
        set_dom_theme(saved.as_deref());
        theme.set(saved);
    }
    let _ = theme;
}

/// Apply a theme choice to the DOM and persist it.
pub fn apply_theme(choice: Option<&str>) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            match choice {
                Some(name) => {
                    let _ = storage.set_item(THEME_KEY, name);
                }
                None => {
                    let _ = storage.remove_item(THEME_KEY);
                }
            }
        }
        set_dom_theme(choice);
    }
    let _ = choice;
}

#[cfg(target_arch = "wasm32")]
fn set_dom_theme(choice: Option<&str>) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    match choice {
        Some(name) => {
            let _ = root.set_attribute("data-theme", name);
        }
        None => {
            let _ = root.remove_attribute("data-theme");
        }
    }
}
