//! # localStorage token store — browser-side persistence
//!
//! [`WebStore`] is the [`TokenStore`] implementation used on the **web
//! platform**. It keeps the two token strings under the same keys the backend
//! documentation uses:
//!
//! | localStorage key | Value |
//! |------------------|-------|
//! | `"accessToken"` | the short-lived access token |
//! | `"refreshToken"` | the long-lived refresh token |
//!
//! `WebStore` is a zero-size struct (`Clone`-friendly) that looks up
//! `window.localStorage` on every operation.
//!
//! ## Error handling
//!
//! All trait methods silently swallow storage errors (returning `None` for
//! reads, doing nothing for writes). A browser with storage disabled degrades
//! to "never signed in" rather than crashing the app.

use crate::tokens::{AuthTokens, TokenStore};

const ACCESS_TOKEN_KEY: &str = "accessToken";
const REFRESH_TOKEN_KEY: &str = "refreshToken";

/// localStorage-backed TokenStore for the web platform.
#[derive(Clone, Debug, Default)]
pub struct WebStore;

impl WebStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl TokenStore for WebStore {
    fn load(&self) -> Option<AuthTokens> {
        let storage = Self::storage()?;
        let access = storage.get_item(ACCESS_TOKEN_KEY).ok()??;
        let refresh = storage.get_item(REFRESH_TOKEN_KEY).ok()??;
        Some(AuthTokens::new(access, refresh))
    }

    fn save(&self, tokens: &AuthTokens) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(ACCESS_TOKEN_KEY, &tokens.access_token);
            let _ = storage.set_item(REFRESH_TOKEN_KEY, &tokens.refresh_token);
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(ACCESS_TOKEN_KEY);
            let _ = storage.remove_item(REFRESH_TOKEN_KEY);
        }
    }
}
