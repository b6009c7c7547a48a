//! # Token persistence — the durable slice of the session
//!
//! The backend hands out two opaque strings on login: an access token and a
//! refresh token. They are the only session state that survives a page reload,
//! so they get their own tiny storage abstraction, [`TokenStore`], with one
//! backend per platform:
//!
//! | Backend | Platform | Medium |
//! |---------|----------|--------|
//! | [`crate::WebStore`] | web (`web` feature) | browser `localStorage` |
//! | [`crate::FileStore`] | desktop | JSON file under the platform data dir |
//! | [`crate::MemoryStore`] | tests / fallback | in-process `Mutex` |
//!
//! This layer stores and returns tokens verbatim. It does **not** inspect,
//! validate, or refresh them — expiry is the backend's concern, and a stale
//! pair simply fails on first authenticated request. The session context in
//! the `ui` crate is the single writer: login saves, logout clears.

use serde::{Deserialize, Serialize};

/// The opaque token pair returned by a successful login.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
}

impl AuthTokens {
    pub fn new(access_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
        }
    }
}

/// Durable storage for the session token pair.
///
/// All methods swallow storage errors: a read failure degrades to "no session"
/// and a write failure leaves the previous state in place. The UI stays usable
/// either way.
pub trait TokenStore {
    /// Read the persisted token pair, if any.
    fn load(&self) -> Option<AuthTokens>;

    /// Persist the token pair, replacing whatever was stored before.
    fn save(&self, tokens: &AuthTokens);

    /// Remove any persisted tokens.
    fn clear(&self);
}
