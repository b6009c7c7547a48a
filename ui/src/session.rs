//! Session context for the application.
//!
//! Replaces ambient global auth state with an explicit context object:
//! components read through [`use_session`], and the only writers are the two
//! auth flows — login via [`complete_login`], logout via [`sign_out`]. Signup
//! never touches the session.
//!
//! On mount, [`SessionProvider`] rehydrates from whatever token pair the
//! platform store has persisted. The tokens are trusted as-is — this layer
//! does not validate or refresh them, so an expired pair shows up as a
//! signed-in session until the backend rejects it.

use api::{LoginData, UserInfo};
use dioxus::prelude::*;
use store::{AuthTokens, TokenStore};

/// Session state for the application.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    /// Profile from the most recent login in this process. `None` after a
    /// reload even when tokens are present; the backend has no profile
    /// endpoint to rehydrate from.
    pub user: Option<UserInfo>,
    /// Token pair, either fresh from login or rehydrated from storage.
    pub tokens: Option<AuthTokens>,
    /// True until the mount-time storage read has completed.
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            user: None,
            tokens: None,
            loading: true,
        }
    }
}

impl SessionState {
    /// Whether the session counts as signed in. Persisted tokens are enough;
    /// see the module docs for the trust caveat.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() || self.tokens.is_some()
    }
}

/// Get the current session state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// The platform-appropriate token store:
/// - **Web** (WASM + `web` feature): browser localStorage via [`store::WebStore`]
/// - **Desktop**: JSON file under the data dir via [`store::FileStore`]
pub fn token_store() -> impl TokenStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::WebStore::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        store::FileStore::in_data_dir()
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        store::MemoryStore::new()
    }
}

/// Provider component that owns the session state.
/// Wrap the app with this component so any view can call [`use_session`].
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let mut session = use_signal(SessionState::default);

    // Rehydrate persisted tokens on mount
    use_effect(move || {
        let tokens = token_store().load();
        session.set(SessionState {
            user: None,
            tokens,
            loading: false,
        });
    });

    use_context_provider(|| session);

    rsx! {
        {children}
    }
}

/// Apply a successful login: persist both tokens, then populate the session.
pub fn complete_login(session: &mut Signal<SessionState>, data: LoginData) {
    apply_login(&token_store(), &mut *session.write(), data);
}

/// Clear the session and its persisted tokens, then return to the login page.
pub fn sign_out(session: &mut Signal<SessionState>) {
    apply_logout(&token_store(), &mut *session.write());
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/login");
        }
    }
}

/// Button that logs the current user out.
#[component]
pub fn SignOutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut session = use_session();

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| sign_out(&mut session),
            "{label}"
        }
    }
}

fn apply_login(store: &impl TokenStore, state: &mut SessionState, data: LoginData) {
    store.save(&data.tokens);
    state.user = Some(data.user);
    state.tokens = Some(data.tokens);
    state.loading = false;
}

fn apply_logout(store: &impl TokenStore, state: &mut SessionState) {
    store.clear();
    state.user = None;
    state.tokens = None;
    state.loading = false;
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::Role;
    use store::MemoryStore;

    fn login_data() -> LoginData {
        LoginData {
            user: UserInfo {
                id: "u1".into(),
                first_name: "Nabila".into(),
                last_name: "Islam".into(),
                email: "nabila@example.com".into(),
                phone: "+880123".into(),
                role: Role::User,
            },
            tokens: AuthTokens::new("acc", "ref"),
        }
    }

    #[test]
    fn test_login_persists_tokens_and_populates_session() {
        let store = MemoryStore::new();
        let mut state = SessionState::default();

        apply_login(&store, &mut state, login_data());

        assert!(state.is_authenticated());
        assert_eq!(state.user.as_ref().unwrap().id, "u1");
        let persisted = store.load().unwrap();
        assert_eq!(persisted.access_token, "acc");
        assert_eq!(persisted.refresh_token, "ref");
    }

    #[test]
    fn test_logout_clears_session_and_storage() {
        let store = MemoryStore::new();
        let mut state = SessionState::default();
        apply_login(&store, &mut state, login_data());

        apply_logout(&store, &mut state);

        assert!(!state.is_authenticated());
        assert!(state.user.is_none());
        assert!(store.load().is_none());
    }

    #[test]
    fn test_rehydrated_tokens_count_as_signed_in() {
        let state = SessionState {
            user: None,
            tokens: Some(AuthTokens::new("persisted", "pair")),
            loading: false,
        };
        assert!(state.is_authenticated());
    }
}
