use std::sync::{Arc, Mutex};

use crate::tokens::{AuthTokens, TokenStore};

/// In-memory TokenStore for testing and as a last-resort fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    tokens: Arc<Mutex<Option<AuthTokens>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryStore {
    fn load(&self) -> Option<AuthTokens> {
        self.tokens.lock().unwrap().clone()
    }

    fn save(&self, tokens: &AuthTokens) {
        *self.tokens.lock().unwrap() = Some(tokens.clone());
    }

    fn clear(&self) {
        *self.tokens.lock().unwrap() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store_has_no_tokens() {
        let store = MemoryStore::new();
        assert!(store.load().is_none());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let store = MemoryStore::new();
        let tokens = AuthTokens::new("access-abc", "refresh-xyz");

        store.save(&tokens);

        assert_eq!(store.load(), Some(tokens));
    }

    #[test]
    fn test_save_replaces_previous_pair() {
        let store = MemoryStore::new();
        store.save(&AuthTokens::new("old-access", "old-refresh"));
        store.save(&AuthTokens::new("new-access", "new-refresh"));

        let loaded = store.load().unwrap();
        assert_eq!(loaded.access_token, "new-access");
        assert_eq!(loaded.refresh_token, "new-refresh");
    }

    #[test]
    fn test_clear_removes_tokens() {
        let store = MemoryStore::new();
        store.save(&AuthTokens::new("access", "refresh"));

        store.clear();

        assert!(store.load().is_none());
    }

    #[test]
    fn test_clones_share_state() {
        let store = MemoryStore::new();
        let alias = store.clone();

        store.save(&AuthTokens::new("a", "r"));

        assert!(alias.load().is_some());
    }
}
