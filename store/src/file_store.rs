//! # Filesystem-backed token store
//!
//! [`FileStore`] persists the token pair as a single JSON file so that desktop
//! builds keep their session across restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── tokens.json        # serialized `AuthTokens`
//! ```
//!
//! ## Platform data directories
//!
//! [`FileStore::in_data_dir`] uses [`dirs::data_dir()`] for a
//! platform-appropriate base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/trainerhub/` |
//! | Linux | `~/.local/share/trainerhub/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\trainerhub\` |

use std::path::PathBuf;

use crate::tokens::{AuthTokens, TokenStore};

const TOKENS_FILE: &str = "tokens.json";

/// Filesystem-backed TokenStore for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    /// Store rooted at the platform data dir, e.g. `~/.local/share/trainerhub/`.
    pub fn in_data_dir() -> Self {
        let base = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("trainerhub");
        Self::new(base)
    }

    fn tokens_path(&self) -> PathBuf {
        self.base.join(TOKENS_FILE)
    }
}

impl TokenStore for FileStore {
    fn load(&self) -> Option<AuthTokens> {
        let raw = std::fs::read_to_string(self.tokens_path()).ok()?;
        serde_json::from_str(&raw).ok()
    }

    fn save(&self, tokens: &AuthTokens) {
        if std::fs::create_dir_all(&self.base).is_err() {
            return;
        }
        if let Ok(raw) = serde_json::to_string_pretty(tokens) {
            let _ = std::fs::write(self.tokens_path(), raw);
        }
    }

    fn clear(&self) {
        let _ = std::fs::remove_file(self.tokens_path());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_without_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("trainerhub"));

        assert!(store.load().is_none());
    }

    #[test]
    fn test_save_creates_dir_and_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested").join("trainerhub"));
        let tokens = AuthTokens::new("access-123", "refresh-456");

        store.save(&tokens);

        assert_eq!(store.load(), Some(tokens));
    }

    #[test]
    fn test_clear_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        store.save(&AuthTokens::new("a", "r"));

        store.clear();

        assert!(store.load().is_none());
    }

    #[test]
    fn test_corrupt_file_degrades_to_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        std::fs::write(dir.path().join(TOKENS_FILE), "not json").unwrap();

        assert!(store.load().is_none());
    }
}
