//! # Session token persistence
//!
//! The one piece of state that survives a restart: the opaque bearer token.
//! [`TokenStore`] abstracts where it lives so the UI code is identical on
//! every platform.
//!
//! | Implementation | Platform | Backing |
//! |----------------|----------|---------|
//! | [`FileTokenStore`] | desktop | one file at `<data_dir>/lawnhub/token` |
//! | [`WebTokenStore`] | web (`web` feature) | `localStorage["lawnhub-token"]` |
//! | [`MemoryTokenStore`] | tests | `Arc<Mutex<Option<String>>>` |
//!
//! All implementations swallow I/O errors: a broken store degrades to "no
//! saved session" rather than crashing, because the backend remains the
//! source of truth and the user can simply sign in again.

#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Storage key / file name for the persisted session token.
pub const TOKEN_KEY: &str = "lawnhub-token";

/// Where the session token is persisted between runs.
pub trait TokenStore {
    /// Recover a previously saved token, if any.
    fn load(&self) -> Option<String>;
    /// Persist the token, replacing any previous one.
    fn save(&self, token: &str);
    /// Forget the token (logout or session expiry).
    fn clear(&self);
}

/// In-memory token store for tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }

    fn save(&self, token: &str) {
        *self.token.lock().unwrap() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.lock().unwrap() = None;
    }
}

/// Filesystem-backed token store for desktop.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Debug)]
pub struct FileTokenStore {
    base: PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileTokenStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    /// Store rooted at the platform data directory: `<data_dir>/lawnhub/`.
    pub fn in_data_dir() -> Self {
        let base = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("lawnhub");
        Self::new(base)
    }

    fn token_path(&self) -> PathBuf {
        self.base.join(TOKEN_KEY)
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl TokenStore for FileTokenStore {
    fn load(&self) -> Option<String> {
        let content = std::fs::read_to_string(self.token_path()).ok()?;
        let token = content.trim().to_string();
        if token.is_empty() {
            None
        } else {
            Some(token)
        }
    }

    fn save(&self, token: &str) {
        if let Err(e) = std::fs::create_dir_all(&self.base) {
            tracing::warn!("token store: {e}");
            return;
        }
        if let Err(e) = std::fs::write(self.token_path(), token) {
            tracing::warn!("token store: {e}");
        }
    }

    fn clear(&self) {
        let _ = std::fs::remove_file(self.token_path());
    }
}

/// `localStorage`-backed token store for the web platform.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
#[derive(Clone, Debug, Default)]
pub struct WebTokenStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
impl WebTokenStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

#[cfg(all(target_arch = "wasm32", feature = "web"))]
impl TokenStore for WebTokenStore {
    fn load(&self) -> Option<String> {
        Self::storage()?.get_item(TOKEN_KEY).ok().flatten()
    }

    fn save(&self, token: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_roundtrip() {
        let store = MemoryTokenStore::new();
        assert!(store.load().is_none());

        store.save("tok-abc");
        assert_eq!(store.load().as_deref(), Some("tok-abc"));

        store.clear();
        assert!(store.load().is_none());
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn file_store_survives_reopen() {
        let dir = std::env::temp_dir().join(format!("lawnhub_test_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let store = FileTokenStore::new(dir.clone());
        assert!(store.load().is_none());
        store.save("tok-xyz");

        // Re-open from the same directory, as a fresh process would.
        let store2 = FileTokenStore::new(dir.clone());
        assert_eq!(store2.load().as_deref(), Some("tok-xyz"));

        store2.clear();
        assert!(FileTokenStore::new(dir.clone()).load().is_none());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
