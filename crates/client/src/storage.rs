//! Persistence for the bearer token.
//!
//! The browser build keeps the token in `localStorage` under [`TOKEN_KEY`];
//! native builds write it to a file in the user's data directory. Tests use
//! [`MemoryTokenStore`].

use std::sync::{Arc, Mutex};

/// Storage key holding the raw token string.
pub const TOKEN_KEY: &str = "token";

/// Durable slot for a single bearer token.
///
/// Writes are best-effort: a failed write is logged and the in-memory
/// session continues.
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// In-process store. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a token, as if left over from an earlier visit.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(token.into()))),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.slot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn save(&self, token: &str) {
        *self
            .slot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(token.to_string());
    }

    fn clear(&self) {
        *self
            .slot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = None;
    }
}

/// File-backed store for desktop builds.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileTokenStore {
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<data dir>/medvault/token`, falling back to the working directory.
    pub fn in_data_dir() -> Self {
        let base = dirs::data_dir().unwrap_or_else(|| std::path::PathBuf::from("."));
        Self::new(base.join("medvault").join(TOKEN_KEY))
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl TokenStore for FileTokenStore {
    fn load(&self) -> Option<String> {
        std::fs::read_to_string(&self.path)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }

    fn save(&self, token: &str) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                tracing::warn!(error = %e, path = %parent.display(), "Failed to create token directory");
                return;
            }
        }
        if let Err(e) = std::fs::write(&self.path, token) {
            tracing::warn!(error = %e, path = %self.path.display(), "Failed to persist token");
        }
    }

    fn clear(&self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(error = %e, path = %self.path.display(), "Failed to remove token file")
            }
        }
    }
}

/// Browser `localStorage` store.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageTokenStore;

#[cfg(target_arch = "wasm32")]
impl LocalStorageTokenStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl TokenStore for LocalStorageTokenStore {
    fn load(&self) -> Option<String> {
        Self::storage()?
            .get_item(TOKEN_KEY)
            .ok()
            .flatten()
            .filter(|s| !s.is_empty())
    }

    fn save(&self, token: &str) {
        match Self::storage() {
            Some(storage) => {
                if storage.set_item(TOKEN_KEY, token).is_err() {
                    tracing::warn!("localStorage rejected the token write");
                }
            }
            None => tracing::warn!("localStorage unavailable, token not persisted"),
        }
    }

    fn clear(&self) {
        match Self::storage() {
            Some(storage) => {
                if storage.remove_item(TOKEN_KEY).is_err() {
                    tracing::warn!("localStorage rejected the token removal");
                }
            }
            None => tracing::warn!("localStorage unavailable, token not cleared"),
        }
    }
}

/// Platform default: `localStorage` in the browser, a data-dir file elsewhere.
pub fn default_store() -> Arc<dyn TokenStore> {
    #[cfg(target_arch = "wasm32")]
    {
        Arc::new(LocalStorageTokenStore)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Arc::new(FileTokenStore::in_data_dir())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn memory_store_clones_share_the_slot() {
        let store = MemoryTokenStore::new();
        let other = store.clone();
        store.save("abc");
        assert_eq!(other.load().as_deref(), Some("abc"));
        other.clear();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn memory_store_seeded_token() {
        assert_eq!(MemoryTokenStore::with_token("t1").load().as_deref(), Some("t1"));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn file_store_round_trip_and_clear() {
        let dir = std::env::temp_dir().join(format!("medvault-token-{}", std::process::id()));
        let store = FileTokenStore::new(dir.join("nested").join(TOKEN_KEY));
        assert_eq!(store.load(), None);

        store.save("header.payload.sig");
        assert_eq!(store.load().as_deref(), Some("header.payload.sig"));

        store.clear();
        assert_eq!(store.load(), None);
        // Clearing twice is harmless.
        store.clear();

        let _ = std::fs::remove_dir_all(dir);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn failed_clear_is_reported_not_raised() {
        // A directory at the token path makes remove_file fail with something other than NotFound.
        let dir = std::env::temp_dir().join(format!("medvault-clear-{}", std::process::id()));
        std::fs::create_dir_all(dir.join(TOKEN_KEY)).unwrap();
        let store = FileTokenStore::new(dir.join(TOKEN_KEY));

        store.clear();
        assert!(store.path().is_dir());
        assert_eq!(store.load(), None);

        let _ = std::fs::remove_dir_all(dir);
    }
}
