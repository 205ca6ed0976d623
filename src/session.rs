//! Session Token
//!
//! The bearer credential is owned by an explicit [`Session`] that the API
//! client carries. Acquired on login, cleared on logout or when the startup
//! session check is rejected.

use std::sync::Arc;

/// Backing storage for the bearer token
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn remove(&self);
}

/// Persists the token in the browser's `localStorage` under a fixed key
pub struct LocalStorageTokenStore {
    key: String,
}

impl LocalStorageTokenStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl TokenStore for LocalStorageTokenStore {
    fn load(&self) -> Option<String> {
        local_storage()?.get_item(&self.key).ok().flatten()
    }

    fn save(&self, token: &str) {
        let saved = local_storage().is_some_and(|storage| storage.set_item(&self.key, token).is_ok());
        if !saved {
            log::warn!("[SESSION] Could not persist token to localStorage");
        }
    }

    fn remove(&self) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(&self.key);
        }
    }
}

/// In-memory token store
#[cfg(test)]
#[derive(Default)]
pub struct MemoryTokenStore {
    token: std::sync::Mutex<Option<String>>,
}

#[cfg(test)]
impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }

    fn save(&self, token: &str) {
        *self.token.lock().unwrap() = Some(token.to_string());
    }

    fn remove(&self) {
        *self.token.lock().unwrap() = None;
    }
}

/// Handle to the current session's token; clones share the same store
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn TokenStore>,
}

impl Session {
    pub fn new(store: impl TokenStore + 'static) -> Self {
        Self { store: Arc::new(store) }
    }

    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self::new(MemoryTokenStore::default())
    }

    pub fn token(&self) -> Option<String> {
        self.store.load().filter(|t| !t.is_empty())
    }

    /// A token is present; says nothing about whether the backend still accepts it
    pub fn is_active(&self) -> bool {
        self.token().is_some()
    }

    pub fn acquire(&self, token: &str) {
        self.store.save(token);
    }

    pub fn clear(&self) {
        self.store.remove();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_lifecycle() {
        let session = Session::in_memory();
        assert!(!session.is_active());

        session.acquire("abc.def");
        assert_eq!(session.token().as_deref(), Some("abc.def"));

        let shared = session.clone();
        shared.clear();
        assert!(!session.is_active());
    }

    #[test]
    fn test_empty_token_is_no_session() {
        let session = Session::in_memory();
        session.acquire("");
        assert!(!session.is_active());
    }
}
