//! Session handling
//!
//! A single module owns the durable session flag and the stored user.
//! Persistence is pluggable: the browser build uses localStorage, tests
//! use an in-memory store.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use gloo_storage::{LocalStorage, Storage};

use crate::types::StoredUser;

const STORAGE_KEY_AUTH: &str = "aurora_auth";
const STORAGE_KEY_USER: &str = "aurora_user";

/// Key-value persistence behind the session
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// localStorage-backed store used in the browser
#[derive(Debug, Default)]
pub struct BrowserStore;

impl SessionStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::get(key).ok()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = LocalStorage::set(key, value) {
            tracing::warn!("failed to persist {}: {}", key, e);
        }
    }

    fn remove(&self, key: &str) {
        LocalStorage::delete(key);
    }
}

/// In-memory store for tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().expect("store lock").get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .expect("store lock")
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.lock().expect("store lock").remove(key);
    }
}

/// The client session. Checked at route-entry time by the guard; written
/// by sign-in/sign-up; cleared by sign-out. No server-side validation,
/// no expiry.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn SessionStore>,
}

impl Session {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Session over the browser's localStorage
    pub fn browser() -> Self {
        Self::new(Arc::new(BrowserStore))
    }

    pub fn is_authenticated(&self) -> bool {
        self.store
            .get(STORAGE_KEY_AUTH)
            .is_some_and(|flag| flag == "true")
    }

    /// Persist the session flag and the user. Any credentials are
    /// accepted; there is no server to verify against.
    pub fn sign_in(&self, user: &StoredUser) {
        self.store.set(STORAGE_KEY_AUTH, "true");
        match serde_json::to_string(user) {
            Ok(json) => self.store.set(STORAGE_KEY_USER, &json),
            Err(e) => tracing::error!("failed to serialize user: {}", e),
        }
        tracing::info!("signed in as {}", user.email);
    }

    pub fn sign_out(&self) {
        self.store.remove(STORAGE_KEY_AUTH);
        self.store.remove(STORAGE_KEY_USER);
        tracing::info!("signed out");
    }

    pub fn user(&self) -> Option<StoredUser> {
        let json = self.store.get(STORAGE_KEY_USER)?;
        match serde_json::from_str(&json) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!("stored user is unreadable: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_session() -> Session {
        Session::new(Arc::new(MemoryStore::default()))
    }

    fn test_user() -> StoredUser {
        StoredUser {
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
        }
    }

    #[test]
    fn test_fresh_session_is_unauthenticated() {
        let session = test_session();
        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
    }

    #[test]
    fn test_sign_in_sets_flag_and_user() {
        let session = test_session();
        session.sign_in(&test_user());

        assert!(session.is_authenticated());
        let user = session.user().expect("user should be stored");
        assert_eq!(user.email, "test@example.com");
        assert_eq!(user.name, "Test User");
    }

    #[test]
    fn test_sign_out_clears_everything() {
        let session = test_session();
        session.sign_in(&test_user());
        session.sign_out();

        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
    }

    #[test]
    fn test_session_survives_reload_of_same_store() {
        let store: Arc<dyn SessionStore> = Arc::new(MemoryStore::default());
        Session::new(store.clone()).sign_in(&test_user());

        // A new Session over the same store sees the persisted state
        let reloaded = Session::new(store);
        assert!(reloaded.is_authenticated());
        assert_eq!(reloaded.user().expect("stored user").name, "Test User");
    }

    #[test]
    fn test_garbage_auth_flag_is_not_authenticated() {
        let store = Arc::new(MemoryStore::default());
        store.set(STORAGE_KEY_AUTH, "yes please");
        let session = Session::new(store);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_unreadable_user_yields_none() {
        let store = Arc::new(MemoryStore::default());
        store.set(STORAGE_KEY_AUTH, "true");
        store.set(STORAGE_KEY_USER, "{not json");
        let session = Session::new(store);
        assert!(session.is_authenticated());
        assert!(session.user().is_none());
    }
}
