//! Session persistence.
//!
//! DESIGN
//! ======
//! Three `localStorage` keys make up a session: the access token, the
//! refresh token, and a cached user blob so the UI can greet the user
//! before any network call completes. [`TokenStore`] is the only code
//! that touches those keys.
//!
//! The storage backend sits behind [`SessionStore`] so the session and
//! client logic can be exercised natively against an in-memory map;
//! the browser build writes through to `localStorage`.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::config;
use crate::net::types::User;
use crate::state::claims::Claims;

/// Backing storage for session material.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory store used in tests and on targets without a browser.
#[derive(Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.values.borrow_mut().remove(key);
    }
}

/// `localStorage`-backed store. Storage failures (private browsing,
/// full quota) degrade to no-ops rather than panicking.
#[derive(Default)]
pub struct BrowserStore;

#[cfg(feature = "csr")]
impl SessionStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        let window = web_sys::window()?;
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(value) = storage.get_item(key) {
                return value;
            }
        }
        None
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(key, value);
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(key);
            }
        }
    }
}

#[cfg(not(feature = "csr"))]
impl SessionStore for BrowserStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) {}

    fn remove(&self, _key: &str) {}
}

/// Handle to the persisted session. Cheap to clone; clones share the
/// underlying store.
#[derive(Clone)]
pub struct TokenStore {
    store: Rc<dyn SessionStore>,
}

impl TokenStore {
    /// Store backed by the browser's `localStorage`.
    pub fn browser() -> Self {
        Self::new(BrowserStore)
    }

    /// Store backed by a plain map, for tests.
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::default())
    }

    pub fn new(store: impl SessionStore + 'static) -> Self {
        Self {
            store: Rc::new(store),
        }
    }

    pub fn token(&self) -> Option<String> {
        self.store.get(config::TOKEN_KEY)
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.store.get(config::REFRESH_TOKEN_KEY)
    }

    /// Persist a new session. `refresh` and `user` are optional so a
    /// refresh response that omits them keeps the previous values.
    pub fn set_session(&self, token: &str, refresh: Option<&str>, user: Option<&User>) {
        self.store.set(config::TOKEN_KEY, token);
        if let Some(refresh) = refresh {
            self.store.set(config::REFRESH_TOKEN_KEY, refresh);
        }
        if let Some(json) = user.and_then(|u| serde_json::to_string(u).ok()) {
            self.store.set(config::USER_KEY, &json);
        }
    }

    /// Drop every stored session key.
    pub fn clear(&self) {
        self.store.remove(config::TOKEN_KEY);
        self.store.remove(config::REFRESH_TOKEN_KEY);
        self.store.remove(config::USER_KEY);
    }

    /// Whether a usable credential is present.
    ///
    /// Tokens whose payload decodes as a JWT are checked against their
    /// `exp` claim; opaque tokens count as usable by presence alone
    /// and the server's 401 handling catches them later.
    pub fn is_authenticated(&self) -> bool {
        match self.token() {
            None => false,
            Some(token) => match Claims::decode(&token) {
                Ok(claims) => !claims.is_expired(),
                Err(_) => true,
            },
        }
    }

    /// The cached user, preferring the stored blob and falling back to
    /// the token claims.
    pub fn cached_user(&self) -> Option<User> {
        self.store
            .get(config::USER_KEY)
            .and_then(|json| serde_json::from_str(&json).ok())
            .or_else(|| {
                let token = self.token()?;
                Claims::decode(&token).ok().map(Claims::into_user)
            })
    }
}
