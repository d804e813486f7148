//! Persistent session state: auth token and user profile.
//!
//! The session is the only state this crate caches locally. Everything else
//! is owned by the backend.

pub mod store;

pub use store::{KeyValueStore, KeyringStore, MemoryStore, StorageError};

use crate::api::types::UserProfile;

/// Storage key holding the raw bearer token string.
const TOKEN_KEY: &str = "linkstash_token";

/// Storage key holding the JSON-serialized user profile.
const USER_KEY: &str = "linkstash_user";

/// Persists the auth token and user profile in a key/value store.
///
/// Two states: anonymous (no token stored) and authenticated (token + user
/// stored as a pair). A fresh login may overwrite an existing session
/// without an intervening logout; concurrent writes are last-write-wins.
/// Queries never fail -- storage errors and unparseable stored values are
/// logged and treated as absent. There is no expiry or refresh logic: a
/// token is trusted until the backend rejects it.
pub struct SessionStore {
    store: Box<dyn KeyValueStore>,
}

impl SessionStore {
    /// Create a session store over the given storage backend.
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// The stored bearer token, if any.
    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY)
    }

    /// The stored user profile, if any.
    ///
    /// A stored value that fails to parse as JSON is treated as absent.
    pub fn user(&self) -> Option<UserProfile> {
        let raw = self.store.get(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                log::warn!("Stored user profile is not valid JSON, ignoring: {}", e);
                None
            }
        }
    }

    /// Persist a token and user profile as a pair.
    pub fn set_session(&self, token: &str, user: &UserProfile) -> Result<(), StorageError> {
        let user_json = serde_json::to_string(user)
            .map_err(|e| StorageError(format!("failed to serialize user profile: {e}")))?;
        self.store.set(TOKEN_KEY, token)?;
        self.store.set(USER_KEY, &user_json)?;
        Ok(())
    }

    /// Remove the stored token and user. Idempotent.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.store.remove(TOKEN_KEY)?;
        self.store.remove(USER_KEY)?;
        Ok(())
    }

    /// Authenticated iff a token is stored.
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }
}
