//! Key/value storage backends for session persistence.
//!
//! `KeyringStore` uses the OS keychain via the `keyring` crate, so the
//! bearer token never lands on disk in plaintext. `MemoryStore` backs
//! tests and ephemeral sessions.

use std::collections::HashMap;
use std::sync::Mutex;

use keyring::Entry;
use thiserror::Error;

/// Keychain service name for LinkStash entries.
const SERVICE_NAME: &str = "com.linkstash.desktop";

#[derive(Debug, Error)]
#[error("storage operation failed: {0}")]
pub struct StorageError(pub String);

impl From<keyring::Error> for StorageError {
    fn from(err: keyring::Error) -> Self {
        StorageError(err.to_string())
    }
}

/// Durable string storage, get/set/remove by key.
///
/// Injected into `SessionStore` at construction so tests can substitute
/// an in-memory fake. Reads are infallible: a backend read failure is
/// reported as an absent value, never an error.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// OS keychain storage.
pub struct KeyringStore;

impl KeyringStore {
    pub fn new() -> Self {
        Self
    }

    fn entry(key: &str) -> Result<Entry, StorageError> {
        Ok(Entry::new(SERVICE_NAME, key)?)
    }
}

impl Default for KeyringStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for KeyringStore {
    fn get(&self, key: &str) -> Option<String> {
        let entry = match Self::entry(key) {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("Keychain entry for {} unavailable: {}", key, e);
                return None;
            }
        };
        match entry.get_password() {
            Ok(value) => Some(value),
            Err(keyring::Error::NoEntry) => None,
            Err(e) => {
                log::warn!("Failed to read {} from keychain: {}", key, e);
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let entry = Self::entry(key)?;
        entry.set_password(value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let entry = Self::entry(key)?;
        match entry.delete_credential() {
            Ok(()) => Ok(()),
            // Already deleted or never stored, idempotent
            Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(StorageError::from(e)),
        }
    }
}

/// In-process storage with no persistence across restarts.
#[derive(Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut values = self
            .values
            .lock()
            .map_err(|_| StorageError("memory store lock poisoned".to_string()))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut values = self
            .values
            .lock()
            .map_err(|_| StorageError("memory store lock poisoned".to_string()))?;
        values.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryStore::new();
        assert!(store.get("k").is_none());

        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").as_deref(), Some("v"));

        store.set("k", "v2").unwrap();
        assert_eq!(store.get("k").as_deref(), Some("v2"));

        store.remove("k").unwrap();
        assert!(store.get("k").is_none());
    }

    #[test]
    fn memory_store_remove_missing_key_is_ok() {
        let store = MemoryStore::new();
        assert!(store.remove("never-set").is_ok());
    }
}
