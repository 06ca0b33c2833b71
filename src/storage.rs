//! Durable key-value persistence for the session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store only needs string get/set/remove, so it depends on the
//! `KeyValueStore` trait. The browser build persists to `localStorage`;
//! tests and non-browser builds use `MemoryStore`.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Synchronous string key-value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns a description of the failure if the value was not written.
    fn set(&self, key: &str, value: &str) -> Result<(), String>;

    /// # Errors
    ///
    /// Returns a description of the failure if the key could not be removed.
    fn remove(&self, key: &str) -> Result<(), String>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        (**self).remove(key)
    }
}

/// Load and deserialize a JSON value for `key`.
///
/// `Ok(None)` when the key is absent.
///
/// # Errors
///
/// Returns the deserialization error when a value is present but malformed.
pub fn load_json<T, S>(store: &S, key: &str) -> Result<Option<T>, serde_json::Error>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    store.get(key).map(|raw| serde_json::from_str(&raw)).transpose()
}

/// Serialize `value` as JSON and write it under `key`.
///
/// # Errors
///
/// Returns a description of the serialization or write failure.
pub fn save_json<T, S>(store: &S, key: &str, value: &T) -> Result<(), String>
where
    T: Serialize,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value).map_err(|e| e.to_string())?;
    store.set(key, &raw)
}

/// In-process store backed by a `HashMap`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        if let Ok(mut entries) = store.entries.write() {
            entries.insert(key.to_owned(), value.to_owned());
        }
        store
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.read().map_or(false, |e| e.contains_key(key))
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        let mut entries = self.entries.write().map_err(|e| e.to_string())?;
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        let mut entries = self.entries.write().map_err(|e| e.to_string())?;
        entries.remove(key);
        Ok(())
    }
}

/// Browser `localStorage`.
///
/// Outside the `csr` build there is no window; reads return `None` and
/// writes fail.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, String> {
    web_sys::window()
        .ok_or_else(|| "no window".to_owned())?
        .local_storage()
        .map_err(|e| format!("{e:?}"))?
        .ok_or_else(|| "localStorage unavailable".to_owned())
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage().ok()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.set_item(key, value).map_err(|e| format!("{e:?}"))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err("localStorage unavailable".to_owned())
        }
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.remove_item(key).map_err(|e| format!("{e:?}"))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err("localStorage unavailable".to_owned())
        }
    }
}
