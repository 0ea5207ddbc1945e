//! Typed JSON persistence over a string key-value backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! In the browser the backend is `localStorage`; in tests it is
//! [`MemoryStore`]. Pages never talk to a backend directly: they go through
//! [`Store`], which turns every failure into a logged no-op.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort. A missing or corrupt value reads back as the
//! caller's fallback and a failed write is dropped, so the worst outcome is
//! state resetting on reload.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Failure reported by a [`KeyValueStore`] backend.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage area is reachable (private mode, SSR, disabled cookies).
    #[error("storage is unavailable")]
    Unavailable,
    /// The write would exceed the origin's storage quota.
    #[error("storage quota exceeded")]
    QuotaExceeded,
    /// Any other backend-specific failure.
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// String key-value backend with `localStorage` semantics.
pub trait KeyValueStore {
    /// Return the raw value under `key`, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend rejects the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Deleting an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend cannot be written.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// JSON-typed view over a [`KeyValueStore`] that never fails.
#[derive(Clone, Debug, Default)]
pub struct Store<S> {
    backend: S,
}

impl<S: KeyValueStore> Store<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// Borrow the underlying backend.
    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Read and deserialize the value under `key`.
    ///
    /// Returns `fallback` when the key is absent, holds an empty string, holds
    /// malformed JSON, or the backend fails.
    pub fn read<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T {
        let raw = match self.backend.get_item(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return fallback,
            Err(e) => {
                log::warn!("storage read of {key} failed: {e}");
                return fallback;
            }
        };
        if raw.is_empty() {
            return fallback;
        }
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("discarding malformed value under {key}: {e}");
                fallback
            }
        }
    }

    /// Serialize `value` and store it under `key`. Failures are logged and dropped.
    pub fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("could not serialize value for {key}: {e}");
                return;
            }
        };
        if let Err(e) = self.backend.set_item(key, &raw) {
            log::warn!("storage write of {key} dropped: {e}");
        }
    }

    /// Delete the value under `key`. Failures are logged and dropped.
    pub fn remove(&self, key: &str) {
        if let Err(e) = self.backend.remove_item(key) {
            log::warn!("storage remove of {key} dropped: {e}");
        }
    }
}

/// In-memory [`KeyValueStore`] used by tests and non-browser renders.
///
/// Clones share the same entries, so several controllers built from one
/// `MemoryStore` observe each other's writes the way pages share
/// `localStorage`.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<MemoryInner>>,
}

#[derive(Debug, Default)]
struct MemoryInner {
    entries: HashMap<String, String>,
    reject_writes: bool,
    quota_bytes: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store whose total key + value length may not exceed `bytes`.
    pub fn with_quota(bytes: usize) -> Self {
        let store = Self::default();
        store.lock().quota_bytes = Some(bytes);
        store
    }

    /// Make every subsequent write and remove fail with [`StorageError::Backend`].
    pub fn reject_writes(&self, reject: bool) {
        self.lock().reject_writes = reject;
    }

    /// Seed a raw string, bypassing serialization and write rejection.
    pub fn insert_raw(&self, key: &str, raw: &str) {
        self.lock().entries.insert(key.to_owned(), raw.to_owned());
    }

    /// Return the raw string under `key`.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.lock().entries.get(key).cloned()
    }

    /// Snapshot of all entries, for before/after comparisons.
    pub fn snapshot(&self) -> HashMap<String, String> {
        self.lock().entries.clone()
    }

    fn lock(&self) -> MutexGuard<'_, MemoryInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.raw(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut inner = self.lock();
        if inner.reject_writes {
            return Err(StorageError::Backend("writes rejected".to_owned()));
        }
        if let Some(quota) = inner.quota_bytes {
            let others: usize = inner
                .entries
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            if others + key.len() + value.len() > quota {
                return Err(StorageError::QuotaExceeded);
            }
        }
        inner.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let mut inner = self.lock();
        if inner.reject_writes {
            return Err(StorageError::Backend("writes rejected".to_owned()));
        }
        inner.entries.remove(key);
        Ok(())
    }
}
