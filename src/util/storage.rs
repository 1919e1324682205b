//! Durable key-value storage boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `StorageBackend` is the raw, fallible contract implemented by browser
//! `localStorage` and by the in-memory store used during SSR and tests.
//! `PersistentStore` wraps a backend and is the only type business logic talks
//! to: every backend fault is logged here and converted into "absent" (reads)
//! or a silent no-op (writes/deletes).
//!
//! A write or delete the backend refused is kept in a session shadow and
//! served back on later reads of that key, so a disabled or full storage
//! degrades to "not durable" instead of "forgets the last change".
//!
//! TRADE-OFFS
//! ==========
//! The backend contract is async even though `localStorage` is synchronous, so
//! a networked backend can be swapped in without reshaping callers.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Faults a storage backend can report.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage rejected write: {0}")]
    Rejected(String),
    #[error("storage read failed: {0}")]
    Read(String),
}

/// Raw key-value storage. Implementations report faults; they never swallow them.
#[async_trait(?Send)]
pub trait StorageBackend {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    async fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// In-memory backend. Clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value, bypassing the async contract.
    #[must_use]
    pub fn with_item(self, key: &str, value: &str) -> Self {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        self
    }

    /// Inspect the raw stored value for `key`.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }
}

#[async_trait(?Send)]
impl StorageBackend for MemoryStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.raw(key))
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// Result of decoding a JSON value read through [`PersistentStore::read_json`].
#[derive(Debug, Clone, PartialEq)]
pub enum ReadOutcome<T> {
    /// Nothing stored, or the backend could not be read.
    Absent,
    Present(T),
    /// A value exists but does not decode as `T`.
    Corrupt,
}

impl<T> ReadOutcome<T> {
    /// Collapse to the value, treating absent and corrupt data alike.
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent | Self::Corrupt => T::default(),
        }
    }
}

/// Keys whose last write (`Some`) or delete (`None`) the backend refused.
type Shadow = Rc<RefCell<HashMap<String, Option<String>>>>;

/// Fault-absorbing adapter over a [`StorageBackend`].
///
/// Clones share both the backend and the session shadow.
#[derive(Clone)]
pub struct PersistentStore {
    backend: Rc<dyn StorageBackend>,
    shadow: Shadow,
}

impl PersistentStore {
    pub fn new(backend: impl StorageBackend + 'static) -> Self {
        Self::from_shared(Rc::new(backend))
    }

    #[must_use]
    pub fn from_shared(backend: Rc<dyn StorageBackend>) -> Self {
        Self { backend, shadow: Shadow::default() }
    }

    /// Read the raw value for `key`.
    ///
    /// A change the backend refused this session wins over what the backend
    /// holds. Backend read faults read as absent.
    pub async fn read(&self, key: &str) -> Option<String> {
        if let Some(pending) = self.shadow.borrow().get(key) {
            return pending.clone();
        }
        match self.backend.get_item(key).await {
            Ok(value) => value,
            Err(e) => {
                leptos::logging::warn!("storage read failed: key={key} error={e}");
                None
            }
        }
    }

    /// Write `value` under `key`. Backend faults are logged and the value is
    /// kept in the session shadow.
    pub async fn write(&self, key: &str, value: &str) {
        match self.backend.set_item(key, value).await {
            Ok(()) => {
                self.shadow.borrow_mut().remove(key);
            }
            Err(e) => {
                leptos::logging::warn!("storage write failed: key={key} error={e}");
                self.shadow.borrow_mut().insert(key.to_owned(), Some(value.to_owned()));
            }
        }
    }

    /// Remove `key`. Backend faults are logged and the removal is kept in the
    /// session shadow.
    pub async fn delete(&self, key: &str) {
        match self.backend.remove_item(key).await {
            Ok(()) => {
                self.shadow.borrow_mut().remove(key);
            }
            Err(e) => {
                leptos::logging::warn!("storage write failed: key={key} op=delete error={e}");
                self.shadow.borrow_mut().insert(key.to_owned(), None);
            }
        }
    }

    /// Whether `key` has a change the backend has not accepted.
    #[must_use]
    pub fn is_pending(&self, key: &str) -> bool {
        self.shadow.borrow().contains_key(key)
    }

    pub async fn read_json<T: DeserializeOwned>(&self, key: &str) -> ReadOutcome<T> {
        let Some(raw) = self.read(key).await else {
            return ReadOutcome::Absent;
        };
        match serde_json::from_str(&raw) {
            Ok(value) => ReadOutcome::Present(value),
            Err(_) => ReadOutcome::Corrupt,
        }
    }

    pub async fn write_json<T: Serialize>(&self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(raw) => self.write(key, &raw).await,
            Err(e) => leptos::logging::warn!("storage encode failed: key={key} error={e}"),
        }
    }
}
