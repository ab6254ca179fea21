//! Key-value storage abstraction shared by the submission store, the admin
//! session flag, and the theme preference.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser exposes two synchronous string-to-string areas (`localStorage`
//! and `sessionStorage`). Core logic only sees [`KeyValueStorage`], so the
//! client crate plugs in the browser areas while tests use [`MemoryStorage`].
//!
//! TRADE-OFFS
//! ==========
//! Reads return `Option` rather than `Result`: an unreadable area and a
//! missing key are indistinguishable to callers, which always fall back to a
//! default. Writes keep their error so callers can log rejected writes.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Error returned when a storage area refuses a write or removal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// The storage area does not exist in this environment.
    #[error("storage area unavailable")]
    Unavailable,
    /// The host rejected the write (quota exceeded, privacy mode, ...).
    #[error("write rejected for key {key}: {reason}")]
    WriteRejected { key: String, reason: String },
}

/// Synchronous string key-value area.
///
/// Methods take `&self`: every backend is a handle onto shared state, the
/// same way two scripts in one page see the same `localStorage`.
pub trait KeyValueStorage {
    /// Read the value stored under `key`, or `None` when absent/unreadable.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the area rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the area is unavailable.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for Rc<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// In-memory storage area. Clones share the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Drop every key, like the user clearing site data.
    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
