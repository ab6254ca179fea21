//! Browser `localStorage` / `sessionStorage` as [`KeyValueStorage`].
//!
//! SYSTEM CONTEXT
//! ==============
//! The handle is re-fetched from `window` on every call, so a value of this
//! type is a plain `Copy` tag that can live in contexts and closures. Outside
//! the browser (`csr` off) reads see nothing and writes report
//! [`StorageError::Unavailable`].

#[cfg(test)]
#[path = "web_storage_test.rs"]
mod web_storage_test;

use folio::storage::{KeyValueStorage, StorageError};

/// Which browser storage area to use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BrowserStorage {
    /// `localStorage`: survives browser restarts.
    Local,
    /// `sessionStorage`: cleared when the tab's session ends.
    Session,
}

impl BrowserStorage {
    #[cfg(feature = "csr")]
    fn area(self) -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        let area = match self {
            Self::Local => window.local_storage(),
            Self::Session => window.session_storage(),
        };
        area.ok().flatten()
    }
}

#[cfg(feature = "csr")]
fn rejected(key: &str, err: &wasm_bindgen::JsValue) -> StorageError {
    StorageError::WriteRejected { key: key.to_owned(), reason: format!("{err:?}") }
}

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            self.area()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            let area = self.area().ok_or(StorageError::Unavailable)?;
            area.set_item(key, value).map_err(|e| rejected(key, &e))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            let area = self.area().ok_or(StorageError::Unavailable)?;
            area.remove_item(key).map_err(|e| rejected(key, &e))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }
}
