//! Newest-first submission collection persisted under one storage key.
//!
//! ARCHITECTURE
//! ============
//! The whole collection lives in a single JSON array. `append` is a
//! read-modify-write of that array; `list` is a read. Both run synchronously
//! on the UI thread, so no interleaving is possible inside one page.
//!
//! ERROR HANDLING
//! ==============
//! An absent or malformed stored value reads as an empty collection. A bad
//! value is overwritten by the next append rather than blocking it. Inside a
//! well-formed array each entry is read on its own: entries that are not
//! objects are skipped by `list` but kept verbatim by `append`, so no stored
//! record is ever lost to a later submission.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use crate::storage::{KeyValueStorage, StorageError};
use crate::submission::Submission;

/// Storage key used by the site for the submission array.
pub const DEFAULT_RESPONSES_KEY: &str = "contactResponses";

/// Error returned by [`SubmissionStore::append`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to serialize submissions: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Append-only submission collection over an injected storage area.
#[derive(Clone, Debug)]
pub struct SubmissionStore<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> SubmissionStore<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self { storage, key: key.into() }
    }

    /// Store under [`DEFAULT_RESPONSES_KEY`].
    pub fn with_default_key(storage: S) -> Self {
        Self::new(storage, DEFAULT_RESPONSES_KEY)
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Insert `submission` at the front of the stored collection.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the collection cannot be serialized or the
    /// storage area rejects the write. The stored value is unchanged then.
    pub fn append(&self, submission: Submission) -> Result<(), StoreError> {
        let mut entries = self.stored_entries();
        entries.insert(0, serde_json::to_value(submission)?);
        let raw = serde_json::to_string(&entries)?;
        self.storage.set(&self.key, &raw)?;
        log::debug!("stored submission under {} ({} total)", self.key, entries.len());
        Ok(())
    }

    /// All stored submissions, newest first. Never fails.
    #[must_use]
    pub fn list(&self) -> Vec<Submission> {
        self.stored_entries()
            .into_iter()
            .filter_map(|entry| match serde_json::from_value::<Submission>(entry) {
                Ok(submission) => Some(submission),
                Err(e) => {
                    log::warn!("skipping unreadable entry under {}: {e}", self.key);
                    None
                }
            })
            .collect()
    }

    /// Raw array entries under the key; empty when absent, `null`, or not an array.
    fn stored_entries(&self) -> Vec<serde_json::Value> {
        let Some(raw) = self.storage.get(&self.key) else {
            return Vec::new();
        };
        match serde_json::from_str::<Option<Vec<serde_json::Value>>>(&raw) {
            Ok(parsed) => parsed.unwrap_or_default(),
            Err(e) => {
                log::warn!("ignoring malformed value under {}: {e}", self.key);
                Vec::new()
            }
        }
    }
}
