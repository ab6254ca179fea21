//! Admin response viewer behind a session-scoped login flag.
//!
//! DESIGN
//! ======
//! The gate is a convenience for the site owner, not access control: the
//! credentials ship with the page and the flag is a plain session-storage
//! string. Anyone with devtools can read the submissions directly.
//!
//! [`AdminView`] owns no UI. Each operation returns the [`AdminScreen`] the
//! page should show, so the client just swaps what it renders.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use time::UtcOffset;

use crate::markup::Markup;
use crate::render::render_submissions;
use crate::storage::{KeyValueStorage, StorageError};
use crate::store::SubmissionStore;
use crate::submission::Submission;

/// Session storage key holding the login flag.
pub const DEFAULT_SESSION_KEY: &str = "isAdminLoggedIn";

const LOGGED_IN: &str = "true";

/// Decides whether a username/password pair unlocks the admin view.
pub trait CredentialVerifier {
    fn verify(&self, username: &str, password: &str) -> bool;
}

impl<F> CredentialVerifier for F
where
    F: Fn(&str, &str) -> bool,
{
    fn verify(&self, username: &str, password: &str) -> bool {
        self(username, password)
    }
}

/// Exact, case-sensitive match against one configured pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StaticCredentials {
    username: String,
    password: String,
}

impl StaticCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: username.into(), password: password.into() }
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }
}

impl CredentialVerifier for StaticCredentials {
    fn verify(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password
    }
}

/// Error returned by [`AdminView::attempt_login`].
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    /// Wrong username, wrong password, or both. Deliberately not distinguished.
    #[error("Invalid credentials. Please try again.")]
    InvalidCredentials,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// What the admin page should display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AdminScreen {
    /// The login form.
    Login,
    /// The responses container with its rendered list.
    Responses(Markup),
}

impl AdminScreen {
    #[must_use]
    pub fn is_login(&self) -> bool {
        matches!(self, Self::Login)
    }
}

/// The boolean login flag in a session-scoped storage area.
#[derive(Clone, Debug)]
pub struct AdminSession<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> AdminSession<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self { storage, key: key.into() }
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.storage.get(&self.key).is_some_and(|v| v == LOGGED_IN)
    }

    /// # Errors
    ///
    /// Returns [`StorageError`] if the session area rejects the write.
    pub fn mark_logged_in(&self) -> Result<(), StorageError> {
        self.storage.set(&self.key, LOGGED_IN)
    }

    /// # Errors
    ///
    /// Returns [`StorageError`] if the session area is unavailable.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.storage.remove(&self.key)
    }
}

/// Login gate plus submission list.
pub struct AdminView<D, S, V> {
    store: SubmissionStore<D>,
    session: AdminSession<S>,
    verifier: V,
    offset: UtcOffset,
}

impl<D, S, V> AdminView<D, S, V>
where
    D: KeyValueStorage,
    S: KeyValueStorage,
    V: CredentialVerifier,
{
    /// `offset` is the viewer's UTC offset used for displayed timestamps.
    pub fn new(store: SubmissionStore<D>, session: AdminSession<S>, verifier: V, offset: UtcOffset) -> Self {
        Self { store, session, verifier, offset }
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.session.is_logged_in()
    }

    /// Login prompt, or the rendered list if the session flag is set.
    #[must_use]
    pub fn check_access(&self) -> AdminScreen {
        if self.session.is_logged_in() {
            AdminScreen::Responses(self.render(&self.store.list()))
        } else {
            AdminScreen::Login
        }
    }

    /// Verify the pair and, on success, set the session flag.
    ///
    /// # Errors
    ///
    /// Returns [`LoginError::InvalidCredentials`] on mismatch (state is left
    /// untouched) or [`LoginError::Storage`] if the flag cannot be written.
    pub fn attempt_login(&self, username: &str, password: &str) -> Result<AdminScreen, LoginError> {
        if !self.verifier.verify(username, password) {
            log::debug!("admin login rejected");
            return Err(LoginError::InvalidCredentials);
        }
        self.session.mark_logged_in()?;
        log::debug!("admin logged in");
        Ok(self.check_access())
    }

    /// Clear the session flag and return to the login prompt.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the session area is unavailable.
    pub fn logout(&self) -> Result<AdminScreen, StorageError> {
        self.session.clear()?;
        log::debug!("admin logged out");
        Ok(self.check_access())
    }

    /// Render `submissions` as escaped list markup.
    #[must_use]
    pub fn render(&self, submissions: &[Submission]) -> Markup {
        render_submissions(submissions, self.offset)
    }
}
