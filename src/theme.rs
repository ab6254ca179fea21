//! Light/dark theme preference.
//!
//! Kept under its own durable key, separate from the submission array.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use crate::storage::{KeyValueStorage, StorageError};

/// Durable storage key holding `"dark"` or `"light"`.
pub const DEFAULT_THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value stored and written to the `data-theme` attribute.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Font Awesome icon for the toggle button: the theme you would switch to.
    #[must_use]
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Dark => "fa-sun",
            Self::Light => "fa-moon",
        }
    }

    #[must_use]
    pub fn from_system(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme: {0}")]
pub struct ThemeParseError(pub String);

impl FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ThemeParseError(other.to_owned())),
        }
    }
}

/// Theme preference in a durable storage area.
#[derive(Clone, Debug)]
pub struct ThemeStore<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> ThemeStore<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self { storage, key: key.into() }
    }

    /// Saved theme, if one is stored and valid.
    #[must_use]
    pub fn load(&self) -> Option<Theme> {
        let raw = self.storage.get(&self.key)?;
        match raw.parse() {
            Ok(theme) => Some(theme),
            Err(e) => {
                log::warn!("ignoring stored theme: {e}");
                None
            }
        }
    }

    /// Saved theme, else the system preference.
    #[must_use]
    pub fn resolve(&self, system_prefers_dark: bool) -> Theme {
        self.load().unwrap_or_else(|| Theme::from_system(system_prefers_dark))
    }

    /// # Errors
    ///
    /// Returns [`StorageError`] if the area rejects the write.
    pub fn save(&self, theme: Theme) -> Result<(), StorageError> {
        self.storage.set(&self.key, theme.as_str())
    }
}
