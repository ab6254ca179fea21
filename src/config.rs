//! Site configuration: storage keys, admin credentials, scroll offsets.
//!
//! Values come from a key lookup so the same parser serves runtime env vars
//! (native tools, tests) and build-time `option_env!` values (the WASM
//! client, which has no process environment).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::admin::{DEFAULT_SESSION_KEY, StaticCredentials};
use crate::store::DEFAULT_RESPONSES_KEY;
use crate::theme::DEFAULT_THEME_KEY;

pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";
pub const DEFAULT_HEADER_OFFSET_PX: f64 = 80.0;
pub const DEFAULT_SECTION_OFFSET_PX: f64 = 100.0;

/// Every variable [`SiteConfig::from_lookup`] reads.
pub const CONFIG_VARS: &[&str] = &[
    "FOLIO_RESPONSES_KEY",
    "FOLIO_SESSION_KEY",
    "FOLIO_THEME_KEY",
    "FOLIO_ADMIN_USERNAME",
    "FOLIO_ADMIN_PASSWORD",
    "FOLIO_HEADER_OFFSET_PX",
    "FOLIO_SECTION_OFFSET_PX",
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is set but empty")]
    Empty { var: String },
    #[error("{var} must be a non-negative number, got {value:?}")]
    InvalidNumber { var: String, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    /// Durable key for the submission array.
    pub responses_key: String,
    /// Session key for the admin login flag.
    pub session_key: String,
    /// Durable key for the theme preference.
    pub theme_key: String,
    /// Placeholder gate for the admin page; not authentication.
    pub admin: StaticCredentials,
    /// Fixed header height subtracted from smooth-scroll targets.
    pub header_offset_px: f64,
    /// Lead distance before a section counts as the active one.
    pub section_offset_px: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            responses_key: DEFAULT_RESPONSES_KEY.to_owned(),
            session_key: DEFAULT_SESSION_KEY.to_owned(),
            theme_key: DEFAULT_THEME_KEY.to_owned(),
            admin: StaticCredentials::new(DEFAULT_ADMIN_USERNAME, DEFAULT_ADMIN_PASSWORD),
            header_offset_px: DEFAULT_HEADER_OFFSET_PX,
            section_offset_px: DEFAULT_SECTION_OFFSET_PX,
        }
    }
}

impl SiteConfig {
    /// Build config from `lookup`, using defaults for absent variables.
    ///
    /// Optional:
    /// - `FOLIO_RESPONSES_KEY`: default `contactResponses`
    /// - `FOLIO_SESSION_KEY`: default `isAdminLoggedIn`
    /// - `FOLIO_THEME_KEY`: default `theme`
    /// - `FOLIO_ADMIN_USERNAME` / `FOLIO_ADMIN_PASSWORD`: default `admin` / `admin123`
    /// - `FOLIO_HEADER_OFFSET_PX`: default 80
    /// - `FOLIO_SECTION_OFFSET_PX`: default 100
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for empty values or unparsable offsets.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let text = |var: &str, default: &str| -> Result<String, ConfigError> {
            match lookup(var) {
                None => Ok(default.to_owned()),
                Some(v) if v.is_empty() => Err(ConfigError::Empty { var: var.to_owned() }),
                Some(v) => Ok(v),
            }
        };
        let number = |var: &str, default: f64| -> Result<f64, ConfigError> {
            let Some(raw) = lookup(var) else {
                return Ok(default);
            };
            match raw.trim().parse::<f64>() {
                Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
                _ => Err(ConfigError::InvalidNumber { var: var.to_owned(), value: raw }),
            }
        };

        Ok(Self {
            responses_key: text("FOLIO_RESPONSES_KEY", DEFAULT_RESPONSES_KEY)?,
            session_key: text("FOLIO_SESSION_KEY", DEFAULT_SESSION_KEY)?,
            theme_key: text("FOLIO_THEME_KEY", DEFAULT_THEME_KEY)?,
            admin: StaticCredentials::new(
                text("FOLIO_ADMIN_USERNAME", DEFAULT_ADMIN_USERNAME)?,
                text("FOLIO_ADMIN_PASSWORD", DEFAULT_ADMIN_PASSWORD)?,
            ),
            header_offset_px: number("FOLIO_HEADER_OFFSET_PX", DEFAULT_HEADER_OFFSET_PX)?,
            section_offset_px: number("FOLIO_SECTION_OFFSET_PX", DEFAULT_SECTION_OFFSET_PX)?,
        })
    }

    /// Build config from process environment variables.
    ///
    /// # Errors
    ///
    /// See [`SiteConfig::from_lookup`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }
}
