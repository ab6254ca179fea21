//! Theme initialization and toggle.
//!
//! Reads the saved preference from `localStorage` (falling back to the
//! system `prefers-color-scheme`) and applies a `data-theme` attribute to
//! `<body>`. Toggle writes back to `localStorage` and updates the attribute.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort: a rejected write is logged and the page keeps
//! the new theme for the rest of the visit.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use folio::config::SiteConfig;
use folio::theme::{Theme, ThemeStore};

use super::web_storage::BrowserStorage;

fn theme_store(config: &SiteConfig) -> ThemeStore<BrowserStorage> {
    ThemeStore::new(BrowserStorage::Local, config.theme_key.as_str())
}

/// Whether the OS/browser asks for a dark color scheme.
pub fn system_prefers_dark() -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Saved theme, else the system preference.
pub fn read_preference(config: &SiteConfig) -> Theme {
    theme_store(config).resolve(system_prefers_dark())
}

/// Set `data-theme` on `<body>`.
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let _ = body.set_attribute("data-theme", theme.as_str());
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}

/// Flip the theme, apply it, and persist it.
pub fn toggle(current: Theme, config: &SiteConfig) -> Theme {
    let next = current.toggled();
    apply(next);
    if let Err(e) = theme_store(config).save(next) {
        log::debug!("theme preference not saved: {e}");
    }
    next
}
