//! Build-time site configuration.
//!
//! The WASM bundle has no process environment, so `FOLIO_*` variables are
//! read with `option_env!` when the client is compiled and fed to
//! [`SiteConfig::from_lookup`].

#[cfg(test)]
#[path = "site_config_test.rs"]
mod site_config_test;

use folio::config::SiteConfig;

/// Value of a `FOLIO_*` variable captured at compile time.
pub fn build_var(var: &str) -> Option<String> {
    let raw = match var {
        "FOLIO_RESPONSES_KEY" => option_env!("FOLIO_RESPONSES_KEY"),
        "FOLIO_SESSION_KEY" => option_env!("FOLIO_SESSION_KEY"),
        "FOLIO_THEME_KEY" => option_env!("FOLIO_THEME_KEY"),
        "FOLIO_ADMIN_USERNAME" => option_env!("FOLIO_ADMIN_USERNAME"),
        "FOLIO_ADMIN_PASSWORD" => option_env!("FOLIO_ADMIN_PASSWORD"),
        "FOLIO_HEADER_OFFSET_PX" => option_env!("FOLIO_HEADER_OFFSET_PX"),
        "FOLIO_SECTION_OFFSET_PX" => option_env!("FOLIO_SECTION_OFFSET_PX"),
        _ => None,
    };
    raw.map(str::to_owned)
}

/// Site config from build-time variables; defaults if they are invalid.
pub fn load() -> SiteConfig {
    SiteConfig::from_lookup(build_var).unwrap_or_else(|e| {
        log::warn!("invalid build-time site config, using defaults: {e}");
        SiteConfig::default()
    })
}
