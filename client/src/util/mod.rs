//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic. Every browser call sits behind the `csr` feature with an inert
//! fallback, so the rest of the crate builds and tests natively.

pub mod clock;
pub mod dark_mode;
pub mod scroll;
pub mod site_config;
pub mod web_storage;
