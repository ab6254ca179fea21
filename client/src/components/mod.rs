//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and forms while reading/writing the shared
//! `UiState` and `SiteConfig` from Leptos context providers.

pub mod contact_form;
pub mod nav_bar;
pub mod response_list;
pub mod site_footer;
pub mod success_modal;
