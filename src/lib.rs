//! Contact-submission storage and admin viewer for the folio site.
//!
//! This crate is UI-framework agnostic: it never touches the DOM and never
//! reaches for a global storage area. The `client` crate supplies the browser
//! `localStorage`/`sessionStorage` through [`storage::KeyValueStorage`] and
//! renders whatever [`admin::AdminScreen`] it gets back.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`storage`] | Injected key-value storage trait and in-memory backend |
//! | [`submission`] | The stored record and the contact-form draft |
//! | [`store`] | Newest-first submission collection (`append` / `list`) |
//! | [`admin`] | Credential gate, session flag, access check, login/logout |
//! | [`render`] | Response list markup |
//! | [`markup`] | HTML escaping and the escaped-markup type |
//! | [`datetime`] | Timestamp generation and display formatting |
//! | [`theme`] | Light/dark preference |
//! | [`config`] | Storage keys, credentials, scroll offsets |

pub mod admin;
pub mod config;
pub mod datetime;
pub mod markup;
pub mod render;
pub mod storage;
pub mod store;
pub mod submission;
pub mod theme;
