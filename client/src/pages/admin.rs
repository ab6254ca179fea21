//! Admin page: session-gated login form and the stored responses list.
//!
//! SYSTEM CONTEXT
//! ==============
//! The gate is client-only. Submissions come from `localStorage`, the login
//! flag lives in `sessionStorage`, and credentials are the build-time pair
//! from `SiteConfig`.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use folio::admin::{AdminScreen, AdminSession, AdminView, LoginError, StaticCredentials};
use folio::config::SiteConfig;
use folio::markup::Markup;
use folio::store::SubmissionStore;
use leptos::prelude::*;

use crate::components::response_list::ResponseList;
use crate::util::clock::local_offset;
use crate::util::web_storage::BrowserStorage;

pub type BrowserAdminView = AdminView<BrowserStorage, BrowserStorage, StaticCredentials>;

/// Build the admin view over browser storage for `config`.
pub fn admin_view(config: &SiteConfig) -> BrowserAdminView {
    AdminView::new(
        SubmissionStore::new(BrowserStorage::Local, config.responses_key.clone()),
        AdminSession::new(BrowserStorage::Session, config.session_key.clone()),
        config.admin.clone(),
        local_offset(),
    )
}

/// Run one login attempt and report what to show next.
///
/// A rejected attempt keeps the login form and yields the alert text.
pub fn login_outcome(view: &BrowserAdminView, username: &str, password: &str) -> (AdminScreen, Option<String>) {
    match view.attempt_login(username, password) {
        Ok(screen) => (screen, None),
        Err(e @ LoginError::InvalidCredentials) => (AdminScreen::Login, Some(e.to_string())),
        Err(e) => {
            log::warn!("admin login flag not stored: {e}");
            (view.check_access(), Some(e.to_string()))
        }
    }
}

fn alert(message: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
    }
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let view = StoredValue::new(admin_view(&config));

    let screen = RwSignal::new(view.with_value(AdminView::check_access));
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let on_login = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (next, message) =
            view.with_value(|v| login_outcome(v, &username.get_untracked(), &password.get_untracked()));
        if let Some(message) = message {
            alert(&message);
        }
        screen.set(next);
        username.set(String::new());
        password.set(String::new());
    };

    let on_logout = Callback::new(move |()| {
        let next = view.with_value(|v| {
            v.logout().unwrap_or_else(|e| {
                log::warn!("admin logout failed: {e}");
                v.check_access()
            })
        });
        screen.set(next);
    });

    let markup = Signal::derive(move || match screen.get() {
        AdminScreen::Responses(markup) => markup,
        AdminScreen::Login => Markup::default(),
    });

    view! {
        <main class="admin-page">
            <Show
                when=move || screen.with(AdminScreen::is_login)
                fallback=move || view! { <ResponseList markup=markup on_logout=on_logout/> }
            >
                <div id="login-container" class="login-container">
                    <h2>"Admin Login"</h2>
                    <form id="login-form" class="login-form" on:submit=on_login>
                        <div class="form-group">
                            <input
                                id="username"
                                type="text"
                                placeholder="Username"
                                required
                                prop:value=move || username.get()
                                on:input=move |ev| username.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <input
                                id="password"
                                type="password"
                                placeholder="Password"
                                required
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                        </div>
                        <button type="submit" class="btn btn-primary">"Login"</button>
                    </form>
                </div>
            </Show>
            <a href="/" class="back-link">"Back to site"</a>
        </main>
    }
}
