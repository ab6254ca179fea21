//! Contact form that stores each submission in `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! There is no backend: a submission is appended to the durable
//! `SubmissionStore` and only the admin page ever reads it back. A failed
//! write is logged; the visitor still sees the confirmation.

use folio::config::SiteConfig;
use folio::store::SubmissionStore;
use folio::submission::ContactDraft;
use leptos::prelude::*;

use crate::components::success_modal::open_success_modal;
use crate::state::ui::UiState;
use crate::util::web_storage::BrowserStorage;

/// Append `draft`, stamped now, to the store under `responses_key`.
///
/// # Errors
///
/// Returns the store error if the write was rejected.
pub fn save_submission(responses_key: &str, draft: ContactDraft) -> Result<(), folio::store::StoreError> {
    let submission = draft.into_submission(folio::datetime::now_utc());
    SubmissionStore::new(BrowserStorage::Local, responses_key).append(submission)
}

#[component]
pub fn ContactForm() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let config = expect_context::<SiteConfig>();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let draft = ContactDraft {
            name: name.get_untracked(),
            email: email.get_untracked(),
            subject: subject.get_untracked(),
            message: message.get_untracked(),
        };
        if let Err(e) = save_submission(&config.responses_key, draft) {
            log::warn!("contact submission not saved: {e}");
        }
        open_success_modal(ui);
        for field in [name, email, subject, message] {
            field.set(String::new());
        }
    };

    view! {
        <form id="contact-form" class="contact-form" on:submit=on_submit>
            <div class="form-group">
                <input
                    id="name"
                    type="text"
                    placeholder="Your Name"
                    required
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <input
                    id="email"
                    type="email"
                    placeholder="Your Email"
                    required
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <input
                    id="subject"
                    type="text"
                    placeholder="Subject"
                    required
                    prop:value=move || subject.get()
                    on:input=move |ev| subject.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <textarea
                    id="message"
                    rows="5"
                    placeholder="Your Message"
                    required
                    prop:value=move || message.get()
                    on:input=move |ev| message.set(event_target_value(&ev))
                ></textarea>
            </div>
            <button type="submit" class="btn btn-primary">"Send Message"</button>
        </form>
    }
}
