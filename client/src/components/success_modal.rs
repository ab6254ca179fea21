//! "Message sent" modal shown after a contact-form submission.

#[cfg(test)]
#[path = "success_modal_test.rs"]
mod success_modal_test;

use leptos::prelude::*;

use crate::state::ui::{MODAL_HIDE_DELAY_MS, MODAL_REVEAL_DELAY_MS, UiState};

/// Put the modal in layout, then add `show` on the next tick.
pub fn open_success_modal(ui: RwSignal<UiState>) {
    ui.update(|u| u.modal = u.modal.open());
    #[cfg(feature = "csr")]
    {
        gloo_timers::callback::Timeout::new(MODAL_REVEAL_DELAY_MS, move || {
            ui.update(|u| u.modal = u.modal.reveal());
        })
        .forget();
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = MODAL_REVEAL_DELAY_MS;
        ui.update(|u| u.modal = u.modal.reveal());
    }
}

/// Drop `show`, then take the modal out of layout once the fade ends.
pub fn close_success_modal(ui: RwSignal<UiState>) {
    ui.update(|u| u.modal = u.modal.close());
    #[cfg(feature = "csr")]
    {
        gloo_timers::callback::Timeout::new(MODAL_HIDE_DELAY_MS, move || {
            ui.update(|u| u.modal = u.modal.finish_close());
        })
        .forget();
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = MODAL_HIDE_DELAY_MS;
        ui.update(|u| u.modal = u.modal.finish_close());
    }
}

#[component]
pub fn SuccessModal() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let modal_class = move || if ui.get().modal.has_show_class() { "modal show" } else { "modal" };
    let modal_style = move || if ui.get().modal.in_layout() { "display: flex" } else { "display: none" };

    view! {
        <div id="success-modal" class=modal_class style=modal_style on:click=move |_| close_success_modal(ui)>
            <div class="modal-content" on:click=move |ev| ev.stop_propagation()>
                <button class="close-modal" title="Close" on:click=move |_| close_success_modal(ui)>
                    "×"
                </button>
                <i class="fas fa-check-circle"></i>
                <h3>"Message Sent!"</h3>
                <p>"Thank you for reaching out. I'll get back to you soon."</p>
                <button class="btn close-btn" on:click=move |_| close_success_modal(ui)>
                    "Close"
                </button>
            </div>
        </div>
    }
}
