//! Admin responses container.
//!
//! The list body is injected as HTML, but only ever as [`Markup`], which the
//! core builds from escaped text.

use folio::markup::Markup;
use leptos::prelude::*;

#[component]
pub fn ResponseList(#[prop(into)] markup: Signal<Markup>, on_logout: Callback<()>) -> impl IntoView {
    view! {
        <div id="responses-container" class="responses-container">
            <div class="responses-header">
                <h2>"Contact Form Responses"</h2>
                <button id="logout-btn" class="btn btn-secondary" on:click=move |_| on_logout.run(())>
                    "Logout"
                </button>
            </div>
            <div id="responses-list" class="responses-list" inner_html=move || markup.get().into_string()></div>
        </div>
    }
}
