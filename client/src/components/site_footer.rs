use leptos::prelude::*;

use crate::util::clock::current_year;

#[component]
pub fn SiteFooter() -> impl IntoView {
    let year = current_year();

    view! {
        <footer class="site-footer">
            <p>"© " <span id="current-year">{year}</span> " Portfolio. All rights reserved."</p>
            <a href="/admin" class="footer-admin-link">"Admin"</a>
        </footer>
    }
}
