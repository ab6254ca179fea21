//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{admin::AdminPage, home::HomePage};
use crate::state::ui::UiState;
use crate::util::{dark_mode, site_config};

/// Root application component.
///
/// Loads the site config, applies the stored or system theme before first
/// paint, and provides both as context.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = site_config::load();
    let theme = dark_mode::read_preference(&config);
    dark_mode::apply(theme);

    provide_context(config);
    provide_context(RwSignal::new(UiState::with_theme(theme)));

    view! {
        <Stylesheet id="fontawesome" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css"/>
        <Title text="Portfolio"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("admin") view=AdminPage/>
            </Routes>
        </Router>
    }
}
