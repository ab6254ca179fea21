//! Fixed site header: logo, section links, hamburger, theme toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads and writes the shared `RwSignal<UiState>`; the scroll listener on
//! the home page keeps `active_section` current.

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use folio::config::SiteConfig;
use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::{dark_mode, scroll};

/// Target of the logo link.
pub const LOGO_HREF: &str = "#home";

/// Section links shown in the header, as `(href, label)`.
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("#home", "Home"),
    ("#about", "About"),
    ("#projects", "Projects"),
    ("#skills", "Skills"),
    ("#contact", "Contact"),
];

/// Class list for a nav link given the currently active section.
pub fn nav_link_class(href: &str, active: Option<&str>) -> &'static str {
    if active.is_some() && scroll::anchor_id(href) == active {
        "nav-link active"
    } else {
        "nav-link"
    }
}

/// Class list for the menu or the hamburger given the open state.
pub fn toggle_class(base: &'static str, open: bool) -> String {
    if open { format!("{base} active") } else { base.to_owned() }
}

#[component]
pub fn NavBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let config = expect_context::<SiteConfig>();
    let header_offset = config.header_offset_px;

    let on_hamburger = move |_| ui.update(UiState::toggle_nav);
    let on_theme = move |_| {
        let next = dark_mode::toggle(ui.get_untracked().theme, &config);
        ui.update(|u| u.theme = next);
    };
    let theme_icon = move || format!("fas {}", ui.get().theme.toggle_icon());

    view! {
        <header class="site-header">
            <nav class="navbar">
                <a href=LOGO_HREF class="logo" on:click=scroll::on_anchor_click(LOGO_HREF, header_offset)>
                    "Portfolio"
                </a>
                <ul class=move || toggle_class("nav-links", ui.get().nav_open)>
                    {NAV_LINKS
                        .iter()
                        .map(|&(href, label)| {
                            let follow = scroll::on_anchor_click(href, header_offset);
                            let on_click = move |ev: leptos::ev::MouseEvent| {
                                ui.update(UiState::close_nav);
                                follow(ev);
                            };
                            view! {
                                <li>
                                    <a
                                        href=href
                                        class=move || nav_link_class(href, ui.get().active_section)
                                        on:click=on_click
                                    >
                                        {label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <div class="nav-actions">
                    <button id="theme-toggle" class="theme-toggle" title="Toggle theme" on:click=on_theme>
                        <i class=theme_icon></i>
                    </button>
                    <button
                        class=move || toggle_class("hamburger", ui.get().nav_open)
                        aria-label="Toggle navigation"
                        on:click=on_hamburger
                    >
                        <span class="bar"></span>
                        <span class="bar"></span>
                        <span class="bar"></span>
                    </button>
                </div>
            </nav>
        </header>
    }
}
