//! Single-page portfolio: hero, about, projects, skills, contact.
//!
//! Installs the window scroll listener that keeps the header's active link
//! in sync with the section under the header.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use folio::config::SiteConfig;
use leptos::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::nav_bar::NavBar;
use crate::components::site_footer::SiteFooter;
use crate::components::success_modal::SuccessModal;
use crate::state::ui::UiState;
use crate::util::scroll;

/// Target of the hero call-to-action.
pub const HERO_CTA_HREF: &str = "#contact";

struct Project {
    title: &'static str,
    blurb: &'static str,
    tags: &'static [&'static str],
}

const PROJECTS: &[Project] = &[
    Project {
        title: "Realtime Whiteboard",
        blurb: "Collaborative canvas with presence, undo history, and an AI assistant.",
        tags: &["Rust", "WebSockets", "WASM"],
    },
    Project {
        title: "Static Site Toolkit",
        blurb: "Zero-backend sites with local persistence and theme switching.",
        tags: &["Leptos", "CSS"],
    },
    Project {
        title: "Timesheet CLI",
        blurb: "Track hours, breaks, and overtime from the terminal.",
        tags: &["CLI", "SQLite"],
    },
];

const SKILLS: &[&str] = &["Rust", "TypeScript", "WebAssembly", "SQL", "HTML & CSS", "Git"];

#[component]
pub fn HomePage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let config = expect_context::<SiteConfig>();

    let on_cta = scroll::on_anchor_click(HERO_CTA_HREF, config.header_offset_px);

    #[cfg(feature = "csr")]
    {
        let lead = config.section_offset_px;
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let active = scroll::active_section(scroll::current_scroll_y(), &scroll::measure_sections(), lead);
            if ui.get_untracked().active_section != active {
                ui.update(|u| u.active_section = active);
            }
        });
        on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (ui, &config);
    }

    view! {
        <NavBar/>
        <main>
            <section id="home" class="section hero">
                <h1>"Hi, I'm a software developer."</h1>
                <p class="hero-subtitle">"I build fast, reliable software for the web and the terminal."</p>
                <a href=HERO_CTA_HREF class="btn btn-primary" on:click=on_cta>
                    "Get in touch"
                </a>
            </section>

            <section id="about" class="section about">
                <h2 class="section-title">"About Me"</h2>
                <p>
                    "I enjoy systems programming, tidy interfaces, and tools that stay out of the way. "
                    "This site runs entirely in your browser."
                </p>
            </section>

            <section id="projects" class="section projects">
                <h2 class="section-title">"Projects"</h2>
                <div class="project-grid">
                    {PROJECTS
                        .iter()
                        .map(|p| {
                            view! {
                                <article class="project-card">
                                    <h3>{p.title}</h3>
                                    <p>{p.blurb}</p>
                                    <ul class="project-tags">
                                        {p.tags.iter().map(|t| view! { <li>{*t}</li> }).collect_view()}
                                    </ul>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section id="skills" class="section skills">
                <h2 class="section-title">"Skills"</h2>
                <ul class="skill-list">
                    {SKILLS.iter().map(|s| view! { <li class="skill">{*s}</li> }).collect_view()}
                </ul>
            </section>

            <section id="contact" class="section contact">
                <h2 class="section-title">"Contact"</h2>
                <ContactForm/>
            </section>
        </main>
        <SiteFooter/>
        <SuccessModal/>
    }
}
