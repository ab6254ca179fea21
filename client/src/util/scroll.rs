//! Smooth in-page scrolling and active-section tracking.
//!
//! The fixed header covers the top of the viewport, so scroll targets are
//! shifted up by the configured header offset. Section highlighting starts a
//! little before a section reaches the top (the section offset).

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Section ids on the home page, in document order.
pub const SECTION_IDS: &[&str] = &["home", "about", "projects", "skills", "contact"];

/// Vertical extent of a section in document coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: &'static str,
    pub top: f64,
    pub height: f64,
}

/// Target id of an in-page link, or `None` for a bare `#` or a non-anchor href.
pub fn anchor_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Document `y` to scroll to so an element at viewport `element_top` lands
/// just below the header.
pub fn scroll_target(element_top: f64, page_offset: f64, header_offset: f64) -> f64 {
    element_top + page_offset - header_offset
}

/// First section whose `[top - lead, top - lead + height)` contains `scroll_y`.
pub fn active_section(scroll_y: f64, sections: &[SectionBounds], lead: f64) -> Option<&'static str> {
    sections
        .iter()
        .find(|s| {
            let top = s.top - lead;
            scroll_y >= top && scroll_y < top + s.height
        })
        .map(|s| s.id)
}

/// Current vertical scroll position of the window.
pub fn current_scroll_y() -> f64 {
    #[cfg(feature = "csr")]
    {
        web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }
    #[cfg(not(feature = "csr"))]
    {
        0.0
    }
}

/// Smoothly scroll to the element with `id`. Returns `false` if it is absent.
pub fn smooth_scroll_to(id: &str, header_offset: f64) -> bool {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        let Some(element) = window.document().and_then(|d| d.get_element_by_id(id)) else {
            return false;
        };
        let top = element.get_bounding_client_rect().top();
        let opts = web_sys::ScrollToOptions::new();
        opts.set_top(scroll_target(top, current_scroll_y(), header_offset));
        opts.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&opts);
        true
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (id, header_offset);
        false
    }
}

/// Smooth-scroll to the target of an in-page `href`. Returns `false` when
/// `href` is not an anchor or its target is absent, leaving the native jump.
pub fn follow_anchor(href: &str, header_offset: f64) -> bool {
    anchor_id(href).is_some_and(|id| smooth_scroll_to(id, header_offset))
}

/// Click handler for any `<a href="#id">` on the page.
pub fn on_anchor_click(href: &'static str, header_offset: f64) -> impl Fn(leptos::ev::MouseEvent) + Copy + 'static {
    move |ev| {
        if follow_anchor(href, header_offset) {
            ev.prevent_default();
        }
    }
}

/// Measure the sections in [`SECTION_IDS`] that exist in the document.
pub fn measure_sections() -> Vec<SectionBounds> {
    #[cfg(feature = "csr")]
    {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return Vec::new();
        };
        let scroll_y = current_scroll_y();
        SECTION_IDS
            .iter()
            .filter_map(|&id| {
                let rect = document.get_element_by_id(id)?.get_bounding_client_rect();
                Some(SectionBounds { id, top: rect.top() + scroll_y, height: rect.height() })
            })
            .collect()
    }
    #[cfg(not(feature = "csr"))]
    {
        Vec::new()
    }
}
