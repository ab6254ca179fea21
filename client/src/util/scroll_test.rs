use super::*;

fn sections() -> Vec<SectionBounds> {
    vec![
        SectionBounds { id: "home", top: 0.0, height: 600.0 },
        SectionBounds { id: "about", top: 600.0, height: 400.0 },
        SectionBounds { id: "contact", top: 1000.0, height: 500.0 },
    ]
}

// =============================================================
// anchor_id
// =============================================================

#[test]
fn anchor_id_strips_hash() {
    assert_eq!(anchor_id("#about"), Some("about"));
}

#[test]
fn anchor_id_ignores_bare_hash_and_external_links() {
    assert_eq!(anchor_id("#"), None);
    assert_eq!(anchor_id("/admin"), None);
    assert_eq!(anchor_id(""), None);
}

// =============================================================
// scroll_target
// =============================================================

#[test]
fn scroll_target_subtracts_header() {
    assert!((scroll_target(250.0, 1000.0, 80.0) - 1170.0).abs() < f64::EPSILON);
}

#[test]
fn scroll_target_element_above_viewport() {
    assert!((scroll_target(-300.0, 1000.0, 80.0) - 620.0).abs() < f64::EPSILON);
}

// =============================================================
// active_section
// =============================================================

#[test]
fn active_section_at_top_is_first() {
    assert_eq!(active_section(0.0, &sections(), 100.0), Some("home"));
}

#[test]
fn active_section_switches_before_section_reaches_top() {
    assert_eq!(active_section(499.0, &sections(), 100.0), Some("home"));
    assert_eq!(active_section(500.0, &sections(), 100.0), Some("about"));
}

#[test]
fn active_section_interval_is_half_open() {
    // about spans [500, 900) with a 100px lead
    assert_eq!(active_section(900.0, &sections(), 100.0), Some("contact"));
}

#[test]
fn active_section_past_last_is_none() {
    assert_eq!(active_section(5000.0, &sections(), 100.0), None);
    assert_eq!(active_section(10.0, &[], 100.0), None);
}

#[test]
fn section_ids_include_contact() {
    assert!(SECTION_IDS.contains(&"contact"));
}

#[cfg(not(feature = "csr"))]
#[test]
fn browser_helpers_are_inert_outside_browser() {
    assert!(!smooth_scroll_to("about", 80.0));
    assert!(measure_sections().is_empty());
    assert!(current_scroll_y().abs() < f64::EPSILON);
}

// =============================================================
// follow_anchor
// =============================================================

#[test]
fn follow_anchor_leaves_non_anchor_links_alone() {
    assert!(!follow_anchor("/admin", 80.0));
    assert!(!follow_anchor("#", 80.0));
}

#[test]
fn follow_anchor_falls_back_to_native_jump_without_document() {
    assert!(!follow_anchor("#contact", 80.0));
}
