use super::*;

fn sub(name: &str, message: &str) -> Submission {
    Submission {
        name: name.to_owned(),
        email: "v@example.com".to_owned(),
        subject: "Hello".to_owned(),
        message: message.to_owned(),
        timestamp: "2024-01-02T15:04:05.123Z".to_owned(),
    }
}

#[test]
fn empty_list_renders_placeholder_only() {
    let html = render_submissions(&[], UtcOffset::UTC);
    assert_eq!(html.as_str(), EMPTY_PLACEHOLDER);
    assert!(!html.as_str().contains("response-item"));
}

#[test]
fn script_in_message_is_escaped() {
    let html = render_submissions(&[sub("A", "<script>alert(1)</script>")], UtcOffset::UTC);
    assert!(html.as_str().contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(!html.as_str().contains("<script>"));
}

#[test]
fn every_user_field_is_escaped() {
    let evil = Submission {
        name: "<n>".to_owned(),
        email: "\"e\"".to_owned(),
        subject: "'s'".to_owned(),
        message: "a&b".to_owned(),
        timestamp: "<t>".to_owned(),
    };
    let html = render_submissions(&[evil], UtcOffset::UTC).into_string();
    assert!(html.contains("&lt;n&gt;"));
    assert!(html.contains("&quot;e&quot;"));
    assert!(html.contains("&#039;s&#039;"));
    assert!(html.contains("a&amp;b"));
    assert!(!html.contains("<n>"));
    assert!(!html.contains("<t>"));
}

#[test]
fn blocks_follow_given_order() {
    let html = render_submissions(&[sub("Newest", "m"), sub("Older", "m")], UtcOffset::UTC).into_string();
    let newest = html.find("Newest").unwrap();
    let older = html.find("Older").unwrap();
    assert!(newest < older);
    assert_eq!(html.matches("class=\"response-item\"").count(), 2);
}

#[test]
fn block_contains_formatted_timestamp() {
    let html = render_submissions(&[sub("A", "m")], UtcOffset::UTC).into_string();
    assert!(html.contains("<span class=\"response-time\">Jan 2, 2024, 3:04 PM</span>"));
}

#[test]
fn unparseable_timestamp_renders_invalid_date() {
    let mut bad = sub("A", "m");
    bad.timestamp = "not a date".to_owned();
    let html = render_submissions(&[bad], UtcOffset::UTC).into_string();
    assert!(html.contains(crate::datetime::INVALID_DATE));
}

#[test]
fn animation_delay_steps_by_tenths() {
    let subs: Vec<_> = (0..12).map(|i| sub(&format!("n{i}"), "m")).collect();
    let html = render_submissions(&subs, UtcOffset::UTC).into_string();
    assert!(html.contains("animation-delay: 0.0s"));
    assert!(html.contains("animation-delay: 0.3s"));
    assert!(html.contains("animation-delay: 1.1s"));
}

#[test]
fn timestamp_at_end_of_range_renders_invalid_date_for_eastern_viewer() {
    let edge = Submission { timestamp: "9999-12-31T23:30:00Z".to_owned(), ..sub("Edge", "m") };
    let offset = UtcOffset::from_hms(1, 0, 0).unwrap();
    let html = render_submissions(&[edge, sub("Next", "m")], offset);
    assert!(html.as_str().contains("Invalid Date"));
    assert!(html.as_str().contains("Next"));
}
