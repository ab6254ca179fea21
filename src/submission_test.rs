use super::*;
use time::macros::datetime;

fn draft() -> ContactDraft {
    ContactDraft {
        name: "Ada".to_owned(),
        email: "not-an-email".to_owned(),
        subject: "Hi".to_owned(),
        message: "<b>bold</b>".to_owned(),
    }
}

#[test]
fn into_submission_keeps_fields_verbatim() {
    let sub = draft().into_submission(datetime!(2024-01-02 15:04:05.123 UTC));
    assert_eq!(sub.name, "Ada");
    assert_eq!(sub.email, "not-an-email");
    assert_eq!(sub.subject, "Hi");
    assert_eq!(sub.message, "<b>bold</b>");
    assert_eq!(sub.timestamp, "2024-01-02T15:04:05.123Z");
}

#[test]
fn submission_serializes_with_persisted_key_names() {
    let sub = draft().into_submission(datetime!(2024-01-02 15:04:05 UTC));
    let value = serde_json::to_value(&sub).unwrap();
    let obj = value.as_object().unwrap();
    let mut keys: Vec<_> = obj.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["email", "message", "name", "subject", "timestamp"]);
}

#[test]
fn submission_missing_fields_default_to_empty() {
    let sub: Submission = serde_json::from_str(r#"{"name":"Only"}"#).unwrap();
    assert_eq!(sub.name, "Only");
    assert!(sub.email.is_empty());
    assert!(sub.timestamp.is_empty());
}

#[test]
fn submission_ignores_unknown_fields() {
    let sub: Submission = serde_json::from_str(r#"{"name":"A","phone":"123"}"#).unwrap();
    assert_eq!(sub.name, "A");
}

#[test]
fn submission_null_fields_read_as_empty() {
    let sub: Submission = serde_json::from_str(r#"{"name":null,"email":"e@x","timestamp":null}"#).unwrap();
    assert!(sub.name.is_empty());
    assert_eq!(sub.email, "e@x");
    assert!(sub.timestamp.is_empty());
}

#[test]
fn submission_scalar_fields_read_as_json_text() {
    let sub: Submission = serde_json::from_str(r#"{"name":3.5,"subject":false,"message":[1]}"#).unwrap();
    assert_eq!(sub.name, "3.5");
    assert_eq!(sub.subject, "false");
    assert!(sub.message.is_empty());
}
