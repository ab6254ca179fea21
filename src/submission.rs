//! Contact-form submission record.

#[cfg(test)]
#[path = "submission_test.rs"]
mod submission_test;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use time::OffsetDateTime;

use crate::datetime::iso_timestamp;

/// One stored contact-form submission.
///
/// Field names are the persisted JSON keys. A missing key, `null`, or a
/// nested value reads as an empty string and a number or boolean as its JSON
/// text, so one odd record never hides the rest of the collection.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub subject: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub message: String,
    /// UTC ISO-8601 instant set by the site, never by the visitor.
    #[serde(default, deserialize_with = "lenient_text")]
    pub timestamp: String,
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    })
}

/// The four visitor-editable contact-form fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactDraft {
    /// Stamp the draft with `submitted_at`. Field contents are kept verbatim.
    #[must_use]
    pub fn into_submission(self, submitted_at: OffsetDateTime) -> Submission {
        Submission {
            name: self.name,
            email: self.email,
            subject: self.subject,
            message: self.message,
            timestamp: iso_timestamp(submitted_at),
        }
    }
}
