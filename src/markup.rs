//! HTML escaping and the escaped-markup newtype.
//!
//! Every user-supplied string that ends up in the admin list goes through
//! [`escape_html`]. [`Markup`] can only be built from escaped text or from
//! trusted static fragments, so the client never injects raw input into the
//! DOM.

#[cfg(test)]
#[path = "markup_test.rs"]
mod markup_test;

use std::fmt;

/// Escape the five HTML-significant characters `& < > " '`.
#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            other => out.push(other),
        }
    }
    out
}

/// HTML that is safe to assign to `innerHTML`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Markup(String);

impl Markup {
    /// Markup containing `raw` as inert text.
    #[must_use]
    pub fn text(raw: &str) -> Self {
        Self(escape_html(raw))
    }

    /// Markup from a fragment written in source code.
    #[must_use]
    pub fn trusted(fragment: &'static str) -> Self {
        Self(fragment.to_owned())
    }

    /// Append escaped text.
    pub fn push_text(&mut self, raw: &str) {
        self.0.push_str(&escape_html(raw));
    }

    /// Append a fragment written in source code.
    pub fn push_trusted(&mut self, fragment: &'static str) {
        self.0.push_str(fragment);
    }

    /// Append a decimal integer.
    pub fn push_uint(&mut self, n: usize) {
        self.0.push_str(&n.to_string());
    }

    /// Append other markup.
    pub fn push_markup(&mut self, other: &Markup) {
        self.0.push_str(&other.0);
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
