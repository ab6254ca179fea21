//! Admin response list rendering.
//!
//! Produces the markup for the responses container: one `.response-item`
//! block per submission, or a single placeholder paragraph when there are
//! none. User text only ever enters through [`Markup::push_text`].

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use time::UtcOffset;

use crate::datetime::display_or_invalid;
use crate::markup::Markup;
use crate::submission::Submission;

/// Rendered in place of the list when no submissions exist.
pub const EMPTY_PLACEHOLDER: &str = "<p>No responses yet.</p>";

/// Render `submissions` in the order given, timestamps shown at `offset`.
#[must_use]
pub fn render_submissions(submissions: &[Submission], offset: UtcOffset) -> Markup {
    if submissions.is_empty() {
        return Markup::trusted(EMPTY_PLACEHOLDER);
    }

    let mut out = Markup::default();
    for (index, submission) in submissions.iter().enumerate() {
        render_item(&mut out, index, submission, offset);
    }
    out
}

fn render_item(out: &mut Markup, index: usize, submission: &Submission, offset: UtcOffset) {
    // Stagger entry animations by 0.1s per row.
    out.push_trusted("<div class=\"response-item\" style=\"animation-delay: ");
    out.push_uint(index / 10);
    out.push_trusted(".");
    out.push_uint(index % 10);
    out.push_trusted("s\">");

    out.push_trusted("<div class=\"response-header\"><div><span class=\"response-name\">");
    out.push_text(&submission.name);
    out.push_trusted("</span><span class=\"response-email\">");
    out.push_text(&submission.email);
    out.push_trusted("</span></div><span class=\"response-time\">");
    out.push_text(&display_or_invalid(&submission.timestamp, offset));
    out.push_trusted("</span></div>");

    out.push_trusted("<div class=\"response-subject\">");
    out.push_text(&submission.subject);
    out.push_trusted("</div><p class=\"response-message\">");
    out.push_text(&submission.message);
    out.push_trusted("</p></div>");
}
