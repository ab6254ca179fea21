//! Submission timestamps: generation and display formatting.
//!
//! Stored timestamps are UTC ISO-8601 with millisecond precision and a `Z`
//! suffix (`2024-01-02T15:04:05.123Z`), the shape browsers produce for
//! `Date.toISOString()`. Display uses the viewer's offset at minute precision.

#[cfg(test)]
#[path = "datetime_test.rs"]
mod datetime_test;

use time::format_description::BorrowedFormatItem;
use time::format_description::well_known::{Iso8601, Rfc3339};
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime, UtcOffset};

/// Shown in place of a stored timestamp that cannot be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

const DISPLAY_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
    "[month repr:short] [day padding:none], [year], [hour repr:12 padding:none]:[minute] [period]"
);

const ISO_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z");

/// Offset-less date-time, read as the viewer's local time.
const LOCAL_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute][optional [:[second][optional [.[subsecond]]]]]");

/// Bare calendar date, read as UTC midnight.
const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Error returned by [`format_display`].
#[derive(Debug, thiserror::Error)]
pub enum TimestampError {
    #[error("invalid timestamp: {0}")]
    Parse(#[from] time::error::Parse),
    #[error("timestamp not representable: {0}")]
    Format(#[from] time::error::Format),
    #[error("timestamp out of range for offset {0}")]
    OutOfRange(UtcOffset),
}

/// Current instant in UTC.
#[must_use]
pub fn now_utc() -> OffsetDateTime {
    OffsetDateTime::now_utc()
}

/// Render `at` as a UTC ISO-8601 string with millisecond precision.
///
/// An instant that has no UTC representation yields an empty string, which
/// later displays as [`INVALID_DATE`].
#[must_use]
pub fn iso_timestamp(at: OffsetDateTime) -> String {
    let formatted = at
        .checked_to_offset(UtcOffset::UTC)
        .ok_or(TimestampError::OutOfRange(UtcOffset::UTC))
        .and_then(|utc| utc.format(ISO_FORMAT).map_err(TimestampError::from));
    formatted.unwrap_or_else(|e| {
        log::warn!("cannot stamp submission at {at}: {e}");
        String::new()
    })
}

/// Parse a stored timestamp.
///
/// RFC 3339 first, then other ISO-8601 forms with an offset. An offset-less
/// date-time is taken in `viewer` time and a bare date is UTC midnight.
fn parse_stored(raw: &str, viewer: UtcOffset) -> Result<OffsetDateTime, TimestampError> {
    let raw = raw.trim();
    let err = match OffsetDateTime::parse(raw, &Rfc3339) {
        Ok(at) => return Ok(at),
        Err(e) => e,
    };
    if let Ok(at) = OffsetDateTime::parse(raw, &Iso8601::DEFAULT) {
        return Ok(at);
    }
    if let Ok(local) = PrimitiveDateTime::parse(raw, LOCAL_FORMAT) {
        return Ok(local.assume_offset(viewer));
    }
    if let Ok(day) = Date::parse(raw, DATE_FORMAT) {
        return Ok(day.midnight().assume_utc());
    }
    Err(err.into())
}

/// Format a stored ISO-8601 timestamp for display, e.g. `Jan 2, 2024, 3:04 PM`.
///
/// # Errors
///
/// Returns [`TimestampError::Parse`] if `raw` is not a recognised ISO-8601
/// form, or [`TimestampError::OutOfRange`] if the instant has no date in
/// `offset` (near the ends of the supported year range).
pub fn format_display(raw: &str, offset: UtcOffset) -> Result<String, TimestampError> {
    let parsed = parse_stored(raw, offset)?;
    let local = parsed.checked_to_offset(offset).ok_or(TimestampError::OutOfRange(offset))?;
    Ok(local.format(DISPLAY_FORMAT)?)
}

/// [`format_display`] with the [`INVALID_DATE`] fallback used by the admin list.
#[must_use]
pub fn display_or_invalid(raw: &str, offset: UtcOffset) -> String {
    format_display(raw, offset).unwrap_or_else(|e| {
        log::debug!("unparseable submission timestamp {raw:?}: {e}");
        INVALID_DATE.to_owned()
    })
}
