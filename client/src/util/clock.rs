//! Browser clock helpers: viewer UTC offset and current year.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use time::UtcOffset;

/// Convert `Date.getTimezoneOffset()` minutes (UTC minus local, so positive
/// west of Greenwich) into a [`UtcOffset`]. Out-of-range input yields UTC.
#[allow(clippy::cast_possible_truncation)]
pub fn offset_from_js_minutes(minutes: f64) -> UtcOffset {
    if !minutes.is_finite() {
        return UtcOffset::UTC;
    }
    let seconds = (-minutes * 60.0).round() as i32;
    UtcOffset::from_whole_seconds(seconds).unwrap_or(UtcOffset::UTC)
}

/// The viewer's current UTC offset.
pub fn local_offset() -> UtcOffset {
    #[cfg(feature = "csr")]
    {
        offset_from_js_minutes(js_sys::Date::new_0().get_timezone_offset())
    }
    #[cfg(not(feature = "csr"))]
    {
        UtcOffset::UTC
    }
}

/// Current calendar year for the footer.
pub fn current_year() -> i32 {
    #[cfg(feature = "csr")]
    {
        i32::try_from(js_sys::Date::new_0().get_full_year()).unwrap_or_default()
    }
    #[cfg(not(feature = "csr"))]
    {
        folio::datetime::now_utc().year()
    }
}
