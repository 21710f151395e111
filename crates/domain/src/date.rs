//! Launch-date parsing.
//!
//! All textual launch dates funnel through [`parse_launch_date`] so that
//! format ambiguity lives in exactly one place.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// Date-only formats accepted in addition to RFC 3339 / RFC 2822 timestamps.
const DATE_FORMATS: [&str; 3] = [
    // "January 1, 2030"
    "%B %d, %Y",
    // "2030-01-01"
    "%Y-%m-%d",
    // "01/01/2030"
    "%m/%d/%Y",
];

/// Parse a client-supplied launch date.
///
/// Accepts, in order: RFC 3339 timestamps, RFC 2822 timestamps, and the
/// date-only formats in [`DATE_FORMATS`] (resolved to UTC midnight).
/// Returns `None` for anything else, including arbitrary words.
pub fn parse_launch_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(instant.with_timezone(&Utc));
    }
    if let Ok(instant) = DateTime::parse_from_rfc2822(raw) {
        return Some(instant.with_timezone(&Utc));
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            let midnight = date.and_hms_opt(0, 0, 0)?;
            return Some(Utc.from_utc_datetime(&midnight));
        }
    }

    None
}
