//! # Time Utilities
//!
//! Utilities for time formatting and manipulation using chrono.

use chrono::{DateTime, Duration, NaiveDate, SecondsFormat, Utc};

/// Milliseconds in one day.
pub const DAY_MS: i64 = 86_400_000;

/// Get current UTC time.
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Current wall-clock time in milliseconds since the Unix epoch.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Parse RFC3339 string to UTC DateTime.
pub fn parse_utc(moment: &str) -> Result<DateTime<Utc>, Error> {
    DateTime::parse_from_rfc3339(moment)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| Error::FailToDateParse(moment.to_string()))
}

/// UTC calendar day of a timestamp.
pub fn day_key(moment: &DateTime<Utc>) -> NaiveDate {
    moment.date_naive()
}

/// `now - range_days` days, as an RFC3339 UTC string with millisecond precision.
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use lib_utils::time::lower_bound_iso;
///
/// let now = Utc.with_ymd_and_hms(2024, 3, 31, 12, 0, 0).unwrap();
/// assert_eq!(lower_bound_iso(now, 30).unwrap(), "2024-03-01T12:00:00.000Z");
/// assert!(lower_bound_iso(now, 100_000_000).is_err());
/// ```
pub fn lower_bound_iso(now: DateTime<Utc>, range_days: u32) -> Result<String, Error> {
    let bound = Duration::try_milliseconds(i64::from(range_days) * DAY_MS)
        .and_then(|span| now.checked_sub_signed(span))
        .ok_or(Error::RangeOutOfBounds(range_days))?;
    Ok(bound.to_rfc3339_opts(SecondsFormat::Millis, true))
}

// region:    --- Error
#[derive(Debug, PartialEq)]
pub enum Error {
    FailToDateParse(String),
    RangeOutOfBounds(u32),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
// endregion: --- Error
