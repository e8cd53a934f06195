//! Wall-clock timestamp handling.
//!
//! All timestamps in the store are TEXT columns in the canonical
//! `%Y-%m-%d %H:%M:%S` format, captured in the lot's fixed local time
//! zone (UTC+3, no daylight saving) at the moment of the mutating
//! operation. Reservation start/end bounds are the one exception: they
//! are user-supplied, but must still parse in the canonical format.

use chrono::{FixedOffset, NaiveDateTime, Utc};

use crate::error::{Error, Result};

/// Canonical timestamp format for all stored wall-clock strings.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Fixed UTC offset of the lot's local time zone, in seconds (UTC+3).
const LOT_UTC_OFFSET_SECS: i32 = 3 * 3600;

/// Returns the current wall-clock time in the lot's time zone, formatted
/// in the canonical format.
///
/// # Examples
///
/// ```
/// use carpark::timestamp;
///
/// let now = timestamp::now();
/// assert!(timestamp::parse(&now).is_ok());
/// ```
#[must_use]
pub fn now() -> String {
    let offset = FixedOffset::east_opt(LOT_UTC_OFFSET_SECS)
        .unwrap_or_else(|| FixedOffset::east_opt(0).unwrap());
    Utc::now()
        .with_timezone(&offset)
        .format(TIMESTAMP_FORMAT)
        .to_string()
}

/// Parses a wall-clock string in the canonical format.
///
/// # Errors
///
/// Returns a validation error naming the offending value if the string
/// does not match `%Y-%m-%d %H:%M:%S`.
///
/// # Examples
///
/// ```
/// use carpark::timestamp;
///
/// assert!(timestamp::parse("2024-01-01 09:00:00").is_ok());
/// assert!(timestamp::parse("01/01/2024 9am").is_err());
/// ```
pub fn parse(value: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).map_err(|e| Error::Validation {
        field: "timestamp".into(),
        message: format!("{value:?} does not match {TIMESTAMP_FORMAT}: {e}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_is_canonical() {
        let now = now();
        parse(&now).unwrap();
        assert_eq!(now.len(), 19);
    }

    #[test]
    fn test_parse_valid() {
        let dt = parse("2024-01-01 09:00:00").unwrap();
        assert_eq!(dt.format(TIMESTAMP_FORMAT).to_string(), "2024-01-01 09:00:00");
    }

    #[test]
    fn test_parse_rejects_other_formats() {
        assert!(parse("2024-01-01").is_err());
        assert!(parse("2024-01-01T09:00:00").is_err());
        assert!(parse("").is_err());

        let err = parse("nope").unwrap_err();
        assert!(err.to_string().contains("does not match"));
    }
}
