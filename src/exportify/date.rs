//! Date parsing for the granularities Exportify emits
//!
//! Release dates come as `YYYY`, `YYYY-MM` or `YYYY-MM-DD` depending on
//! what Spotify knows about the album; added-at timestamps are full
//! ISO-8601 instants with a `Z` suffix.

use super::ParseError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Parse a date string into an instant in `timezone`
///
/// * `YYYY` → January 1st, midnight UTC
/// * `YYYY-MM` → first of the month, midnight UTC
/// * anything else → full ISO-8601, a trailing `Z` meaning `+00:00`
///
/// The UTC instant is then expressed in `timezone`. A two-part string that
/// is not a numeric year and month is parsed as full ISO-8601.
pub fn parse_date(value: &str, timezone: Tz) -> Result<DateTime<Tz>, ParseError> {
    let invalid = || ParseError::InvalidDate {
        value: value.to_string(),
    };

    if !value.contains('-') {
        let year = value.trim().parse::<i32>().map_err(|_| invalid())?;
        return start_of_month(year, 1, timezone).ok_or_else(invalid);
    }

    let parts: Vec<&str> = value.split('-').collect();
    if parts.len() == 2 {
        if let (Ok(year), Ok(month)) = (parts[0].parse::<i32>(), parts[1].parse::<u32>()) {
            return start_of_month(year, month, timezone).ok_or_else(invalid);
        }
    }

    let normalized = match value.strip_suffix('Z') {
        Some(stripped) => format!("{}+00:00", stripped),
        None => value.to_string(),
    };

    parse_iso(&normalized)
        .map(|utc| utc.with_timezone(&timezone))
        .ok_or_else(invalid)
}

fn start_of_month(year: i32, month: u32, timezone: Tz) -> Option<DateTime<Tz>> {
    Utc.with_ymd_and_hms(year, month, 1, 0, 0, 0)
        .single()
        .map(|utc| utc.with_timezone(&timezone))
}

/// Offset-aware first, then naive date-times and plain dates taken as UTC
///
/// Both the extended (`2021-06-01T10:00:00`) and basic (`20210601T100000`)
/// ISO-8601 forms are accepted.
fn parse_iso(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f%:z", "%Y%m%dT%H%M%S%z"] {
        if let Ok(dt) = DateTime::parse_from_str(value, format) {
            return Some(dt.with_timezone(&Utc));
        }
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_year_only() {
        let dt = parse_date("1999", Tz::UTC).unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day(), dt.hour()), (1999, 1, 1, 0));
    }

    #[test]
    fn test_year_only_shifted_to_target() {
        let dt = parse_date("2000", chrono_tz::US::Eastern).unwrap();
        // Midnight UTC is the previous evening in New York
        assert_eq!((dt.year(), dt.month(), dt.day(), dt.hour()), (1999, 12, 31, 19));
    }

    #[test]
    fn test_year_month() {
        let dt = parse_date("2015-07", Tz::UTC).unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2015, 7, 1));
        assert_eq!(dt.hour(), 0);
    }

    #[test]
    fn test_year_month_shifted_to_target() {
        let dt = parse_date("2015-07", chrono_tz::US::Eastern).unwrap();
        // July 1st midnight UTC is 20:00 EDT on June 30th
        assert_eq!((dt.year(), dt.month(), dt.day(), dt.hour()), (2015, 6, 30, 20));
    }

    #[test]
    fn test_full_date() {
        let dt = parse_date("2019-05-03", Tz::UTC).unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day(), dt.hour()), (2019, 5, 3, 0));
    }

    #[test]
    fn test_z_suffix_equals_utc_offset() {
        let z = parse_date("2021-06-01T10:00:00Z", Tz::UTC).unwrap();
        let offset = parse_date("2021-06-01T10:00:00+00:00", Tz::UTC).unwrap();
        assert_eq!(z, offset);
        assert_eq!(z.hour(), 10);
    }

    #[test]
    fn test_timestamp_converted_to_timezone() {
        let dt = parse_date("2021-06-01T10:00:00Z", chrono_tz::US::Eastern).unwrap();
        // EDT is UTC-4 in June
        assert_eq!(dt.hour(), 6);
        assert_eq!(dt.timezone(), chrono_tz::US::Eastern);
    }

    #[test]
    fn test_negative_offset() {
        let dt = parse_date("2021-06-01T10:00:00-05:00", Tz::UTC).unwrap();
        assert_eq!(dt.hour(), 15);
    }

    #[test]
    fn test_two_part_non_numeric_falls_through() {
        // One '-' but not YYYY-MM: parsed as ISO, which fails here
        assert!(parse_date("2021-06T10", Tz::UTC).is_err());
    }

    #[test]
    fn test_two_part_basic_iso_timestamp() {
        // The only '-' is the offset sign, so this is handed to the ISO parser
        let dt = parse_date("20210601T100000-0500", Tz::UTC).unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day(), dt.hour()), (2021, 6, 1, 15));
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(parse_date("", Tz::UTC).is_err());
        assert!(parse_date("not a date", Tz::UTC).is_err());
        assert!(parse_date("2021-13", Tz::UTC).is_err());
        assert!(parse_date("2021-06-01-extra", Tz::UTC).is_err());
    }
}
