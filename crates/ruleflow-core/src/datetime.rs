//! ISO-8601 date/time parsing
//!
//! Date predicates compare parameter values against "now". Values arrive as
//! strings from data sources, so they are parsed leniently:
//! - RFC 3339 date-times (`2021-05-01T10:15:30Z`, `2021-05-01T10:15:30.5-05:00`)
//! - Date-times without an offset, interpreted as UTC (`2021-05-01T10:15:30`)
//! - Plain dates, interpreted as start of day UTC (`2021-05-01`)

use crate::error::{CoreError, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Parse an ISO date or date-time string into a UTC timestamp
pub fn parse_iso_date_time(value: &str) -> Result<DateTime<Utc>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::InvalidDate(value.to_string()));
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc());
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        if let Some(start_of_day) = date.and_hms_opt(0, 0, 0) {
            return Ok(start_of_day.and_utc());
        }
    }

    Err(CoreError::InvalidDate(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone, Timelike};

    #[test]
    fn test_parse_rfc3339_utc() {
        let parsed = parse_iso_date_time("2021-05-01T10:15:30Z").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2021, 5, 1, 10, 15, 30).unwrap());
    }

    #[test]
    fn test_parse_rfc3339_with_offset() {
        let parsed = parse_iso_date_time("2021-05-01T10:15:30-05:00").unwrap();
        assert_eq!(parsed.hour(), 15);
    }

    #[test]
    fn test_parse_fractional_seconds() {
        let parsed = parse_iso_date_time("2021-05-01T10:15:30.250Z").unwrap();
        assert_eq!(parsed.timestamp_subsec_millis(), 250);
    }

    #[test]
    fn test_parse_naive_date_time_as_utc() {
        let parsed = parse_iso_date_time("2021-05-01T10:15:30").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2021, 5, 1, 10, 15, 30).unwrap());
    }

    #[test]
    fn test_parse_date_only_start_of_day() {
        let parsed = parse_iso_date_time("2021-05-01").unwrap();
        assert_eq!(parsed.day(), 1);
        assert_eq!(parsed.hour(), 0);
        assert_eq!(parsed.minute(), 0);
    }

    #[test]
    fn test_parse_rejects_unknown_format() {
        assert!(matches!(
            parse_iso_date_time("05/01/2021"),
            Err(CoreError::InvalidDate(_))
        ));
        assert!(parse_iso_date_time("  ").is_err());
    }
}
