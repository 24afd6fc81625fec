//! ISO-8601 timestamp parsing and the fixed wire format.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y%m%d"];

const LOCAL_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y%m%dT%H%M%S%.f"];

/// Parse an ISO-8601 timestamp.
///
/// Accepts RFC 3339 strings, numeric offsets without a colon, timestamps with
/// no offset (read as UTC) and bare dates (midnight UTC). Offsets are folded
/// into UTC.
pub fn parse(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();

    if let Ok(ts) = DateTime::parse_from_rfc3339(text) {
        return Some(ts.with_timezone(&Utc));
    }
    if let Ok(ts) = DateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f%z") {
        return Some(ts.with_timezone(&Utc));
    }
    for format in LOCAL_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    parse_date(text)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// Lenient check used when a timestamp field still holds a string: only the
/// date before `T` has to be a valid ISO-8601 date.
pub fn has_valid_date(text: &str) -> bool {
    let date = text.split('T').next().unwrap_or_default();
    parse_date(date.trim()).is_some()
}

/// Render with microsecond resolution and a literal `Z`, padded to nine
/// fractional digits: `YYYY-MM-DDTHH:MM:SS.ffffff000Z`.
pub fn format(ts: &DateTime<Utc>) -> String {
    format!("{}000Z", ts.format("%Y-%m-%dT%H:%M:%S%.6f"))
}

fn parse_date(text: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_format_microseconds() {
        let ts = parse("2015-10-31T22:22:56.015925Z").unwrap();
        assert_eq!(format(&ts), "2015-10-31T22:22:56.015925000Z");
    }

    #[test]
    fn test_nanoseconds_truncated_to_micro() {
        let ts = parse("2015-10-31T22:22:56.015925234Z").unwrap();
        assert_eq!(format(&ts), "2015-10-31T22:22:56.015925000Z");
    }

    #[test]
    fn test_whole_seconds_pad_fraction() {
        let ts = parse("2020-01-02T03:04:05Z").unwrap();
        assert_eq!(format(&ts), "2020-01-02T03:04:05.000000000Z");
    }

    #[test]
    fn test_offset_folded_into_utc() {
        let ts = parse("2015-10-31T22:22:56+02:00").unwrap();
        assert_eq!(ts.hour(), 20);
        let ts = parse("2015-10-31T22:22:56+0200").unwrap();
        assert_eq!(ts.hour(), 20);
    }

    #[test]
    fn test_no_offset_reads_as_utc() {
        let ts = parse("2015-10-31T22:22:56.5").unwrap();
        assert_eq!(format(&ts), "2015-10-31T22:22:56.500000000Z");
    }

    #[test]
    fn test_date_only() {
        let ts = parse("2015-10-31").unwrap();
        assert_eq!((ts.year(), ts.month(), ts.day()), (2015, 10, 31));
        assert_eq!(ts.hour(), 0);
        assert!(parse("20151031").is_some());
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(parse("yesterday").is_none());
        assert!(parse("2015-13-45T00:00:00Z").is_none());
        assert!(parse("").is_none());
    }

    #[test]
    fn test_has_valid_date() {
        assert!(has_valid_date("2015-10-31T99:99:99"));
        assert!(has_valid_date("2015-10-31"));
        assert!(!has_valid_date("2015-31-10T00:00:00Z"));
        assert!(!has_valid_date("not a date"));
    }
}
