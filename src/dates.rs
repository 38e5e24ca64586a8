//! Flexible date parsing helpers.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Date-time formats tried after RFC 3339.
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Date-only formats tried last; matches parse to midnight.
const DATE_FORMATS: [&str; 6] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d.%m.%Y",
    "%B %d, %Y",
    "%b %d, %Y",
];

/// Parse a calendar date/time from a string, trying RFC 3339 first, then
/// naive date-time formats, then date-only formats anchored to midnight.
///
/// Returns `None` when no format matches, so unparseable values (the
/// sentinel fill text included) coerce to a null date rather than an error.
pub fn parse_flexible_datetime(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(date_time) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(date_time.naive_utc());
    }
    for format in DATETIME_FORMATS {
        if let Ok(date_time) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(date_time);
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return date.and_hms_opt(0, 0, 0);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at_midnight(y: i32, m: u32, d: u32) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(y, m, d)?.and_hms_opt(0, 0, 0)
    }

    #[test]
    fn parses_supported_formats() {
        assert_eq!(parse_flexible_datetime("2020-05-01"), at_midnight(2020, 5, 1));
        assert_eq!(parse_flexible_datetime("2020/05/01"), at_midnight(2020, 5, 1));
        assert_eq!(parse_flexible_datetime("05/01/2020"), at_midnight(2020, 5, 1));
        assert_eq!(parse_flexible_datetime("01.05.2020"), at_midnight(2020, 5, 1));
        assert_eq!(parse_flexible_datetime("May 1, 2020"), at_midnight(2020, 5, 1));
        assert_eq!(parse_flexible_datetime("May 01, 2020"), at_midnight(2020, 5, 1));
        assert_eq!(parse_flexible_datetime(" 2020-05-01 "), at_midnight(2020, 5, 1));
        assert_eq!(
            parse_flexible_datetime("2020-05-01T09:30:00"),
            NaiveDate::from_ymd_opt(2020, 5, 1).unwrap().and_hms_opt(9, 30, 0)
        );
        assert_eq!(
            parse_flexible_datetime("2020-05-01 09:30:00"),
            NaiveDate::from_ymd_opt(2020, 5, 1).unwrap().and_hms_opt(9, 30, 0)
        );
        assert_eq!(
            parse_flexible_datetime("2020-05-01T09:30:00+02:00"),
            NaiveDate::from_ymd_opt(2020, 5, 1).unwrap().and_hms_opt(7, 30, 0)
        );
    }

    #[test]
    fn rejects_unparseable_values() {
        assert_eq!(parse_flexible_datetime(""), None);
        assert_eq!(parse_flexible_datetime("   "), None);
        assert_eq!(parse_flexible_datetime("Unknown"), None);
        assert_eq!(parse_flexible_datetime("2020-13-01"), None);
        assert_eq!(parse_flexible_datetime("2020-02-30"), None);
        assert_eq!(parse_flexible_datetime("engine failure"), None);
    }
}
