//! UTC date/time parsing and formatting.
//!
//! Accepted input forms:
//! - `YYYY-MM-DD` (midnight UTC)
//! - `YYYY-MM-DDThh:mm:ss` or `YYYY-MM-DDThh:mm:ssZ`
//! - full RFC 3339 with a numeric offset (converted to UTC)

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

use crate::error::TimeError;

/// Parse a UTC date or date-time.
pub fn parse_utc(s: &str) -> Result<DateTime<Utc>, TimeError> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    let naive = s.strip_suffix('Z').unwrap_or(s);
    if let Ok(ndt) = NaiveDateTime::parse_from_str(naive, "%Y-%m-%dT%H:%M:%S") {
        return Ok(ndt.and_utc());
    }
    if let Ok(ndt) = NaiveDateTime::parse_from_str(naive, "%Y-%m-%d %H:%M:%S") {
        return Ok(ndt.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(naive, "%Y-%m-%d") {
        if let Some(ndt) = date.and_hms_opt(0, 0, 0) {
            return Ok(ndt.and_utc());
        }
    }
    Err(TimeError::Parse(s.to_string()))
}

/// Format an instant as `YYYY-MM-DDThh:mm:ssZ`, keeping milliseconds only
/// when they are non-zero.
pub fn format_utc(t: DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    #[test]
    fn parse_date_only() {
        let t = parse_utc("1990-06-15").unwrap();
        assert_eq!(t, Utc.with_ymd_and_hms(1990, 6, 15, 0, 0, 0).unwrap());
    }

    #[test]
    fn parse_zulu() {
        let t = parse_utc("1990-06-15T04:30:00Z").unwrap();
        assert_eq!(t, Utc.with_ymd_and_hms(1990, 6, 15, 4, 30, 0).unwrap());
    }

    #[test]
    fn parse_without_zone() {
        let t = parse_utc("1990-06-15T04:30:00").unwrap();
        assert_eq!(t.hour(), 4);
    }

    #[test]
    fn parse_space_separated() {
        let t = parse_utc("1990-06-15 04:30:00").unwrap();
        assert_eq!(t.minute(), 30);
    }

    #[test]
    fn parse_offset_converted_to_utc() {
        let t = parse_utc("1990-06-15T10:00:00+05:30").unwrap();
        assert_eq!(t, Utc.with_ymd_and_hms(1990, 6, 15, 4, 30, 0).unwrap());
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(parse_utc("yesterday"), Err(TimeError::Parse(_))));
        assert!(matches!(parse_utc("1990-13-01"), Err(TimeError::Parse(_))));
    }

    #[test]
    fn format_whole_seconds() {
        let t = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        assert_eq!(format_utc(t), "2024-01-15T00:00:00Z");
    }

    #[test]
    fn format_keeps_millis() {
        let t = Utc.with_ymd_and_hms(2024, 1, 15, 12, 30, 45).unwrap()
            + chrono::TimeDelta::milliseconds(123);
        assert_eq!(format_utc(t), "2024-01-15T12:30:45.123Z");
    }
}
