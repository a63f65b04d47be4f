//! Day/year spans and instant offsets.
//!
//! Every dasha level uses the same Julian year of 365.25 days. Offsets are
//! rounded to whole milliseconds so that two periods computed from the same
//! cumulative offset share their boundary exactly.

use chrono::{DateTime, TimeDelta, Utc};

use crate::error::TimeError;

/// Year length for all dasha period arithmetic.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Milliseconds per day.
pub const MS_PER_DAY: f64 = 86_400_000.0;

/// Convert years to days.
pub fn years_to_days(years: f64) -> f64 {
    years * DAYS_PER_YEAR
}

/// Convert days to years.
pub fn days_to_years(days: f64) -> f64 {
    days / DAYS_PER_YEAR
}

/// Signed number of days from `from` to `to`.
pub fn days_between(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    (to - from).num_milliseconds() as f64 / MS_PER_DAY
}

/// Signed number of years from `from` to `to`.
pub fn years_between(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    days_to_years(days_between(from, to))
}

/// Offset an instant by a (possibly negative, possibly fractional) number
/// of days, rounded to the nearest millisecond.
pub fn add_days(t: DateTime<Utc>, days: f64) -> Result<DateTime<Utc>, TimeError> {
    let ms = (days * MS_PER_DAY).round();
    if !ms.is_finite() || ms.abs() > i64::MAX as f64 {
        return Err(TimeError::Overflow);
    }
    let delta = TimeDelta::try_milliseconds(ms as i64).ok_or(TimeError::Overflow)?;
    t.checked_add_signed(delta).ok_or(TimeError::Overflow)
}

/// Offset an instant by a number of Julian years.
pub fn add_years(t: DateTime<Utc>, years: f64) -> Result<DateTime<Utc>, TimeError> {
    add_days(t, years_to_days(years))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(1990, 6, 15, 4, 30, 0).unwrap()
    }

    #[test]
    fn days_per_year_constant() {
        assert!((DAYS_PER_YEAR - 365.25).abs() < 1e-15);
    }

    #[test]
    fn year_day_conversion() {
        assert!((years_to_days(120.0) - 43_830.0).abs() < 1e-9);
        assert!((days_to_years(365.25) - 1.0).abs() < 1e-15);
    }

    #[test]
    fn add_whole_years_is_exact() {
        let t = add_years(t0(), 10.0).unwrap();
        // 3652.5 days
        assert_eq!((t - t0()).num_milliseconds(), 315_576_000_000);
    }

    #[test]
    fn add_negative_days() {
        let t = add_days(t0(), -1.5).unwrap();
        assert_eq!((t0() - t).num_hours(), 36);
    }

    #[test]
    fn days_between_signed() {
        let later = add_days(t0(), 2.25).unwrap();
        assert!((days_between(t0(), later) - 2.25).abs() < 1e-12);
        assert!((days_between(later, t0()) + 2.25).abs() < 1e-12);
    }

    #[test]
    fn years_between_matches_add_years() {
        let later = add_years(t0(), 7.0).unwrap();
        assert!((years_between(t0(), later) - 7.0).abs() < 1e-12);
    }

    #[test]
    fn sub_millisecond_rounds() {
        let t = add_days(t0(), 0.4 / MS_PER_DAY).unwrap();
        assert_eq!(t, t0());
    }

    #[test]
    fn non_finite_offset_rejected() {
        assert_eq!(add_days(t0(), f64::NAN), Err(TimeError::Overflow));
        assert_eq!(add_days(t0(), f64::INFINITY), Err(TimeError::Overflow));
    }

    #[test]
    fn huge_offset_rejected() {
        assert_eq!(add_years(t0(), 1.0e9), Err(TimeError::Overflow));
    }
}
