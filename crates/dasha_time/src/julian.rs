//! Julian Date ↔ UTC instant conversions.
//!
//! Dasha boundaries are printed alongside a UTC Julian Date so they can be
//! compared with ephemeris tooling. No leap-second or TDB handling is done
//! here; these are plain UTC Julian Dates.

use chrono::{DateTime, Utc};

use crate::error::TimeError;
use crate::span::MS_PER_DAY;

/// Julian Date of 1970-01-01T00:00:00Z.
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Convert a UTC instant to a UTC Julian Date.
pub fn to_jd_utc(t: DateTime<Utc>) -> f64 {
    UNIX_EPOCH_JD + t.timestamp_millis() as f64 / MS_PER_DAY
}

/// Convert a UTC Julian Date to an instant, rounded to the millisecond.
pub fn from_jd_utc(jd: f64) -> Result<DateTime<Utc>, TimeError> {
    let ms = ((jd - UNIX_EPOCH_JD) * MS_PER_DAY).round();
    if !ms.is_finite() || ms.abs() > i64::MAX as f64 {
        return Err(TimeError::Overflow);
    }
    DateTime::<Utc>::from_timestamp_millis(ms as i64).ok_or(TimeError::Overflow)
}
