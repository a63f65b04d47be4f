//! Instant arithmetic for dasha period calculations.
//!
//! This crate provides:
//! - The single year-length convention used by every dasha level
//!   (Julian year, 365.25 days)
//! - Offsetting UTC instants by fractional days or years, rounded to
//!   whole milliseconds
//! - Julian Date ↔ UTC instant conversions (for display)
//! - UTC date/time parsing and formatting

pub mod error;
pub mod julian;
pub mod span;
pub mod utc_time;

pub use error::TimeError;
pub use julian::{UNIX_EPOCH_JD, from_jd_utc, to_jd_utc};
pub use span::{
    DAYS_PER_YEAR, MS_PER_DAY, add_days, add_years, days_between, days_to_years, years_between,
    years_to_days,
};
pub use utc_time::{format_utc, parse_utc};
