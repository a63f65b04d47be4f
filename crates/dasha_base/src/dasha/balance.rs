//! Birth balance: how much of the first mahadasha remains at birth.
//!
//! Computed from the Moon's position within its nakshatra. The fraction of
//! the nakshatra already traversed is the fraction of the ruler's mahadasha
//! already elapsed.

use serde::Serialize;

use crate::error::DashaError;
use crate::graha::Graha;
use crate::nakshatra::{Nakshatra, nakshatra_from_longitude};

use super::vimshottari_data::{nakshatra_ruler, vimshottari_years};

/// Largest f64 below 1.0.
const FRACTION_MAX: f64 = 1.0 - f64::EPSILON / 2.0;

/// Birth balance derived from the Moon's sidereal longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BirthBalance {
    /// Nakshatra containing the Moon.
    pub nakshatra: Nakshatra,
    /// Its ruler, whose mahadasha is running at birth.
    pub ruler: Graha,
    /// Fraction of the nakshatra already traversed, in [0, 1).
    pub elapsed_fraction: f64,
    /// Years of the ruler's mahadasha elapsed before birth.
    pub elapsed_years: f64,
    /// Years of the ruler's mahadasha remaining after birth.
    pub remaining_years: f64,
}

/// Compute the Vimshottari birth balance for a Moon sidereal longitude.
pub fn birth_balance(moon_sidereal_lon: f64) -> Result<BirthBalance, DashaError> {
    if !moon_sidereal_lon.is_finite() {
        return Err(DashaError::InvalidInput("moon longitude must be finite"));
    }
    let info = nakshatra_from_longitude(moon_sidereal_lon);
    let ruler = nakshatra_ruler(info.nakshatra);
    let full = vimshottari_years(ruler);
    let elapsed_fraction = info.elapsed_fraction().clamp(0.0, FRACTION_MAX);
    let elapsed_years = full * elapsed_fraction;
    Ok(BirthBalance {
        nakshatra: info.nakshatra,
        ruler,
        elapsed_fraction,
        elapsed_years,
        remaining_years: full - elapsed_years,
    })
}
