//! Const tables for the Vimshottari dasha system.
//!
//! 120-year cycle shared among 9 grahas in a fixed order. Each nakshatra is
//! ruled by one graha; every 9th nakshatra repeats the same ruler.

use crate::graha::Graha;
use crate::nakshatra::Nakshatra;

/// Length of one full Vimshottari cycle in years.
pub const VIMSHOTTARI_TOTAL_YEARS: f64 = 120.0;

/// Vimshottari traversal order: Surya, Chandra, Mangal, Rahu, Guru, Shani,
/// Buddh, Ketu, Shukra (cyclic).
pub const VIMSHOTTARI_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Rahu,
    Graha::Guru,
    Graha::Shani,
    Graha::Buddh,
    Graha::Ketu,
    Graha::Shukra,
];

/// Mahadasha lengths in years, aligned with VIMSHOTTARI_GRAHAS.
pub const VIMSHOTTARI_YEARS: [f64; 9] = [6.0, 10.0, 7.0, 18.0, 16.0, 19.0, 17.0, 7.0, 20.0];

/// Ruling graha of each nakshatra, Ashwini..Revati.
#[rustfmt::skip]
const NAKSHATRA_RULERS: [Graha; 27] = [
    Graha::Ketu, Graha::Shukra, Graha::Surya, Graha::Chandra, Graha::Mangal, // Ashwini..Mrigashira
    Graha::Rahu, Graha::Guru, Graha::Shani, Graha::Buddh, // Ardra..Ashlesha
    Graha::Ketu, Graha::Shukra, Graha::Surya, Graha::Chandra, Graha::Mangal, // Magha..Chitra
    Graha::Rahu, Graha::Guru, Graha::Shani, Graha::Buddh, // Swati..Jyeshtha
    Graha::Ketu, Graha::Shukra, Graha::Surya, Graha::Chandra, Graha::Mangal, // Mula..Dhanishtha
    Graha::Rahu, Graha::Guru, Graha::Shani, Graha::Buddh, // Shatabhisha..Revati
];

/// Position of a graha in VIMSHOTTARI_GRAHAS.
pub const fn sequence_position(graha: Graha) -> usize {
    match graha {
        Graha::Surya => 0,
        Graha::Chandra => 1,
        Graha::Mangal => 2,
        Graha::Rahu => 3,
        Graha::Guru => 4,
        Graha::Shani => 5,
        Graha::Buddh => 6,
        Graha::Ketu => 7,
        Graha::Shukra => 8,
    }
}

/// Mahadasha length of a graha in years.
pub const fn vimshottari_years(graha: Graha) -> f64 {
    VIMSHOTTARI_YEARS[sequence_position(graha)]
}

/// Ruling graha of a nakshatra; its mahadasha is running at birth.
pub const fn nakshatra_ruler(nakshatra: Nakshatra) -> Graha {
    NAKSHATRA_RULERS[nakshatra.index() as usize]
}
