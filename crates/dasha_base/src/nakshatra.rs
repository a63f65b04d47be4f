//! Nakshatra (lunar mansion) enum and longitude lookup, 27-fold scheme.
//!
//! The ecliptic circle is divided into 27 equal nakshatras of 13 deg 20'
//! (13.3333... deg) each, starting from 0 deg sidereal Aries.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

use crate::error::DashaError;
use crate::util::{compact_name, normalize_360};

/// Span of one nakshatra in the 27-scheme: 360/27 = 13.3333... degrees.
pub const NAKSHATRA_SPAN_27: f64 = 360.0 / 27.0;

/// The 27 nakshatras from Ashwini to Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini, 26 = Revati).
pub const ALL_NAKSHATRAS_27: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishtha,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

/// Alternate transliterations, compacted (lowercase, no separators).
const NAKSHATRA_ALIASES: &[(&str, Nakshatra)] = &[
    ("ashvini", Nakshatra::Ashwini),
    ("aswini", Nakshatra::Ashwini),
    ("krittica", Nakshatra::Krittika),
    ("kritika", Nakshatra::Krittika),
    ("mrigasira", Nakshatra::Mrigashira),
    ("mrigashirsha", Nakshatra::Mrigashira),
    ("aardra", Nakshatra::Ardra),
    ("arudra", Nakshatra::Ardra),
    ("pushyami", Nakshatra::Pushya),
    ("pooya", Nakshatra::Pushya),
    ("aslesha", Nakshatra::Ashlesha),
    ("ashlesa", Nakshatra::Ashlesha),
    ("makha", Nakshatra::Magha),
    ("poorvaphalguni", Nakshatra::PurvaPhalguni),
    ("uttaraphalgun", Nakshatra::UttaraPhalguni),
    ("chithra", Nakshatra::Chitra),
    ("svati", Nakshatra::Swati),
    ("visakha", Nakshatra::Vishakha),
    ("jyeshta", Nakshatra::Jyeshtha),
    ("jyestha", Nakshatra::Jyeshtha),
    ("moola", Nakshatra::Mula),
    ("purvashadha", Nakshatra::PurvaAshadha),
    ("poorvashadha", Nakshatra::PurvaAshadha),
    ("uttarashadha", Nakshatra::UttaraAshadha),
    ("sravana", Nakshatra::Shravana),
    ("shravan", Nakshatra::Shravana),
    ("dhanishta", Nakshatra::Dhanishtha),
    ("shatabhishak", Nakshatra::Shatabhisha),
    ("satabhisha", Nakshatra::Shatabhisha),
    ("shatabhishaj", Nakshatra::Shatabhisha),
    ("purvabhadra", Nakshatra::PurvaBhadrapada),
    ("poorvabhadrapada", Nakshatra::PurvaBhadrapada),
    ("uttarabhadra", Nakshatra::UttaraBhadrapada),
    ("revathi", Nakshatra::Revati),
];

impl Nakshatra {
    /// Sanskrit name of the nakshatra.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishtha => "Dhanishtha",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// 0-based index (Ashwini=0 .. Revati=26).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Nakshatra from a 0-based index.
    pub fn from_index(idx: u8) -> Option<Self> {
        ALL_NAKSHATRAS_27.get(idx as usize).copied()
    }

    /// Sidereal longitude at which this nakshatra begins, in degrees.
    pub fn start_longitude(self) -> f64 {
        self.index() as f64 * NAKSHATRA_SPAN_27
    }
}

impl Display for Nakshatra {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Nakshatra {
    type Err = DashaError;

    /// Case-insensitive; spaces, hyphens and underscores are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = compact_name(s);
        ALL_NAKSHATRAS_27
            .iter()
            .copied()
            .find(|n| compact_name(n.name()) == key)
            .or_else(|| {
                NAKSHATRA_ALIASES
                    .iter()
                    .find(|(alias, _)| *alias == key)
                    .map(|&(_, n)| n)
            })
            .ok_or_else(|| DashaError::InvalidNakshatra(s.to_string()))
    }
}

/// Result of a 27-nakshatra longitude lookup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NakshatraInfo {
    /// The nakshatra.
    pub nakshatra: Nakshatra,
    /// Decimal degrees within the nakshatra [0.0, 13.333...).
    pub degrees_in_nakshatra: f64,
}

impl NakshatraInfo {
    /// Fraction of the nakshatra already traversed, in [0, 1).
    pub fn elapsed_fraction(&self) -> f64 {
        self.degrees_in_nakshatra / NAKSHATRA_SPAN_27
    }
}

/// Determine the nakshatra from a sidereal ecliptic longitude.
pub fn nakshatra_from_longitude(sidereal_lon_deg: f64) -> NakshatraInfo {
    let lon = normalize_360(sidereal_lon_deg);
    let nak_idx = ((lon / NAKSHATRA_SPAN_27).floor() as u8).min(26);
    let degrees_in_nakshatra = (lon - (nak_idx as f64) * NAKSHATRA_SPAN_27).max(0.0);

    NakshatraInfo {
        nakshatra: ALL_NAKSHATRAS_27[nak_idx as usize],
        degrees_in_nakshatra,
    }
}
