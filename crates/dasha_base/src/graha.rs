//! Vedic planet (graha) enum.
//!
//! The 9 grahas rule the Vimshottari periods. Names parse from either the
//! Sanskrit or the English form.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

use crate::error::DashaError;
use crate::util::compact_name;

/// The 9 Vedic grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Graha {
    Surya,
    Chandra,
    Mangal,
    Buddh,
    Guru,
    Shukra,
    Shani,
    Rahu,
    Ketu,
}

/// All 9 grahas in traditional (weekday) order.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

impl Graha {
    /// Sanskrit name of the graha.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Mangal => "Mangal",
            Self::Buddh => "Buddh",
            Self::Guru => "Guru",
            Self::Shukra => "Shukra",
            Self::Shani => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// English name of the graha.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Mangal => "Mars",
            Self::Buddh => "Mercury",
            Self::Guru => "Jupiter",
            Self::Shukra => "Venus",
            Self::Shani => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// 0-based index into ALL_GRAHAS.
    pub const fn index(self) -> u8 {
        match self {
            Self::Surya => 0,
            Self::Chandra => 1,
            Self::Mangal => 2,
            Self::Buddh => 3,
            Self::Guru => 4,
            Self::Shukra => 5,
            Self::Shani => 6,
            Self::Rahu => 7,
            Self::Ketu => 8,
        }
    }

    /// Graha from a 0-based ALL_GRAHAS index.
    pub fn from_index(idx: u8) -> Option<Self> {
        ALL_GRAHAS.get(idx as usize).copied()
    }
}

impl Display for Graha {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.english_name())
    }
}

impl FromStr for Graha {
    type Err = DashaError;

    /// Case-insensitive; accepts Sanskrit, English and common alternate
    /// transliterations.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let graha = match compact_name(s).as_str() {
            "surya" | "sun" | "ravi" => Self::Surya,
            "chandra" | "moon" | "soma" => Self::Chandra,
            "mangal" | "mangala" | "mars" | "kuja" => Self::Mangal,
            "buddh" | "budh" | "budha" | "mercury" => Self::Buddh,
            "guru" | "brihaspati" | "jupiter" => Self::Guru,
            "shukra" | "sukra" | "venus" => Self::Shukra,
            "shani" | "sani" | "saturn" => Self::Shani,
            "rahu" | "northnode" => Self::Rahu,
            "ketu" | "southnode" => Self::Ketu,
            _ => return Err(DashaError::InvalidPlanet(s.to_string())),
        };
        Ok(graha)
    }
}
