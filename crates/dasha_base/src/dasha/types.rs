//! Core types for Vimshottari dasha calculations.
//!
//! Dashas are hierarchical time periods. This module defines the period
//! value, its nesting level, the birth inputs and the aggregate results.

use chrono::{DateTime, Utc};
use dasha_time::{days_between, days_to_years};
use serde::Serialize;

use crate::graha::Graha;
use crate::nakshatra::Nakshatra;

/// Deepest supported level (Pratyantardasha).
pub const MAX_DASHA_LEVEL: u8 = 2;

/// Default number of upcoming mahadashas in a breakdown.
pub const DEFAULT_UPCOMING_COUNT: usize = 3;

/// At most 8 mahadashas can follow the active one in a 9-period cycle.
pub const MAX_UPCOMING_COUNT: usize = 8;

/// The 3 hierarchical dasha levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[repr(u8)]
pub enum DashaLevel {
    Mahadasha = 0,
    Antardasha = 1,
    Pratyantardasha = 2,
}

/// All levels, outermost first.
pub const ALL_DASHA_LEVELS: [DashaLevel; 3] = [
    DashaLevel::Mahadasha,
    DashaLevel::Antardasha,
    DashaLevel::Pratyantardasha,
];

impl DashaLevel {
    /// Create from raw depth (0..=2).
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Mahadasha),
            1 => Some(Self::Antardasha),
            2 => Some(Self::Pratyantardasha),
            _ => None,
        }
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mahadasha => "Mahadasha",
            Self::Antardasha => "Antardasha",
            Self::Pratyantardasha => "Pratyantardasha",
        }
    }

    /// Nesting depth, 0 for Mahadasha.
    pub const fn depth(self) -> u8 {
        self as u8
    }

    /// Next deeper level, if any.
    pub const fn child_level(self) -> Option<Self> {
        match self {
            Self::Mahadasha => Some(Self::Antardasha),
            Self::Antardasha => Some(Self::Pratyantardasha),
            Self::Pratyantardasha => None,
        }
    }
}

/// One graha ruling a time span at a given level.
///
/// The interval is half-open: `start` belongs to this period, `end` belongs
/// to the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlanetPeriod {
    /// The graha ruling this period.
    pub graha: Graha,
    /// Hierarchical level.
    pub level: DashaLevel,
    /// Inclusive.
    pub start: DateTime<Utc>,
    /// Exclusive.
    pub end: DateTime<Utc>,
    /// 1-indexed position among siblings.
    pub order: u16,
}

impl PlanetPeriod {
    /// Duration of the period in days.
    pub fn duration_days(&self) -> f64 {
        days_between(self.start, self.end)
    }

    /// Duration of the period in Julian years.
    pub fn duration_years(&self) -> f64 {
        days_to_years(self.duration_days())
    }

    /// Whether `t` falls in `[start, end)`.
    pub fn contains(&self, t: DateTime<Utc>) -> bool {
        self.start <= t && t < self.end
    }
}

/// Birth inputs for a Vimshottari calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirthData {
    /// Birth instant.
    pub instant: DateTime<Utc>,
    /// Janma (birth) nakshatra of the Moon.
    pub nakshatra: Nakshatra,
    /// Moon's sidereal longitude at birth, in degrees. When present, the
    /// first mahadasha is shortened by the portion of the nakshatra the Moon
    /// has already traversed.
    pub moon_sidereal_lon: Option<f64>,
}

impl BirthData {
    /// Birth inputs without birth balance: the first mahadasha starts at birth.
    pub fn new(instant: DateTime<Utc>, nakshatra: Nakshatra) -> Self {
        Self {
            instant,
            nakshatra,
            moon_sidereal_lon: None,
        }
    }

    /// Attach the Moon's sidereal longitude for birth balance.
    pub fn with_moon_longitude(mut self, lon_deg: f64) -> Self {
        self.moon_sidereal_lon = Some(lon_deg);
        self
    }
}

/// Per-call options for breakdown assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashaOptions {
    /// How many mahadashas after the active one to list (0..=8).
    pub upcoming_count: usize,
}

impl Default for DashaOptions {
    fn default() -> Self {
        Self {
            upcoming_count: DEFAULT_UPCOMING_COUNT,
        }
    }
}

/// Active periods at one reference instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashaBreakdown {
    /// Birth instant.
    pub birth: DateTime<Utc>,
    /// Birth nakshatra.
    pub nakshatra: Nakshatra,
    /// The queried instant.
    pub reference: DateTime<Utc>,
    /// Active major period.
    pub mahadasha: PlanetPeriod,
    /// Active sub-period within `mahadasha`.
    pub antardasha: PlanetPeriod,
    /// Active sub-sub-period within `antardasha`.
    pub pratyantardasha: PlanetPeriod,
    /// Mahadashas following the active one, in order.
    pub upcoming: Vec<PlanetPeriod>,
}

impl DashaBreakdown {
    /// Active periods, outermost first.
    pub fn active_chain(&self) -> [PlanetPeriod; 3] {
        [self.mahadasha, self.antardasha, self.pratyantardasha]
    }
}

/// Every period of the cycle down to a given level.
#[derive(Debug, Clone, Serialize)]
pub struct DashaHierarchy {
    /// Birth instant.
    pub birth: DateTime<Utc>,
    /// Start of the first mahadasha (at or before birth).
    pub cycle_start: DateTime<Utc>,
    /// levels[0]=mahadashas, levels[1]=antardashas, levels[2]=pratyantardashas.
    pub levels: Vec<Vec<PlanetPeriod>>,
}
