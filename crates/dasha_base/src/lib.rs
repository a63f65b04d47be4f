//! Vimshottari dasha timing built on fixed Vedic tables.
//!
//! This crate provides:
//! - The 9 grahas and 27 nakshatras, with lenient name parsing
//! - Vimshottari tables (period lengths summing to 120 years, nakshatra rulers)
//! - Active-period resolution at three levels (Mahadasha, Antardasha,
//!   Pratyantardasha) from a birth nakshatra and a reference instant
//! - Proportional period generation and birth balance
//! - Static effect/remedy/confidence annotations
//!
//! Everything here is pure and synchronous; all tables are constants.

pub mod annotate;
pub mod dasha;
pub mod error;
pub mod graha;
pub mod nakshatra;
pub mod util;

pub use annotate::{
    CONFIDENCE_MAX, CONFIDENCE_MIN, PeriodAnnotation, annotate, annotate_period, confidence,
    significations,
};
pub use dasha::{
    BirthData, DashaBreakdown, DashaHierarchy, DashaLevel, DashaOptions, PlanetPeriod,
    dasha_breakdown, dasha_hierarchy, nakshatra_ruler,
};
pub use error::DashaError;
pub use graha::{ALL_GRAHAS, Graha};
pub use nakshatra::{
    ALL_NAKSHATRAS_27, NAKSHATRA_SPAN_27, Nakshatra, NakshatraInfo, nakshatra_from_longitude,
};
