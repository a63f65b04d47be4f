//! Vimshottari dasha (planetary period) calculations.
//!
//! The 120-year cycle is shared among 9 grahas in a fixed order and
//! subdivided proportionally at each of 3 levels (Mahadasha, Antardasha,
//! Pratyantardasha). All periods are half-open `[start, end)` UTC intervals
//! and all duration arithmetic uses a 365.25-day year.

pub mod balance;
pub mod sequence;
pub mod subperiod;
pub mod types;
pub mod vimshottari;
pub mod vimshottari_data;

pub use balance::{BirthBalance, birth_balance};
pub use sequence::{ActiveSlot, next_in_sequence, resolve_active, vimshottari_sequence};
pub use subperiod::{
    child_duration_days, child_duration_years, cycle_days, proportional_children, share_end,
    subdivide,
};
pub use types::{
    ALL_DASHA_LEVELS, BirthData, DEFAULT_UPCOMING_COUNT, DashaBreakdown, DashaHierarchy,
    DashaLevel, DashaOptions, MAX_DASHA_LEVEL, MAX_UPCOMING_COUNT, PlanetPeriod,
};
pub use vimshottari::{
    child_period, children, complete_level, computable_window, cycle_origin, dasha_breakdown,
    dasha_hierarchy, mahadashas,
};
pub use vimshottari_data::{
    VIMSHOTTARI_GRAHAS, VIMSHOTTARI_TOTAL_YEARS, VIMSHOTTARI_YEARS, nakshatra_ruler,
    sequence_position, vimshottari_years,
};
