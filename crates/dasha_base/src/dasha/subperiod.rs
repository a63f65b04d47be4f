//! Proportional sub-period arithmetic.
//!
//! A child's share of its parent is `child_years / 120`, so
//! `child_duration = child_years × parent_years / 120` at every level.
//! Instants are placed from the parent's start by the cumulative share of
//! all children up to and including the current one, which keeps sibling
//! boundaries identical and lands the last child exactly on the parent's end.

use chrono::{DateTime, Utc};
use dasha_time::{add_days, years_to_days};

use crate::error::DashaError;
use crate::graha::Graha;

use super::sequence::vimshottari_sequence;
use super::types::{DashaLevel, PlanetPeriod};
use super::vimshottari_data::{VIMSHOTTARI_TOTAL_YEARS, vimshottari_years};

/// Span of one full cycle in days.
pub fn cycle_days() -> f64 {
    years_to_days(VIMSHOTTARI_TOTAL_YEARS)
}

/// Duration in years of `child`'s sub-period within a parent lasting
/// `parent_years`.
pub fn child_duration_years(parent_years: f64, child: Graha) -> f64 {
    vimshottari_years(child) * parent_years / VIMSHOTTARI_TOTAL_YEARS
}

/// Duration in days of `child`'s sub-period within a parent lasting
/// `parent_days`.
pub fn child_duration_days(parent_days: f64, child: Graha) -> f64 {
    vimshottari_years(child) * parent_days / VIMSHOTTARI_TOTAL_YEARS
}

/// Instant at which a cumulative share of `cumulative_years` (out of 120)
/// of a span starting at `start` is reached.
pub fn share_end(
    start: DateTime<Utc>,
    span_days: f64,
    cumulative_years: f64,
) -> Result<DateTime<Utc>, DashaError> {
    let fraction = cumulative_years / VIMSHOTTARI_TOTAL_YEARS;
    Ok(add_days(start, span_days * fraction)?)
}

/// Split `[start, start + span_days)` into 9 proportional periods, the
/// sequence beginning at `first`.
pub fn subdivide(
    start: DateTime<Utc>,
    span_days: f64,
    first: Graha,
    level: DashaLevel,
) -> Result<Vec<PlanetPeriod>, DashaError> {
    if !span_days.is_finite() || span_days <= 0.0 {
        return Err(DashaError::InvalidInput("period span must be positive"));
    }
    let mut periods = Vec::with_capacity(9);
    let mut cursor = start;
    let mut cumulative = 0.0;

    for (order_0, graha) in vimshottari_sequence(first).into_iter().enumerate() {
        cumulative += vimshottari_years(graha);
        let end = share_end(start, span_days, cumulative)?;
        periods.push(PlanetPeriod {
            graha,
            level,
            start: cursor,
            end,
            order: (order_0 as u16) + 1,
        });
        cursor = end;
    }

    Ok(periods)
}

/// Sub-periods of `parent`, the sequence beginning at the parent's graha.
///
/// Returns an empty list for Pratyantardasha, the deepest level.
pub fn proportional_children(parent: &PlanetPeriod) -> Result<Vec<PlanetPeriod>, DashaError> {
    match parent.level.child_level() {
        Some(child_level) => subdivide(
            parent.start,
            parent.duration_days(),
            parent.graha,
            child_level,
        ),
        None => Ok(Vec::new()),
    }
}
