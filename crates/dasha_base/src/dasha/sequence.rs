//! Vimshottari sequence rotation and active-period resolution.

use chrono::{DateTime, Utc};
use dasha_time::add_days;
use serde::Serialize;
use tracing::trace;

use crate::error::DashaError;
use crate::graha::Graha;

use super::subperiod::share_end;
use super::types::{DashaLevel, PlanetPeriod};
use super::vimshottari_data::{VIMSHOTTARI_GRAHAS, sequence_position, vimshottari_years};

/// The 9-graha Vimshottari cycle rotated to begin at `start`.
pub fn vimshottari_sequence(start: Graha) -> [Graha; 9] {
    let offset = sequence_position(start);
    std::array::from_fn(|i| VIMSHOTTARI_GRAHAS[(offset + i) % VIMSHOTTARI_GRAHAS.len()])
}

/// The graha whose period follows `graha` in the cycle.
pub fn next_in_sequence(graha: Graha) -> Graha {
    VIMSHOTTARI_GRAHAS[(sequence_position(graha) + 1) % VIMSHOTTARI_GRAHAS.len()]
}

/// The active element of a sequence at a reference instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActiveSlot {
    /// Active graha.
    pub graha: Graha,
    /// 1-indexed position in the rotated sequence.
    pub order: u16,
    /// Start of the active graha's span (inclusive).
    pub start: DateTime<Utc>,
    /// End of the active graha's span (exclusive).
    pub end: DateTime<Utc>,
}

impl ActiveSlot {
    /// The slot as a period at `level`.
    pub fn into_period(self, level: DashaLevel) -> PlanetPeriod {
        PlanetPeriod {
            graha: self.graha,
            level,
            start: self.start,
            end: self.end,
            order: self.order,
        }
    }
}

/// Locate the graha active at `reference` within a span of `span_days`
/// beginning at `period_start`, the sequence starting at `start_graha`.
///
/// Each graha occupies `years / 120` of the span. Intervals are half-open:
/// an instant exactly on a boundary belongs to the later graha. A reference
/// before `period_start` or at/after the end of the span is an
/// [`DashaError::OutOfRange`] error.
pub fn resolve_active(
    start_graha: Graha,
    period_start: DateTime<Utc>,
    span_days: f64,
    reference: DateTime<Utc>,
) -> Result<ActiveSlot, DashaError> {
    if !span_days.is_finite() || span_days <= 0.0 {
        return Err(DashaError::InvalidInput("period span must be positive"));
    }
    let window_end = add_days(period_start, span_days)?;
    let out_of_range = || DashaError::OutOfRange {
        reference,
        window_start: period_start,
        window_end,
    };
    if reference < period_start || reference >= window_end {
        return Err(out_of_range());
    }

    let mut cumulative = 0.0;
    let mut slot_start = period_start;
    for (order_0, graha) in vimshottari_sequence(start_graha).into_iter().enumerate() {
        cumulative += vimshottari_years(graha);
        let slot_end = share_end(period_start, span_days, cumulative)?;
        trace!(graha = graha.name(), %slot_start, %slot_end, "dasha slot");
        if reference < slot_end {
            return Ok(ActiveSlot {
                graha,
                order: (order_0 as u16) + 1,
                start: slot_start,
                end: slot_end,
            });
        }
        slot_start = slot_end;
    }

    // The last slot ends exactly at window_end, so this is only reached if
    // the window check above and the slot arithmetic disagree.
    Err(out_of_range())
}
