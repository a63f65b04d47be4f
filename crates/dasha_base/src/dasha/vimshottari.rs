//! Vimshottari dasha engine.
//!
//! Implements 6 computation tiers:
//! - Tier 0: Level-0 (mahadasha) generation
//! - Tier 1: Single child period
//! - Tier 2: All children of one parent
//! - Tier 3: Complete level from parent level
//! - Tier 4: Full hierarchy (levels 0..=2)
//! - Tier 5: Breakdown at a reference instant (active chain only)

use chrono::{DateTime, Utc};
use dasha_time::{add_days, add_years};
use tracing::debug;

use crate::error::DashaError;
use crate::graha::Graha;

use super::balance::birth_balance;
use super::sequence::resolve_active;
use super::subperiod::{cycle_days, proportional_children, subdivide};
use super::types::{
    BirthData, DashaBreakdown, DashaHierarchy, DashaLevel, DashaOptions, MAX_DASHA_LEVEL,
    MAX_UPCOMING_COUNT, PlanetPeriod,
};
use super::vimshottari_data::nakshatra_ruler;

/// Start of the birth cycle and the graha whose mahadasha opens it.
///
/// Without a Moon longitude the cycle starts at birth. With one, it starts
/// earlier by the elapsed part of the ruler's mahadasha; the longitude must
/// fall in the birth nakshatra.
pub fn cycle_origin(birth: &BirthData) -> Result<(DateTime<Utc>, Graha), DashaError> {
    let ruler = nakshatra_ruler(birth.nakshatra);
    let Some(lon) = birth.moon_sidereal_lon else {
        return Ok((birth.instant, ruler));
    };
    let balance = birth_balance(lon)?;
    if balance.nakshatra != birth.nakshatra {
        return Err(DashaError::InvalidInput(
            "moon longitude does not fall in the birth nakshatra",
        ));
    }
    let start = add_years(birth.instant, -balance.elapsed_years)?;
    Ok((start, ruler))
}

/// Instants for which a breakdown can be computed: `[birth, cycle end)`.
pub fn computable_window(
    birth: &BirthData,
) -> Result<(DateTime<Utc>, DateTime<Utc>), DashaError> {
    let (cycle_start, _) = cycle_origin(birth)?;
    let cycle_end = add_days(cycle_start, cycle_days())?;
    Ok((birth.instant, cycle_end))
}

// ── Tier 0: Level-0 (Mahadasha) generation ───────────────────────────

/// Generate the 9 mahadashas of the birth cycle.
///
/// The first one may start before birth when birth balance applies.
pub fn mahadashas(birth: &BirthData) -> Result<Vec<PlanetPeriod>, DashaError> {
    let (cycle_start, ruler) = cycle_origin(birth)?;
    subdivide(cycle_start, cycle_days(), ruler, DashaLevel::Mahadasha)
}

// ── Tier 1: Single child period ──────────────────────────────────────

/// One specific graha's sub-period within a parent period.
pub fn child_period(
    parent: &PlanetPeriod,
    child: Graha,
) -> Result<Option<PlanetPeriod>, DashaError> {
    Ok(children(parent)?.into_iter().find(|c| c.graha == child))
}

// ── Tier 2: All children of one parent ───────────────────────────────

/// All 9 sub-periods of a parent, starting with the parent's own graha.
pub fn children(parent: &PlanetPeriod) -> Result<Vec<PlanetPeriod>, DashaError> {
    proportional_children(parent)
}

// ── Tier 3: Complete level from parent level ─────────────────────────

/// Every child of every period in `parent_level`, in order.
pub fn complete_level(parent_level: &[PlanetPeriod]) -> Result<Vec<PlanetPeriod>, DashaError> {
    let mut result = Vec::with_capacity(parent_level.len() * 9);
    for parent in parent_level {
        result.extend(children(parent)?);
    }
    Ok(result)
}

// ── Tier 4: Full hierarchy ───────────────────────────────────────────

/// All periods from level 0 down to `max_level` (clamped to 2).
pub fn dasha_hierarchy(birth: &BirthData, max_level: u8) -> Result<DashaHierarchy, DashaError> {
    let max_level = max_level.min(MAX_DASHA_LEVEL);
    let (cycle_start, _) = cycle_origin(birth)?;
    let mut levels = vec![mahadashas(birth)?];

    for depth in 1..=max_level {
        let next = complete_level(&levels[(depth - 1) as usize])?;
        levels.push(next);
    }

    Ok(DashaHierarchy {
        birth: birth.instant,
        cycle_start,
        levels,
    })
}

// ── Tier 5: Breakdown at a reference instant ─────────────────────────

/// Active mahadasha, antardasha and pratyantardasha at `reference`, plus the
/// mahadashas that follow.
///
/// Only the active chain is generated. `reference` must lie in
/// [`computable_window`]; instants before birth or past the end of the
/// 120-year cycle are [`DashaError::OutOfRange`].
pub fn dasha_breakdown(
    birth: &BirthData,
    reference: DateTime<Utc>,
    options: &DashaOptions,
) -> Result<DashaBreakdown, DashaError> {
    if options.upcoming_count > MAX_UPCOMING_COUNT {
        return Err(DashaError::InvalidInput("upcoming_count exceeds 8"));
    }
    let (cycle_start, ruler) = cycle_origin(birth)?;
    let cycle_end = add_days(cycle_start, cycle_days())?;
    if reference < birth.instant || reference >= cycle_end {
        return Err(DashaError::OutOfRange {
            reference,
            window_start: birth.instant,
            window_end: cycle_end,
        });
    }

    let mahadasha = resolve_active(ruler, cycle_start, cycle_days(), reference)?
        .into_period(DashaLevel::Mahadasha);
    let antardasha = resolve_active(
        mahadasha.graha,
        mahadasha.start,
        mahadasha.duration_days(),
        reference,
    )?
    .into_period(DashaLevel::Antardasha);
    let pratyantardasha = resolve_active(
        antardasha.graha,
        antardasha.start,
        antardasha.duration_days(),
        reference,
    )?
    .into_period(DashaLevel::Pratyantardasha);

    let upcoming: Vec<PlanetPeriod> =
        subdivide(cycle_start, cycle_days(), ruler, DashaLevel::Mahadasha)?
            .into_iter()
            .filter(|p| p.order > mahadasha.order)
            .take(options.upcoming_count)
            .collect();

    debug!(
        nakshatra = birth.nakshatra.name(),
        %reference,
        mahadasha = mahadasha.graha.name(),
        antardasha = antardasha.graha.name(),
        pratyantardasha = pratyantardasha.graha.name(),
        upcoming = upcoming.len(),
        "resolved vimshottari breakdown"
    );

    Ok(DashaBreakdown {
        birth: birth.instant,
        nakshatra: birth.nakshatra,
        reference,
        mahadasha,
        antardasha,
        pratyantardasha,
        upcoming,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nakshatra::{NAKSHATRA_SPAN_27, Nakshatra};
    use chrono::{TimeDelta, TimeZone};

    fn birth_instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn ashwini_mahadashas_start_with_ketu() {
        let birth = BirthData::new(birth_instant(), Nakshatra::Ashwini);
        let periods = mahadashas(&birth).unwrap();

        assert_eq!(periods.len(), 9);
        assert_eq!(periods[0].graha, Graha::Ketu);
        assert_eq!(periods[0].start, birth_instant());
        assert!((periods[0].duration_years() - 7.0).abs() < 1e-6);
        assert_eq!(periods[1].graha, Graha::Shukra);

        let total: f64 = periods.iter().map(|p| p.duration_years()).sum();
        assert!((total - 120.0).abs() < 1e-6);
    }

    #[test]
    fn partial_balance_starts_cycle_before_birth() {
        let mid_rohini = 40.0 + NAKSHATRA_SPAN_27 / 2.0;
        let birth =
            BirthData::new(birth_instant(), Nakshatra::Rohini).with_moon_longitude(mid_rohini);
        let periods = mahadashas(&birth).unwrap();

        assert_eq!(periods[0].graha, Graha::Chandra);
        assert!(periods[0].start < birth_instant());
        let remaining = dasha_time::years_between(birth_instant(), periods[0].end);
        assert!((remaining - 5.0).abs() < 1e-6);
    }

    #[test]
    fn mismatched_moon_longitude_rejected() {
        let birth = BirthData::new(birth_instant(), Nakshatra::Rohini).with_moon_longitude(0.0);
        assert!(matches!(
            mahadashas(&birth),
            Err(DashaError::InvalidInput(_))
        ));
    }

    #[test]
    fn children_start_with_parent_graha() {
        let birth = BirthData::new(birth_instant(), Nakshatra::Ashwini);
        let periods = mahadashas(&birth).unwrap();
        let kids = children(&periods[0]).unwrap();
        assert_eq!(kids.len(), 9);
        assert_eq!(kids[0].graha, Graha::Ketu);
        assert_eq!(kids[0].level, DashaLevel::Antardasha);
        assert_eq!(kids[0].start, periods[0].start);
        assert_eq!(kids[8].end, periods[0].end);
    }

    #[test]
    fn child_period_lookup() {
        let birth = BirthData::new(birth_instant(), Nakshatra::Ashwini);
        let periods = mahadashas(&birth).unwrap();
        let rahu = child_period(&periods[0], Graha::Rahu).unwrap().unwrap();
        assert_eq!(rahu.graha, Graha::Rahu);
        assert!((rahu.duration_years() - 7.0 * 18.0 / 120.0).abs() < 1e-9);
    }

    #[test]
    fn hierarchy_level_counts() {
        let birth = BirthData::new(birth_instant(), Nakshatra::Hasta);
        let h = dasha_hierarchy(&birth, 2).unwrap();
        assert_eq!(h.levels.len(), 3);
        assert_eq!(h.levels[0].len(), 9);
        assert_eq!(h.levels[1].len(), 81);
        assert_eq!(h.levels[2].len(), 729);
    }

    #[test]
    fn hierarchy_depth_is_clamped() {
        let birth = BirthData::new(birth_instant(), Nakshatra::Hasta);
        let h = dasha_hierarchy(&birth, 7).unwrap();
        assert_eq!(h.levels.len(), 3);
    }

    #[test]
    fn breakdown_matches_hierarchy() {
        let birth = BirthData::new(birth_instant(), Nakshatra::Pushya).with_moon_longitude(100.0);
        let reference = birth_instant() + TimeDelta::days(1000);
        let h = dasha_hierarchy(&birth, 2).unwrap();
        let b = dasha_breakdown(&birth, reference, &DashaOptions::default()).unwrap();

        for (level, active) in b.active_chain().iter().enumerate() {
            let in_h = h.levels[level]
                .iter()
                .find(|p| p.contains(reference))
                .expect("active period present in hierarchy");
            assert_eq!(active.graha, in_h.graha);
            assert_eq!(active.start, in_h.start);
            assert_eq!(active.end, in_h.end);
        }
    }

    #[test]
    fn upcoming_follow_active_mahadasha() {
        let birth = BirthData::new(birth_instant(), Nakshatra::Ashwini);
        let reference = birth_instant() + TimeDelta::days(365);
        let b = dasha_breakdown(&birth, reference, &DashaOptions { upcoming_count: 3 }).unwrap();
        assert_eq!(b.mahadasha.graha, Graha::Ketu);
        let upcoming: Vec<Graha> = b.upcoming.iter().map(|p| p.graha).collect();
        assert_eq!(upcoming, vec![Graha::Shukra, Graha::Surya, Graha::Chandra]);
        assert_eq!(b.upcoming[0].start, b.mahadasha.end);
    }

    #[test]
    fn upcoming_truncated_at_cycle_end() {
        let birth = BirthData::new(birth_instant(), Nakshatra::Ashwini);
        // Last mahadasha (Buddh) runs from year 103 to 120.
        let reference = dasha_time::add_years(birth_instant(), 110.0).unwrap();
        let b = dasha_breakdown(&birth, reference, &DashaOptions { upcoming_count: 5 }).unwrap();
        assert_eq!(b.mahadasha.graha, Graha::Buddh);
        assert!(b.upcoming.is_empty());
    }

    #[test]
    fn too_many_upcoming_rejected() {
        let birth = BirthData::new(birth_instant(), Nakshatra::Ashwini);
        assert!(matches!(
            dasha_breakdown(&birth, birth_instant(), &DashaOptions { upcoming_count: 9 }),
            Err(DashaError::InvalidInput(_))
        ));
    }

    #[test]
    fn window_starts_at_birth_even_with_balance() {
        let mid_rohini = 40.0 + NAKSHATRA_SPAN_27 / 2.0;
        let birth =
            BirthData::new(birth_instant(), Nakshatra::Rohini).with_moon_longitude(mid_rohini);
        let (start, end) = computable_window(&birth).unwrap();
        assert_eq!(start, birth_instant());
        let span = dasha_time::years_between(start, end);
        assert!((span - 115.0).abs() < 1e-6);

        let before = birth_instant() - TimeDelta::seconds(1);
        assert!(matches!(
            dasha_breakdown(&birth, before, &DashaOptions::default()),
            Err(DashaError::OutOfRange { .. })
        ));
    }
}
