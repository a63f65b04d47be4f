//! Text and JSON rendering for CLI output.

use std::fmt::Write;

use chrono::{DateTime, Utc};
use dasha_base::dasha::{BirthBalance, nakshatra_ruler, vimshottari_years};
use dasha_base::{
    DashaBreakdown, DashaHierarchy, DashaLevel, Nakshatra, PeriodAnnotation, PlanetPeriod,
    annotate_period,
};
use dasha_time::{format_utc, to_jd_utc};
use serde::Serialize;

/// Periods shown per timeline level before truncating.
pub const DISPLAY_LIMIT: usize = 50;

/// JSON body of `dasha snapshot --json`.
#[derive(Debug, Serialize)]
pub struct SnapshotReport<'a> {
    #[serde(flatten)]
    pub breakdown: &'a DashaBreakdown,
    pub annotations: [PeriodAnnotation; 3],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<BirthBalance>,
}

impl<'a> SnapshotReport<'a> {
    pub fn new(breakdown: &'a DashaBreakdown, balance: Option<BirthBalance>) -> Self {
        Self {
            breakdown,
            annotations: breakdown.active_chain().map(|p| annotate_period(&p)),
            balance,
        }
    }
}

fn instant(t: DateTime<Utc>) -> String {
    format_utc(t)
}

fn period_line(period: &PlanetPeriod) -> String {
    format!(
        "{} ({}) {} - {} (JD {:.4} - {:.4}, {:.1} days)",
        period.graha.name(),
        period.graha.english_name(),
        instant(period.start),
        instant(period.end),
        to_jd_utc(period.start),
        to_jd_utc(period.end),
        period.duration_days(),
    )
}

pub fn snapshot(breakdown: &DashaBreakdown, balance: Option<&BirthBalance>) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Vimshottari Dasha at {} for birth {} ({})\n",
        instant(breakdown.reference),
        instant(breakdown.birth),
        breakdown.nakshatra.name(),
    );
    if let Some(b) = balance {
        let _ = writeln!(
            out,
            "Birth balance: {} {:.4} y remaining ({:.1}% of {} elapsed)\n",
            b.ruler.name(),
            b.remaining_years,
            b.elapsed_fraction * 100.0,
            b.nakshatra.name(),
        );
    }

    for period in breakdown.active_chain() {
        let indent = "  ".repeat(period.level.depth() as usize);
        let note = annotate_period(&period);
        let _ = writeln!(
            out,
            "{indent}{}: {}",
            period.level.name(),
            period_line(&period)
        );
        let _ = writeln!(out, "{indent}  confidence {}%", note.confidence);
        for effect in &note.effects {
            let _ = writeln!(out, "{indent}  + {effect}");
        }
        for remedy in &note.remedies {
            let _ = writeln!(out, "{indent}  remedy: {remedy}");
        }
    }

    if !breakdown.upcoming.is_empty() {
        let _ = writeln!(out, "\nUpcoming mahadashas:");
        for period in &breakdown.upcoming {
            let _ = writeln!(out, "  [{}] {}", period.order, period_line(period));
        }
    }
    out
}

pub fn timeline(hierarchy: &DashaHierarchy, nakshatra: Nakshatra, limit: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Vimshottari Dasha timeline for birth {} ({}, cycle start {}, {} levels)\n",
        instant(hierarchy.birth),
        nakshatra.name(),
        instant(hierarchy.cycle_start),
        hierarchy.levels.len(),
    );
    for (lvl_idx, level) in hierarchy.levels.iter().enumerate() {
        let level_name = DashaLevel::from_u8(lvl_idx as u8)
            .map(|l| l.name())
            .unwrap_or("Unknown");
        let _ = writeln!(
            out,
            "Level {lvl_idx} ({level_name}) - {} periods:",
            level.len()
        );
        let display_count = level.len().min(limit);
        let indent = "  ".repeat(lvl_idx + 1);
        for period in &level[..display_count] {
            let _ = writeln!(out, "{indent}[{}] {}", period.order, period_line(period));
        }
        if level.len() > display_count {
            let _ = writeln!(out, "  ... and {} more periods", level.len() - display_count);
        }
        let _ = writeln!(out);
    }
    out
}

pub fn ruler(nakshatra: Nakshatra) -> String {
    let graha = nakshatra_ruler(nakshatra);
    format!(
        "{} -> {} ({}), {} years",
        nakshatra.name(),
        graha.name(),
        graha.english_name(),
        vimshottari_years(graha)
    )
}

pub fn balance(lon: f64, balance: &BirthBalance) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{lon:.4} deg -> {} ({:.1}% traversed)",
        balance.nakshatra.name(),
        balance.elapsed_fraction * 100.0
    );
    let _ = writeln!(
        out,
        "Ruler {} ({}): {:.4} y elapsed, {:.4} y remaining",
        balance.ruler.name(),
        balance.ruler.english_name(),
        balance.elapsed_years,
        balance.remaining_years,
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeDelta, TimeZone};
    use dasha_base::dasha::birth_balance;
    use dasha_base::{BirthData, DashaOptions, dasha_breakdown, dasha_hierarchy};

    fn birth() -> BirthData {
        BirthData::new(
            Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap(),
            Nakshatra::Ashwini,
        )
    }

    #[test]
    fn snapshot_lists_chain_and_upcoming() {
        let b = birth();
        let breakdown = dasha_breakdown(
            &b,
            b.instant + TimeDelta::days(1),
            &DashaOptions::default(),
        )
        .unwrap();
        let text = snapshot(&breakdown, None);
        assert!(text.contains("Mahadasha: Ketu"));
        assert!(text.contains("  Antardasha: Ketu"));
        assert!(text.contains("    Pratyantardasha: Ketu"));
        assert!(text.contains("Upcoming mahadashas:"));
        assert!(text.contains("[2] Shukra"));
        assert!(!text.contains("Birth balance"));
    }

    #[test]
    fn snapshot_json_has_annotations() {
        let b = birth();
        let breakdown = dasha_breakdown(&b, b.instant, &DashaOptions::default()).unwrap();
        let report = SnapshotReport::new(&breakdown, None);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["mahadasha"]["graha"], "Ketu");
        assert_eq!(json["annotations"].as_array().unwrap().len(), 3);
        assert!(json.get("balance").is_none());
    }

    #[test]
    fn timeline_truncates_long_levels() {
        let h = dasha_hierarchy(&birth(), 1).unwrap();
        let text = timeline(&h, Nakshatra::Ashwini, 10);
        assert!(text.contains("Level 0 (Mahadasha) - 9 periods:"));
        assert!(text.contains("Level 1 (Antardasha) - 81 periods:"));
        assert!(text.contains("... and 71 more periods"));
    }

    #[test]
    fn ruler_line() {
        assert_eq!(ruler(Nakshatra::Rohini), "Rohini -> Chandra (Moon), 10 years");
    }

    #[test]
    fn balance_lines() {
        let b = birth_balance(0.0).unwrap();
        let text = balance(0.0, &b);
        assert!(text.starts_with("0.0000 deg -> Ashwini"));
        assert!(text.contains("Ruler Ketu (Ketu)"));
    }
}
