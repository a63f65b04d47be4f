//! Static effect, remedy and confidence annotations for dasha periods.
//!
//! Pure lookups. The confidence score is a presentation heuristic: base 70,
//! shifted by nesting level and by a fixed per-graha strength, clamped to
//! [40, 95].

use serde::Serialize;

use crate::dasha::{DashaLevel, PlanetPeriod};
use crate::graha::Graha;

/// Starting confidence before adjustments.
pub const CONFIDENCE_BASE: i16 = 70;

/// Lowest confidence ever reported.
pub const CONFIDENCE_MIN: u8 = 40;

/// Highest confidence ever reported.
pub const CONFIDENCE_MAX: u8 = 95;

/// Descriptive metadata attached to a resolved period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodAnnotation {
    pub graha: Graha,
    pub level: DashaLevel,
    pub effects: Vec<&'static str>,
    pub remedies: Vec<&'static str>,
    /// 40..=95.
    pub confidence: u8,
}

/// What a graha signifies.
pub const fn significations(graha: Graha) -> &'static [&'static str] {
    match graha {
        Graha::Surya => &["soul", "father", "authority", "vitality"],
        Graha::Chandra => &["mind", "mother", "emotions", "public"],
        Graha::Mangal => &["energy", "siblings", "courage", "property"],
        Graha::Buddh => &["intellect", "speech", "commerce", "learning"],
        Graha::Guru => &["wisdom", "children", "teachers", "fortune"],
        Graha::Shukra => &["relationships", "comforts", "arts", "vehicles"],
        Graha::Shani => &["discipline", "longevity", "labour", "delay"],
        Graha::Rahu => &["ambition", "foreign lands", "innovation", "obsession"],
        Graha::Ketu => &["detachment", "spirituality", "past karma", "research"],
    }
}

/// Typical effects of a graha's period.
pub const fn effects(graha: Graha) -> &'static [&'static str] {
    match graha {
        Graha::Surya => &[
            "Recognition from authority figures",
            "Focus on career standing and self-expression",
            "Strain on health if vitality is neglected",
        ],
        Graha::Chandra => &[
            "Heightened emotional sensitivity",
            "Changes of residence or routine",
            "Support from family and the public",
        ],
        Graha::Mangal => &[
            "Drive to start bold initiatives",
            "Dealings in land or property",
            "Conflicts arising from haste",
        ],
        Graha::Buddh => &[
            "Gains through trade, writing and study",
            "Busy period of communication and travel",
            "Restless, scattered attention",
        ],
        Graha::Guru => &[
            "Growth in knowledge and wealth",
            "Blessings through children and mentors",
            "Opportunities for higher learning",
        ],
        Graha::Shukra => &[
            "Harmony in partnerships and marriage",
            "Acquisition of comforts and luxuries",
            "Creative and artistic success",
        ],
        Graha::Shani => &[
            "Slow, steady results from sustained effort",
            "Heavier responsibilities and delays",
            "Lasting foundations built through discipline",
        ],
        Graha::Rahu => &[
            "Sudden, unconventional opportunities",
            "Connections with foreign places or people",
            "Confusion or restlessness about direction",
        ],
        Graha::Ketu => &[
            "Turn toward introspection and spirituality",
            "Detachment from material pursuits",
            "Unexpected endings that clear the way",
        ],
    }
}

/// Traditional remedies for a graha's period.
pub const fn remedies(graha: Graha) -> &'static [&'static str] {
    match graha {
        Graha::Surya => &["Offer water to the rising Sun", "Recite the Aditya Hridayam"],
        Graha::Chandra => &["Fast on Mondays", "Chant the Chandra mantra"],
        Graha::Mangal => &["Recite the Hanuman Chalisa", "Donate red lentils on Tuesdays"],
        Graha::Buddh => &["Chant the Vishnu Sahasranama", "Donate green gram on Wednesdays"],
        Graha::Guru => &["Honour teachers and elders", "Donate yellow items on Thursdays"],
        Graha::Shukra => &["Worship Goddess Lakshmi", "Donate white clothes on Fridays"],
        Graha::Shani => &[
            "Serve the elderly and labourers",
            "Light a sesame-oil lamp on Saturdays",
        ],
        Graha::Rahu => &["Chant the Durga mantra", "Feed stray dogs"],
        Graha::Ketu => &["Worship Lord Ganesha", "Donate blankets to the needy"],
    }
}

/// Fixed per-graha strength adjustment, -10..=+10.
pub const fn strength(graha: Graha) -> i8 {
    match graha {
        Graha::Guru => 10,
        Graha::Shukra => 5,
        Graha::Buddh => 5,
        Graha::Chandra => 5,
        Graha::Surya => 0,
        Graha::Mangal => -5,
        Graha::Ketu => -5,
        Graha::Shani => -10,
        Graha::Rahu => -10,
    }
}

/// Level adjustment: broader periods are read with more confidence.
pub const fn level_adjustment(level: DashaLevel) -> i8 {
    match level {
        DashaLevel::Mahadasha => 10,
        DashaLevel::Antardasha => 0,
        DashaLevel::Pratyantardasha => -10,
    }
}

/// Confidence score for a (graha, level) pair, within [40, 95].
pub fn confidence(graha: Graha, level: DashaLevel) -> u8 {
    let raw = CONFIDENCE_BASE + level_adjustment(level) as i16 + strength(graha) as i16;
    raw.clamp(CONFIDENCE_MIN as i16, CONFIDENCE_MAX as i16) as u8
}

/// Attach effects, remedies and confidence to a graha at a level.
pub fn annotate(graha: Graha, level: DashaLevel) -> PeriodAnnotation {
    PeriodAnnotation {
        graha,
        level,
        effects: effects(graha).to_vec(),
        remedies: remedies(graha).to_vec(),
        confidence: confidence(graha, level),
    }
}

/// Annotate a resolved period.
pub fn annotate_period(period: &PlanetPeriod) -> PeriodAnnotation {
    annotate(period.graha, period.level)
}
