//! Cross-chart compatibility.

use crate::aspects::{AspectCalculator, ChartAspect};
use crate::chart::NatalChart;
use crate::compatibility::scorer::clamp_score;
use crate::compatibility::{CompatibilityResult, CompatibilityScorer};
use crate::reference::{element_relation, ElementRelation, ZodiacSign};
use serde::{Deserialize, Serialize};

pub const MOON_SYNERGY_BONUS: i8 = 5;
pub const ASCENDANT_MATCH_BONUS: i8 = 3;
pub const ASCENDANT_MISMATCH_PENALTY: i8 = -2;

/// Sun-sign compatibility refined with moon, ascendant and inter-chart
/// aspects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedCompatibility {
    #[serde(flatten)]
    pub result: CompatibilityResult,
    pub moon_sign_a: ZodiacSign,
    pub moon_sign_b: ZodiacSign,
    pub ascendant_a: ZodiacSign,
    pub ascendant_b: ZodiacSign,
    pub moon_adjustment: i8,
    pub ascendant_adjustment: i8,
    pub inter_aspects: Vec<ChartAspect>,
}

/// +5 when the moons share an element or form an earth/water pair.
pub fn moon_adjustment(moon_a: ZodiacSign, moon_b: ZodiacSign) -> i8 {
    let relation = element_relation(moon_a.element(), moon_b.element());
    let earth_water = relation == ElementRelation::Complementary
        && moon_a.element().is_receptive()
        && moon_b.element().is_receptive();
    if relation == ElementRelation::Same || earth_water {
        MOON_SYNERGY_BONUS
    } else {
        0
    }
}

/// Whether A's rising sign lists B's sun sign as compatible.
pub fn ascendant_adjustment(ascendant_a: ZodiacSign, sun_b: ZodiacSign) -> i8 {
    if ascendant_a.is_naturally_compatible_with(sun_b) {
        ASCENDANT_MATCH_BONUS
    } else {
        ASCENDANT_MISMATCH_PENALTY
    }
}

fn adjust(score: u8, delta: i8) -> u8 {
    clamp_score(score as i32 + delta as i32)
}

/// Reads both charts, never modifies them.
#[derive(Debug, Clone, Default)]
pub struct SynastryAnalyzer {
    scorer: CompatibilityScorer,
    calculator: AspectCalculator,
}

impl SynastryAnalyzer {
    pub fn new(scorer: CompatibilityScorer, calculator: AspectCalculator) -> Self {
        Self { scorer, calculator }
    }

    pub fn analyze(&self, chart_a: &NatalChart, chart_b: &NatalChart) -> DetailedCompatibility {
        let mut result = self.scorer.score(chart_a.sun_sign(), chart_b.sun_sign());

        let moon = moon_adjustment(chart_a.moon_sign(), chart_b.moon_sign());
        let ascendant = ascendant_adjustment(chart_a.ascendant(), chart_b.sun_sign());

        result.emotional = adjust(result.emotional, moon);
        result.communication = adjust(result.communication, ascendant);
        result.overall_score = adjust(result.overall_score, moon + ascendant);

        let inter_aspects = self
            .calculator
            .compute_inter_chart_aspects(chart_a.positions(), chart_b.positions());
        log::debug!(
            "synastry {} x {}: moon {:+}, ascendant {:+}, {} inter-chart aspects",
            chart_a.sun_sign(),
            chart_b.sun_sign(),
            moon,
            ascendant,
            inter_aspects.len()
        );

        DetailedCompatibility {
            result,
            moon_sign_a: chart_a.moon_sign(),
            moon_sign_b: chart_b.moon_sign(),
            ascendant_a: chart_a.ascendant(),
            ascendant_b: chart_b.ascendant(),
            moon_adjustment: moon,
            ascendant_adjustment: ascendant,
            inter_aspects,
        }
    }
}
