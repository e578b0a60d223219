use crate::aspects::aspect_between_signs;
use crate::compatibility::narrative::{self, NarrativeLimits};
use crate::compatibility::types::CompatibilityResult;
use crate::reference::{element_compatibility, modality_compatibility, AspectKind, Element, ZodiacSign};
use serde::{Deserialize, Serialize};

/// Raw sign-pair factors the sub-scores are seeded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairFactors {
    pub element_score: u8,
    pub modality_score: u8,
    pub aspect_bonus: u8,
    /// 0, 50 or 100
    pub natural_compatibility: u8,
    pub shared_traits: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubScores {
    pub emotional: u8,
    pub communication: u8,
    pub passion: u8,
    pub values: u8,
    pub overall: u8,
}

pub(crate) fn clamp_score(value: i32) -> u8 {
    value.clamp(0, 100) as u8
}

/// Bonus by whole-sign aspect. Semi-sextile and quincunx positions get the
/// base value.
pub fn aspect_bonus(a: ZodiacSign, b: ZodiacSign) -> u8 {
    match aspect_between_signs(a, b) {
        Some(AspectKind::Conjunction) => 85,
        Some(AspectKind::Trine) => 90,
        Some(AspectKind::Sextile) => 80,
        Some(AspectKind::Opposition) => 70,
        Some(AspectKind::Square) => 55,
        Some(AspectKind::Quincunx) | None => 65,
    }
}

pub fn natural_compatibility(a: ZodiacSign, b: ZodiacSign) -> u8 {
    let mut score = 0;
    if a.is_naturally_compatible_with(b) {
        score += 50;
    }
    if b.is_naturally_compatible_with(a) {
        score += 50;
    }
    score
}

/// Equal words, or words sharing a stem of at least five letters
/// ("passionate"/"passion").
pub fn words_match(a: &str, b: &str) -> bool {
    a == b || a.chars().zip(b.chars()).take_while(|(x, y)| x == y).count() >= 5
}

/// Matching (a, b) word pairs across two lists.
pub fn matching_pairs<'a>(
    a: &'a [&'static str],
    b: &'a [&'static str],
) -> impl Iterator<Item = (&'static str, &'static str)> + 'a {
    a.iter()
        .flat_map(move |&x| b.iter().map(move |&y| (x, y)))
        .filter(|(x, y)| words_match(x, y))
}

pub fn pair_factors(a: ZodiacSign, b: ZodiacSign) -> PairFactors {
    let shared = matching_pairs(a.profile().traits, b.profile().traits).count();
    PairFactors {
        element_score: element_compatibility(a.element(), b.element()),
        modality_score: modality_compatibility(a.modality(), b.modality()),
        aspect_bonus: aspect_bonus(a, b),
        natural_compatibility: natural_compatibility(a, b),
        shared_traits: shared.min(u8::MAX as usize) as u8,
    }
}

/// Weighted blend: each sub-score 0.25, natural and aspect 0.1 each,
/// normalized by the total weight 1.2.
pub fn overall_score(emotional: u8, communication: u8, passion: u8, values: u8, factors: &PairFactors) -> u8 {
    let sum = emotional as f64 + communication as f64 + passion as f64 + values as f64;
    let blended =
        sum * 0.25 + factors.natural_compatibility as f64 * 0.1 + factors.aspect_bonus as f64 * 0.1;
    clamp_score((blended / 1.2).round() as i32)
}

pub fn sub_scores(a: ZodiacSign, b: ZodiacSign, factors: &PairFactors) -> SubScores {
    let (ea, eb) = (a.element(), b.element());
    let either = |e: Element| ea == e || eb == e;

    let mut emotional = factors.element_score as i32;
    if either(Element::Water) && either(Element::Earth) {
        emotional += 10;
    }

    let mut communication = factors.modality_score as i32;
    if either(Element::Air) {
        communication += 10;
    }
    if a.modality() == b.modality() {
        communication -= 5;
    }

    let mut passion = factors.aspect_bonus as i32;
    if either(Element::Fire) {
        passion += 10;
    }
    if a.opposite() == b {
        passion += 15;
    }

    let mut values = 40 + (factors.natural_compatibility as i32 * 2) / 5;
    if ea == eb {
        values += 20;
    }
    values += 5 * factors.shared_traits as i32;

    let (emotional, communication, passion, values) =
        (clamp_score(emotional), clamp_score(communication), clamp_score(passion), clamp_score(values));
    SubScores {
        emotional,
        communication,
        passion,
        values,
        overall: overall_score(emotional, communication, passion, values, factors),
    }
}

/// Sign-pair compatibility scorer.
#[derive(Debug, Clone)]
pub struct CompatibilityScorer {
    limits: NarrativeLimits,
}

impl Default for CompatibilityScorer {
    fn default() -> Self {
        Self::new(NarrativeLimits::default())
    }
}

impl CompatibilityScorer {
    /// Create a scorer that caps narrative lists at `limits`.
    pub fn new(limits: NarrativeLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &NarrativeLimits {
        &self.limits
    }

    /// Overall score only, without narrative text.
    pub fn overall(&self, a: ZodiacSign, b: ZodiacSign) -> u8 {
        sub_scores(a, b, &pair_factors(a, b)).overall
    }

    /// Full result: sub-scores, narrative and famous pairs.
    pub fn score(&self, a: ZodiacSign, b: ZodiacSign) -> CompatibilityResult {
        let factors = pair_factors(a, b);
        let scores = sub_scores(a, b, &factors);
        log::debug!(
            "{} x {}: overall {} (element {}, modality {}, aspect {}, natural {})",
            a,
            b,
            scores.overall,
            factors.element_score,
            factors.modality_score,
            factors.aspect_bonus,
            factors.natural_compatibility
        );

        CompatibilityResult {
            sign_a: a,
            sign_b: b,
            overall_score: scores.overall,
            emotional: scores.emotional,
            communication: scores.communication,
            passion: scores.passion,
            values: scores.values,
            strengths: narrative::strengths(a, b, &factors, self.limits.max_strengths),
            challenges: narrative::challenges(a, b, &factors, self.limits.max_challenges),
            advice: narrative::advice(a, b).to_string(),
            famous_pairs: narrative::famous_pairs(a, b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ZodiacSign::*;

    #[test]
    fn test_aspect_bonus_by_distance() {
        assert_eq!(aspect_bonus(Aries, Aries), 85);
        assert_eq!(aspect_bonus(Aries, Leo), 90);
        assert_eq!(aspect_bonus(Aries, Aquarius), 80);
        assert_eq!(aspect_bonus(Aries, Libra), 70);
        assert_eq!(aspect_bonus(Aries, Capricorn), 55);
        assert_eq!(aspect_bonus(Aries, Taurus), 65);
        assert_eq!(aspect_bonus(Aries, Scorpio), 65);
    }

    #[test]
    fn test_natural_compatibility_levels() {
        assert_eq!(natural_compatibility(Aries, Leo), 100);
        assert_eq!(natural_compatibility(Aries, Taurus), 0);
    }

    #[test]
    fn test_words_match() {
        assert!(words_match("loyal", "loyal"));
        assert!(words_match("passionate", "passion"));
        assert!(!words_match("patient", "passionate"));
        assert!(!words_match("curious", "courageous"));
    }

    #[test]
    fn test_matching_pairs_in_list_order() {
        let a = ["loyal", "passionate", "stubborn"];
        let b = ["passion", "calm", "loyal"];
        let pairs: Vec<_> = matching_pairs(&a, &b).collect();
        assert_eq!(pairs, vec![("loyal", "loyal"), ("passionate", "passion")]);
        assert_eq!(matching_pairs(&a, &[]).count(), 0);
    }

    #[test]
    fn test_aries_leo_breakdown() {
        let factors = pair_factors(Aries, Leo);
        assert_eq!(factors.element_score, 85);
        assert_eq!(factors.modality_score, 75);
        assert_eq!(factors.aspect_bonus, 90);
        assert_eq!(factors.natural_compatibility, 100);
        // "passionate" and "confident" in both
        assert_eq!(factors.shared_traits, 2);

        let scores = sub_scores(Aries, Leo, &factors);
        assert_eq!(scores.emotional, 85);
        assert_eq!(scores.communication, 75);
        assert_eq!(scores.passion, 100);
        assert_eq!(scores.values, 100);
        // (360 * 0.25 + 10 + 9) / 1.2 = 90.83
        assert_eq!(scores.overall, 91);
    }

    #[test]
    fn test_opposites_get_passion_bonus() {
        let factors = pair_factors(Leo, Aquarius);
        let scores = sub_scores(Leo, Aquarius, &factors);
        // 70 + 10 (fire) + 15 (opposite)
        assert_eq!(scores.passion, 95);
    }

    #[test]
    fn test_scores_bounded_and_symmetric() {
        let scorer = CompatibilityScorer::default();
        for a in ZodiacSign::ALL {
            for b in ZodiacSign::ALL {
                let ab = scorer.score(a, b);
                let ba = scorer.score(b, a);
                assert_eq!(ab.overall_score, ba.overall_score);
                for s in [ab.overall_score, ab.emotional, ab.communication, ab.passion, ab.values] {
                    assert!(s <= 100);
                }
            }
        }
    }
}
