use crate::aspects::types::ChartAspect;
use crate::ephemeris::types::BodyPosition;
use crate::reference::{AspectDefinition, AspectKind, ZodiacSign, FULL_ASPECT_ORDER, NATAL_ASPECT_ORDER};

/// Undirected angular separation, folded to `0..=180`.
pub fn angular_separation(lon1: f64, lon2: f64) -> f64 {
    let raw_diff = (lon1 - lon2).abs();
    if raw_diff > 180.0 {
        360.0 - raw_diff
    } else {
        raw_diff
    }
}

/// First-match aspect detection over an ordered definition list.
///
/// Order is load-bearing: overlapping orbs resolve to the earlier
/// definition, and a pair never yields more than one aspect.
pub fn first_matching_aspect(separation: f64, order: &[AspectDefinition]) -> Option<(AspectKind, f64)> {
    order
        .iter()
        .find_map(|def| def.deviation(separation).map(|orb| (def.kind, orb)))
}

/// Aspect between two whole signs (30° steps), testing all six
/// definitions with the quincunx last.
pub fn aspect_between_signs(a: ZodiacSign, b: ZodiacSign) -> Option<AspectKind> {
    let separation = angular_separation(a.index() as f64 * 30.0, b.index() as f64 * 30.0);
    first_matching_aspect(separation, &FULL_ASPECT_ORDER).map(|(kind, _)| kind)
}

/// Aspect calculator for body positions.
#[derive(Debug, Clone, Default)]
pub struct AspectCalculator {
    include_quincunx: bool,
}

impl AspectCalculator {
    /// Natal aspect set: conjunction, sextile, square, trine, opposition.
    pub fn new() -> Self {
        Self { include_quincunx: false }
    }

    /// Also test the quincunx, after the five natal definitions.
    pub fn with_quincunx(include_quincunx: bool) -> Self {
        Self { include_quincunx }
    }

    fn order(&self) -> &'static [AspectDefinition] {
        if self.include_quincunx {
            &FULL_ASPECT_ORDER
        } else {
            &NATAL_ASPECT_ORDER
        }
    }

    /// Aspect between two longitudes, if any.
    pub fn calculate_aspect(&self, lon1: f64, lon2: f64) -> Option<(AspectKind, f64)> {
        first_matching_aspect(angular_separation(lon1, lon2), self.order())
    }

    fn aspect_for(&self, p1: &BodyPosition, p2: &BodyPosition) -> Option<ChartAspect> {
        let lon1 = p1.longitude();
        let lon2 = p2.longitude();
        let (kind, orb) = self.calculate_aspect(lon1, lon2)?;
        log::trace!("{} {} {} (orb {:.2})", p1.body, kind, p2.body, orb);
        Some(ChartAspect {
            body_a: p1.body,
            body_b: p2.body,
            kind,
            orb,
            applying: lon1 < lon2,
        })
    }

    /// Aspects between every unordered pair of positions.
    pub fn compute_aspects(&self, positions: &[BodyPosition]) -> Vec<ChartAspect> {
        let mut aspects = Vec::new();
        for i in 0..positions.len() {
            for j in (i + 1)..positions.len() {
                if let Some(aspect) = self.aspect_for(&positions[i], &positions[j]) {
                    aspects.push(aspect);
                }
            }
        }
        aspects
    }

    /// Aspects from each body of one chart to each body of another. Body A
    /// always comes from `positions_a`.
    pub fn compute_inter_chart_aspects(
        &self,
        positions_a: &[BodyPosition],
        positions_b: &[BodyPosition],
    ) -> Vec<ChartAspect> {
        positions_a
            .iter()
            .flat_map(|p1| positions_b.iter().filter_map(move |p2| self.aspect_for(p1, p2)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_angular_separation_folds() {
        assert_eq!(angular_separation(10.0, 350.0), 20.0);
        assert_eq!(angular_separation(0.0, 180.0), 180.0);
        assert_eq!(angular_separation(100.0, 40.0), 60.0);
    }

    #[test]
    fn test_orb_edges() {
        let calc = AspectCalculator::new();
        assert_eq!(calc.calculate_aspect(0.0, 65.5), Some((AspectKind::Sextile, 5.5)));
        assert_eq!(calc.calculate_aspect(0.0, 66.5), None);
        assert_eq!(calc.calculate_aspect(10.0, 2.0), Some((AspectKind::Conjunction, 8.0)));
    }

    #[test]
    fn test_quincunx_only_when_enabled() {
        assert_eq!(AspectCalculator::new().calculate_aspect(0.0, 150.0), None);
        assert_eq!(
            AspectCalculator::with_quincunx(true).calculate_aspect(0.0, 150.0).map(|a| a.0),
            Some(AspectKind::Quincunx)
        );
    }

    #[test]
    fn test_aspect_between_signs() {
        assert_eq!(aspect_between_signs(ZodiacSign::Aries, ZodiacSign::Aries), Some(AspectKind::Conjunction));
        assert_eq!(aspect_between_signs(ZodiacSign::Aries, ZodiacSign::Gemini), Some(AspectKind::Sextile));
        assert_eq!(aspect_between_signs(ZodiacSign::Aries, ZodiacSign::Cancer), Some(AspectKind::Square));
        assert_eq!(aspect_between_signs(ZodiacSign::Aries, ZodiacSign::Leo), Some(AspectKind::Trine));
        assert_eq!(aspect_between_signs(ZodiacSign::Aries, ZodiacSign::Libra), Some(AspectKind::Opposition));
        assert_eq!(aspect_between_signs(ZodiacSign::Aries, ZodiacSign::Virgo), Some(AspectKind::Quincunx));
        assert_eq!(aspect_between_signs(ZodiacSign::Aries, ZodiacSign::Taurus), None);
    }
}
