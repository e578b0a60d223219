//! Function-call surface for a host service.
//!
//! Stateless apart from immutable settings; safe to share across threads
//! and call concurrently.

use crate::aspects::{AspectCalculator, ChartAspect};
use crate::chart::{compute_balance, ChartBalance, NatalChart, NatalChartRecord};
use crate::compatibility::{
    match_celebrities, CelebrityMatch, CompatibilityResult, CompatibilityScorer, NarrativeLimits,
};
use crate::ephemeris::types::{BirthData, BodyPosition};
use crate::ephemeris::MeanMotionModel;
use crate::error::Result;
use crate::reference::ZodiacSign;
use crate::settings::EngineSettings;
use crate::synastry::{DetailedCompatibility, SynastryAnalyzer};

#[derive(Debug, Clone)]
pub struct NatalEngine {
    settings: EngineSettings,
    model: MeanMotionModel,
    calculator: AspectCalculator,
    scorer: CompatibilityScorer,
}

impl NatalEngine {
    pub fn new(settings: EngineSettings) -> Result<Self> {
        let model = MeanMotionModel::new(settings.default_birth_time()?);
        let calculator = AspectCalculator::with_quincunx(settings.natal_quincunx);
        let scorer = CompatibilityScorer::new(NarrativeLimits {
            max_strengths: settings.max_strengths,
            max_challenges: settings.max_challenges,
        });
        Ok(Self { settings, model, calculator, scorer })
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    pub fn compute_chart(&self, birth: &BirthData) -> Result<NatalChart> {
        if let Some(place) = &birth.place {
            place.validate()?;
        }

        let sun_sign = self.model.sun_sign(birth.date);
        let moon_sign = self.model.moon_sign(birth.date, birth.time);
        let ascendant = self.model.ascendant(birth.date, birth.time, birth.place.as_ref());
        let instant = self.model.birth_instant(birth.date, birth.time);

        let positions = self.model.body_positions_from(instant, ascendant.sign);
        let houses = MeanMotionModel::house_cusps(&ascendant);
        let aspects = self.calculator.compute_aspects(&positions);

        log::debug!(
            "chart {}: sun {}, moon {}, rising {} ({:.2}), {} aspects",
            instant,
            sun_sign,
            moon_sign,
            ascendant.sign,
            ascendant.degree,
            aspects.len()
        );

        NatalChart::new(NatalChartRecord {
            id: None,
            name: birth.name.clone(),
            birth_date: birth.date,
            birth_time: birth.time,
            birth_place: birth.place.clone(),
            sun_sign,
            moon_sign,
            ascendant: ascendant.sign,
            positions,
            houses,
            aspects,
            computed_at: instant,
        })
    }

    pub fn compute_aspects(&self, positions: &[BodyPosition]) -> Vec<ChartAspect> {
        self.calculator.compute_aspects(positions)
    }

    pub fn compute_balance(&self, positions: &[BodyPosition]) -> ChartBalance {
        compute_balance(positions)
    }

    pub fn score_compatibility(&self, sign_a: ZodiacSign, sign_b: ZodiacSign) -> CompatibilityResult {
        self.scorer.score(sign_a, sign_b)
    }

    pub fn score_detailed_compatibility(&self, chart_a: &NatalChart, chart_b: &NatalChart) -> DetailedCompatibility {
        SynastryAnalyzer::new(self.scorer.clone(), self.calculator.clone()).analyze(chart_a, chart_b)
    }

    pub fn match_celebrities(&self, chart: &NatalChart) -> Vec<CelebrityMatch> {
        match_celebrities(
            &self.scorer,
            chart.sun_sign(),
            chart.birth_date(),
            self.settings.celebrity_matches,
        )
    }
}

impl Default for NatalEngine {
    fn default() -> Self {
        Self {
            settings: EngineSettings::default(),
            model: MeanMotionModel::default(),
            calculator: AspectCalculator::new(),
            scorer: CompatibilityScorer::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NatalError;
    use crate::ephemeris::GeoLocation;
    use chrono::{NaiveDate, NaiveTime};

    #[test]
    fn test_compute_chart_shape() {
        let engine = NatalEngine::default();
        let birth = BirthData::new(NaiveDate::from_ymd_opt(1990, 5, 15).unwrap())
            .with_time(NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        let chart = engine.compute_chart(&birth).unwrap();
        assert_eq!(chart.sun_sign(), ZodiacSign::Taurus);
        assert_eq!(chart.ascendant(), ZodiacSign::Libra);
        assert_eq!(chart.positions().len(), 10);
        assert_eq!(chart.houses().len(), 12);
        assert_eq!(chart.houses()[0].sign, ZodiacSign::Libra);
    }

    #[test]
    fn test_invalid_place_rejected() {
        let engine = NatalEngine::default();
        let birth = BirthData::new(NaiveDate::from_ymd_opt(1990, 5, 15).unwrap())
            .with_place(GeoLocation::new(0.0, 200.0));
        assert!(matches!(engine.compute_chart(&birth), Err(NatalError::InvalidPlace(_))));
    }

    #[test]
    fn test_settings_drive_celebrity_count() {
        let engine = NatalEngine::new(EngineSettings { celebrity_matches: 3, ..Default::default() }).unwrap();
        let chart = engine
            .compute_chart(&BirthData::new(NaiveDate::from_ymd_opt(1985, 12, 1).unwrap()))
            .unwrap();
        assert_eq!(engine.match_celebrities(&chart).len(), 3);
    }

    #[test]
    fn test_quincunx_setting() {
        let engine = NatalEngine::new(EngineSettings { natal_quincunx: true, ..Default::default() }).unwrap();
        assert_eq!(engine.calculator.calculate_aspect(0.0, 150.0).map(|a| a.0), Some(crate::reference::AspectKind::Quincunx));
    }
}
