pub mod error;
pub mod reference;
pub mod ephemeris;
pub mod aspects;
pub mod chart;
pub mod compatibility;
pub mod synastry;
pub mod input;
pub mod settings;
pub mod engine;

pub use aspects::{aspect_between_signs, AspectCalculator, ChartAspect};
pub use chart::{ChartBalance, DignityResult, DignityType, NatalChart, NatalChartRecord};
pub use compatibility::{CelebrityMatch, CompatibilityResult, CompatibilityScorer, FamousPair};
pub use engine::NatalEngine;
pub use ephemeris::{sun_sign, Ascendant, BirthData, BodyPosition, GeoLocation, HouseCusp, MeanMotionModel};
pub use error::{NatalError, Result};
pub use reference::{AspectKind, AspectNature, CelestialBody, Element, House, Modality, ZodiacSign};
pub use settings::EngineSettings;
pub use synastry::{DetailedCompatibility, SynastryAnalyzer};

lazy_static::lazy_static! {
    static ref DEFAULT_ENGINE: NatalEngine = NatalEngine::default();
}

/// Chart with default settings.
pub fn compute_chart(birth: &BirthData) -> Result<NatalChart> {
    DEFAULT_ENGINE.compute_chart(birth)
}

pub fn compute_aspects(positions: &[BodyPosition]) -> Vec<ChartAspect> {
    DEFAULT_ENGINE.compute_aspects(positions)
}

pub fn compute_balance(positions: &[BodyPosition]) -> ChartBalance {
    DEFAULT_ENGINE.compute_balance(positions)
}

pub fn score_compatibility(sign_a: ZodiacSign, sign_b: ZodiacSign) -> CompatibilityResult {
    DEFAULT_ENGINE.score_compatibility(sign_a, sign_b)
}

pub fn score_detailed_compatibility(chart_a: &NatalChart, chart_b: &NatalChart) -> DetailedCompatibility {
    DEFAULT_ENGINE.score_detailed_compatibility(chart_a, chart_b)
}

/// Top five celebrity matches for the chart's sun sign.
pub fn match_celebrities(chart: &NatalChart) -> Vec<CelebrityMatch> {
    DEFAULT_ENGINE.match_celebrities(chart)
}
