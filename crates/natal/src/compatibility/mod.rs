pub mod celebrities;
pub mod narrative;
pub mod scorer;
pub mod types;

pub use celebrities::{match_celebrities, seed_index, Celebrity, ROSTER};
pub use narrative::NarrativeLimits;
pub use scorer::{pair_factors, CompatibilityScorer, PairFactors};
pub use types::{CelebrityMatch, CompatibilityResult, FamousPair};
