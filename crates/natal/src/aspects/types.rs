use crate::reference::{AspectKind, AspectNature, CelestialBody};
use serde::{Deserialize, Serialize};

/// An aspect between two bodies. At most one exists per unordered pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartAspect {
    pub body_a: CelestialBody,
    pub body_b: CelestialBody,
    pub kind: AspectKind,
    /// Deviation from the exact angle, degrees
    pub orb: f64,
    /// Simplified: true when body A sits at the lower longitude. Not a
    /// velocity comparison.
    pub applying: bool,
}

impl ChartAspect {
    pub fn nature(&self) -> AspectNature {
        self.kind.nature()
    }

    pub fn involves(&self, body: CelestialBody) -> bool {
        self.body_a == body || self.body_b == body
    }
}
