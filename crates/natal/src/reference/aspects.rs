//! Aspect definitions: exact angle, orb tolerance and nature.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectKind {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
    Quincunx,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectNature {
    Harmonious,
    Challenging,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectDefinition {
    pub kind: AspectKind,
    pub angle: f64,
    pub orb: f64,
    pub nature: AspectNature,
}

impl AspectDefinition {
    /// Deviation from the exact angle when `separation` falls inside the orb.
    pub fn deviation(&self, separation: f64) -> Option<f64> {
        let deviation = (separation - self.angle).abs();
        (deviation <= self.orb).then_some(deviation)
    }
}

const CONJUNCTION: AspectDefinition = AspectDefinition {
    kind: AspectKind::Conjunction,
    angle: 0.0,
    orb: 8.0,
    nature: AspectNature::Neutral,
};
const SEXTILE: AspectDefinition = AspectDefinition {
    kind: AspectKind::Sextile,
    angle: 60.0,
    orb: 6.0,
    nature: AspectNature::Harmonious,
};
const SQUARE: AspectDefinition = AspectDefinition {
    kind: AspectKind::Square,
    angle: 90.0,
    orb: 7.0,
    nature: AspectNature::Challenging,
};
const TRINE: AspectDefinition = AspectDefinition {
    kind: AspectKind::Trine,
    angle: 120.0,
    orb: 8.0,
    nature: AspectNature::Harmonious,
};
const OPPOSITION: AspectDefinition = AspectDefinition {
    kind: AspectKind::Opposition,
    angle: 180.0,
    orb: 8.0,
    nature: AspectNature::Challenging,
};
const QUINCUNX: AspectDefinition = AspectDefinition {
    kind: AspectKind::Quincunx,
    angle: 150.0,
    orb: 3.0,
    nature: AspectNature::Neutral,
};

/// Priority order for aspects between bodies of a chart. The first
/// definition whose orb admits the separation wins.
pub static NATAL_ASPECT_ORDER: [AspectDefinition; 5] = [CONJUNCTION, SEXTILE, SQUARE, TRINE, OPPOSITION];

/// Priority order including the quincunx, used between whole signs.
pub static FULL_ASPECT_ORDER: [AspectDefinition; 6] =
    [CONJUNCTION, SEXTILE, SQUARE, TRINE, OPPOSITION, QUINCUNX];

impl AspectKind {
    pub fn definition(self) -> &'static AspectDefinition {
        &FULL_ASPECT_ORDER[self as usize]
    }

    pub fn nature(self) -> AspectNature {
        self.definition().nature
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AspectKind::Conjunction => "conjunction",
            AspectKind::Sextile => "sextile",
            AspectKind::Square => "square",
            AspectKind::Trine => "trine",
            AspectKind::Opposition => "opposition",
            AspectKind::Quincunx => "quincunx",
        }
    }
}

impl fmt::Display for AspectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
