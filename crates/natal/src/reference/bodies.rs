//! The ten celestial bodies used by the mean-motion model.
//!
//! Orbital periods and reference longitudes are mean values at the J2000
//! epoch. They drive a linear approximation only; nothing here models real
//! orbital mechanics.

use crate::error::NatalError;
use crate::reference::signs::ZodiacSign;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CelestialBody {
    Sun = 0,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

impl CelestialBody {
    /// Canonical order; charts list their positions in this order.
    pub const ALL: [CelestialBody; 10] = [
        CelestialBody::Sun,
        CelestialBody::Moon,
        CelestialBody::Mercury,
        CelestialBody::Venus,
        CelestialBody::Mars,
        CelestialBody::Jupiter,
        CelestialBody::Saturn,
        CelestialBody::Uranus,
        CelestialBody::Neptune,
        CelestialBody::Pluto,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn profile(self) -> &'static BodyProfile {
        &BODY_PROFILES[self.index()]
    }

    pub fn is_luminary(self) -> bool {
        matches!(self, CelestialBody::Sun | CelestialBody::Moon)
    }

    /// Mean motion in degrees per day.
    pub fn mean_daily_motion(self) -> f64 {
        360.0 / self.profile().orbital_period_days
    }

    pub fn as_str(&self) -> &'static str {
        self.profile().name
    }
}

impl fmt::Display for CelestialBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CelestialBody {
    type Err = NatalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        BODY_BY_NAME
            .get(key.as_str())
            .copied()
            .ok_or_else(|| NatalError::UnknownBody(s.to_string()))
    }
}

/// Simplified retrograde timing: a body is retrograde while its phase in
/// `cycle_days` sits inside a window of `window` (fraction of the cycle)
/// centred on the half-way point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetrogradeCycle {
    pub cycle_days: f64,
    pub window: f64,
}

#[derive(Debug)]
pub struct BodyProfile {
    pub body: CelestialBody,
    pub name: &'static str,
    pub orbital_period_days: f64,
    /// Mean longitude at the epoch, degrees.
    pub reference_longitude: f64,
    pub rulership: &'static [ZodiacSign],
    pub exaltation: Option<ZodiacSign>,
    pub detriment: &'static [ZodiacSign],
    pub fall: Option<ZodiacSign>,
    pub retrograde: Option<RetrogradeCycle>,
}

use CelestialBody::*;
use ZodiacSign as S;

const fn retro(cycle_days: f64, window: f64) -> Option<RetrogradeCycle> {
    Some(RetrogradeCycle { cycle_days, window })
}

pub static BODY_PROFILES: [BodyProfile; 10] = [
    BodyProfile {
        body: Sun,
        name: "sun",
        orbital_period_days: 365.25,
        reference_longitude: 280.46,
        rulership: &[S::Leo],
        exaltation: Some(S::Aries),
        detriment: &[S::Aquarius],
        fall: Some(S::Libra),
        retrograde: None,
    },
    BodyProfile {
        body: Moon,
        name: "moon",
        orbital_period_days: 27.32,
        reference_longitude: 218.32,
        rulership: &[S::Cancer],
        exaltation: Some(S::Taurus),
        detriment: &[S::Capricorn],
        fall: Some(S::Scorpio),
        retrograde: None,
    },
    BodyProfile {
        body: Mercury,
        name: "mercury",
        orbital_period_days: 87.97,
        reference_longitude: 252.25,
        rulership: &[S::Gemini, S::Virgo],
        exaltation: Some(S::Virgo),
        detriment: &[S::Sagittarius, S::Pisces],
        fall: Some(S::Pisces),
        retrograde: retro(115.88, 0.19),
    },
    BodyProfile {
        body: Venus,
        name: "venus",
        orbital_period_days: 224.70,
        reference_longitude: 181.98,
        rulership: &[S::Taurus, S::Libra],
        exaltation: Some(S::Pisces),
        detriment: &[S::Aries, S::Scorpio],
        fall: Some(S::Virgo),
        retrograde: retro(583.92, 0.07),
    },
    BodyProfile {
        body: Mars,
        name: "mars",
        orbital_period_days: 686.98,
        reference_longitude: 355.43,
        rulership: &[S::Aries, S::Scorpio],
        exaltation: Some(S::Capricorn),
        detriment: &[S::Libra, S::Taurus],
        fall: Some(S::Cancer),
        retrograde: retro(779.94, 0.09),
    },
    BodyProfile {
        body: Jupiter,
        name: "jupiter",
        orbital_period_days: 4332.59,
        reference_longitude: 34.35,
        rulership: &[S::Sagittarius, S::Pisces],
        exaltation: Some(S::Cancer),
        detriment: &[S::Gemini, S::Virgo],
        fall: Some(S::Capricorn),
        retrograde: retro(398.88, 0.30),
    },
    BodyProfile {
        body: Saturn,
        name: "saturn",
        orbital_period_days: 10759.22,
        reference_longitude: 50.08,
        rulership: &[S::Capricorn, S::Aquarius],
        exaltation: Some(S::Libra),
        detriment: &[S::Cancer, S::Leo],
        fall: Some(S::Aries),
        retrograde: retro(378.09, 0.36),
    },
    BodyProfile {
        body: Uranus,
        name: "uranus",
        orbital_period_days: 30688.5,
        reference_longitude: 314.06,
        rulership: &[S::Aquarius],
        exaltation: Some(S::Scorpio),
        detriment: &[S::Leo],
        fall: Some(S::Taurus),
        retrograde: retro(369.66, 0.41),
    },
    BodyProfile {
        body: Neptune,
        name: "neptune",
        orbital_period_days: 60182.0,
        reference_longitude: 304.35,
        rulership: &[S::Pisces],
        exaltation: Some(S::Leo),
        detriment: &[S::Virgo],
        fall: Some(S::Aquarius),
        retrograde: retro(367.49, 0.43),
    },
    BodyProfile {
        body: Pluto,
        name: "pluto",
        orbital_period_days: 90560.0,
        reference_longitude: 238.93,
        rulership: &[S::Scorpio],
        exaltation: Some(S::Aries),
        detriment: &[S::Taurus],
        fall: Some(S::Libra),
        retrograde: retro(366.73, 0.44),
    },
];

lazy_static::lazy_static! {
    static ref BODY_BY_NAME: HashMap<&'static str, CelestialBody> =
        BODY_PROFILES.iter().map(|p| (p.name, p.body)).collect();
}
