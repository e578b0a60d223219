use crate::error::{NatalError, Result};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Tunables for a [`NatalEngine`](crate::NatalEngine). Missing keys take the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Include quincunx in natal aspect detection.
    pub natal_quincunx: bool,

    // Fallback clock time for body longitudes when no birth time is known
    pub default_birth_hour: u32,
    pub default_birth_minute: u32,

    // Narrative caps
    pub max_strengths: usize,
    pub max_challenges: usize,

    /// How many celebrity matches to return.
    pub celebrity_matches: usize,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            natal_quincunx: false,
            default_birth_hour: 12,
            default_birth_minute: 0,
            max_strengths: 5,
            max_challenges: 4,
            celebrity_matches: 5,
        }
    }
}

impl EngineSettings {
    /// The fallback time as a `NaiveTime`, or `InvalidTime` when out of range.
    pub fn default_birth_time(&self) -> Result<NaiveTime> {
        NaiveTime::from_hms_opt(self.default_birth_hour, self.default_birth_minute, 0).ok_or_else(|| {
            NatalError::InvalidTime(format!("{:02}:{:02}", self.default_birth_hour, self.default_birth_minute))
        })
    }
}
