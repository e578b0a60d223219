//! Essential dignities: rulership, exaltation, detriment and fall.

use crate::ephemeris::types::BodyPosition;
use crate::reference::{CelestialBody, ZodiacSign};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DignityType {
    Rulership,
    Exaltation,
    Detriment,
    Fall,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DignityResult {
    pub body: CelestialBody,
    #[serde(rename = "type")]
    pub dignity_type: DignityType,
    pub sign: ZodiacSign,
}

/// Dignities a body holds in `sign`, from the body table.
pub fn dignities_in(body: CelestialBody, sign: ZodiacSign) -> Vec<DignityType> {
    let profile = body.profile();
    let mut result = Vec::new();
    if profile.rulership.contains(&sign) {
        result.push(DignityType::Rulership);
    } else if profile.detriment.contains(&sign) {
        result.push(DignityType::Detriment);
    }
    if profile.exaltation == Some(sign) {
        result.push(DignityType::Exaltation);
    } else if profile.fall == Some(sign) {
        result.push(DignityType::Fall);
    }
    result
}

pub fn assess(position: &BodyPosition) -> Vec<DignityResult> {
    dignities_in(position.body, position.sign)
        .into_iter()
        .map(|dignity_type| DignityResult {
            body: position.body,
            dignity_type,
            sign: position.sign,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sun_in_leo_rules() {
        assert_eq!(dignities_in(CelestialBody::Sun, ZodiacSign::Leo), vec![DignityType::Rulership]);
    }

    #[test]
    fn test_mercury_in_virgo_rules_and_is_exalted() {
        assert_eq!(
            dignities_in(CelestialBody::Mercury, ZodiacSign::Virgo),
            vec![DignityType::Rulership, DignityType::Exaltation]
        );
    }

    #[test]
    fn test_mercury_in_pisces_detriment_and_fall() {
        assert_eq!(
            dignities_in(CelestialBody::Mercury, ZodiacSign::Pisces),
            vec![DignityType::Detriment, DignityType::Fall]
        );
    }

    #[test]
    fn test_peregrine() {
        assert!(dignities_in(CelestialBody::Mars, ZodiacSign::Gemini).is_empty());
    }
}
