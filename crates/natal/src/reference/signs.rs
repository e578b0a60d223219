//! The twelve zodiac signs and their fixed attributes.

use crate::error::NatalError;
use crate::reference::bodies::CelestialBody;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    /// Canonical enumeration order, also the tie-break order for balance.
    pub const ALL: [Element; 4] = [Element::Fire, Element::Earth, Element::Air, Element::Water];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Earth and water.
    pub fn is_receptive(self) -> bool {
        matches!(self, Element::Earth | Element::Water)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Element::Fire => "fire",
            Element::Earth => "earth",
            Element::Air => "air",
            Element::Water => "water",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modality {
    Cardinal,
    Fixed,
    Mutable,
}

impl Modality {
    pub const ALL: [Modality; 3] = [Modality::Cardinal, Modality::Fixed, Modality::Mutable];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Modality::Cardinal => "cardinal",
            Modality::Fixed => "fixed",
            Modality::Mutable => "mutable",
        }
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZodiacSign {
    Aries = 0,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    /// Zero-based position on the zodiac wheel (Aries = 0).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Sign at `index` on the wheel; any integer is reduced modulo 12.
    pub fn from_index(index: i64) -> ZodiacSign {
        Self::ALL[index.rem_euclid(12) as usize]
    }

    pub fn from_longitude(longitude: f64) -> ZodiacSign {
        let normalized = longitude.rem_euclid(360.0);
        Self::from_index((normalized / 30.0).floor() as i64)
    }

    pub fn profile(self) -> &'static SignProfile {
        &SIGN_PROFILES[self.index()]
    }

    pub fn element(self) -> Element {
        self.profile().element
    }

    pub fn modality(self) -> Modality {
        self.profile().modality
    }

    pub fn ruler(self) -> CelestialBody {
        self.profile().ruler
    }

    /// Whether `other` appears in this sign's natural-compatibility list.
    pub fn is_naturally_compatible_with(self, other: ZodiacSign) -> bool {
        self.profile().compatible.contains(&other)
    }

    /// Steps around the wheel between two signs, folded to 0..=6.
    pub fn distance(self, other: ZodiacSign) -> usize {
        let d = (self.index() as i64 - other.index() as i64).unsigned_abs() as usize;
        d.min(12 - d)
    }

    pub fn opposite(self) -> ZodiacSign {
        Self::from_index(self.index() as i64 + 6)
    }

    pub fn as_str(&self) -> &'static str {
        self.profile().name
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ZodiacSign {
    type Err = NatalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        SIGN_BY_NAME
            .get(key.as_str())
            .copied()
            .ok_or_else(|| NatalError::UnknownSign(s.to_string()))
    }
}

/// Inclusive calendar range (month/day) covered by a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start_month: u32,
    pub start_day: u32,
    pub end_month: u32,
    pub end_day: u32,
}

impl DateRange {
    pub fn wraps_year(&self) -> bool {
        self.start_month > self.end_month
    }

    pub fn contains(&self, month: u32, day: u32) -> bool {
        let in_start = month == self.start_month && day >= self.start_day;
        let in_end = month == self.end_month && day <= self.end_day;
        if self.wraps_year() {
            return in_start || in_end;
        }
        in_start || in_end || (month > self.start_month && month < self.end_month)
    }
}

#[derive(Debug)]
pub struct SignProfile {
    pub sign: ZodiacSign,
    pub name: &'static str,
    pub element: Element,
    pub modality: Modality,
    pub ruler: CelestialBody,
    pub range: DateRange,
    pub compatible: &'static [ZodiacSign],
    pub traits: &'static [&'static str],
    pub weaknesses: &'static [&'static str],
}

const fn range(start_month: u32, start_day: u32, end_month: u32, end_day: u32) -> DateRange {
    DateRange { start_month, start_day, end_month, end_day }
}

use CelestialBody as B;
use ZodiacSign::*;

pub static SIGN_PROFILES: [SignProfile; 12] = [
    SignProfile {
        sign: Aries,
        name: "aries",
        element: Element::Fire,
        modality: Modality::Cardinal,
        ruler: B::Mars,
        range: range(3, 21, 4, 19),
        compatible: &[Leo, Sagittarius, Gemini, Aquarius],
        traits: &["courageous", "energetic", "passionate", "confident", "independent"],
        weaknesses: &["impatient", "impulsive", "aggressive"],
    },
    SignProfile {
        sign: Taurus,
        name: "taurus",
        element: Element::Earth,
        modality: Modality::Fixed,
        ruler: B::Venus,
        range: range(4, 20, 5, 20),
        compatible: &[Virgo, Capricorn, Cancer, Pisces],
        traits: &["reliable", "patient", "practical", "devoted", "sensual"],
        weaknesses: &["stubborn", "possessive", "uncompromising"],
    },
    SignProfile {
        sign: Gemini,
        name: "gemini",
        element: Element::Air,
        modality: Modality::Mutable,
        ruler: B::Mercury,
        range: range(5, 21, 6, 20),
        compatible: &[Libra, Aquarius, Aries, Leo],
        traits: &["curious", "adaptable", "communicative", "witty", "sociable"],
        weaknesses: &["inconsistent", "indecisive", "nervous"],
    },
    SignProfile {
        sign: Cancer,
        name: "cancer",
        element: Element::Water,
        modality: Modality::Cardinal,
        ruler: B::Moon,
        range: range(6, 21, 7, 22),
        compatible: &[Scorpio, Pisces, Taurus, Virgo],
        traits: &["nurturing", "loyal", "intuitive", "emotional", "protective"],
        weaknesses: &["moody", "insecure", "clingy"],
    },
    SignProfile {
        sign: Leo,
        name: "leo",
        element: Element::Fire,
        modality: Modality::Fixed,
        ruler: B::Sun,
        range: range(7, 23, 8, 22),
        compatible: &[Aries, Sagittarius, Gemini, Libra],
        traits: &["confident", "generous", "passionate", "creative", "loyal"],
        weaknesses: &["arrogant", "stubborn", "dramatic"],
    },
    SignProfile {
        sign: Virgo,
        name: "virgo",
        element: Element::Earth,
        modality: Modality::Mutable,
        ruler: B::Mercury,
        range: range(8, 23, 9, 22),
        compatible: &[Taurus, Capricorn, Cancer, Scorpio],
        traits: &["analytical", "practical", "loyal", "diligent", "modest"],
        weaknesses: &["critical", "worrying", "perfectionist"],
    },
    SignProfile {
        sign: Libra,
        name: "libra",
        element: Element::Air,
        modality: Modality::Cardinal,
        ruler: B::Venus,
        range: range(9, 23, 10, 22),
        compatible: &[Gemini, Aquarius, Leo, Sagittarius],
        traits: &["diplomatic", "harmonious", "sociable", "fair", "romantic"],
        weaknesses: &["indecisive", "avoidant", "self-pitying"],
    },
    SignProfile {
        sign: Scorpio,
        name: "scorpio",
        element: Element::Water,
        modality: Modality::Fixed,
        ruler: B::Pluto,
        range: range(10, 23, 11, 21),
        compatible: &[Cancer, Pisces, Virgo, Capricorn],
        traits: &["passionate", "determined", "intuitive", "loyal", "resourceful"],
        weaknesses: &["jealous", "secretive", "possessive"],
    },
    SignProfile {
        sign: Sagittarius,
        name: "sagittarius",
        element: Element::Fire,
        modality: Modality::Mutable,
        ruler: B::Jupiter,
        range: range(11, 22, 12, 21),
        compatible: &[Aries, Leo, Libra, Aquarius],
        traits: &["adventurous", "optimistic", "independent", "honest", "curious"],
        weaknesses: &["impatient", "tactless", "restless"],
    },
    SignProfile {
        sign: Capricorn,
        name: "capricorn",
        element: Element::Earth,
        modality: Modality::Cardinal,
        ruler: B::Saturn,
        range: range(12, 22, 1, 19),
        compatible: &[Taurus, Virgo, Scorpio, Pisces],
        traits: &["disciplined", "responsible", "ambitious", "practical", "patient"],
        weaknesses: &["pessimistic", "rigid", "unforgiving"],
    },
    SignProfile {
        sign: Aquarius,
        name: "aquarius",
        element: Element::Air,
        modality: Modality::Fixed,
        ruler: B::Uranus,
        range: range(1, 20, 2, 18),
        compatible: &[Gemini, Libra, Aries, Sagittarius],
        traits: &["independent", "innovative", "humanitarian", "curious", "original"],
        weaknesses: &["detached", "aloof", "unpredictable"],
    },
    SignProfile {
        sign: Pisces,
        name: "pisces",
        element: Element::Water,
        modality: Modality::Mutable,
        ruler: B::Neptune,
        range: range(2, 19, 3, 20),
        compatible: &[Cancer, Scorpio, Taurus, Capricorn],
        traits: &["compassionate", "intuitive", "artistic", "gentle", "romantic"],
        weaknesses: &["escapist", "oversensitive", "indecisive"],
    },
];

lazy_static::lazy_static! {
    static ref SIGN_BY_NAME: HashMap<&'static str, ZodiacSign> =
        SIGN_PROFILES.iter().map(|p| (p.name, p.sign)).collect();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiles_are_indexed_by_sign() {
        for (i, profile) in SIGN_PROFILES.iter().enumerate() {
            assert_eq!(profile.sign.index(), i);
        }
    }

    #[test]
    fn test_three_signs_per_element_four_per_modality() {
        for element in Element::ALL {
            assert_eq!(SIGN_PROFILES.iter().filter(|p| p.element == element).count(), 3);
        }
        for modality in Modality::ALL {
            assert_eq!(SIGN_PROFILES.iter().filter(|p| p.modality == modality).count(), 4);
        }
    }

    #[test]
    fn test_only_capricorn_wraps_the_year() {
        let wrapping: Vec<_> = SIGN_PROFILES
            .iter()
            .filter(|p| p.range.wraps_year())
            .map(|p| p.sign)
            .collect();
        assert_eq!(wrapping, vec![Capricorn]);
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!("Taurus".parse::<ZodiacSign>().unwrap(), Taurus);
        assert_eq!(" LEO ".parse::<ZodiacSign>().unwrap(), Leo);
        assert!(matches!("ophiuchus".parse::<ZodiacSign>(), Err(NatalError::UnknownSign(_))));
    }

    #[test]
    fn test_distance_folds_around_the_wheel() {
        assert_eq!(Aries.distance(Pisces), 1);
        assert_eq!(Aries.distance(Libra), 6);
        assert_eq!(Capricorn.distance(Taurus), 4);
        assert_eq!(Aries.opposite(), Libra);
    }
}
