//! House numbers and their life domains.

use crate::error::{NatalError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A house number in `1..=12`. Construction rejects anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct House(u8);

const HOUSE_MEANINGS: [&str; 12] = [
    "self and appearance",
    "money and possessions",
    "communication and siblings",
    "home and family",
    "creativity and romance",
    "work and health",
    "partnerships",
    "transformation and shared resources",
    "travel and philosophy",
    "career and reputation",
    "friendships and hopes",
    "the subconscious and solitude",
];

impl House {
    pub fn new(number: u8) -> Result<Self> {
        if (1..=12).contains(&number) {
            Ok(House(number))
        } else {
            Err(NatalError::InvalidHouse(number))
        }
    }

    /// Equal-house placement: the house a sign falls in when the ascendant
    /// occupies `ascendant_index`.
    pub fn from_sign_offset(sign_index: usize, ascendant_index: usize) -> Self {
        House(((sign_index + 12 - ascendant_index % 12) % 12) as u8 + 1)
    }

    pub fn all() -> impl Iterator<Item = House> {
        (1..=12).map(House)
    }

    pub fn number(self) -> u8 {
        self.0
    }

    pub fn meaning(self) -> &'static str {
        HOUSE_MEANINGS[self.0 as usize - 1]
    }
}

impl TryFrom<u8> for House {
    type Error = NatalError;

    fn try_from(number: u8) -> Result<Self> {
        House::new(number)
    }
}

impl From<House> for u8 {
    fn from(house: House) -> u8 {
        house.0
    }
}

impl fmt::Display for House {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Life domain of house `number`.
pub fn house_meaning(number: u8) -> Result<&'static str> {
    House::new(number).map(House::meaning)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_out_of_range() {
        assert_eq!(House::new(0), Err(NatalError::InvalidHouse(0)));
        assert_eq!(House::new(13), Err(NatalError::InvalidHouse(13)));
        assert!(house_meaning(12).is_ok());
    }

    #[test]
    fn test_from_sign_offset() {
        assert_eq!(House::from_sign_offset(3, 3).number(), 1);
        assert_eq!(House::from_sign_offset(2, 3).number(), 12);
        assert_eq!(House::from_sign_offset(0, 11).number(), 2);
    }

    #[test]
    fn test_all_is_ascending() {
        let numbers: Vec<u8> = House::all().map(House::number).collect();
        assert_eq!(numbers, (1..=12).collect::<Vec<u8>>());
    }
}
