//! The natal chart value object.

pub mod balance;
pub mod dignities;

pub use balance::{compute_balance, ChartBalance};
pub use dignities::{DignityResult, DignityType};

use crate::aspects::ChartAspect;
use crate::ephemeris::types::{BodyPosition, GeoLocation, HouseCusp};
use crate::error::{NatalError, Result};
use crate::reference::{CelestialBody, House, ZodiacSign};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Unvalidated chart parts. Turned into a [`NatalChart`] with `TryFrom`,
/// which is also how charts deserialize.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NatalChartRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    pub birth_date: NaiveDate,
    #[serde(default)]
    pub birth_time: Option<NaiveTime>,
    #[serde(default)]
    pub birth_place: Option<GeoLocation>,
    pub sun_sign: ZodiacSign,
    pub moon_sign: ZodiacSign,
    pub ascendant: ZodiacSign,
    pub positions: Vec<BodyPosition>,
    pub houses: Vec<HouseCusp>,
    #[serde(default)]
    pub aspects: Vec<ChartAspect>,
    pub computed_at: NaiveDateTime,
}

/// A computed chart. Read-only after construction; holds exactly one
/// position per body in canonical order and twelve cusps numbered 1..=12
/// starting at the ascendant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "NatalChartRecord")]
pub struct NatalChart {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    birth_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    birth_time: Option<NaiveTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    birth_place: Option<GeoLocation>,
    sun_sign: ZodiacSign,
    moon_sign: ZodiacSign,
    ascendant: ZodiacSign,
    positions: Vec<BodyPosition>,
    houses: Vec<HouseCusp>,
    aspects: Vec<ChartAspect>,
    computed_at: NaiveDateTime,
}

fn validate(record: &NatalChartRecord) -> Result<()> {
    if record.positions.len() != CelestialBody::ALL.len() {
        return Err(NatalError::InvalidChart(format!(
            "expected {} body positions, got {}",
            CelestialBody::ALL.len(),
            record.positions.len()
        )));
    }
    for (position, expected) in record.positions.iter().zip(CelestialBody::ALL) {
        if position.body != expected {
            return Err(NatalError::InvalidChart(format!(
                "expected {} position, found {}",
                expected, position.body
            )));
        }
        if !(0.0..30.0).contains(&position.degree) {
            return Err(NatalError::InvalidChart(format!(
                "{} degree {} outside [0, 30)",
                position.body, position.degree
            )));
        }
    }

    if record.houses.len() != 12 {
        return Err(NatalError::InvalidChart(format!("expected 12 house cusps, got {}", record.houses.len())));
    }
    for (cusp, house) in record.houses.iter().zip(House::all()) {
        if cusp.house != house {
            return Err(NatalError::InvalidChart(format!(
                "expected cusp of house {}, found house {}",
                house, cusp.house
            )));
        }
    }
    if record.houses[0].sign != record.ascendant {
        return Err(NatalError::InvalidChart(format!(
            "first house is {} but ascendant is {}",
            record.houses[0].sign, record.ascendant
        )));
    }
    for cusp in &record.houses {
        let expected = ZodiacSign::from_index(record.ascendant.index() as i64 + cusp.house.number() as i64 - 1);
        if cusp.sign != expected {
            return Err(NatalError::InvalidChart(format!(
                "house {} cusp is {}, expected {}",
                cusp.house, cusp.sign, expected
            )));
        }
    }

    // equal houses: a body's house follows from its sign
    for position in &record.positions {
        let expected = House::from_sign_offset(position.sign.index(), record.ascendant.index());
        if position.house != expected {
            return Err(NatalError::InvalidChart(format!(
                "{} in {} belongs to house {}, found house {}",
                position.body, position.sign, expected, position.house
            )));
        }
    }

    let mut pairs = HashSet::new();
    for aspect in &record.aspects {
        if aspect.body_a == aspect.body_b {
            return Err(NatalError::InvalidChart(format!("{} aspects itself", aspect.body_a)));
        }
        let pair = (aspect.body_a.min(aspect.body_b), aspect.body_a.max(aspect.body_b));
        if !pairs.insert(pair) {
            return Err(NatalError::InvalidChart(format!(
                "more than one aspect between {} and {}",
                pair.0, pair.1
            )));
        }
    }
    Ok(())
}

impl TryFrom<NatalChartRecord> for NatalChart {
    type Error = NatalError;

    fn try_from(record: NatalChartRecord) -> Result<Self> {
        validate(&record)?;
        if let Some(place) = &record.birth_place {
            place.validate()?;
        }
        Ok(NatalChart {
            id: record.id,
            name: record.name,
            birth_date: record.birth_date,
            birth_time: record.birth_time,
            birth_place: record.birth_place,
            sun_sign: record.sun_sign,
            moon_sign: record.moon_sign,
            ascendant: record.ascendant,
            positions: record.positions,
            houses: record.houses,
            aspects: record.aspects,
            computed_at: record.computed_at,
        })
    }
}

impl NatalChart {
    /// Validate `record` and build the chart from it.
    pub fn new(record: NatalChartRecord) -> Result<Self> {
        Self::try_from(record)
    }

    /// Host-assigned identity; the engine never sets one.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    /// `None` when the birth time was unknown.
    pub fn birth_time(&self) -> Option<NaiveTime> {
        self.birth_time
    }

    pub fn birth_place(&self) -> Option<&GeoLocation> {
        self.birth_place.as_ref()
    }

    pub fn sun_sign(&self) -> ZodiacSign {
        self.sun_sign
    }

    pub fn moon_sign(&self) -> ZodiacSign {
        self.moon_sign
    }

    /// Rising sign; computed charts use the sun sign when the birth time is unknown.
    pub fn ascendant(&self) -> ZodiacSign {
        self.ascendant
    }

    pub fn positions(&self) -> &[BodyPosition] {
        &self.positions
    }

    /// Position of a single body.
    pub fn position(&self, body: CelestialBody) -> &BodyPosition {
        // validated: positions are in canonical body order
        &self.positions[body.index()]
    }

    /// All twelve cusps, house 1 first.
    pub fn houses(&self) -> &[HouseCusp] {
        &self.houses
    }

    /// Cusp of house `house` (1..=12).
    pub fn cusp(&self, house: u8) -> Result<&HouseCusp> {
        let house = House::new(house)?;
        Ok(&self.houses[house.number() as usize - 1])
    }

    /// Bodies placed in the given house, in canonical order.
    pub fn bodies_in_house(&self, house: u8) -> Result<Vec<CelestialBody>> {
        let house = House::new(house)?;
        Ok(self
            .positions
            .iter()
            .filter(|p| p.house == house)
            .map(|p| p.body)
            .collect())
    }

    /// Detected aspects, in body-pair order.
    pub fn aspects(&self) -> &[ChartAspect] {
        &self.aspects
    }

    /// The birth instant the positions were computed for.
    pub fn computed_at(&self) -> NaiveDateTime {
        self.computed_at
    }

    /// Element and modality counts over all positions.
    pub fn balance(&self) -> ChartBalance {
        compute_balance(&self.positions)
    }

    /// Essential dignities held by bodies in this chart.
    pub fn dignities(&self) -> Vec<DignityResult> {
        self.positions.iter().flat_map(dignities::assess).collect()
    }
}
