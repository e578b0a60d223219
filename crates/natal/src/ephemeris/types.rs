use crate::error::{NatalError, Result};
use crate::reference::{CelestialBody, House, ZodiacSign};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Geographic location of a birth. Carried on the chart, not yet used in
/// the angular computation (no latitude/longitude correction).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub lat: f64,
    pub lon: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl GeoLocation {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon, name: None }
    }

    pub fn named(lat: f64, lon: f64, name: impl Into<String>) -> Self {
        Self { lat, lon, name: Some(name.into()) }
    }

    pub fn validate(&self) -> Result<()> {
        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(NatalError::InvalidPlace(format!("latitude {} outside [-90, 90]", self.lat)));
        }
        if !(-180.0..=180.0).contains(&self.lon) {
            return Err(NatalError::InvalidPlace(format!("longitude {} outside [-180, 180]", self.lon)));
        }
        Ok(())
    }
}

/// Input for a chart: a calendar date plus optional clock time and place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthData {
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<NaiveTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place: Option<GeoLocation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl BirthData {
    pub fn new(date: NaiveDate) -> Self {
        Self { date, time: None, place: None, name: None }
    }

    pub fn with_time(mut self, time: NaiveTime) -> Self {
        self.time = Some(time);
        self
    }

    pub fn with_place(mut self, place: GeoLocation) -> Self {
        self.place = Some(place);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Position of one body in a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyPosition {
    pub body: CelestialBody,
    pub sign: ZodiacSign,
    /// Degree within the sign, `0 <= x < 30`
    pub degree: f64,
    pub minute: u8,
    pub house: House,
    pub retrograde: bool,
}

impl BodyPosition {
    /// Absolute ecliptic longitude, `sign * 30 + degree`.
    pub fn longitude(&self) -> f64 {
        self.sign.index() as f64 * 30.0 + self.degree
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseCusp {
    pub house: House,
    pub sign: ZodiacSign,
    pub degree: f64,
}

/// The rising sign and its degree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ascendant {
    pub sign: ZodiacSign,
    pub degree: f64,
}
