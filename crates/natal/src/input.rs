//! Host-boundary parsing of birth inputs.
//!
//! The engine itself only takes typed `chrono` values; these helpers turn the
//! wire strings (`YYYY-MM-DD`, `HH:mm`) into them or reject them.

use crate::error::{NatalError, Result};
use crate::ephemeris::types::{BirthData, GeoLocation};
use chrono::{NaiveDate, NaiveTime};
use regex::Regex;

lazy_static::lazy_static! {
    static ref TIME_PATTERN: Regex = Regex::new(r"^([01]?[0-9]|2[0-3]):([0-5][0-9])$").expect("time pattern compiles");
}

/// Strict `YYYY-MM-DD`. Surrounding whitespace is rejected, not stripped.
pub fn parse_birth_date(input: &str) -> Result<NaiveDate> {
    let invalid = || NatalError::InvalidDate(input.to_string());
    if input.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| invalid())
}

/// 24-hour `HH:mm`; the hour may be a single digit. The whole input must match.
pub fn parse_birth_time(input: &str) -> Result<NaiveTime> {
    let caps = TIME_PATTERN
        .captures(input)
        .ok_or_else(|| NatalError::InvalidTime(input.to_string()))?;
    let hour: u32 = caps[1].parse().map_err(|_| NatalError::InvalidTime(input.to_string()))?;
    let minute: u32 = caps[2].parse().map_err(|_| NatalError::InvalidTime(input.to_string()))?;
    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| NatalError::InvalidTime(input.to_string()))
}

/// Assemble validated birth data from wire strings.
pub fn parse_birth_data(
    date: &str,
    time: Option<&str>,
    place: Option<(f64, f64)>,
    name: Option<&str>,
) -> Result<BirthData> {
    let mut data = BirthData::new(parse_birth_date(date)?);
    if let Some(time) = time {
        data = data.with_time(parse_birth_time(time)?);
    }
    if let Some((lat, lon)) = place {
        let place = GeoLocation::new(lat, lon);
        place.validate()?;
        data = data.with_place(place);
    }
    if let Some(name) = name {
        data = data.with_name(name);
    }
    Ok(data)
}
