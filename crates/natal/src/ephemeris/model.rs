//! Mean-motion position model.
//!
//! Not an ephemeris. Sun sign comes from fixed calendar ranges, moon and
//! ascendant from day-of-year arithmetic, and body longitudes from a linear
//! mean motion since J2000. The arithmetic is kept exactly as documented so
//! results stay stable across releases; it is deterministic, not accurate.

use crate::ephemeris::types::{Ascendant, BodyPosition, GeoLocation, HouseCusp};
use crate::reference::{CelestialBody, House, ZodiacSign};
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// J2000 (2000-01-01T12:00:00) as a unix timestamp.
const EPOCH_UNIX_SECONDS: i64 = 946_728_000;
const SECONDS_PER_DAY: f64 = 86_400.0;
const MAX_IN_SIGN_DEGREE: f64 = 30.0 - 1e-9;

pub const LUNAR_CYCLE_DAYS: f64 = 27.3;
pub const AVERAGE_DAYS_PER_SIGN: f64 = 30.44;
/// Baseline sunrise used by the ascendant approximation.
pub const SUNRISE_HOUR: f64 = 6.0;
pub const HOURS_PER_RISING_SIGN: f64 = 2.0;

/// Sun sign for a calendar day.
///
/// The twelve ranges partition the year; Capricorn is the one range that
/// wraps December into January.
pub fn sun_sign(month: u32, day: u32) -> ZodiacSign {
    ZodiacSign::ALL
        .iter()
        .copied()
        .find(|sign| sign.profile().range.contains(month, day))
        // Unreachable for real calendar days.
        .unwrap_or(ZodiacSign::Capricorn)
}

fn decimal_hours(time: NaiveTime) -> f64 {
    time.hour() as f64 + time.minute() as f64 / 60.0
}

#[derive(Debug, Clone)]
pub struct MeanMotionModel {
    default_time: NaiveTime,
}

impl Default for MeanMotionModel {
    fn default() -> Self {
        Self { default_time: NaiveTime::MIN + chrono::Duration::hours(12) }
    }
}

impl MeanMotionModel {
    /// `default_time` is used for body longitudes when the birth time is
    /// unknown.
    pub fn new(default_time: NaiveTime) -> Self {
        Self { default_time }
    }

    pub fn default_time(&self) -> NaiveTime {
        self.default_time
    }

    pub fn birth_instant(&self, date: NaiveDate, time: Option<NaiveTime>) -> NaiveDateTime {
        date.and_time(time.unwrap_or(self.default_time))
    }

    pub fn sun_sign(&self, date: NaiveDate) -> ZodiacSign {
        sun_sign(date.month(), date.day())
    }

    /// Moon sign approximation: day-of-year folded into a 27.3 day cycle,
    /// nudged by time of day and by `year mod 12`.
    pub fn moon_sign(&self, date: NaiveDate, time: Option<NaiveTime>) -> ZodiacSign {
        let day_of_year = date.ordinal() as f64;
        let days_per_sign = LUNAR_CYCLE_DAYS / 12.0;

        let mut position = (day_of_year % LUNAR_CYCLE_DAYS) / days_per_sign;
        if let Some(time) = time {
            position += (decimal_hours(time) / 24.0) / days_per_sign;
        }
        position += date.year().rem_euclid(12) as f64;

        ZodiacSign::from_index(position.floor() as i64)
    }

    /// Rising sign. Without a birth time this falls back to the sun sign.
    /// `place` is accepted but does not enter the computation.
    pub fn ascendant(
        &self,
        date: NaiveDate,
        time: Option<NaiveTime>,
        place: Option<&GeoLocation>,
    ) -> Ascendant {
        let sun = self.sun_sign(date);
        let Some(time) = time else {
            return Ascendant { sign: sun, degree: 0.0 };
        };
        if let Some(place) = place {
            log::trace!("ascendant ignores place ({}, {})", place.lat, place.lon);
        }

        let hours_from_sunrise = decimal_hours(time) - SUNRISE_HOUR;
        let rising = hours_from_sunrise / HOURS_PER_RISING_SIGN;
        let signs_risen = rising.floor();
        let seasonal = (date.ordinal() as f64 / AVERAGE_DAYS_PER_SIGN).floor();

        let index = sun.index() as i64 + signs_risen as i64 + seasonal as i64;
        Ascendant {
            sign: ZodiacSign::from_index(index),
            degree: (rising - signs_risen) * 30.0,
        }
    }

    /// Fractional days between `instant` and J2000 (negative before it).
    pub fn days_since_epoch(instant: NaiveDateTime) -> f64 {
        (instant.and_utc().timestamp() - EPOCH_UNIX_SECONDS) as f64 / SECONDS_PER_DAY
    }

    pub fn body_longitude(body: CelestialBody, days_elapsed: f64) -> f64 {
        let profile = body.profile();
        let longitude = (profile.reference_longitude + body.mean_daily_motion() * days_elapsed).rem_euclid(360.0);
        // rem_euclid can round up to exactly 360.0 for tiny negative inputs
        if longitude >= 360.0 {
            0.0
        } else {
            longitude
        }
    }

    /// Stand-in for stationary-point detection: a fixed window per synodic
    /// cycle, centred half-way through it.
    pub fn is_retrograde(body: CelestialBody, days_elapsed: f64) -> bool {
        match body.profile().retrograde {
            Some(cycle) => {
                let phase = days_elapsed.rem_euclid(cycle.cycle_days) / cycle.cycle_days;
                (phase - 0.5).abs() < cycle.window / 2.0
            }
            None => false,
        }
    }

    /// Positions of all ten bodies, in canonical body order, with houses
    /// counted from the ascendant (equal houses).
    pub fn body_positions(&self, date: NaiveDate, time: Option<NaiveTime>) -> Vec<BodyPosition> {
        let ascendant = self.ascendant(date, time, None);
        self.body_positions_from(self.birth_instant(date, time), ascendant.sign)
    }

    pub(crate) fn body_positions_from(
        &self,
        instant: NaiveDateTime,
        ascendant: ZodiacSign,
    ) -> Vec<BodyPosition> {
        let days = Self::days_since_epoch(instant);
        CelestialBody::ALL
            .iter()
            .map(|&body| {
                let longitude = Self::body_longitude(body, days);
                let sign = ZodiacSign::from_longitude(longitude);
                // keep float noise at a sign boundary inside [0, 30)
                let degree = (longitude - sign.index() as f64 * 30.0).clamp(0.0, MAX_IN_SIGN_DEGREE);
                BodyPosition {
                    body,
                    sign,
                    degree,
                    minute: (degree.fract() * 60.0).floor() as u8,
                    house: House::from_sign_offset(sign.index(), ascendant.index()),
                    retrograde: Self::is_retrograde(body, days),
                }
            })
            .collect()
    }

    /// Twelve equal-house cusps starting at the ascendant's sign.
    pub fn house_cusps(ascendant: &Ascendant) -> Vec<HouseCusp> {
        House::all()
            .map(|house| HouseCusp {
                house,
                sign: ZodiacSign::from_index(ascendant.sign.index() as i64 + house.number() as i64 - 1),
                degree: ascendant.degree,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_sun_sign_examples() {
        assert_eq!(sun_sign(5, 15), ZodiacSign::Taurus);
        assert_eq!(sun_sign(1, 5), ZodiacSign::Capricorn);
        assert_eq!(sun_sign(12, 22), ZodiacSign::Capricorn);
        assert_eq!(sun_sign(12, 21), ZodiacSign::Sagittarius);
        assert_eq!(sun_sign(2, 29), ZodiacSign::Pisces);
    }

    #[test]
    fn test_days_since_epoch() {
        let epoch = date(2000, 1, 1).and_time(time(12, 0));
        assert_eq!(MeanMotionModel::days_since_epoch(epoch), 0.0);
        let next = date(2000, 1, 2).and_time(time(0, 0));
        assert_eq!(MeanMotionModel::days_since_epoch(next), 0.5);
    }

    #[test]
    fn test_body_longitude_at_epoch_is_reference() {
        for body in CelestialBody::ALL {
            let lon = MeanMotionModel::body_longitude(body, 0.0);
            assert!((lon - body.profile().reference_longitude).abs() < 1e-9);
        }
    }

    #[test]
    fn test_moon_sign_arithmetic() {
        // 2024-01-01: doy 1 -> 1 / 2.275 = 0.44; + 2024 mod 12 (8) -> 8.44 -> sagittarius
        let model = MeanMotionModel::default();
        assert_eq!(model.moon_sign(date(2024, 1, 1), None), ZodiacSign::Sagittarius);
        // 12:00 adds 0.5 / 2.275 = 0.22 -> still 8
        assert_eq!(model.moon_sign(date(2024, 1, 1), Some(time(12, 0))), ZodiacSign::Sagittarius);
    }

    #[test]
    fn test_ascendant_without_time_is_sun_sign() {
        let model = MeanMotionModel::default();
        let asc = model.ascendant(date(1990, 5, 15), None, None);
        assert_eq!(asc.sign, ZodiacSign::Taurus);
        assert_eq!(asc.degree, 0.0);
    }

    #[test]
    fn test_ascendant_with_time() {
        let model = MeanMotionModel::default();
        // taurus (1) + floor((9 - 6) / 2) = 1 + floor(135 / 30.44) = 4 -> 6 (libra)
        let asc = model.ascendant(date(1990, 5, 15), Some(time(9, 0)), None);
        assert_eq!(asc.sign, ZodiacSign::Libra);
        assert!((asc.degree - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_ascendant_before_sunrise_wraps() {
        let model = MeanMotionModel::default();
        // aries (0) + floor(-6 / 2) = -3 + floor(100 / 30.44) = 3 -> 0 (aries)
        let asc = model.ascendant(date(2023, 4, 10), Some(time(0, 0)), None);
        assert_eq!(asc.sign, ZodiacSign::Aries);
    }

    #[test]
    fn test_house_cusps_start_at_ascendant() {
        let asc = Ascendant { sign: ZodiacSign::Pisces, degree: 12.5 };
        let cusps = MeanMotionModel::house_cusps(&asc);
        assert_eq!(cusps.len(), 12);
        assert_eq!(cusps[0].sign, ZodiacSign::Pisces);
        assert_eq!(cusps[1].sign, ZodiacSign::Aries);
        assert!(cusps.iter().all(|c| c.degree == 12.5));
    }

    #[test]
    fn test_positions_in_range() {
        let model = MeanMotionModel::default();
        let positions = model.body_positions(date(1975, 8, 3), Some(time(17, 45)));
        assert_eq!(positions.len(), 10);
        for p in &positions {
            assert!((0.0..30.0).contains(&p.degree));
            assert!(p.minute < 60);
            assert!((1..=12).contains(&p.house.number()));
        }
    }

    #[test]
    fn test_retrograde_window() {
        let cycle = CelestialBody::Mercury.profile().retrograde.unwrap();
        assert!(!MeanMotionModel::is_retrograde(CelestialBody::Mercury, 0.0));
        assert!(MeanMotionModel::is_retrograde(CelestialBody::Mercury, cycle.cycle_days / 2.0));
        assert!(!MeanMotionModel::is_retrograde(CelestialBody::Sun, 182.0));
    }
}
