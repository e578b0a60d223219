//! Errors raised by the natal engine.
//!
//! The domain is closed (12 signs, 10 bodies, 12 houses), so the taxonomy is
//! narrow: anything outside those sets is rejected rather than clamped.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, NatalError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NatalError {
    #[error("Invalid house number: {0}. Houses are numbered 1 to 12")]
    InvalidHouse(u8),
    #[error("Unknown zodiac sign: {0}")]
    UnknownSign(String),
    #[error("Unknown celestial body: {0}")]
    UnknownBody(String),
    #[error("Invalid birth time '{0}': expected HH:mm (24-hour)")]
    InvalidTime(String),
    #[error("Invalid birth date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("Invalid birth place: {0}")]
    InvalidPlace(String),
    #[error("Invalid chart: {0}")]
    InvalidChart(String),
}
