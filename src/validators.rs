//! Stateless field validators shared by the entity parsers.
//!
//! Shapes are the dataset's own, not general-purpose forms: the email
//! validator in particular is deliberately stricter than RFC addresses.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::datetime::REFERENCE_YEAR;

/// Why a row was rejected during ingest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RowError {
    #[error("wrong number of fields")]
    Arity,
    #[error("invalid {0}")]
    Invalid(&'static str),
    #[error("unknown {0}")]
    UnknownRef(&'static str),
    #[error("flight legs are not connected")]
    Disconnected,
    #[error("duplicate key")]
    Duplicate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowErrorKind {
    Parse,
    Validation,
    ReferentialIntegrity,
}

impl RowError {
    pub fn kind(&self) -> RowErrorKind {
        match self {
            RowError::Arity => RowErrorKind::Parse,
            RowError::Invalid(_) | RowError::Duplicate => RowErrorKind::Validation,
            RowError::UnknownRef(_) | RowError::Disconnected => {
                RowErrorKind::ReferentialIntegrity
            }
        }
    }
}

static AIRCRAFT_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z0-9]{2}-[A-Z0-9]{5}$").unwrap());
static FLIGHT_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z]{2}[0-9]{5}$").unwrap());
static RESERVATION_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"^R[0-9]{9}$").unwrap());
static DOCUMENT_NO: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{9}$").unwrap());
static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9](\.?[a-z0-9])*@[a-z]+\.[a-z]{2,3}$").unwrap());
static LATITUDE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?[0-9]{1,2}\.[0-9]{1,8}$").unwrap());
static LONGITUDE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?[0-9]{1,3}\.[0-9]{1,8}$").unwrap());
static YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{4}$").unwrap());
static UNSIGNED_INT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());
static PRICE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+(\.[0-9]+)?$").unwrap());

pub fn is_aircraft_id(s: &str) -> bool {
    AIRCRAFT_ID.is_match(s)
}

pub fn is_flight_id(s: &str) -> bool {
    FLIGHT_ID.is_match(s)
}

pub fn is_reservation_id(s: &str) -> bool {
    RESERVATION_ID.is_match(s)
}

pub fn is_airport_code(s: &str) -> bool {
    s.len() == 3 && s.bytes().all(|b| b.is_ascii_uppercase())
}

pub fn is_email(s: &str) -> bool {
    EMAIL.is_match(s)
}

/// Latitude/longitude pair: fixed decimal shape, then numeric bounds.
pub fn is_coordinate_pair(latitude: &str, longitude: &str) -> bool {
    if !LATITUDE.is_match(latitude) || !LONGITUDE.is_match(longitude) {
        return false;
    }
    let (Ok(lat), Ok(lon)) = (latitude.parse::<f64>(), longitude.parse::<f64>()) else {
        return false;
    };
    (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon)
}

/// Nine-digit passenger document number.
pub fn parse_document_no(s: &str) -> Option<u32> {
    if !DOCUMENT_NO.is_match(s) {
        return None;
    }
    s.parse().ok()
}

/// Four-digit Gregorian year, not after the reference date's year.
pub fn parse_year(s: &str) -> Option<u16> {
    if !YEAR.is_match(s) {
        return None;
    }
    let year: u16 = s.parse().ok()?;
    if year == 0 || year > REFERENCE_YEAR {
        return None;
    }
    Some(year)
}

/// Unsigned decimal integer, strictly positive.
pub fn parse_positive_int(s: &str) -> Option<u32> {
    if !UNSIGNED_INT.is_match(s) {
        return None;
    }
    match s.parse::<u32>() {
        Ok(0) | Err(_) => None,
        Ok(n) => Some(n),
    }
}

/// Non-negative decimal price.
pub fn parse_price(s: &str) -> Option<f64> {
    if !PRICE.is_match(s) {
        return None;
    }
    s.parse().ok()
}
