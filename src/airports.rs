use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::csv_record::split_fields;
use crate::validators::{self, RowError};

/// Columns in `airports.csv`: code, name, city, country, latitude, longitude,
/// icao, type. Coordinates are validated but not kept; icao is carried for
/// display only by external tooling and is not validated here.
pub const AIRPORT_ARITY: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AirportType {
    SmallAirport,
    MediumAirport,
    LargeAirport,
    Heliport,
    SeaplaneBase,
}

impl FromStr for AirportType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small_airport" => Ok(AirportType::SmallAirport),
            "medium_airport" => Ok(AirportType::MediumAirport),
            "large_airport" => Ok(AirportType::LargeAirport),
            "heliport" => Ok(AirportType::Heliport),
            "seaplane_base" => Ok(AirportType::SeaplaneBase),
            _ => Err(()),
        }
    }
}

impl fmt::Display for AirportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AirportType::SmallAirport => "small_airport",
            AirportType::MediumAirport => "medium_airport",
            AirportType::LargeAirport => "large_airport",
            AirportType::Heliport => "heliport",
            AirportType::SeaplaneBase => "seaplane_base",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    pub code: String,
    pub name: String,
    pub city: String,
    pub country: String,
    pub airport_type: AirportType,
}

impl Airport {
    /// Parse one data row of `airports.csv`.
    pub fn from_csv_line(line: &str) -> Result<Self, RowError> {
        let fields = split_fields(line, AIRPORT_ARITY).map_err(|_| RowError::Arity)?;

        if !validators::is_airport_code(fields[0]) {
            return Err(RowError::Invalid("airport code"));
        }
        if fields[1].is_empty() {
            return Err(RowError::Invalid("name"));
        }
        if fields[2].is_empty() {
            return Err(RowError::Invalid("city"));
        }
        if fields[3].is_empty() {
            return Err(RowError::Invalid("country"));
        }
        if !validators::is_coordinate_pair(fields[4], fields[5]) {
            return Err(RowError::Invalid("coordinates"));
        }
        let airport_type: AirportType =
            fields[7].parse().map_err(|_| RowError::Invalid("type"))?;

        Ok(Airport {
            code: fields[0].to_string(),
            name: fields[1].to_string(),
            city: fields[2].to_string(),
            country: fields[3].to_string(),
            airport_type,
        })
    }
}
