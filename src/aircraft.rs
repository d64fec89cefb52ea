use serde::{Deserialize, Serialize};

use crate::csv_record::split_fields;
use crate::validators::{self, RowError};

/// Columns in `aircrafts.csv`: id, manufacturer, model, year, capacity, range.
pub const AIRCRAFT_ARITY: usize = 6;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aircraft {
    pub id: String,
    pub manufacturer: String,
    pub model: String,
    pub year: u16,
    pub capacity: u32,
    pub range_km: u32,
}

impl Aircraft {
    /// Parse one data row of `aircrafts.csv`.
    pub fn from_csv_line(line: &str) -> Result<Self, RowError> {
        let fields = split_fields(line, AIRCRAFT_ARITY).map_err(|_| RowError::Arity)?;

        if !validators::is_aircraft_id(fields[0]) {
            return Err(RowError::Invalid("aircraft id"));
        }
        if fields[1].is_empty() {
            return Err(RowError::Invalid("manufacturer"));
        }
        if fields[2].is_empty() {
            return Err(RowError::Invalid("model"));
        }
        let year = validators::parse_year(fields[3]).ok_or(RowError::Invalid("year"))?;
        let capacity =
            validators::parse_positive_int(fields[4]).ok_or(RowError::Invalid("capacity"))?;
        let range_km =
            validators::parse_positive_int(fields[5]).ok_or(RowError::Invalid("range"))?;

        Ok(Aircraft {
            id: fields[0].to_string(),
            manufacturer: fields[1].to_string(),
            model: fields[2].to_string(),
            year,
            capacity,
            range_km,
        })
    }
}
