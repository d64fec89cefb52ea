use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::aircraft::Aircraft;
use crate::csv_record::split_fields;
use crate::datetime;
use crate::validators::{self, RowError};

/// Columns in `flights.csv`: id, sched_dep, actual_dep, sched_arr,
/// actual_arr, gate, status, origin, destination, aircraft_id, airline,
/// tracking_url. Gate and tracking url are not kept.
pub const FLIGHT_ARITY: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlightStatus {
    OnTime,
    Delayed,
    Cancelled,
}

impl FromStr for FlightStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "On Time" => Ok(FlightStatus::OnTime),
            "Delayed" => Ok(FlightStatus::Delayed),
            "Cancelled" => Ok(FlightStatus::Cancelled),
            _ => Err(()),
        }
    }
}

impl fmt::Display for FlightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FlightStatus::OnTime => "On Time",
            FlightStatus::Delayed => "Delayed",
            FlightStatus::Cancelled => "Cancelled",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flight {
    pub id: String,
    pub scheduled_departure: i64,
    /// Absent (`N/A` in the file) for cancelled flights.
    pub actual_departure: Option<i64>,
    pub scheduled_arrival: i64,
    pub actual_arrival: Option<i64>,
    pub status: FlightStatus,
    pub origin: String,
    pub destination: String,
    pub aircraft_id: String,
    pub airline: String,
}

impl Flight {
    /// Parse one data row of `flights.csv`.
    ///
    /// `aircraft` is the already-loaded aircraft table; a flight referencing
    /// an unknown aircraft is rejected.
    pub fn from_csv_line(
        line: &str,
        aircraft: &HashMap<String, Aircraft>,
    ) -> Result<Self, RowError> {
        let fields = split_fields(line, FLIGHT_ARITY).map_err(|_| RowError::Arity)?;

        if !validators::is_flight_id(fields[0]) {
            return Err(RowError::Invalid("flight id"));
        }

        // Scheduled times are mandatory; actual times may carry the N/A sentinel.
        let scheduled_departure = match datetime::parse_datetime(fields[1]) {
            Ok(Some(t)) => t,
            _ => return Err(RowError::Invalid("scheduled departure")),
        };
        let actual_departure = datetime::parse_datetime(fields[2])
            .map_err(|_| RowError::Invalid("actual departure"))?;
        let scheduled_arrival = match datetime::parse_datetime(fields[3]) {
            Ok(Some(t)) => t,
            _ => return Err(RowError::Invalid("scheduled arrival")),
        };
        let actual_arrival = datetime::parse_datetime(fields[4])
            .map_err(|_| RowError::Invalid("actual arrival"))?;

        let status: FlightStatus = fields[6].parse().map_err(|_| RowError::Invalid("status"))?;
        match status {
            FlightStatus::Delayed => {
                let (Some(dep), Some(arr)) = (actual_departure, actual_arrival) else {
                    return Err(RowError::Invalid("status consistency"));
                };
                if dep < scheduled_departure || arr < scheduled_arrival {
                    return Err(RowError::Invalid("status consistency"));
                }
            }
            FlightStatus::Cancelled => {
                if actual_departure.is_some() || actual_arrival.is_some() {
                    return Err(RowError::Invalid("status consistency"));
                }
            }
            FlightStatus::OnTime => {}
        }

        if scheduled_departure >= scheduled_arrival {
            return Err(RowError::Invalid("schedule order"));
        }
        if let Some(dep) = actual_departure {
            if dep < scheduled_departure {
                return Err(RowError::Invalid("time order"));
            }
        }
        if let Some(arr) = actual_arrival {
            if arr < scheduled_arrival {
                return Err(RowError::Invalid("time order"));
            }
        }
        if let (Some(dep), Some(arr)) = (actual_departure, actual_arrival) {
            if dep >= arr {
                return Err(RowError::Invalid("time order"));
            }
        }

        if !validators::is_airport_code(fields[7]) || !validators::is_airport_code(fields[8]) {
            return Err(RowError::Invalid("airport code"));
        }
        if fields[7] == fields[8] {
            return Err(RowError::Invalid("origin equals destination"));
        }

        if !validators::is_aircraft_id(fields[9]) {
            return Err(RowError::Invalid("aircraft id"));
        }
        if !aircraft.contains_key(fields[9]) {
            return Err(RowError::UnknownRef("aircraft"));
        }
        if fields[10].is_empty() {
            return Err(RowError::Invalid("airline"));
        }

        Ok(Flight {
            id: fields[0].to_string(),
            scheduled_departure,
            actual_departure,
            scheduled_arrival,
            actual_arrival,
            status,
            origin: fields[7].to_string(),
            destination: fields[8].to_string(),
            aircraft_id: fields[9].to_string(),
            airline: fields[10].to_string(),
        })
    }
}
