//! Post-load aggregation of passenger traffic per airport.

use std::collections::HashMap;

use serde::Serialize;

use crate::flights::{Flight, FlightStatus};
use crate::reservations::Reservation;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AirportTraffic {
    pub arrivals: u64,
    pub departures: u64,
}

/// Count arrivals and departures per airport across all reservations.
///
/// Each (reservation, flight) pair counts once: a reservation is a single
/// booking, not a seat block. If the dataset ever grows multi-passenger
/// reservations, this is the place to expand the weight.
pub fn airport_traffic(
    reservations: &HashMap<String, Reservation>,
    flights: &HashMap<String, Flight>,
) -> HashMap<String, AirportTraffic> {
    let mut traffic: HashMap<String, AirportTraffic> = HashMap::new();

    for reservation in reservations.values() {
        for flight_id in &reservation.flight_ids {
            let Some(flight) = flights.get(flight_id) else {
                continue;
            };
            if flight.status == FlightStatus::Cancelled {
                continue;
            }
            traffic
                .entry(flight.origin.clone())
                .or_default()
                .departures += 1;
            traffic
                .entry(flight.destination.clone())
                .or_default()
                .arrivals += 1;
        }
    }

    traffic
}
