//! Owning container for the five entity tables and their derived state.
//!
//! A `Dataset` only ever exists fully loaded: the loader builds the tables,
//! then `assemble` computes the traffic summary and the sorted ancillary
//! lists in one shot. From that point the value is immutable — queries borrow
//! read-only handles for its lifetime, and a reload is simply dropping every
//! borrower and the `Dataset` itself before loading a fresh one. That makes
//! the Empty → Loading → Ready progression a property of the types rather
//! than a runtime flag.

use std::collections::{BTreeSet, HashMap};

use crate::aircraft::Aircraft;
use crate::airports::Airport;
use crate::flights::Flight;
use crate::passengers::Passenger;
use crate::reservations::Reservation;
use crate::statistics::{self, AirportTraffic};

pub struct Dataset {
    aircraft: HashMap<String, Aircraft>,
    flights: HashMap<String, Flight>,
    passengers: HashMap<u32, Passenger>,
    airports: HashMap<String, Airport>,
    reservations: HashMap<String, Reservation>,
    airport_traffic: HashMap<String, AirportTraffic>,
    // Sorted, deduplicated; consumed by external autocompletion.
    airport_codes: Vec<String>,
    manufacturers: Vec<String>,
    nationalities: Vec<String>,
}

impl Dataset {
    /// Build the final dataset from freshly loaded tables: computes the
    /// per-airport traffic summary and the three sorted ancillary lists.
    pub(crate) fn assemble(
        aircraft: HashMap<String, Aircraft>,
        flights: HashMap<String, Flight>,
        passengers: HashMap<u32, Passenger>,
        airports: HashMap<String, Airport>,
        reservations: HashMap<String, Reservation>,
    ) -> Self {
        let airport_traffic = statistics::airport_traffic(&reservations, &flights);

        let airport_codes: Vec<String> = airports
            .keys()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let manufacturers: Vec<String> = aircraft
            .values()
            .map(|a| a.manufacturer.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let nationalities: Vec<String> = passengers
            .values()
            .map(|p| p.nationality.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        Dataset {
            aircraft,
            flights,
            passengers,
            airports,
            reservations,
            airport_traffic,
            airport_codes,
            manufacturers,
            nationalities,
        }
    }

    // --- Lookups ---

    pub fn aircraft(&self, id: &str) -> Option<&Aircraft> {
        self.aircraft.get(id)
    }

    pub fn flight(&self, id: &str) -> Option<&Flight> {
        self.flights.get(id)
    }

    pub fn passenger(&self, document_number: u32) -> Option<&Passenger> {
        self.passengers.get(&document_number)
    }

    pub fn airport(&self, code: &str) -> Option<&Airport> {
        self.airports.get(code)
    }

    pub fn reservation(&self, id: &str) -> Option<&Reservation> {
        self.reservations.get(id)
    }

    /// Arrivals/departures summary for one airport; airports that never
    /// appear on a non-cancelled reserved flight have no entry.
    pub fn traffic(&self, code: &str) -> Option<AirportTraffic> {
        self.airport_traffic.get(code).copied()
    }

    // --- Counters ---

    pub fn aircraft_count(&self) -> usize {
        self.aircraft.len()
    }

    pub fn flight_count(&self) -> usize {
        self.flights.len()
    }

    pub fn passenger_count(&self) -> usize {
        self.passengers.len()
    }

    pub fn airport_count(&self) -> usize {
        self.airports.len()
    }

    pub fn reservation_count(&self) -> usize {
        self.reservations.len()
    }

    // --- Iteration (single-pass, borrowed, order unspecified) ---

    pub fn iter_aircraft(&self) -> impl Iterator<Item = &Aircraft> {
        self.aircraft.values()
    }

    pub fn iter_flights(&self) -> impl Iterator<Item = &Flight> {
        self.flights.values()
    }

    pub fn iter_passengers(&self) -> impl Iterator<Item = &Passenger> {
        self.passengers.values()
    }

    pub fn iter_airports(&self) -> impl Iterator<Item = &Airport> {
        self.airports.values()
    }

    pub fn iter_reservations(&self) -> impl Iterator<Item = &Reservation> {
        self.reservations.values()
    }

    pub fn iter_traffic(&self) -> impl Iterator<Item = (&str, AirportTraffic)> {
        self.airport_traffic.iter().map(|(k, v)| (k.as_str(), *v))
    }

    // --- Ancillary lists (sorted, for external autocompletion) ---

    pub fn airport_codes(&self) -> &[String] {
        &self.airport_codes
    }

    pub fn manufacturers(&self) -> &[String] {
        &self.manufacturers
    }

    pub fn nationalities(&self) -> &[String] {
        &self.nationalities
    }
}
