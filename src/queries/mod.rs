//! The closed set of six analytics queries.
//!
//! Each query pairs a precomputed index (built once from the loaded
//! [`Dataset`]) with a run function that formats results into a writer. The
//! set is sealed: dispatch is a plain match on the query id, and the engine
//! owns every context, so building the engine is the "init all modules" phase
//! and dropping it is the "destroy" phase.

pub mod query1;
pub mod query2;
pub mod query3;
pub mod query4;
pub mod query5;
pub mod query6;

use std::io::{self, Write};
use std::time::Instant;

use tracing::debug;

use crate::dataset::Dataset;

/// Output field separator; the command suffix `S` selects the special form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    Standard,
    Special,
}

impl Separator {
    pub fn as_char(self) -> char {
        match self {
            Separator::Standard => ';',
            Separator::Special => '=',
        }
    }
}

/// An empty result is a single newline, for every query.
pub(crate) fn write_empty(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out)
}

pub struct QueryEngine<'a> {
    dataset: &'a Dataset,
    aircraft_usage: query2::AircraftUsage<'a>,
    departure_days: query3::DepartureDays,
    weekly_spenders: query4::WeeklySpenders,
    airline_delays: query5::AirlineDelays,
    nationality_arrivals: query6::NationalityArrivals,
}

impl<'a> QueryEngine<'a> {
    /// Build every query index from the loaded dataset.
    pub fn new(dataset: &'a Dataset) -> Self {
        let started = Instant::now();
        let engine = QueryEngine {
            dataset,
            aircraft_usage: query2::AircraftUsage::build(dataset),
            departure_days: query3::DepartureDays::build(dataset),
            weekly_spenders: query4::WeeklySpenders::build(dataset),
            airline_delays: query5::AirlineDelays::build(dataset),
            nationality_arrivals: query6::NationalityArrivals::build(dataset),
        };
        debug!(
            elapsed_secs = started.elapsed().as_secs_f64(),
            "query indexes built"
        );
        engine
    }

    /// Dispatch one query by id. Returns `Ok(false)` for an unknown id; the
    /// caller decides what an unknown command produces.
    pub fn execute(
        &self,
        id: u8,
        arg1: Option<&str>,
        arg2: Option<&str>,
        separator: Separator,
        out: &mut dyn Write,
    ) -> io::Result<bool> {
        match id {
            1 => query1::run(self.dataset, arg1, separator, out)?,
            2 => self.aircraft_usage.run(arg1, arg2, separator, out)?,
            3 => self
                .departure_days
                .run(self.dataset, arg1, arg2, separator, out)?,
            4 => self
                .weekly_spenders
                .run(self.dataset, arg1, arg2, separator, out)?,
            5 => self.airline_delays.run(arg1, separator, out)?,
            6 => self.nationality_arrivals.run(arg1, separator, out)?,
            _ => return Ok(false),
        }
        Ok(true)
    }
}
