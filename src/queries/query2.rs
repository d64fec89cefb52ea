//! Query 2 — the N most-flown aircraft, optionally restricted to one
//! manufacturer.
//!
//! The index is a flat aircraft array with a parallel flight counter filled
//! by a single pass over the flights table. Each run keeps a bounded
//! min-heap of N candidates, so a run costs O(A log N) instead of sorting
//! the whole fleet.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::io::{self, Write};

use crate::aircraft::Aircraft;
use crate::dataset::Dataset;
use crate::flights::FlightStatus;
use crate::queries::{Separator, write_empty};

pub struct AircraftUsage<'a> {
    aircraft: Vec<&'a Aircraft>,
    flight_counts: Vec<u32>,
}

/// Heap entry ordered so the *weakest* candidate (lowest count; larger id on
/// ties) is the maximum and gets evicted first. Sorting ascending afterwards
/// therefore yields count descending with ties on the smaller id.
struct Ranked<'a> {
    count: u32,
    aircraft: &'a Aircraft,
}

impl Ord for Ranked<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .count
            .cmp(&self.count)
            .then_with(|| self.aircraft.id.cmp(&other.aircraft.id))
    }
}

impl PartialOrd for Ranked<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Ranked<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Ranked<'_> {}

impl<'a> AircraftUsage<'a> {
    pub fn build(dataset: &'a Dataset) -> Self {
        let aircraft: Vec<&Aircraft> = dataset.iter_aircraft().collect();
        let index_by_id: HashMap<&str, usize> = aircraft
            .iter()
            .enumerate()
            .map(|(i, a)| (a.id.as_str(), i))
            .collect();

        let mut flight_counts = vec![0u32; aircraft.len()];
        for flight in dataset.iter_flights() {
            if flight.status == FlightStatus::Cancelled {
                continue;
            }
            if let Some(&i) = index_by_id.get(flight.aircraft_id.as_str()) {
                flight_counts[i] += 1;
            }
        }

        AircraftUsage {
            aircraft,
            flight_counts,
        }
    }

    pub fn run(
        &self,
        arg1: Option<&str>,
        arg2: Option<&str>,
        separator: Separator,
        out: &mut dyn Write,
    ) -> io::Result<()> {
        let n = arg1.and_then(|s| s.parse::<usize>().ok()).unwrap_or(0);
        if n == 0 {
            return write_empty(out);
        }
        let manufacturer = arg2.filter(|s| !s.is_empty());

        let mut heap: BinaryHeap<Ranked<'_>> = BinaryHeap::with_capacity(n + 1);
        for (i, &aircraft) in self.aircraft.iter().enumerate() {
            let count = self.flight_counts[i];
            if count == 0 {
                continue;
            }
            if let Some(wanted) = manufacturer {
                if aircraft.manufacturer != wanted {
                    continue;
                }
            }
            heap.push(Ranked { count, aircraft });
            if heap.len() > n {
                heap.pop();
            }
        }

        if heap.is_empty() {
            return write_empty(out);
        }
        let sep = separator.as_char();
        for entry in heap.into_sorted_vec() {
            writeln!(
                out,
                "{}{sep}{}{sep}{}{sep}{}",
                entry.aircraft.id,
                entry.aircraft.manufacturer,
                entry.aircraft.model,
                entry.count,
            )?;
        }
        Ok(())
    }
}
