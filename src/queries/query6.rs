//! Query 6 — the most common arrival airport for a nationality.
//!
//! The index is a two-level histogram: nationality → destination airport →
//! number of reserved, non-cancelled arrivals.

use std::collections::HashMap;
use std::io::{self, Write};

use crate::dataset::Dataset;
use crate::flights::FlightStatus;
use crate::queries::{Separator, write_empty};

pub struct NationalityArrivals {
    arrivals: HashMap<String, HashMap<String, u32>>,
}

impl NationalityArrivals {
    pub fn build(dataset: &Dataset) -> Self {
        let mut arrivals: HashMap<String, HashMap<String, u32>> = HashMap::new();

        for reservation in dataset.iter_reservations() {
            let Some(passenger) = dataset.passenger(reservation.document_no) else {
                continue;
            };
            for flight_id in &reservation.flight_ids {
                let Some(flight) = dataset.flight(flight_id) else {
                    continue;
                };
                if flight.status == FlightStatus::Cancelled {
                    continue;
                }
                *arrivals
                    .entry(passenger.nationality.clone())
                    .or_default()
                    .entry(flight.destination.clone())
                    .or_insert(0) += 1;
            }
        }

        NationalityArrivals { arrivals }
    }

    pub fn run(
        &self,
        arg: Option<&str>,
        separator: Separator,
        out: &mut dyn Write,
    ) -> io::Result<()> {
        let Some(nationality) = arg.filter(|s| !s.is_empty()) else {
            return write_empty(out);
        };
        let Some(per_airport) = self.arrivals.get(nationality) else {
            return write_empty(out);
        };

        let mut best: Option<(&str, u32)> = None;
        for (code, &count) in per_airport {
            let better = match best {
                None => true,
                Some((best_code, best_count)) => {
                    count > best_count || (count == best_count && code.as_str() < best_code)
                }
            };
            if better {
                best = Some((code.as_str(), count));
            }
        }

        match best {
            Some((code, count)) => {
                let sep = separator.as_char();
                writeln!(out, "{code}{sep}{count}")
            }
            None => write_empty(out),
        }
    }
}
