//! Query 5 — airlines ranked by average departure delay.
//!
//! One pass over the flights with status Delayed accumulates per-airline
//! delay totals; averages are rounded half-to-even at three decimals and the
//! table is frozen in rank order, so a run just prints a prefix.

use std::collections::HashMap;
use std::io::{self, Write};

use crate::dataset::Dataset;
use crate::flights::FlightStatus;
use crate::queries::{Separator, write_empty};

#[derive(Debug, Clone)]
struct AirlineDelay {
    airline: String,
    delayed_count: u32,
    avg_delay_minutes: f64,
}

pub struct AirlineDelays {
    /// Sorted by (average delay desc, airline asc).
    ranked: Vec<AirlineDelay>,
}

/// Round half to even at three decimal places.
fn round3(x: f64) -> f64 {
    (x * 1000.0).round_ties_even() / 1000.0
}

impl AirlineDelays {
    pub fn build(dataset: &Dataset) -> Self {
        let mut totals: HashMap<&str, (u32, f64)> = HashMap::new();
        for flight in dataset.iter_flights() {
            if flight.status != FlightStatus::Delayed {
                continue;
            }
            let Some(actual) = flight.actual_departure else {
                continue;
            };
            let delay_minutes = (actual - flight.scheduled_departure) as f64 / 60.0;
            let entry = totals.entry(flight.airline.as_str()).or_insert((0, 0.0));
            entry.0 += 1;
            entry.1 += delay_minutes;
        }

        let mut ranked: Vec<AirlineDelay> = totals
            .into_iter()
            .map(|(airline, (delayed_count, total_delay))| AirlineDelay {
                airline: airline.to_string(),
                delayed_count,
                avg_delay_minutes: round3(total_delay / f64::from(delayed_count)),
            })
            .collect();
        ranked.sort_by(|a, b| {
            b.avg_delay_minutes
                .total_cmp(&a.avg_delay_minutes)
                .then_with(|| a.airline.cmp(&b.airline))
        });

        AirlineDelays { ranked }
    }

    pub fn run(
        &self,
        arg1: Option<&str>,
        separator: Separator,
        out: &mut dyn Write,
    ) -> io::Result<()> {
        let n = arg1.and_then(|s| s.parse::<usize>().ok()).unwrap_or(0);
        if n == 0 || self.ranked.is_empty() {
            return write_empty(out);
        }
        let sep = separator.as_char();
        for entry in self.ranked.iter().take(n) {
            writeln!(
                out,
                "{}{sep}{}{sep}{:.3}",
                entry.airline, entry.delayed_count, entry.avg_delay_minutes,
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round3_half_even() {
        assert_eq!(round3(45.0), 45.0);
        assert_eq!(round3(0.12345), 0.123);
        // exact .5 ties go to the even neighbour (0.0625 and 0.3125 are
        // dyadic, so the tie is exact in binary)
        assert_eq!(round3(0.0625), 0.062);
        assert_eq!(round3(0.1875), 0.188);
        assert_eq!(round3(0.3125), 0.312);
    }
}
