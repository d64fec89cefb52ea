//! Query 3 — the airport with the most reserved departures inside a date
//! range.
//!
//! Per origin airport the index holds the sorted distinct days on which a
//! non-cancelled flight actually departed, plus a Fenwick tree of per-day
//! counts over those positions. A range query is then two binary searches
//! and a prefix-sum subtraction per airport.

use std::collections::{BTreeSet, HashMap};
use std::io::{self, Write};

use crate::dataset::Dataset;
use crate::datetime;
use crate::fenwick::Fenwick;
use crate::flights::FlightStatus;
use crate::queries::{Separator, write_empty};

struct DayTree {
    days: Vec<i64>,
    counts: Fenwick,
}

pub struct DepartureDays {
    per_airport: HashMap<String, DayTree>,
}

impl DepartureDays {
    pub fn build(dataset: &Dataset) -> Self {
        let mut day_sets: HashMap<&str, BTreeSet<i64>> = HashMap::new();
        for flight in dataset.iter_flights() {
            if flight.status == FlightStatus::Cancelled {
                continue;
            }
            let Some(departed) = flight.actual_departure else {
                continue;
            };
            day_sets
                .entry(flight.origin.as_str())
                .or_default()
                .insert(datetime::day_floor(departed));
        }

        let mut per_airport: HashMap<String, DayTree> = day_sets
            .into_iter()
            .map(|(code, days)| {
                let days: Vec<i64> = days.into_iter().collect();
                let counts = Fenwick::new(days.len());
                (code.to_string(), DayTree { days, counts })
            })
            .collect();

        for flight in dataset.iter_flights() {
            if flight.status == FlightStatus::Cancelled {
                continue;
            }
            let Some(departed) = flight.actual_departure else {
                continue;
            };
            let Some(bundle) = per_airport.get_mut(flight.origin.as_str()) else {
                continue;
            };
            let day = datetime::day_floor(departed);
            // 1-based lower bound; the day is present by construction
            let pos = bundle.days.partition_point(|&d| d < day) + 1;
            if pos <= bundle.days.len() {
                bundle.counts.add(pos, 1);
            }
        }

        DepartureDays { per_airport }
    }

    /// Departures from `code` with an actual-departure day in `[start, end]`.
    pub fn departures_in_range(&self, code: &str, start: i64, end: i64) -> u32 {
        let Some(bundle) = self.per_airport.get(code) else {
            return 0;
        };
        let lo = bundle.days.partition_point(|&d| d < start) + 1;
        let hi = bundle.days.partition_point(|&d| d <= end);
        bundle.counts.range_sum(lo, hi)
    }

    pub fn run(
        &self,
        dataset: &Dataset,
        arg1: Option<&str>,
        arg2: Option<&str>,
        separator: Separator,
        out: &mut dyn Write,
    ) -> io::Result<()> {
        let start = match arg1.map(datetime::parse_date) {
            Some(Ok(Some(t))) => t,
            _ => return write_empty(out),
        };
        let end = match arg2.map(datetime::parse_date) {
            Some(Ok(Some(t))) => t,
            _ => return write_empty(out),
        };

        let mut best: Option<(&str, u32)> = None;
        for code in self.per_airport.keys() {
            let count = self.departures_in_range(code, start, end);
            if count == 0 {
                continue;
            }
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

        let Some((code, count)) = best else {
            return write_empty(out);
        };
        let (name, city, country) = match dataset.airport(code) {
            Some(airport) => (
                airport.name.as_str(),
                airport.city.as_str(),
                airport.country.as_str(),
            ),
            None => ("", "", ""),
        };
        let sep = separator.as_char();
        writeln!(out, "{code}{sep}{name}{sep}{city}{sep}{country}{sep}{count}")
    }
}
