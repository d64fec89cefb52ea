//! Query 4 — the passenger who appears most often in the weekly top-10
//! spender tables.
//!
//! Reservations are bucketed into Monday-aligned weeks by the scheduled
//! departure of their first flight. Each week's per-passenger spend is rolled
//! up through a min-heap capped at ten entries and frozen as a ranked array
//! of document numbers at build time; runs only count appearances over a week
//! range.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::io::{self, Write};

use crate::dataset::Dataset;
use crate::datetime;
use crate::queries::{Separator, write_empty};

const WEEKLY_TOP: usize = 10;

pub struct WeeklySpenders {
    /// Week index → document numbers ranked by (spend desc, document asc).
    weekly_top: HashMap<i64, Vec<u32>>,
    min_week: i64,
    max_week: i64,
}

/// Ordered so the weakest spender (lowest spend; larger document on ties) is
/// the heap maximum, mirroring the bounded top-N heap of query 2.
struct Spend {
    total: f64,
    document: u32,
}

impl Ord for Spend {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .total
            .total_cmp(&self.total)
            .then_with(|| self.document.cmp(&other.document))
    }
}

impl PartialOrd for Spend {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Spend {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Spend {}

impl WeeklySpenders {
    pub fn build(dataset: &Dataset) -> Self {
        let mut spend_per_week: HashMap<i64, HashMap<u32, f64>> = HashMap::new();
        let mut min_week = i64::MAX;
        let mut max_week = i64::MIN;

        for reservation in dataset.iter_reservations() {
            let Some(first_leg) = reservation.flight_ids.first() else {
                continue;
            };
            let Some(flight) = dataset.flight(first_leg) else {
                continue;
            };
            let departure = flight.scheduled_departure;
            if departure < 0 {
                continue;
            }
            let week = datetime::week_index(departure);
            min_week = min_week.min(week);
            max_week = max_week.max(week);
            *spend_per_week
                .entry(week)
                .or_default()
                .entry(reservation.document_no)
                .or_insert(0.0) += reservation.price;
        }

        let weekly_top = spend_per_week
            .into_iter()
            .map(|(week, by_passenger)| {
                let mut heap: BinaryHeap<Spend> = BinaryHeap::with_capacity(WEEKLY_TOP + 1);
                for (document, total) in by_passenger {
                    heap.push(Spend { total, document });
                    if heap.len() > WEEKLY_TOP {
                        heap.pop();
                    }
                }
                let ranked: Vec<u32> = heap
                    .into_sorted_vec()
                    .into_iter()
                    .map(|s| s.document)
                    .collect();
                (week, ranked)
            })
            .collect();

        WeeklySpenders {
            weekly_top,
            min_week,
            max_week,
        }
    }

    pub fn run(
        &self,
        dataset: &Dataset,
        arg1: Option<&str>,
        arg2: Option<&str>,
        separator: Separator,
        out: &mut dyn Write,
    ) -> io::Result<()> {
        let start_week = match arg1.filter(|s| !s.is_empty()) {
            Some(s) => match datetime::parse_date(s) {
                Ok(Some(t)) => datetime::week_index(t),
                _ => return write_empty(out),
            },
            None => self.min_week,
        };
        let end_week = match arg2.filter(|s| !s.is_empty()) {
            Some(s) => match datetime::parse_date(s) {
                Ok(Some(t)) => datetime::week_index(t),
                _ => return write_empty(out),
            },
            None => self.max_week,
        };
        if self.weekly_top.is_empty() || start_week > end_week {
            return write_empty(out);
        }

        let mut appearances: HashMap<u32, u32> = HashMap::new();
        for week in start_week..=end_week {
            if let Some(ranked) = self.weekly_top.get(&week) {
                for &document in ranked {
                    *appearances.entry(document).or_insert(0) += 1;
                }
            }
        }

        let mut best: Option<(u32, u32)> = None;
        for (&document, &frequency) in &appearances {
            let better = match best {
                None => true,
                Some((best_document, best_frequency)) => {
                    frequency > best_frequency
                        || (frequency == best_frequency && document < best_document)
                }
            };
            if better {
                best = Some((document, frequency));
            }
        }

        let Some((document, frequency)) = best else {
            return write_empty(out);
        };
        let Some(passenger) = dataset.passenger(document) else {
            return write_empty(out);
        };
        let sep = separator.as_char();
        writeln!(
            out,
            "{document:09}{sep}{}{sep}{}{sep}{}{sep}{}{sep}{frequency}",
            passenger.first_name,
            passenger.last_name,
            datetime::format_date(passenger.date_of_birth),
            passenger.nationality,
        )
    }
}
