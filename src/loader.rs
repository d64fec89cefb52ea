//! Dependency-ordered dataset ingest.
//!
//! Tables load in the order Aircraft → Flight → Passenger → Airport →
//! Reservation so that every foreign key can be checked against an
//! already-populated table. Row failures are logged to the per-entity error
//! files and skipped; a file that cannot be opened leaves its table empty and
//! the load keeps going, which in turn fails every row that references it.

use std::collections::HashMap;
use std::fs::{self, File};
use std::hash::Hash;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::aircraft::Aircraft;
use crate::airports::Airport;
use crate::dataset::Dataset;
use crate::error_log::ErrorSink;
use crate::flights::Flight;
use crate::passengers::Passenger;
use crate::reservations::Reservation;
use crate::validators::RowError;

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct StageStats {
    pub accepted: usize,
    pub rejected: usize,
    pub elapsed_secs: f64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct LoadSummary {
    pub aircraft: StageStats,
    pub flights: StageStats,
    pub passengers: StageStats,
    pub airports: StageStats,
    pub reservations: StageStats,
    /// Set when any row was rejected or any file could not be read.
    pub had_errors: bool,
}

/// Load and validate the whole dataset directory.
///
/// `results_dir` receives the per-entity error files; it is created if
/// missing. Row-level problems never fail the call — they are reflected in
/// the summary and the error files.
pub fn load_dataset(dataset_dir: &Path, results_dir: &Path) -> Result<(Dataset, LoadSummary)> {
    fs::create_dir_all(results_dir)
        .with_context(|| format!("creating results directory {}", results_dir.display()))?;

    let mut summary = LoadSummary::default();
    let mut had_errors = false;

    let mut sink = ErrorSink::create(results_dir, "aircrafts");
    let (aircraft, stats) = load_table(
        &dataset_dir.join("aircrafts.csv"),
        &mut sink,
        &mut had_errors,
        |line| {
            let record = Aircraft::from_csv_line(line)?;
            Ok((record.id.clone(), record))
        },
    );
    summary.aircraft = stats;
    info!(
        accepted = stats.accepted,
        rejected = stats.rejected,
        elapsed_secs = stats.elapsed_secs,
        "aircraft loaded"
    );

    let mut sink = ErrorSink::create(results_dir, "flights");
    let (flights, stats) = load_table(
        &dataset_dir.join("flights.csv"),
        &mut sink,
        &mut had_errors,
        |line| {
            let record = Flight::from_csv_line(line, &aircraft)?;
            Ok((record.id.clone(), record))
        },
    );
    summary.flights = stats;
    info!(
        accepted = stats.accepted,
        rejected = stats.rejected,
        elapsed_secs = stats.elapsed_secs,
        "flights loaded"
    );

    let mut sink = ErrorSink::create(results_dir, "passengers");
    let (passengers, stats) = load_table(
        &dataset_dir.join("passengers.csv"),
        &mut sink,
        &mut had_errors,
        |line| {
            let record = Passenger::from_csv_line(line)?;
            Ok((record.document_number, record))
        },
    );
    summary.passengers = stats;
    info!(
        accepted = stats.accepted,
        rejected = stats.rejected,
        elapsed_secs = stats.elapsed_secs,
        "passengers loaded"
    );

    let mut sink = ErrorSink::create(results_dir, "airports");
    let (airports, stats) = load_table(
        &dataset_dir.join("airports.csv"),
        &mut sink,
        &mut had_errors,
        |line| {
            let record = Airport::from_csv_line(line)?;
            Ok((record.code.clone(), record))
        },
    );
    summary.airports = stats;
    info!(
        accepted = stats.accepted,
        rejected = stats.rejected,
        elapsed_secs = stats.elapsed_secs,
        "airports loaded"
    );

    let mut sink = ErrorSink::create(results_dir, "reservations");
    let (reservations, stats) = load_table(
        &dataset_dir.join("reservations.csv"),
        &mut sink,
        &mut had_errors,
        |line| {
            let record = Reservation::from_csv_line(line, &passengers, &flights)?;
            Ok((record.id.clone(), record))
        },
    );
    summary.reservations = stats;
    info!(
        accepted = stats.accepted,
        rejected = stats.rejected,
        elapsed_secs = stats.elapsed_secs,
        "reservations loaded"
    );

    summary.had_errors = had_errors;

    let dataset = Dataset::assemble(aircraft, flights, passengers, airports, reservations);
    Ok((dataset, summary))
}

/// Read one entity file into a keyed table.
///
/// The first line is the header (kept as the error-file preamble), blank
/// lines are skipped, and a duplicate key rejects the later row.
fn load_table<K, V>(
    path: &Path,
    sink: &mut ErrorSink,
    had_errors: &mut bool,
    mut parse: impl FnMut(&str) -> Result<(K, V), RowError>,
) -> (HashMap<K, V>, StageStats)
where
    K: Eq + Hash,
{
    let started = Instant::now();
    let mut table = HashMap::new();
    let mut stats = StageStats::default();

    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) => {
            warn!(path = %path.display(), %err, "cannot open dataset file; table left empty");
            *had_errors = true;
            stats.elapsed_secs = started.elapsed().as_secs_f64();
            return (table, stats);
        }
    };
    let reader = BufReader::new(file);
    let mut lines = reader.lines();

    match lines.next() {
        Some(Ok(header)) => sink.set_header(header.trim_end_matches(['\r', '\n'])),
        Some(Err(err)) => {
            warn!(path = %path.display(), %err, "cannot read dataset header; table left empty");
            *had_errors = true;
            stats.elapsed_secs = started.elapsed().as_secs_f64();
            return (table, stats);
        }
        None => {
            warn!(path = %path.display(), "dataset file is empty; table left empty");
            *had_errors = true;
            stats.elapsed_secs = started.elapsed().as_secs_f64();
            return (table, stats);
        }
    }

    for line in lines {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                warn!(path = %path.display(), %err, "read error; remaining rows skipped");
                *had_errors = true;
                break;
            }
        };
        let row = line.trim_end_matches(['\r', '\n']);
        if row.trim().is_empty() {
            continue;
        }

        let outcome = parse(row).and_then(|(key, value)| {
            if table.contains_key(&key) {
                Err(RowError::Duplicate)
            } else {
                table.insert(key, value);
                Ok(())
            }
        });
        match outcome {
            Ok(()) => stats.accepted += 1,
            Err(err) => {
                debug!(%err, kind = ?err.kind(), "row rejected");
                sink.log(row);
                stats.rejected += 1;
                *had_errors = true;
            }
        }
    }

    stats.elapsed_secs = started.elapsed().as_secs_f64();
    (table, stats)
}
