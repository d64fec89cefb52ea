use std::path::Path;

use anyhow::Result;
use tracing::warn;

use crate::loader::load_dataset;

/// Load and validate a dataset without running queries, reporting per-table
/// counts and load times.
pub fn handle_load(dataset_dir: &Path, results_dir: &Path, summary_json: bool) -> Result<()> {
    let (dataset, summary) = load_dataset(dataset_dir, results_dir)?;

    println!(
        "Aircraft loaded: {} ({:.3} seconds)",
        dataset.aircraft_count(),
        summary.aircraft.elapsed_secs
    );
    println!(
        "Flights loaded: {} ({:.3} seconds)",
        dataset.flight_count(),
        summary.flights.elapsed_secs
    );
    println!(
        "Passengers loaded: {} ({:.3} seconds)",
        dataset.passenger_count(),
        summary.passengers.elapsed_secs
    );
    println!(
        "Airports loaded: {} ({:.3} seconds)",
        dataset.airport_count(),
        summary.airports.elapsed_secs
    );
    println!(
        "Reservations loaded: {} ({:.3} seconds)",
        dataset.reservation_count(),
        summary.reservations.elapsed_secs
    );

    if summary_json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    if summary.had_errors {
        warn!(
            "some input rows were invalid; check the *_errors.csv files in {}",
            results_dir.display()
        );
    } else {
        println!("All datasets processed successfully.");
    }
    Ok(())
}
