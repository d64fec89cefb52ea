use std::path::Path;

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::batch::run_command_file;
use crate::loader::load_dataset;
use crate::queries::QueryEngine;

/// Full pipeline: load the dataset, build every query index, then execute
/// the batch command file.
pub fn handle_batch(dataset_dir: &Path, commands_file: &Path, results_dir: &Path) -> Result<()> {
    let (dataset, summary) = load_dataset(dataset_dir, results_dir)?;
    info!(
        aircraft = dataset.aircraft_count(),
        flights = dataset.flight_count(),
        passengers = dataset.passenger_count(),
        airports = dataset.airport_count(),
        reservations = dataset.reservation_count(),
        "dataset ready"
    );

    let engine = QueryEngine::new(&dataset);

    let mut report_timing = |query: u8, command: usize, elapsed: std::time::Duration| {
        debug!(
            query,
            command,
            elapsed_secs = elapsed.as_secs_f64(),
            "query executed"
        );
    };
    let executed = run_command_file(&engine, commands_file, results_dir, Some(&mut report_timing))?;
    info!(commands = executed, "batch run complete");

    if summary.had_errors {
        warn!(
            "some input rows were invalid; check the *_errors.csv files in {}",
            results_dir.display()
        );
    }
    Ok(())
}
