use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::batch::parse_command;
use crate::loader::load_dataset;
use crate::queries::QueryEngine;

/// Load the dataset and run a single command line, writing the result to
/// stdout. This is the same dispatch path the batch driver and any
/// interactive front end use.
pub fn handle_query(dataset_dir: &Path, command_line: &str, results_dir: &Path) -> Result<()> {
    let (dataset, summary) = load_dataset(dataset_dir, results_dir)?;
    info!(
        flights = dataset.flight_count(),
        reservations = dataset.reservation_count(),
        "dataset ready"
    );
    let engine = QueryEngine::new(&dataset);

    let command = parse_command(command_line.trim());
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let handled = engine
        .execute(
            command.id,
            command.arg1,
            command.arg2,
            command.separator,
            &mut out,
        )
        .context("writing query output")?;
    if !handled {
        warn!(query = command.id, "unknown query id");
        writeln!(out)?;
    }

    if summary.had_errors {
        warn!(
            "some input rows were invalid; check the *_errors.csv files in {}",
            results_dir.display()
        );
    }
    Ok(())
}
