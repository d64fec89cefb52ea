use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tarmac::commands::{handle_batch, handle_load, handle_query};

#[derive(Parser)]
#[command(name = "tarmac", version, about = "Analytics over a fixed-schema airline dataset")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load a dataset directory and execute a batch command file against it
    Batch {
        /// Directory holding the five dataset .csv files
        dataset_dir: PathBuf,
        /// File with one query command per line
        commands_file: PathBuf,
        /// Directory for query outputs and error files
        #[arg(long, default_value = "results")]
        results_dir: PathBuf,
    },
    /// Load a dataset and run a single query command, printing to stdout
    Query {
        /// Directory holding the five dataset .csv files
        dataset_dir: PathBuf,
        /// One command line, e.g. "3 2024-06-01 2024-06-30"
        command: String,
        /// Directory for error files
        #[arg(long, default_value = "results")]
        results_dir: PathBuf,
    },
    /// Load and validate a dataset, reporting per-table statistics
    Load {
        /// Directory holding the five dataset .csv files
        dataset_dir: PathBuf,
        /// Directory for error files
        #[arg(long, default_value = "results")]
        results_dir: PathBuf,
        /// Also print the load summary as JSON
        #[arg(long)]
        summary_json: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Batch {
            dataset_dir,
            commands_file,
            results_dir,
        } => handle_batch(&dataset_dir, &commands_file, &results_dir),
        Command::Query {
            dataset_dir,
            command,
            results_dir,
        } => handle_query(&dataset_dir, &command, &results_dir),
        Command::Load {
            dataset_dir,
            results_dir,
            summary_json,
        } => handle_load(&dataset_dir, &results_dir, summary_json),
    }
}
