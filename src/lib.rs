//! Tarmac — batch and interactive analytics over a fixed-schema airline
//! dataset.
//!
//! Given a directory of delimited-text files (airports, aircraft, flights,
//! passengers, reservations), tarmac validates and loads everything into an
//! in-memory [`Dataset`], builds one purpose-built index per query, and
//! answers a closed set of six queries. The batch driver and any interactive
//! front end go through the same [`QueryEngine`] entry points.

pub mod aircraft;
pub mod airports;
pub mod batch;
pub mod commands;
pub mod csv_record;
pub mod dataset;
pub mod datetime;
pub mod error_log;
pub mod fenwick;
pub mod flights;
pub mod loader;
pub mod passengers;
pub mod queries;
pub mod reservations;
pub mod statistics;
pub mod validators;

pub use dataset::Dataset;
pub use loader::{LoadSummary, load_dataset};
pub use queries::{QueryEngine, Separator};
