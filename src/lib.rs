//! Full-refresh loader for the Olist CSV exports: recreates the schema
//! in DuckDB, then parses, dedups, and bulk-appends each table, isolating
//! per-table failures so one bad file never sinks the run.

pub mod config;
pub mod error;
pub mod load;
pub mod pipeline;
pub mod schema;
