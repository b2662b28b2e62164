// src/pipeline.rs

use std::time::Instant;

use duckdb::Connection;
use tracing::{error, info};

use crate::config::Config;
use crate::error::SchemaError;
use crate::load::{self, LoadOutcome, LoadResult};
use crate::schema::{self, Registry};

/// Install the schema once, then load every table in registry order.
///
/// One table's failure is recorded in its LoadResult and the loop moves
/// on to the next table; only a failed install aborts the run, before any
/// load is attempted.
pub fn run(
    conn: &mut Connection,
    registry: &Registry,
    config: &Config,
) -> Result<Vec<LoadResult>, SchemaError> {
    schema::install_all(conn, registry)?;

    let mut results = Vec::with_capacity(registry.len());
    for spec in registry.iter() {
        info!(table = spec.name, file = spec.source_file, "loading");
        let start = Instant::now();

        let result = load::load_table(conn, spec, &config.data_dir, config.batch_size);
        match &result.outcome {
            LoadOutcome::Loaded { rows, columns } => {
                info!(
                    table = spec.name,
                    rows,
                    columns,
                    elapsed = ?start.elapsed(),
                    "loaded"
                );
            }
            LoadOutcome::Failed(err) => {
                error!("`{}` failed: {}", spec.name, err);
            }
        }
        results.push(result);
    }

    Ok(results)
}
