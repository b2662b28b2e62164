// src/load/mod.rs

pub mod dedup;
pub mod rowset;
pub mod write;

pub use rowset::{Datum, RowSet};

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use duckdb::Connection;
use tracing::{debug, warn};

use crate::error::LoadError;
use crate::schema::TableSpec;

/// Outcome of one table's load. Failures are recorded here, never thrown
/// past the loader; the pipeline keeps going on the next table.
#[derive(Debug)]
pub struct LoadResult {
    pub table: String,
    pub outcome: LoadOutcome,
}

#[derive(Debug)]
pub enum LoadOutcome {
    /// Rows and columns written. Zero rows is a valid load.
    Loaded { rows: usize, columns: usize },
    Failed(LoadError),
}

impl LoadResult {
    pub fn is_loaded(&self) -> bool {
        matches!(self.outcome, LoadOutcome::Loaded { .. })
    }

    pub fn error(&self) -> Option<&LoadError> {
        match &self.outcome {
            LoadOutcome::Loaded { .. } => None,
            LoadOutcome::Failed(err) => Some(err),
        }
    }
}

/// Load one table end to end: existence check, parse, header
/// normalization, key dedup, batched append.
pub fn load_table(
    conn: &mut Connection,
    spec: &TableSpec,
    data_dir: &Path,
    batch_size: usize,
) -> LoadResult {
    LoadResult {
        table: spec.name.to_string(),
        outcome: match run_load(conn, spec, data_dir, batch_size) {
            Ok((rows, columns)) => LoadOutcome::Loaded { rows, columns },
            Err(err) => LoadOutcome::Failed(err),
        },
    }
}

fn run_load(
    conn: &mut Connection,
    spec: &TableSpec,
    data_dir: &Path,
    batch_size: usize,
) -> Result<(usize, usize), LoadError> {
    let path = spec.source_path(data_dir);
    if !path.is_file() {
        return Err(LoadError::SourceMissing { path });
    }

    // open can still fail after is_file (permissions, races)
    let file = match File::open(&path) {
        Ok(f) => f,
        Err(_) => return Err(LoadError::SourceMissing { path }),
    };
    let mut rows = rowset::read_rows(BufReader::new(file), spec.date_columns)
        .map_err(|source| LoadError::Parse { path, source })?;

    if let Some(key) = spec.primary_key {
        if rows.column_index(key).is_some() {
            let dropped = dedup::dedup_by_key(&mut rows, key);
            if dropped > 0 {
                warn!(
                    table = spec.name,
                    key, dropped, "dropped rows with null or duplicate keys"
                );
            }
        } else {
            debug!(table = spec.name, key, "key column absent, dedup skipped");
        }
    }

    write::write_batches(conn, spec.name, &rows, batch_size)?;
    Ok((rows.row_count(), rows.column_count()))
}
