// src/error.rs

use std::path::PathBuf;
use thiserror::Error;

/// Invalid static table configuration. Fatal at startup.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("duplicate table name `{table}`")]
    DuplicateTable { table: String },

    #[error("table `{table}` declares primary key `{column}` but its DDL has no such column")]
    UnknownPrimaryKey { table: String, column: String },
}

/// Failure while dropping and recreating the schema. Fatal to the whole
/// run; the transaction it happened in is rolled back.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("schema transaction failed")]
    Transaction(#[source] duckdb::Error),

    #[error("failed to recreate `{table}`")]
    Table {
        table: String,
        #[source]
        source: duckdb::Error,
    },
}

/// Why one table's load did not complete. Recorded per table; never
/// propagated past the loader boundary.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("source file missing: {}", .path.display())]
    SourceMissing { path: PathBuf },

    #[error("failed to parse {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("write to `{table}` failed at batch {batch}")]
    Write {
        table: String,
        batch: usize,
        #[source]
        source: duckdb::Error,
    },
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("column `{column}` has unparseable date {value:?}")]
    Date { column: String, value: String },
}
