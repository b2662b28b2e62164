// src/config.rs

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Runtime settings for one load run. Built once at startup and passed
/// down by reference; nothing in the pipeline reads ambient state.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// DuckDB database file to (re)build.
    pub database: PathBuf,
    /// Directory holding the CSV exports.
    pub data_dir: PathBuf,
    /// Rows per insert transaction.
    pub batch_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: PathBuf::from("olist.duckdb"),
            data_dir: PathBuf::from("data"),
            batch_size: 5000,
        }
    }
}

impl Config {
    /// Read settings from a YAML file; absent keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Config = serde_yaml::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }
}
