use anyhow::{Context, Result};
use duckdb::Connection;
use olistloader::{
    config::Config,
    load::LoadOutcome,
    pipeline, schema,
};
use std::{env, path::Path};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();
    info!("startup");

    // ─── 2) configuration ────────────────────────────────────────────
    let config = match env::args().nth(1) {
        Some(path) => Config::from_file(Path::new(&path))?,
        None => Config::default(),
    };
    info!(
        database = %config.database.display(),
        data_dir = %config.data_dir.display(),
        batch_size = config.batch_size,
        "configured"
    );

    // ─── 3) registry + connection ────────────────────────────────────
    let registry = schema::builtin().context("building table registry")?;
    let mut conn = Connection::open(&config.database)
        .with_context(|| format!("opening database {}", config.database.display()))?;

    // ─── 4) run the pipeline ─────────────────────────────────────────
    let results = pipeline::run(&mut conn, &registry, &config)?;

    // ─── 5) summary ──────────────────────────────────────────────────
    let failed = results.iter().filter(|r| !r.is_loaded()).count();
    info!(tables = results.len(), failed, "run complete");
    for result in &results {
        match &result.outcome {
            LoadOutcome::Loaded { rows, columns } => {
                info!("{} → {} rows, {} columns", result.table, rows, columns);
            }
            LoadOutcome::Failed(err) => {
                error!("{} → {}", result.table, err);
            }
        }
    }

    Ok(())
}
