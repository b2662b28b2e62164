// src/load/write.rs

use duckdb::types::{TimeUnit, Value};
use duckdb::{params_from_iter, Connection};
use tracing::debug;

use crate::error::LoadError;

use super::rowset::{Datum, RowSet};

/// Append every row of `rows` to an already-created table in transactional
/// batches of `batch_size`. Each batch commits or rolls back as a unit; a
/// failed batch abandons the remainder but leaves earlier batches durable.
pub fn write_batches(
    conn: &mut Connection,
    table: &str,
    rows: &RowSet,
    batch_size: usize,
) -> Result<(), LoadError> {
    if rows.rows.is_empty() {
        return Ok(());
    }

    let insert = insert_statement(table, &rows.columns);
    let batch_size = batch_size.max(1);

    for (batch, chunk) in rows.rows.chunks(batch_size).enumerate() {
        write_batch(conn, &insert, chunk).map_err(|source| LoadError::Write {
            table: table.to_string(),
            batch,
            source,
        })?;
        debug!(table, batch, rows = chunk.len(), "batch committed");
    }

    Ok(())
}

fn write_batch(conn: &mut Connection, insert: &str, chunk: &[Vec<Datum>]) -> duckdb::Result<()> {
    let tx = conn.transaction()?;
    {
        let mut stmt = tx.prepare(insert)?;
        for row in chunk {
            stmt.execute(params_from_iter(row.iter().map(bind_value)))?;
        }
    }
    tx.commit()?;
    Ok(())
}

/// Column-addressed insert so a header/DDL mismatch fails here instead of
/// silently landing values in the wrong columns.
fn insert_statement(table: &str, columns: &[String]) -> String {
    let names = columns
        .iter()
        .map(|c| format!("\"{}\"", c))
        .collect::<Vec<_>>()
        .join(", ");
    let placeholders = vec!["?"; columns.len()].join(", ");
    format!(
        "INSERT INTO \"{}\" ({}) VALUES ({})",
        table, names, placeholders
    )
}

fn bind_value(datum: &Datum) -> Value {
    match datum {
        Datum::Null => Value::Null,
        Datum::Text(s) => Value::Text(s.clone()),
        Datum::Integer(v) => Value::BigInt(*v),
        Datum::Decimal(v) => Value::Double(*v),
        Datum::Timestamp(ts) => {
            Value::Timestamp(TimeUnit::Microsecond, ts.and_utc().timestamp_micros())
        }
    }
}
