// src/schema/install.rs

use duckdb::Connection;
use tracing::info;

use crate::error::SchemaError;

use super::types::Registry;

/// Drop and recreate every registered table inside one transaction.
///
/// Full-refresh semantics: any pre-existing rows in these tables are
/// unconditionally lost on success. On the first failing DDL the whole
/// transaction rolls back and nothing is changed.
pub fn install_all(conn: &mut Connection, registry: &Registry) -> Result<(), SchemaError> {
    info!(tables = registry.len(), "dropping and recreating all tables");

    let tx = conn.transaction().map_err(SchemaError::Transaction)?;
    for spec in registry.iter() {
        tx.execute_batch(&format!(
            "DROP TABLE IF EXISTS \"{}\" CASCADE;",
            spec.name
        ))
        .and_then(|_| tx.execute_batch(spec.create))
        .map_err(|source| SchemaError::Table {
            table: spec.name.to_string(),
            source,
        })?;
    }
    tx.commit().map_err(SchemaError::Transaction)?;

    info!("all tables recreated");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{builtin, types::TableSpec};
    use duckdb::params;

    fn small_registry() -> Registry {
        Registry::new(vec![TableSpec {
            name: "customers",
            source_file: "customers.csv",
            create: "CREATE TABLE customers (customer_id TEXT PRIMARY KEY, city TEXT);",
            date_columns: &[],
            primary_key: Some("customer_id"),
        }])
        .unwrap()
    }

    #[test]
    fn install_is_idempotent() {
        let mut conn = Connection::open_in_memory().unwrap();
        let registry = small_registry();

        install_all(&mut conn, &registry).unwrap();
        install_all(&mut conn, &registry).unwrap();

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM customers;", [], |r| r.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn reinstall_discards_existing_rows() {
        let mut conn = Connection::open_in_memory().unwrap();
        let registry = small_registry();

        install_all(&mut conn, &registry).unwrap();
        conn.execute(
            "INSERT INTO customers VALUES (?, ?);",
            params!["c1", "sao paulo"],
        )
        .unwrap();

        install_all(&mut conn, &registry).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM customers;", [], |r| r.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn failed_install_rolls_back_everything() {
        let mut conn = Connection::open_in_memory().unwrap();
        install_all(&mut conn, &small_registry()).unwrap();
        conn.execute("INSERT INTO customers VALUES (?, ?);", params!["c1", "recife"])
            .unwrap();

        let broken = Registry::new(vec![
            TableSpec {
                name: "customers",
                source_file: "customers.csv",
                create: "CREATE TABLE customers (customer_id TEXT PRIMARY KEY, city TEXT);",
                date_columns: &[],
                primary_key: Some("customer_id"),
            },
            TableSpec {
                name: "broken",
                source_file: "broken.csv",
                create: "CREATE TABLE broken (id NOT_A_TYPE);",
                date_columns: &[],
                primary_key: None,
            },
        ])
        .unwrap();

        let err = install_all(&mut conn, &broken).unwrap_err();
        assert!(matches!(
            err,
            SchemaError::Table { ref table, .. } if table == "broken"
        ));

        // the drop of `customers` inside the failed transaction must not stick
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM customers;", [], |r| r.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn builtin_schema_installs() {
        let mut conn = Connection::open_in_memory().unwrap();
        let registry = builtin().unwrap();
        install_all(&mut conn, &registry).unwrap();

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM olist_orders;", [], |r| r.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }
}
