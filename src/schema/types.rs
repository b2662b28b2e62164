// src/schema/types.rs

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::RegistryError;

/// Static descriptor of one target table: its DDL plus ingestion policy.
/// Defined once at startup and immutable for the run.
#[derive(Debug, Clone)]
pub struct TableSpec {
    /// Table name as created in the database.
    pub name: &'static str,
    /// File name of the CSV export, relative to the configured data dir.
    pub source_file: &'static str,
    /// Full CREATE TABLE statement.
    pub create: &'static str,
    /// Columns parsed as timestamps during ingest.
    pub date_columns: &'static [&'static str],
    /// Single-column key used for dedup. None means the source is
    /// key-less and dedup is skipped.
    pub primary_key: Option<&'static str>,
}

impl TableSpec {
    pub fn source_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(self.source_file)
    }

    /// Column names declared by the CREATE statement, in order.
    /// Constraint clauses (PRIMARY KEY, etc.) are not columns.
    pub fn ddl_columns(&self) -> Vec<String> {
        ddl_columns(self.create)
    }
}

/// Ordered set of table specs. Order drives load and log order only;
/// correctness does not depend on it.
#[derive(Debug)]
pub struct Registry {
    specs: Vec<TableSpec>,
}

impl Registry {
    /// Validate once at construction: names unique, and every declared
    /// primary key must exist among its DDL's columns.
    pub fn new(specs: Vec<TableSpec>) -> Result<Self, RegistryError> {
        let mut seen = HashSet::new();
        for spec in &specs {
            if !seen.insert(spec.name) {
                return Err(RegistryError::DuplicateTable {
                    table: spec.name.to_string(),
                });
            }
            if let Some(key) = spec.primary_key {
                if !spec.ddl_columns().iter().any(|c| c == key) {
                    return Err(RegistryError::UnknownPrimaryKey {
                        table: spec.name.to_string(),
                        column: key.to_string(),
                    });
                }
            }
        }
        Ok(Self { specs })
    }

    pub fn iter(&self) -> impl Iterator<Item = &TableSpec> {
        self.specs.iter()
    }

    pub fn get(&self, name: &str) -> Option<&TableSpec> {
        self.specs.iter().find(|s| s.name == name)
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

/// Pull column names out of a CREATE TABLE body: split the parenthesized
/// list on top-level commas, take the first token of each entry, and skip
/// table-level constraint clauses.
fn ddl_columns(create: &str) -> Vec<String> {
    let open = match create.find('(') {
        Some(i) => i,
        None => return Vec::new(),
    };
    let close = match create.rfind(')') {
        Some(i) => i,
        None => return Vec::new(),
    };
    if close <= open {
        return Vec::new();
    }
    let body = &create[open + 1..close];

    let mut columns = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    for (i, c) in body.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                push_column(&body[start..i], &mut columns);
                start = i + 1;
            }
            _ => {}
        }
    }
    push_column(&body[start..], &mut columns);
    columns
}

fn push_column(entry: &str, out: &mut Vec<String>) {
    const CONSTRAINT_KEYWORDS: &[&str] =
        &["PRIMARY", "FOREIGN", "UNIQUE", "CONSTRAINT", "CHECK"];

    let first = match entry.split_whitespace().next() {
        Some(token) => token,
        None => return,
    };
    if CONSTRAINT_KEYWORDS
        .iter()
        .any(|k| first.eq_ignore_ascii_case(k))
    {
        return;
    }
    out.push(first.trim_matches('"').to_string());
}
