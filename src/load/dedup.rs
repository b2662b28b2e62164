// src/load/dedup.rs

use std::collections::HashSet;

use super::rowset::RowSet;

/// Drop rows whose key cell is null, then keep only the first row seen
/// per key value; file order is authoritative for ties. A missing key
/// column is a no-op, not an error (some sources are key-less by design).
/// Returns the number of rows removed.
pub fn dedup_by_key(rows: &mut RowSet, key_column: &str) -> usize {
    let index = match rows.column_index(key_column) {
        Some(i) => i,
        None => return 0,
    };

    let before = rows.rows.len();
    let mut seen = HashSet::with_capacity(before);
    rows.rows
        .retain(|row| match row.get(index).and_then(|d| d.as_key()) {
            Some(key) => seen.insert(key),
            None => false,
        });
    before - rows.rows.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::load::rowset::Datum;

    fn rowset(keys: &[Option<&str>]) -> RowSet {
        RowSet {
            columns: vec!["customer_id".into(), "city".into()],
            rows: keys
                .iter()
                .map(|k| {
                    vec![
                        match k {
                            Some(v) => Datum::Text((*v).into()),
                            None => Datum::Null,
                        },
                        Datum::Text("x".into()),
                    ]
                })
                .collect(),
        }
    }

    #[test]
    fn null_keys_drop_and_first_duplicate_wins() {
        // null, then a duplicated pair: only the first of the pair survives
        let mut rows = rowset(&[None, Some("c1"), Some("c1")]);
        let dropped = dedup_by_key(&mut rows, "customer_id");
        assert_eq!(dropped, 2);
        assert_eq!(rows.row_count(), 1);
        assert_eq!(rows.rows[0][0], Datum::Text("c1".into()));
    }

    #[test]
    fn distinct_keys_survive_in_order() {
        let mut rows = rowset(&[Some("b"), Some("a"), Some("c")]);
        assert_eq!(dedup_by_key(&mut rows, "customer_id"), 0);
        let keys: Vec<_> = rows.rows.iter().map(|r| r[0].as_key().unwrap()).collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }

    #[test]
    fn missing_key_column_is_a_noop() {
        let mut rows = rowset(&[Some("a"), Some("a"), None]);
        assert_eq!(dedup_by_key(&mut rows, "not_present"), 0);
        assert_eq!(rows.row_count(), 3);
    }

    #[test]
    fn integer_keys_dedup_too() {
        let mut rows = RowSet {
            columns: vec!["zip".into()],
            rows: vec![
                vec![Datum::Integer(1151)],
                vec![Datum::Integer(1151)],
                vec![Datum::Integer(4401)],
            ],
        };
        assert_eq!(dedup_by_key(&mut rows, "zip"), 1);
        assert_eq!(rows.row_count(), 2);
    }
}
