// src/load/rowset.rs

use std::collections::HashSet;
use std::io::Read;

use chrono::{NaiveDate, NaiveDateTime};
use csv::ReaderBuilder;

use crate::error::ParseError;

/// A single parsed cell. The type is unknown until runtime and resolved
/// per cell; the database is where it is finally checked against the DDL.
#[derive(Debug, Clone, PartialEq)]
pub enum Datum {
    Null,
    Text(String),
    Integer(i64),
    Decimal(f64),
    Timestamp(NaiveDateTime),
}

impl Datum {
    pub fn is_null(&self) -> bool {
        matches!(self, Datum::Null)
    }

    /// Stable text rendering used as a dedup key. Null has no key.
    pub fn as_key(&self) -> Option<String> {
        match self {
            Datum::Null => None,
            Datum::Text(s) => Some(s.clone()),
            Datum::Integer(v) => Some(v.to_string()),
            Datum::Decimal(v) => Some(v.to_string()),
            Datum::Timestamp(ts) => Some(ts.to_string()),
        }
    }
}

/// One parsed source file: trimmed header names plus rows of typed cells.
/// Created fresh per table per run and discarded after the write.
#[derive(Debug, Default)]
pub struct RowSet {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Datum>>,
}

impl RowSet {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }
}

/// The two date shapes that appear in the Olist exports.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Read a delimited source into a RowSet.
///
/// Header names are whitespace-trimmed. Cells under a name listed in
/// `date_columns` must parse as timestamps; a bad date fails the whole
/// file rather than silently nulling the value. Every other cell falls
/// back through integer and decimal before being kept as text, and empty
/// cells become nulls.
pub fn read_rows<R: Read>(reader: R, date_columns: &[&str]) -> Result<RowSet, ParseError> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(reader);

    let columns: Vec<String> = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let date_indexes: HashSet<usize> = columns
        .iter()
        .enumerate()
        .filter(|(_, name)| date_columns.contains(&name.as_str()))
        .map(|(i, _)| i)
        .collect();

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let mut row = Vec::with_capacity(columns.len());
        for (i, raw) in record.iter().enumerate() {
            let datum = if date_indexes.contains(&i) {
                parse_date(&columns[i], raw)?
            } else {
                infer_datum(raw)
            };
            row.push(datum);
        }
        rows.push(row);
    }

    Ok(RowSet { columns, rows })
}

fn parse_date(column: &str, raw: &str) -> Result<Datum, ParseError> {
    let value = raw.trim();
    if value.is_empty() {
        return Ok(Datum::Null);
    }
    if let Ok(ts) = NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT) {
        return Ok(Datum::Timestamp(ts));
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, DATE_FORMAT) {
        return Ok(Datum::Timestamp(date.and_hms_opt(0, 0, 0).unwrap()));
    }
    Err(ParseError::Date {
        column: column.to_string(),
        value: value.to_string(),
    })
}

fn infer_datum(raw: &str) -> Datum {
    let value = raw.trim();
    if value.is_empty() {
        return Datum::Null;
    }
    if let Ok(n) = value.parse::<i64>() {
        return Datum::Integer(n);
    }
    if let Ok(f) = value.parse::<f64>() {
        return Datum::Decimal(f);
    }
    Datum::Text(raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn headers_are_trimmed() {
        let csv = " order_id ,  status\no1,delivered\n";
        let rows = read_rows(Cursor::new(csv), &[]).unwrap();
        assert_eq!(rows.columns, vec!["order_id", "status"]);
        assert_eq!(rows.column_index("status"), Some(1));
    }

    #[test]
    fn cells_coerce_per_type() {
        let csv = "id,qty,price,city\nc1,3,12.5,\n";
        let rows = read_rows(Cursor::new(csv), &[]).unwrap();
        assert_eq!(
            rows.rows[0],
            vec![
                Datum::Text("c1".into()),
                Datum::Integer(3),
                Datum::Decimal(12.5),
                Datum::Null,
            ]
        );
    }

    #[test]
    fn date_columns_parse_both_shapes() {
        let csv = "id,created\na,2017-10-02 10:56:33\nb,2018-01-18\nc,\n";
        let rows = read_rows(Cursor::new(csv), &["created"]).unwrap();

        let expected = NaiveDate::from_ymd_opt(2017, 10, 2)
            .unwrap()
            .and_hms_opt(10, 56, 33)
            .unwrap();
        assert_eq!(rows.rows[0][1], Datum::Timestamp(expected));

        let midnight = NaiveDate::from_ymd_opt(2018, 1, 18)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(rows.rows[1][1], Datum::Timestamp(midnight));
        assert!(rows.rows[2][1].is_null());
    }

    #[test]
    fn bad_date_fails_the_file() {
        let csv = "id,created\na,2017-10-02 10:56:33\nb,next tuesday\n";
        let err = read_rows(Cursor::new(csv), &["created"]).unwrap_err();
        assert!(matches!(
            err,
            ParseError::Date { ref column, ref value } if column == "created" && value == "next tuesday"
        ));
    }

    #[test]
    fn header_only_file_is_zero_rows() {
        let csv = "id,created\n";
        let rows = read_rows(Cursor::new(csv), &["created"]).unwrap();
        assert_eq!(rows.row_count(), 0);
        assert_eq!(rows.column_count(), 2);
    }

    #[test]
    fn ragged_row_is_a_csv_error() {
        let csv = "id,qty\na,1\nb\n";
        let err = read_rows(Cursor::new(csv), &[]).unwrap_err();
        assert!(matches!(err, ParseError::Csv(_)));
    }
}
