//! Records - schema-less entries held by a repository.

use serde_json::{Map, Value};

/// A single schema-less record: field name to JSON value, in insertion order.
pub type Record = Map<String, Value>;

/// Returns true if the field holds something other than null or an empty string.
///
/// Absent fields are not values either.
pub fn is_value(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}

/// Trait for types that can be written to a repository as one or more records.
pub trait IntoRecords {
    fn into_records(self) -> Vec<Record>;
}

// Single record
impl IntoRecords for Record {
    fn into_records(self) -> Vec<Record> {
        vec![self]
    }
}

// Vec of records
impl IntoRecords for Vec<Record> {
    fn into_records(self) -> Vec<Record> {
        self
    }
}

// Fixed-size arrays
impl<const N: usize> IntoRecords for [Record; N] {
    fn into_records(self) -> Vec<Record> {
        self.into_iter().collect()
    }
}

// Borrowed single record
impl IntoRecords for &Record {
    fn into_records(self) -> Vec<Record> {
        vec![self.clone()]
    }
}

// Slice of records
impl IntoRecords for &[Record] {
    fn into_records(self) -> Vec<Record> {
        self.to_vec()
    }
}
