use std::cmp::Ordering;

use serde_json::Value;

use super::{FieldSort, SortDirection};
use crate::record::Record;

/// Natural ordering of two field values.
///
/// Numbers compare numerically, strings lexicographically, booleans
/// `false < true`. Anything else, including absent fields, nulls and
/// mismatched types, compares equal.
pub fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::Number(x)), Some(Value::Number(y))) => {
            if let (Some(x), Some(y)) = (x.as_i64(), y.as_i64()) {
                x.cmp(&y)
            } else if let (Some(x), Some(y)) = (x.as_u64(), y.as_u64()) {
                x.cmp(&y)
            } else {
                match (x.as_f64(), y.as_f64()) {
                    (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
                    _ => Ordering::Equal,
                }
            }
        }
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        _ => Ordering::Equal,
    }
}

/// Compare two records field by field; the first differing field decides.
pub fn compare_records(a: &Record, b: &Record, order_by: &[FieldSort]) -> Ordering {
    for sort in order_by {
        let ordering = compare_values(a.get(&sort.field), b.get(&sort.field));
        if ordering != Ordering::Equal {
            return match sort.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            };
        }
    }
    Ordering::Equal
}

/// Stable in-place sort. An empty specification leaves the order untouched.
pub fn sort_records(records: &mut [Record], order_by: &[FieldSort]) {
    if order_by.is_empty() {
        return;
    }
    records.sort_by(|a, b| compare_records(a, b, order_by));
}

/// Sorted copy of `records`.
pub fn sorted(records: &[Record], order_by: &[FieldSort]) -> Vec<Record> {
    let mut copy = records.to_vec();
    sort_records(&mut copy, order_by);
    copy
}

pub fn sort_ascending(records: &mut [Record], fields: &[&str]) {
    let order_by: Vec<FieldSort> = fields.iter().map(|f| FieldSort::asc(*f)).collect();
    sort_records(records, &order_by);
}

pub fn sort_descending(records: &mut [Record], fields: &[&str]) {
    let order_by: Vec<FieldSort> = fields.iter().map(|f| FieldSort::desc(*f)).collect();
    sort_records(records, &order_by);
}
