//! Sorting - multi-field, per-field-direction, stable ordering of records.

mod field_sort;
mod sort;

pub use field_sort::{FieldSort, SortDirection};
pub use sort::{
    compare_records, compare_values, sort_ascending, sort_descending, sort_records, sorted,
};
