use serde::Serialize;

use crate::identity::PrimaryKey;
use crate::record::Record;

/// Something to remove: a raw key, or a record whose key is extracted first.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RemoveTarget {
    Key(PrimaryKey),
    Record(Record),
}

impl From<PrimaryKey> for RemoveTarget {
    fn from(key: PrimaryKey) -> Self {
        RemoveTarget::Key(key)
    }
}

impl From<Record> for RemoveTarget {
    fn from(record: Record) -> Self {
        RemoveTarget::Record(record)
    }
}

/// Trait for types that can be used as remove arguments.
pub trait IntoRemovals {
    fn into_removals(self) -> Vec<RemoveTarget>;
}

// Single key or record
impl IntoRemovals for RemoveTarget {
    fn into_removals(self) -> Vec<RemoveTarget> {
        vec![self]
    }
}

impl IntoRemovals for PrimaryKey {
    fn into_removals(self) -> Vec<RemoveTarget> {
        vec![RemoveTarget::Key(self)]
    }
}

impl IntoRemovals for Record {
    fn into_removals(self) -> Vec<RemoveTarget> {
        vec![RemoveTarget::Record(self)]
    }
}

impl IntoRemovals for &Record {
    fn into_removals(self) -> Vec<RemoveTarget> {
        vec![RemoveTarget::Record(self.clone())]
    }
}

// Single ID (&str)
impl IntoRemovals for &str {
    fn into_removals(self) -> Vec<RemoveTarget> {
        vec![RemoveTarget::Key(self.into())]
    }
}

// Single ID (String)
impl IntoRemovals for String {
    fn into_removals(self) -> Vec<RemoveTarget> {
        vec![RemoveTarget::Key(self.into())]
    }
}

// Vecs
impl IntoRemovals for Vec<RemoveTarget> {
    fn into_removals(self) -> Vec<RemoveTarget> {
        self
    }
}

impl IntoRemovals for Vec<PrimaryKey> {
    fn into_removals(self) -> Vec<RemoveTarget> {
        self.into_iter().map(RemoveTarget::Key).collect()
    }
}

impl IntoRemovals for Vec<Record> {
    fn into_removals(self) -> Vec<RemoveTarget> {
        self.into_iter().map(RemoveTarget::Record).collect()
    }
}

impl IntoRemovals for Vec<&str> {
    fn into_removals(self) -> Vec<RemoveTarget> {
        self.into_iter().map(|id| RemoveTarget::Key(id.into())).collect()
    }
}

// Fixed-size arrays
impl<const N: usize> IntoRemovals for [&str; N] {
    fn into_removals(self) -> Vec<RemoveTarget> {
        self.into_iter().map(|id| RemoveTarget::Key(id.into())).collect()
    }
}

impl<const N: usize> IntoRemovals for [PrimaryKey; N] {
    fn into_removals(self) -> Vec<RemoveTarget> {
        self.into_iter().map(RemoveTarget::Key).collect()
    }
}

impl<const N: usize> IntoRemovals for [Record; N] {
    fn into_removals(self) -> Vec<RemoveTarget> {
        self.into_iter().map(RemoveTarget::Record).collect()
    }
}
