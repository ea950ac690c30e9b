use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::record::is_value;

/// A concrete primary key: one value, or an ordered list of values for composite identities.
///
/// Two keys are equal iff they have the same shape and pairwise-equal values in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrimaryKey {
    Composite(Vec<Value>),
    Single(Value),
}

impl PrimaryKey {
    /// True when every part of the key holds a value.
    pub fn is_complete(&self) -> bool {
        match self {
            PrimaryKey::Single(value) => is_value(Some(value)),
            PrimaryKey::Composite(values) => {
                !values.is_empty() && values.iter().all(|v| is_value(Some(v)))
            }
        }
    }

    /// Canonical text form, used as the position index key.
    ///
    /// Object keys are sorted so that keys equal as values share one index entry.
    pub(crate) fn index_key(&self) -> String {
        match self {
            PrimaryKey::Single(value) => canonical(value).to_string(),
            PrimaryKey::Composite(values) => {
                Value::Array(values.iter().map(canonical).collect()).to_string()
            }
        }
    }
}

fn canonical(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<_> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.clone(), canonical(v)))
                    .collect(),
            )
        }
        Value::Array(items) => Value::Array(items.iter().map(canonical).collect()),
        other => other.clone(),
    }
}

fn write_value(f: &mut fmt::Formatter<'_>, value: &Value) -> fmt::Result {
    match value {
        Value::String(s) => f.write_str(s),
        other => write!(f, "{}", other),
    }
}

impl fmt::Display for PrimaryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrimaryKey::Single(value) => write_value(f, value),
            PrimaryKey::Composite(values) => {
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write_value(f, value)?;
                }
                Ok(())
            }
        }
    }
}

impl From<Value> for PrimaryKey {
    fn from(value: Value) -> Self {
        PrimaryKey::Single(value)
    }
}

impl From<&Value> for PrimaryKey {
    fn from(value: &Value) -> Self {
        PrimaryKey::Single(value.clone())
    }
}

impl From<&str> for PrimaryKey {
    fn from(value: &str) -> Self {
        PrimaryKey::Single(Value::from(value))
    }
}

impl From<String> for PrimaryKey {
    fn from(value: String) -> Self {
        PrimaryKey::Single(Value::from(value))
    }
}

impl From<&String> for PrimaryKey {
    fn from(value: &String) -> Self {
        PrimaryKey::Single(Value::from(value.as_str()))
    }
}

impl From<i32> for PrimaryKey {
    fn from(value: i32) -> Self {
        PrimaryKey::Single(Value::from(value))
    }
}

impl From<i64> for PrimaryKey {
    fn from(value: i64) -> Self {
        PrimaryKey::Single(Value::from(value))
    }
}

impl From<u64> for PrimaryKey {
    fn from(value: u64) -> Self {
        PrimaryKey::Single(Value::from(value))
    }
}

impl From<Vec<Value>> for PrimaryKey {
    fn from(values: Vec<Value>) -> Self {
        PrimaryKey::Composite(values)
    }
}

impl From<Vec<&str>> for PrimaryKey {
    fn from(values: Vec<&str>) -> Self {
        PrimaryKey::Composite(values.into_iter().map(Value::from).collect())
    }
}

impl<const N: usize> From<[&str; N]> for PrimaryKey {
    fn from(values: [&str; N]) -> Self {
        PrimaryKey::Composite(values.into_iter().map(Value::from).collect())
    }
}

impl<const N: usize> From<[Value; N]> for PrimaryKey {
    fn from(values: [Value; N]) -> Self {
        PrimaryKey::Composite(values.into_iter().collect())
    }
}
