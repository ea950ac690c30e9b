//! Identity - which fields form a record's primary key, and how keys are
//! extracted, matched and filled in.
//!
//! A single-field identity (`"id"` by default) generates a value for records
//! that arrive without one. A composite identity never generates: every
//! field must already be populated.

mod generator;
mod key;

pub use generator::{IdGenerator, SequentialGenerator, UuidGenerator};
pub use key::PrimaryKey;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::StoreError;
use crate::record::{is_value, Record};

/// Generated values tried before giving up on a unique single id.
pub const MAX_ID_ATTEMPTS: usize = 64;

/// The field name, or ordered field names, designating a record's primary key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identity {
    Single(String),
    Composite(Vec<String>),
}

impl Default for Identity {
    fn default() -> Self {
        Identity::Single("id".to_string())
    }
}

impl Identity {
    pub fn single(field: impl Into<String>) -> Self {
        Identity::Single(field.into())
    }

    pub fn composite<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Identity::Composite(fields.into_iter().map(Into::into).collect())
    }

    pub(crate) fn validate(&self) -> Result<(), StoreError> {
        match self {
            Identity::Single(field) if field.is_empty() => Err(StoreError::InvalidIdentity(
                "identity field name is empty".into(),
            )),
            Identity::Composite(fields) if fields.is_empty() => Err(
                StoreError::InvalidIdentity("composite identity has no fields".into()),
            ),
            Identity::Composite(fields) if fields.iter().any(|f| f.is_empty()) => Err(
                StoreError::InvalidIdentity("composite identity has an empty field name".into()),
            ),
            _ => Ok(()),
        }
    }

    /// Field names in key order.
    pub fn fields(&self) -> Vec<String> {
        match self {
            Identity::Single(field) => vec![field.clone()],
            Identity::Composite(fields) => fields.clone(),
        }
    }

    pub fn is_composite(&self) -> bool {
        matches!(self, Identity::Composite(_))
    }

    /// Extract the primary key from a record. Missing fields come back as null.
    pub fn extract(&self, record: &Record) -> PrimaryKey {
        match self {
            Identity::Single(field) => {
                PrimaryKey::Single(record.get(field).cloned().unwrap_or(Value::Null))
            }
            Identity::Composite(fields) => PrimaryKey::Composite(
                fields
                    .iter()
                    .map(|f| record.get(f).cloned().unwrap_or(Value::Null))
                    .collect(),
            ),
        }
    }

    /// True if the record's key equals `key`.
    pub fn matches(&self, record: &Record, key: &PrimaryKey) -> bool {
        self.extract(record) == *key
    }

    /// Make sure the record carries a complete identity.
    ///
    /// Single identities get a fresh value from `generator`, retried while
    /// `taken` reports it as already used, up to [`MAX_ID_ATTEMPTS`] times.
    /// Composite identities fail instead.
    pub fn ensure<F>(
        &self,
        record: &mut Record,
        generator: &dyn IdGenerator,
        taken: F,
    ) -> Result<(), StoreError>
    where
        F: Fn(&PrimaryKey) -> bool,
    {
        match self {
            Identity::Single(field) => {
                if is_value(record.get(field)) {
                    return Ok(());
                }
                let value = (0..MAX_ID_ATTEMPTS)
                    .map(|_| Value::String(generator.generate()))
                    .find(|candidate| !taken(&PrimaryKey::Single(candidate.clone())))
                    .ok_or_else(|| StoreError::IdGenerationExhausted {
                        field: field.clone(),
                        attempts: MAX_ID_ATTEMPTS,
                    })?;
                tracing::trace!(field = %field, id = %value, "generated identity");
                record.insert(field.clone(), value);
                Ok(())
            }
            Identity::Composite(fields) => {
                if fields.iter().all(|f| is_value(record.get(f))) {
                    Ok(())
                } else {
                    Err(StoreError::MissingIdentity {
                        fields: fields.clone(),
                        record: record.clone(),
                    })
                }
            }
        }
    }
}

impl From<&str> for Identity {
    fn from(field: &str) -> Self {
        Identity::Single(field.to_string())
    }
}

impl From<String> for Identity {
    fn from(field: String) -> Self {
        Identity::Single(field)
    }
}

impl From<Vec<&str>> for Identity {
    fn from(fields: Vec<&str>) -> Self {
        Identity::composite(fields)
    }
}

impl From<Vec<String>> for Identity {
    fn from(fields: Vec<String>) -> Self {
        Identity::Composite(fields)
    }
}

impl<const N: usize> From<[&str; N]> for Identity {
    fn from(fields: [&str; N]) -> Self {
        Identity::composite(fields)
    }
}
