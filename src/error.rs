use std::fmt;

use crate::identity::PrimaryKey;
use crate::record::Record;

#[derive(Debug, Clone, PartialEq)]
pub enum StoreError {
    /// A composite identity field was null, missing or empty at write time.
    MissingIdentity { fields: Vec<String>, record: Record },
    /// No record matched the key, on `get`/`get_one`/`patch`.
    NotFound { fields: Vec<String>, key: PrimaryKey },
    UnsupportedOperation(&'static str),
    EmptyInput(&'static str),
    InvalidSearch { pattern: String, message: String },
    InvalidIdentity(String),
    /// Every generated value for a single identity was already taken.
    IdGenerationExhausted { field: String, attempts: usize },
    LockPoisoned(&'static str),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::MissingIdentity { fields, record } => write!(
                f,
                "records must have composite id fields [{}] populated: {}",
                fields.join(","),
                serde_json::Value::Object(record.clone())
            ),
            StoreError::NotFound { fields, key } => write!(
                f,
                "unable to find item by [{}] matching [{}]",
                fields.join(","),
                key
            ),
            StoreError::UnsupportedOperation(operation) => {
                write!(f, "{} is not supported", operation)
            }
            StoreError::EmptyInput(operation) => {
                write!(f, "nothing specified to {}", operation)
            }
            StoreError::InvalidSearch { pattern, message } => {
                write!(f, "invalid search pattern {:?}: {}", pattern, message)
            }
            StoreError::InvalidIdentity(message) => write!(f, "invalid identity: {}", message),
            StoreError::IdGenerationExhausted { field, attempts } => write!(
                f,
                "unable to generate a unique {} after {} attempts",
                field, attempts
            ),
            StoreError::LockPoisoned(operation) => {
                write!(f, "repository lock poisoned during {}", operation)
            }
        }
    }
}

impl std::error::Error for StoreError {}
