use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    #[serde(rename = "asc", alias = "ascending")]
    Ascending,
    #[serde(rename = "desc", alias = "descending")]
    Descending,
}

/// One step of a sort specification.
///
/// Deserializes from a bare field name (ascending) or from
/// `{"field": .., "direction": ..}` with the direction optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawFieldSort")]
pub struct FieldSort {
    pub field: String,
    pub direction: SortDirection,
}

impl FieldSort {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Ascending,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Descending,
        }
    }
}

impl From<&str> for FieldSort {
    fn from(field: &str) -> Self {
        FieldSort::asc(field)
    }
}

impl From<String> for FieldSort {
    fn from(field: String) -> Self {
        FieldSort::asc(field)
    }
}

impl From<(&str, SortDirection)> for FieldSort {
    fn from((field, direction): (&str, SortDirection)) -> Self {
        Self {
            field: field.to_string(),
            direction,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawFieldSort {
    Field(String),
    Info {
        field: String,
        #[serde(default)]
        direction: SortDirection,
    },
}

impl From<RawFieldSort> for FieldSort {
    fn from(raw: RawFieldSort) -> Self {
        match raw {
            RawFieldSort::Field(field) => FieldSort::asc(field),
            RawFieldSort::Info { field, direction } => FieldSort { field, direction },
        }
    }
}
