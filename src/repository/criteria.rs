use serde::{Deserialize, Serialize};

use crate::sort::FieldSort;

/// Which records a find or count considers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    /// Case-insensitive regex match against the whole record's JSON text,
    /// or against one field's text when `field` is set. A record without
    /// that field is searched as empty text, so only patterns matching `""`
    /// select it.
    Search { term: String, field: Option<String> },
    /// Structured query. Reserved; repositories reject it.
    Query(String),
}

/// Criteria for `find_all`: ordering only.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindAllCriteria {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub order_by: Vec<FieldSort>,
}

impl FindAllCriteria {
    pub fn order_by<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<FieldSort>,
    {
        Self {
            order_by: fields.into_iter().map(Into::into).collect(),
        }
    }
}

/// Criteria for `find`, `find_one` and `count`.
///
/// The filter is applied first, then ordering, then paging. Paging needs
/// both `page` and `size` to be at least 1; otherwise it is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "RawFindCriteria", into = "RawFindCriteria")]
pub struct FindCriteria {
    pub page: Option<usize>,
    pub size: Option<usize>,
    pub order_by: Vec<FieldSort>,
    pub filter: Filter,
}

impl FindCriteria {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn search(term: impl Into<String>) -> Self {
        Self {
            filter: Filter::Search {
                term: term.into(),
                field: None,
            },
            ..Self::default()
        }
    }

    pub fn query(query: impl Into<String>) -> Self {
        Self {
            filter: Filter::Query(query.into()),
            ..Self::default()
        }
    }

    /// Restrict a search to one field. No effect on other filters.
    pub fn in_field(mut self, name: impl Into<String>) -> Self {
        if let Filter::Search { field, .. } = &mut self.filter {
            *field = Some(name.into());
        }
        self
    }

    pub fn order_by<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<FieldSort>,
    {
        self.order_by = fields.into_iter().map(Into::into).collect();
        self
    }

    /// One-based page number and page size.
    pub fn paged(mut self, page: usize, size: usize) -> Self {
        self.page = Some(page);
        self.size = Some(size);
        self
    }

    /// `(page, size)` when both are present and non-zero.
    pub fn paging(&self) -> Option<(usize, usize)> {
        match (self.page, self.size) {
            (Some(page), Some(size)) if page >= 1 && size >= 1 => Some((page, size)),
            _ => None,
        }
    }
}

/// Wire shape of [`FindCriteria`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFindCriteria {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    page: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    size: Option<usize>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    order_by: Vec<FieldSort>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    query: Option<String>,
}

impl From<RawFindCriteria> for FindCriteria {
    fn from(raw: RawFindCriteria) -> Self {
        let filter = match (raw.query, raw.search) {
            (Some(query), _) => Filter::Query(query),
            (None, Some(term)) => Filter::Search {
                term,
                field: raw.field,
            },
            (None, None) => Filter::All,
        };
        FindCriteria {
            page: raw.page,
            size: raw.size,
            order_by: raw.order_by,
            filter,
        }
    }
}

impl From<FindCriteria> for RawFindCriteria {
    fn from(criteria: FindCriteria) -> Self {
        let mut raw = RawFindCriteria {
            page: criteria.page,
            size: criteria.size,
            order_by: criteria.order_by,
            ..RawFindCriteria::default()
        };
        match criteria.filter {
            Filter::All => {}
            Filter::Search { term, field } => {
                raw.search = Some(term);
                raw.field = field;
            }
            Filter::Query(query) => raw.query = Some(query),
        }
        raw
    }
}
