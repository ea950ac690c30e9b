use regex::{Regex, RegexBuilder};

use crate::error::StoreError;
use crate::record::Record;
use serde_json::Value;

/// Case-insensitive regex search over a whole record or a single field.
pub(crate) struct SearchMatcher<'a> {
    regex: Regex,
    field: Option<&'a str>,
}

impl<'a> SearchMatcher<'a> {
    pub(crate) fn new(term: &str, field: Option<&'a str>) -> Result<Self, StoreError> {
        let regex = RegexBuilder::new(term)
            .case_insensitive(true)
            .build()
            .map_err(|e| StoreError::InvalidSearch {
                pattern: term.to_string(),
                message: e.to_string(),
            })?;
        Ok(Self { regex, field })
    }

    pub(crate) fn matches(&self, record: &Record) -> bool {
        let text = match self.field.filter(|f| !f.is_empty()) {
            Some(field) => field_text(record.get(field)),
            None => serde_json::to_string(record).unwrap_or_default(),
        };
        self.regex.is_match(&text)
    }
}

/// Text of a single field: strings as-is, other values as JSON, absent as empty.
fn field_text(value: Option<&Value>) -> String {
    match value {
        None => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Keep the one-based `page` of `size` records. Out-of-range pages are empty.
pub(crate) fn apply_paging(records: Vec<Record>, page: usize, size: usize) -> Vec<Record> {
    let start = page.saturating_sub(1).saturating_mul(size);
    records.into_iter().skip(start).take(size).collect()
}
