use std::collections::HashMap;
use std::fmt;

use super::query::{apply_paging, SearchMatcher};
use super::InMemoryRepositoryBuilder;
use crate::error::StoreError;
use crate::identity::{IdGenerator, Identity, PrimaryKey, UuidGenerator};
use crate::record::{IntoRecords, Record};
use crate::repository::{
    Filter, FindAllCriteria, FindCriteria, IntoRemovals, ReadRepository, RemoveTarget,
    WriteRepository,
};
use crate::sort::sort_records;

/// In-memory repository of schema-less records.
///
/// Records keep insertion order. Every stored record has a complete primary
/// key; `positions` maps each key to the index of its first occurrence and is
/// rebuilt whenever indices shift.
pub struct InMemoryRepository {
    records: Vec<Record>,
    positions: HashMap<String, usize>,
    identity: Identity,
    generator: Box<dyn IdGenerator>,
}

impl InMemoryRepository {
    /// Empty repository keyed by `"id"`.
    pub fn new() -> Self {
        Self::empty(Identity::default(), Box::new(UuidGenerator))
    }

    pub fn builder() -> InMemoryRepositoryBuilder {
        InMemoryRepositoryBuilder::default()
    }

    /// Repository keyed by `"id"`, seeded with `records`.
    pub fn with_records(records: impl IntoRecords) -> Result<Self, StoreError> {
        Self::builder().records(records).build()
    }

    pub fn with_identity(
        records: impl IntoRecords,
        identity: impl Into<Identity>,
    ) -> Result<Self, StoreError> {
        Self::builder().identity(identity).records(records).build()
    }

    pub(crate) fn empty(identity: Identity, generator: Box<dyn IdGenerator>) -> Self {
        Self {
            records: Vec::new(),
            positions: HashMap::new(),
            identity,
            generator,
        }
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// Stored records in order. Borrowed view, not a snapshot.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Index of the first record with this key.
    pub fn position(&self, key: &PrimaryKey) -> Option<usize> {
        self.positions.get(&key.index_key()).copied()
    }

    pub fn contains(&self, key: &PrimaryKey) -> bool {
        self.position(key).is_some()
    }

    fn ensure(&self, record: &mut Record) -> Result<(), StoreError> {
        let positions = &self.positions;
        self.identity
            .ensure(record, self.generator.as_ref(), |key| {
                positions.contains_key(&key.index_key())
            })
    }

    fn reindex(&mut self) {
        self.positions.clear();
        for (index, record) in self.records.iter().enumerate() {
            let key = self.identity.extract(record).index_key();
            self.positions.entry(key).or_insert(index);
        }
    }

    /// Push a record, filling in its identity. Returns the new record's index.
    pub(crate) fn append(&mut self, mut record: Record) -> Result<usize, StoreError> {
        self.ensure(&mut record)?;
        let index = self.records.len();
        let key = self.identity.extract(&record).index_key();
        self.positions.entry(key).or_insert(index);
        self.records.push(record);
        Ok(index)
    }

    /// Insert a record at `index`, shifting later records right.
    /// An index past the end appends.
    pub fn insert_at(&mut self, mut record: Record, index: usize) -> Result<(), StoreError> {
        self.ensure(&mut record)?;
        let index = index.min(self.records.len());
        self.records.insert(index, record);
        self.reindex();
        Ok(())
    }

    fn not_found(&self, key: PrimaryKey) -> StoreError {
        StoreError::NotFound {
            fields: self.identity.fields(),
            key,
        }
    }

    fn filtered(&self, filter: &Filter) -> Result<Vec<Record>, StoreError> {
        match filter {
            Filter::All => Ok(self.records.clone()),
            Filter::Search { term, field } => {
                let matcher = SearchMatcher::new(term, field.as_deref())?;
                Ok(self
                    .records
                    .iter()
                    .filter(|record| matcher.matches(record))
                    .cloned()
                    .collect())
            }
            Filter::Query(_) => Err(StoreError::UnsupportedOperation("find by query")),
        }
    }
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for InMemoryRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryRepository")
            .field("identity", &self.identity)
            .field("records", &self.records)
            .finish()
    }
}

impl ReadRepository for InMemoryRepository {
    fn find_all(&self, criteria: &FindAllCriteria) -> Result<Vec<Record>, StoreError> {
        let mut records = self.records.clone();
        sort_records(&mut records, &criteria.order_by);
        Ok(records)
    }

    fn find(&self, criteria: &FindCriteria) -> Result<Vec<Record>, StoreError> {
        let mut records = self.filtered(&criteria.filter)?;
        sort_records(&mut records, &criteria.order_by);
        match criteria.paging() {
            Some((page, size)) => Ok(apply_paging(records, page, size)),
            None => Ok(records),
        }
    }

    fn count_all(&self) -> Result<usize, StoreError> {
        Ok(self.records.len())
    }

    fn count(&self, criteria: &FindCriteria) -> Result<usize, StoreError> {
        match &criteria.filter {
            Filter::All => Ok(self.records.len()),
            Filter::Search { term, field } => {
                let matcher = SearchMatcher::new(term, field.as_deref())?;
                Ok(self.records.iter().filter(|r| matcher.matches(r)).count())
            }
            Filter::Query(_) => Err(StoreError::UnsupportedOperation("count by query")),
        }
    }

    fn get_one<K>(&self, key: K) -> Result<Record, StoreError>
    where
        K: Into<PrimaryKey>,
    {
        let key = key.into();
        match self.position(&key) {
            Some(index) => Ok(self.records[index].clone()),
            None => Err(self.not_found(key)),
        }
    }
}

impl WriteRepository for InMemoryRepository {
    fn insert_one(&mut self, record: Record) -> Result<Record, StoreError> {
        let index = self.append(record)?;
        Ok(self.records[index].clone())
    }

    fn put_one(&mut self, record: Record) -> Result<Record, StoreError> {
        let key = self.identity.extract(&record);
        match self.position(&key) {
            // Same key, same slot: the position index stays valid.
            Some(index) => {
                self.records[index] = record.clone();
                Ok(record)
            }
            None => self.insert_one(record),
        }
    }

    fn patch_one(&mut self, partial: Record) -> Result<Record, StoreError> {
        let key = self.identity.extract(&partial);
        let index = match self.position(&key) {
            Some(index) => index,
            None => return Err(self.not_found(key)),
        };
        let target = &mut self.records[index];
        for (field, value) in partial {
            target.insert(field, value);
        }
        Ok(target.clone())
    }

    fn remove_one(&mut self, target: RemoveTarget) -> Result<bool, StoreError> {
        let key = match target {
            RemoveTarget::Key(key) => key,
            RemoveTarget::Record(record) => self.identity.extract(&record),
        };
        match self.position(&key) {
            Some(index) => {
                self.records.remove(index);
                self.reindex();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn insert<R: IntoRecords>(&mut self, records: R) -> Result<(), StoreError> {
        let records = records.into_records();
        let count = records.len();
        for record in records {
            self.append(record)?;
        }
        tracing::debug!(count, total = self.records.len(), "inserted records");
        Ok(())
    }

    fn put<R: IntoRecords>(&mut self, records: R) -> Result<(), StoreError> {
        let before = self.records.len();
        let mut written = 0usize;
        for record in records.into_records() {
            self.put_one(record)?;
            written += 1;
        }
        let appended = self.records.len() - before;
        tracing::debug!(replaced = written - appended, appended, "put records");
        Ok(())
    }

    fn patch<R: IntoRecords>(&mut self, partials: R) -> Result<(), StoreError> {
        let mut patched = 0usize;
        for partial in partials.into_records() {
            self.patch_one(partial)?;
            patched += 1;
        }
        tracing::debug!(patched, "patched records");
        Ok(())
    }

    fn remove<T: IntoRemovals>(&mut self, targets: T) -> Result<(), StoreError> {
        let targets = targets.into_removals();
        if targets.is_empty() {
            return Err(StoreError::EmptyInput("remove"));
        }

        let mut removed = 0usize;
        for target in targets {
            if self.remove_one(target)? {
                removed += 1;
            }
        }
        tracing::debug!(removed, total = self.records.len(), "removed records");
        Ok(())
    }
}
