use event_emitter_rs::EventEmitter;
use serde::Serialize;

use super::{RECORDS_INSERTED, RECORDS_PATCHED, RECORDS_PUT, RECORDS_REMOVED};
use crate::error::StoreError;
use crate::identity::PrimaryKey;
use crate::record::{IntoRecords, Record};
use crate::repository::{
    FindAllCriteria, FindCriteria, IntoRemovals, ReadRepository, RemoveTarget, Repository,
    WriteRepository,
};

/// Wraps a repository and emits an event after every successful write.
///
/// Reads pass straight through. A batch emits one event carrying the items
/// the inner repository applied; when an item fails, the items before it are
/// still emitted before the error is returned.
pub struct EmittingRepository<R> {
    inner: R,
    event_emitter: EventEmitter,
}

impl<R: Repository> EmittingRepository<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            event_emitter: EventEmitter::new(),
        }
    }

    /// Register a listener for a write event. Listeners receive the JSON payload.
    pub fn on<F>(&mut self, event: &str, listener: F)
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.event_emitter.on(event, listener);
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    fn emit<T: Serialize>(&mut self, event: &str, applied: &[T]) {
        if applied.is_empty() {
            return;
        }
        let payload = serde_json::to_string(applied).unwrap_or_default();
        self.event_emitter.emit(event, payload);
    }

    /// Apply `items` one at a time, stopping at the first failure, then emit
    /// whatever was applied.
    fn apply_each<I, T, F>(
        &mut self,
        event: &str,
        items: Vec<I>,
        mut apply: F,
    ) -> Result<(), StoreError>
    where
        T: Serialize,
        F: FnMut(&mut R, I) -> Result<T, StoreError>,
    {
        let mut applied = Vec::with_capacity(items.len());
        let mut outcome = Ok(());
        for item in items {
            match apply(&mut self.inner, item) {
                Ok(written) => applied.push(written),
                Err(err) => {
                    outcome = Err(err);
                    break;
                }
            }
        }
        self.emit(event, applied.as_slice());
        outcome
    }
}

impl<R: Repository> ReadRepository for EmittingRepository<R> {
    fn find_all(&self, criteria: &FindAllCriteria) -> Result<Vec<Record>, StoreError> {
        self.inner.find_all(criteria)
    }

    fn find(&self, criteria: &FindCriteria) -> Result<Vec<Record>, StoreError> {
        self.inner.find(criteria)
    }

    fn count_all(&self) -> Result<usize, StoreError> {
        self.inner.count_all()
    }

    fn count(&self, criteria: &FindCriteria) -> Result<usize, StoreError> {
        self.inner.count(criteria)
    }

    fn get_one<K>(&self, key: K) -> Result<Record, StoreError>
    where
        K: Into<PrimaryKey>,
    {
        self.inner.get_one(key)
    }
}

impl<R: Repository> WriteRepository for EmittingRepository<R> {
    fn insert_one(&mut self, record: Record) -> Result<Record, StoreError> {
        let stored = self.inner.insert_one(record)?;
        self.emit(RECORDS_INSERTED, std::slice::from_ref(&stored));
        Ok(stored)
    }

    fn put_one(&mut self, record: Record) -> Result<Record, StoreError> {
        let stored = self.inner.put_one(record)?;
        self.emit(RECORDS_PUT, std::slice::from_ref(&stored));
        Ok(stored)
    }

    fn patch_one(&mut self, partial: Record) -> Result<Record, StoreError> {
        let merged = self.inner.patch_one(partial)?;
        self.emit(RECORDS_PATCHED, std::slice::from_ref(&merged));
        Ok(merged)
    }

    fn remove_one(&mut self, target: RemoveTarget) -> Result<bool, StoreError> {
        let removed = self.inner.remove_one(target.clone())?;
        self.emit(RECORDS_REMOVED, std::slice::from_ref(&target));
        Ok(removed)
    }

    fn insert<T: IntoRecords>(&mut self, records: T) -> Result<(), StoreError> {
        self.apply_each(RECORDS_INSERTED, records.into_records(), |inner, record| {
            inner.insert_one(record)
        })
    }

    fn put<T: IntoRecords>(&mut self, records: T) -> Result<(), StoreError> {
        self.apply_each(RECORDS_PUT, records.into_records(), |inner, record| {
            inner.put_one(record)
        })
    }

    fn patch<T: IntoRecords>(&mut self, partials: T) -> Result<(), StoreError> {
        self.apply_each(RECORDS_PATCHED, partials.into_records(), |inner, partial| {
            inner.patch_one(partial)
        })
    }

    fn remove<T: IntoRemovals>(&mut self, targets: T) -> Result<(), StoreError> {
        let targets = targets.into_removals();
        if targets.is_empty() {
            return Err(StoreError::EmptyInput("remove"));
        }
        self.apply_each(RECORDS_REMOVED, targets, |inner, target| {
            inner.remove_one(target.clone()).map(|_| target)
        })
    }
}
