//! SharedRepository - lock-guarded handle for using one repository from many threads.

use std::sync::{Arc, RwLock};

use crate::error::StoreError;
use crate::identity::PrimaryKey;
use crate::in_memory::InMemoryRepository;
use crate::record::{IntoRecords, Record};
use crate::repository::{
    FindAllCriteria, FindCriteria, IntoRemovals, ReadRepository, RemoveTarget, WriteRepository,
};

/// Clone-friendly handle around an [`InMemoryRepository`] behind one `RwLock`.
///
/// Reads share the lock, writes take it exclusively, so every call is atomic
/// with respect to other handles.
#[derive(Clone, Debug)]
pub struct SharedRepository {
    inner: Arc<RwLock<InMemoryRepository>>,
}

impl SharedRepository {
    pub fn new(repo: InMemoryRepository) -> Self {
        Self {
            inner: Arc::new(RwLock::new(repo)),
        }
    }

    fn read<T>(
        &self,
        operation: &'static str,
        f: impl FnOnce(&InMemoryRepository) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let repo = self
            .inner
            .read()
            .map_err(|_| StoreError::LockPoisoned(operation))?;
        f(&repo)
    }

    fn write<T>(
        &self,
        operation: &'static str,
        f: impl FnOnce(&mut InMemoryRepository) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let mut repo = self
            .inner
            .write()
            .map_err(|_| StoreError::LockPoisoned(operation))?;
        f(&mut repo)
    }
}

impl Default for SharedRepository {
    fn default() -> Self {
        Self::new(InMemoryRepository::new())
    }
}

impl From<InMemoryRepository> for SharedRepository {
    fn from(repo: InMemoryRepository) -> Self {
        Self::new(repo)
    }
}

impl ReadRepository for SharedRepository {
    fn find_all(&self, criteria: &FindAllCriteria) -> Result<Vec<Record>, StoreError> {
        self.read("find_all", |repo| repo.find_all(criteria))
    }

    fn find(&self, criteria: &FindCriteria) -> Result<Vec<Record>, StoreError> {
        self.read("find", |repo| repo.find(criteria))
    }

    fn count_all(&self) -> Result<usize, StoreError> {
        self.read("count_all", |repo| repo.count_all())
    }

    fn count(&self, criteria: &FindCriteria) -> Result<usize, StoreError> {
        self.read("count", |repo| repo.count(criteria))
    }

    fn get_one<K>(&self, key: K) -> Result<Record, StoreError>
    where
        K: Into<PrimaryKey>,
    {
        self.read("get_one", |repo| repo.get_one(key))
    }

    fn get<I, K>(&self, keys: I) -> Result<Vec<Record>, StoreError>
    where
        I: IntoIterator<Item = K>,
        K: Into<PrimaryKey>,
    {
        self.read("get", |repo| repo.get(keys))
    }
}

impl WriteRepository for SharedRepository {
    fn insert_one(&mut self, record: Record) -> Result<Record, StoreError> {
        self.write("insert", |repo| repo.insert_one(record))
    }

    fn put_one(&mut self, record: Record) -> Result<Record, StoreError> {
        self.write("put", |repo| repo.put_one(record))
    }

    fn patch_one(&mut self, partial: Record) -> Result<Record, StoreError> {
        self.write("patch", |repo| repo.patch_one(partial))
    }

    fn remove_one(&mut self, target: RemoveTarget) -> Result<bool, StoreError> {
        self.write("remove", |repo| repo.remove_one(target))
    }

    // Batches hold the lock for every item.
    fn insert<R: IntoRecords>(&mut self, records: R) -> Result<(), StoreError> {
        self.write("insert", |repo| repo.insert(records))
    }

    fn put<R: IntoRecords>(&mut self, records: R) -> Result<(), StoreError> {
        self.write("put", |repo| repo.put(records))
    }

    fn patch<R: IntoRecords>(&mut self, partials: R) -> Result<(), StoreError> {
        self.write("patch", |repo| repo.patch(partials))
    }

    fn remove<T: IntoRemovals>(&mut self, targets: T) -> Result<(), StoreError> {
        self.write("remove", |repo| repo.remove(targets))
    }
}
