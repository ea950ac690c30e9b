use super::criteria::{FindAllCriteria, FindCriteria};
use super::removable::{IntoRemovals, RemoveTarget};
use crate::error::StoreError;
use crate::identity::PrimaryKey;
use crate::record::{IntoRecords, Record};

/// Read side of a repository.
pub trait ReadRepository {
    /// Snapshot of every record, optionally ordered. No filtering, no paging.
    fn find_all(&self, criteria: &FindAllCriteria) -> Result<Vec<Record>, StoreError>;

    /// Filter, then order, then page.
    fn find(&self, criteria: &FindCriteria) -> Result<Vec<Record>, StoreError>;

    fn find_one(&self, criteria: &FindCriteria) -> Result<Option<Record>, StoreError> {
        Ok(self.find(criteria)?.into_iter().next())
    }

    fn count_all(&self) -> Result<usize, StoreError>;

    /// Number of records passing the filter. Ordering and paging are ignored.
    fn count(&self, criteria: &FindCriteria) -> Result<usize, StoreError>;

    /// Get the record with the given key, or fail with `NotFound`.
    fn get_one<K>(&self, key: K) -> Result<Record, StoreError>
    where
        K: Into<PrimaryKey>;

    /// Get records by key, in input order. Stops at the first missing key.
    fn get<I, K>(&self, keys: I) -> Result<Vec<Record>, StoreError>
    where
        I: IntoIterator<Item = K>,
        K: Into<PrimaryKey>,
        Self: Sized,
    {
        keys.into_iter().map(|key| self.get_one(key)).collect()
    }
}

/// Write side of a repository.
///
/// Batches are processed in input order against the state left by the
/// previous item. A failing item stops the batch; earlier items stay applied.
/// The batch methods default to looping over the single-record ones.
pub trait WriteRepository {
    /// Append one record and return it as stored, identity filled in.
    fn insert_one(&mut self, record: Record) -> Result<Record, StoreError>;

    /// Upsert one record and return it as stored.
    fn put_one(&mut self, record: Record) -> Result<Record, StoreError>;

    /// Merge one partial record and return the merged result.
    fn patch_one(&mut self, partial: Record) -> Result<Record, StoreError>;

    /// Remove the record a target names. Returns whether anything was removed.
    fn remove_one(&mut self, target: RemoveTarget) -> Result<bool, StoreError>;

    /// Append records, generating single-field identities where missing.
    fn insert<R: IntoRecords>(&mut self, records: R) -> Result<(), StoreError>
    where
        Self: Sized,
    {
        for record in records.into_records() {
            self.insert_one(record)?;
        }
        Ok(())
    }

    /// Upsert: replace a record with the same key in place, or append.
    fn put<R: IntoRecords>(&mut self, records: R) -> Result<(), StoreError>
    where
        Self: Sized,
    {
        for record in records.into_records() {
            self.put_one(record)?;
        }
        Ok(())
    }

    /// Merge fields into existing records. Never creates.
    fn patch<R: IntoRecords>(&mut self, partials: R) -> Result<(), StoreError>
    where
        Self: Sized,
    {
        for partial in partials.into_records() {
            self.patch_one(partial)?;
        }
        Ok(())
    }

    /// Remove by key or by record. Unknown keys are ignored; an empty input is an error.
    fn remove<T: IntoRemovals>(&mut self, targets: T) -> Result<(), StoreError>
    where
        Self: Sized,
    {
        let targets = targets.into_removals();
        if targets.is_empty() {
            return Err(StoreError::EmptyInput("remove"));
        }
        for target in targets {
            self.remove_one(target)?;
        }
        Ok(())
    }
}

/// Full repository trait combining both sides.
pub trait Repository: ReadRepository + WriteRepository {}

// Blanket implementation: anything implementing both sides is a Repository
impl<T> Repository for T where T: ReadRepository + WriteRepository {}
