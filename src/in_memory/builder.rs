use super::InMemoryRepository;
use crate::error::StoreError;
use crate::identity::{IdGenerator, Identity, UuidGenerator};
use crate::record::{IntoRecords, Record};

/// Construction-time options for [`InMemoryRepository`].
pub struct InMemoryRepositoryBuilder {
    identity: Identity,
    generator: Box<dyn IdGenerator>,
    records: Vec<Record>,
}

impl Default for InMemoryRepositoryBuilder {
    fn default() -> Self {
        Self {
            identity: Identity::default(),
            generator: Box::new(UuidGenerator),
            records: Vec::new(),
        }
    }
}

impl InMemoryRepositoryBuilder {
    pub fn identity(mut self, identity: impl Into<Identity>) -> Self {
        self.identity = identity.into();
        self
    }

    pub fn id_generator(mut self, generator: impl IdGenerator + 'static) -> Self {
        self.generator = Box::new(generator);
        self
    }

    /// Initial records, kept in the given order.
    pub fn records(mut self, records: impl IntoRecords) -> Self {
        self.records.extend(records.into_records());
        self
    }

    /// Validates the identity and ensures every initial record has one.
    pub fn build(self) -> Result<InMemoryRepository, StoreError> {
        self.identity.validate()?;
        let mut repo = InMemoryRepository::empty(self.identity, self.generator);
        for record in self.records {
            repo.append(record)?;
        }
        Ok(repo)
    }
}
