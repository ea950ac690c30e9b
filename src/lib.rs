//! In-memory record repository.
//!
//! Records are schema-less JSON objects kept in insertion order and keyed by
//! a single field (`"id"` by default) or a composite list of fields. The read
//! side offers snapshots, case-insensitive search, multi-field ordering and
//! paging; the write side offers insert, upsert (`put`), partial update
//! (`patch`) and removal.
//!
//! ```ignore
//! use record_store::{FindCriteria, InMemoryRepository, ReadRepository};
//!
//! let repo = InMemoryRepository::with_records(records)?;
//! let page = repo.find(&FindCriteria::search("jeff").order_by(["first"]).paged(1, 10))?;
//! ```

mod error;
mod identity;
mod in_memory;
mod record;
mod repository;
mod shared;
pub mod sort;

#[cfg(feature = "emitter")]
pub mod emitter;

pub use error::StoreError;
pub use identity::{
    IdGenerator, Identity, PrimaryKey, SequentialGenerator, UuidGenerator, MAX_ID_ATTEMPTS,
};
pub use in_memory::{InMemoryRepository, InMemoryRepositoryBuilder};
pub use record::{is_value, IntoRecords, Record};
pub use repository::{
    Filter, FindAllCriteria, FindCriteria, IntoRemovals, ReadRepository, RemoveTarget,
    Repository, WriteRepository,
};
pub use shared::SharedRepository;
pub use sort::{FieldSort, SortDirection};

#[cfg(feature = "emitter")]
pub use emitter::EmittingRepository;

// Re-export the EventEmitter from the event_emitter_rs crate
#[cfg(feature = "emitter")]
pub use event_emitter_rs::EventEmitter;
