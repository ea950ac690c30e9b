//! Emitter - change notifications for repository writes.
//!
//! ## Example
//!
//! ```ignore
//! use record_store::{EmittingRepository, InMemoryRepository, WriteRepository};
//! use record_store::emitter::RECORDS_INSERTED;
//!
//! let mut repo = EmittingRepository::new(InMemoryRepository::new());
//! repo.on(RECORDS_INSERTED, |payload| println!("inserted: {}", payload));
//! repo.insert(record)?;
//! ```

mod repository;

pub use repository::EmittingRepository;

/// Payload: JSON array of the appended records, identities filled in.
pub const RECORDS_INSERTED: &str = "records_inserted";
/// Payload: JSON array of the records as stored.
pub const RECORDS_PUT: &str = "records_put";
/// Payload: JSON array of the patched records after merging.
pub const RECORDS_PATCHED: &str = "records_patched";
/// Payload: JSON array of the keys or records processed for removal.
pub const RECORDS_REMOVED: &str = "records_removed";
