//! InMemoryRepository - Vec-backed record repository with a key position index.

mod builder;
mod query;
mod repository;

pub use builder::InMemoryRepositoryBuilder;
pub use repository::InMemoryRepository;
