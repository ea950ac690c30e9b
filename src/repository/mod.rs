mod criteria;
mod removable;
mod repository;

pub use criteria::{Filter, FindAllCriteria, FindCriteria};
pub use removable::{IntoRemovals, RemoveTarget};
pub use repository::{ReadRepository, Repository, WriteRepository};
