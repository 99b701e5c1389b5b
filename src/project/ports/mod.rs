//! Port contracts for project lifecycle management.
//!
//! Ports define infrastructure-agnostic interfaces used by project services.

pub mod page;
pub mod repository;

pub use page::{PageRequest, ProjectPage};
pub use repository::{ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult};
