//! In-memory adapters for project lifecycle persistence.

mod repository;

pub use repository::InMemoryProjectRepository;
