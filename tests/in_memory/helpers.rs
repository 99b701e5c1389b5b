//! Shared test helpers for in-memory repository integration tests.

use project_registry::project::{
    adapters::memory::InMemoryProjectRepository,
    domain::{Project, ProjectDetails, ProjectDraft},
    ports::ProjectRepository,
};
use rstest::fixture;
use std::io;
use tokio::runtime::Runtime;

/// Provides a tokio runtime for async operations in tests.
///
/// # Errors
///
/// Returns an error if the runtime cannot be created.
#[fixture]
pub fn runtime() -> io::Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}

/// Provides a fresh in-memory repository for each test.
#[fixture]
pub fn repo() -> InMemoryProjectRepository {
    InMemoryProjectRepository::new()
}

/// Builds a draft with the given project name.
///
/// # Errors
///
/// Returns an error if the name is empty.
pub fn draft(name: &str) -> Result<ProjectDraft, eyre::Report> {
    let details = ProjectDetails::new(name, "course project", "author@test.com", "http://x")?;
    Ok(ProjectDraft::new(details))
}

/// Stores one draft per name and returns the stored projects.
///
/// # Errors
///
/// Returns an error if a draft is invalid or the store declines a write.
pub fn store_projects(
    rt: &Runtime,
    repo: &InMemoryProjectRepository,
    names: &[&str],
) -> Result<Vec<Project>, eyre::Report> {
    names
        .iter()
        .map(|name| {
            let stored = rt.block_on(repo.create(&draft(name)?))?;
            stored.ok_or_else(|| eyre::eyre!("store declined project {name}"))
        })
        .collect()
}
