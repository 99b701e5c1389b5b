//! Shared world state for project membership BDD scenarios.

use std::sync::Arc;

use project_registry::project::{
    adapters::memory::InMemoryProjectRepository,
    services::{ProjectLifecycleService, ProjectServiceError},
};
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestProjectService = ProjectLifecycleService<InMemoryProjectRepository>;

/// Scenario world for project membership behaviour tests.
pub struct ProjectMembershipWorld {
    pub service: TestProjectService,
    pub project_id: Option<i64>,
    pub last_result: Option<Result<(), ProjectServiceError>>,
}

impl ProjectMembershipWorld {
    /// Creates a world backed by an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            service: ProjectLifecycleService::new(Arc::new(InMemoryProjectRepository::new())),
            project_id: None,
            last_result: None,
        }
    }

    /// Returns the identifier of the scenario's project.
    ///
    /// # Errors
    ///
    /// Returns an error when no project has been created yet.
    pub fn project_id(&self) -> Result<i64, eyre::Report> {
        self.project_id
            .ok_or_else(|| eyre::eyre!("missing project in scenario world"))
    }
}

impl Default for ProjectMembershipWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ProjectMembershipWorld {
    ProjectMembershipWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
