//! Repository port for project persistence and lookup.

use super::page::{PageRequest, ProjectPage};
use crate::project::domain::{Project, ProjectDraft, ProjectId, ProjectUpdate};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for project repository operations.
pub type ProjectRepositoryResult<T> = Result<T, ProjectRepositoryError>;

/// Project persistence contract.
///
/// Absent records are reported through `Option` and affected-row counts
/// rather than errors; [`ProjectRepositoryError`] is reserved for
/// infrastructure failures.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Finds a project by identifier.
    async fn find_by_id(&self, id: ProjectId) -> ProjectRepositoryResult<Option<Project>>;

    /// Stores a new project and returns it with its store-assigned
    /// identifier.
    ///
    /// Returns `None` when the store declined the write.
    async fn create(&self, draft: &ProjectDraft) -> ProjectRepositoryResult<Option<Project>>;

    /// Upserts a whole project record.
    ///
    /// Returns `None` when the store declined the write.
    async fn save(&self, project: &Project) -> ProjectRepositoryResult<Option<Project>>;

    /// Deletes a project and returns the number of removed rows.
    async fn delete_by_id(&self, id: ProjectId) -> ProjectRepositoryResult<usize>;

    /// Counts stored projects.
    async fn count(&self) -> ProjectRepositoryResult<u64>;

    /// Returns `true` when a project with the identifier exists.
    async fn exists_by_id(&self, id: ProjectId) -> ProjectRepositoryResult<bool>;

    /// Returns every stored project ordered by identifier.
    async fn find_all(&self) -> ProjectRepositoryResult<Option<Vec<Project>>>;

    /// Returns the projects whose identifiers appear in `ids`.
    ///
    /// Unknown identifiers are skipped.
    async fn find_all_by_id_in(
        &self,
        ids: &[ProjectId],
    ) -> ProjectRepositoryResult<Option<Vec<Project>>>;

    /// Returns one page of projects ordered by identifier.
    async fn find_page(&self, request: PageRequest) -> ProjectRepositoryResult<Option<ProjectPage>>;

    /// Overwrites the descriptive fields and status of a project without
    /// touching its membership sets.
    ///
    /// Returns the number of affected rows.
    async fn update_fields(
        &self,
        id: ProjectId,
        update: &ProjectUpdate,
    ) -> ProjectRepositoryResult<usize>;
}

/// Errors returned by project repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ProjectRepositoryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ProjectRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
