//! Service layer for project creation, lookup, update and deletion.

use super::error::{BadRequestCause, NotFoundCause, ProjectServiceError, ProjectServiceResult};
use crate::project::{
    domain::{Project, ProjectDraft, ProjectId, ProjectStatus, ProjectUpdate},
    ports::{ProjectPage, ProjectRepository},
    validation::rules,
};
use std::sync::Arc;
use tracing::{info, warn};

/// Request payload for creating a project.
///
/// Any supplied status is ignored: new projects always start in
/// [`ProjectStatus::Preparation`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProjectRequest {
    project_name: String,
    description: String,
    author: String,
    project_url: String,
    status: Option<ProjectStatus>,
}

impl CreateProjectRequest {
    /// Creates a request with the descriptive fields.
    #[must_use]
    pub fn new(
        project_name: impl Into<String>,
        description: impl Into<String>,
        author: impl Into<String>,
        project_url: impl Into<String>,
    ) -> Self {
        Self {
            project_name: project_name.into(),
            description: description.into(),
            author: author.into(),
            project_url: project_url.into(),
            status: None,
        }
    }

    /// Sets the status requested by the caller.
    #[must_use]
    pub const fn with_status(mut self, status: ProjectStatus) -> Self {
        self.status = Some(status);
        self
    }
}

/// Request payload for a full project update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateProjectRequest {
    project_id: i64,
    project_name: String,
    description: String,
    author: String,
    project_url: String,
    status: Option<ProjectStatus>,
}

impl UpdateProjectRequest {
    /// Creates a request overwriting every updatable field of `project_id`.
    #[must_use]
    pub fn new(
        project_id: i64,
        project_name: impl Into<String>,
        description: impl Into<String>,
        author: impl Into<String>,
        project_url: impl Into<String>,
    ) -> Self {
        Self {
            project_id,
            project_name: project_name.into(),
            description: description.into(),
            author: author.into(),
            project_url: project_url.into(),
            status: None,
        }
    }

    /// Sets the replacement status.
    #[must_use]
    pub const fn with_status(mut self, status: ProjectStatus) -> Self {
        self.status = Some(status);
        self
    }
}

/// Project lifecycle and membership orchestration service.
///
/// Every operation validates its input before touching the repository.
/// Status and membership changes load the whole record, edit it in memory and
/// save it back; concurrent edits of one project are last-write-wins.
pub struct ProjectLifecycleService<R>
where
    R: ProjectRepository,
{
    pub(super) repository: Arc<R>,
}

impl<R> Clone for ProjectLifecycleService<R>
where
    R: ProjectRepository,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R> ProjectLifecycleService<R>
where
    R: ProjectRepository,
{
    /// Creates a new project lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a project in [`ProjectStatus::Preparation`].
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::BadRequest`] when a descriptive field is
    /// empty or the store returns no record, and
    /// [`ProjectServiceError::Repository`] when persistence fails.
    pub async fn create(&self, request: CreateProjectRequest) -> ProjectServiceResult<Project> {
        let details = rules::validate_details(
            &request.project_name,
            &request.description,
            &request.author,
            &request.project_url,
        )?;
        let draft = ProjectDraft::new(details);

        let project = self
            .repository
            .create(&draft)
            .await?
            .ok_or(ProjectServiceError::BadRequest(BadRequestCause::WriteRejected))?;
        info!(
            project_id = %project.id(),
            requested_status = ?request.status,
            "created project"
        );
        Ok(project)
    }

    /// Reads a project by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::BadRequest`] for an invalid identifier
    /// and [`ProjectServiceError::NotFound`] when no project has it.
    pub async fn read(&self, id: i64) -> ProjectServiceResult<Project> {
        let project_id = rules::validate_project_id(id)?;
        info!(%project_id, "reading project");
        let project = self.load(project_id).await?;
        info!(%project_id, status = %project.status(), "found project");
        Ok(project)
    }

    /// Overwrites the descriptive fields and status of a project in a single
    /// targeted update.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::BadRequest`] when the identifier,
    /// a descriptive field or the status is invalid, and
    /// [`ProjectServiceError::NotFound`] when no row was updated.
    pub async fn update(&self, request: UpdateProjectRequest) -> ProjectServiceResult<()> {
        let project_id = rules::validate_project_id(request.project_id)?;
        let details = rules::validate_details(
            &request.project_name,
            &request.description,
            &request.author,
            &request.project_url,
        )?;
        let status = rules::validate_status(request.status)?;

        let affected = self
            .repository
            .update_fields(project_id, &ProjectUpdate { details, status })
            .await?;
        if affected == 0 {
            warn!(%project_id, "not found project");
            return Err(ProjectServiceError::NotFound(NotFoundCause::Project(
                project_id,
            )));
        }
        info!(%project_id, %status, "updated project");
        Ok(())
    }

    /// Deletes a project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::BadRequest`] for an invalid identifier
    /// and [`ProjectServiceError::NotFound`] when no row was deleted.
    pub async fn delete(&self, id: i64) -> ProjectServiceResult<()> {
        let project_id = rules::validate_project_id(id)?;
        info!(%project_id, "deleting project");
        if self.repository.delete_by_id(project_id).await? == 0 {
            warn!(%project_id, "not found project");
            return Err(ProjectServiceError::NotFound(NotFoundCause::Project(
                project_id,
            )));
        }
        Ok(())
    }

    /// Replaces only the status of a project and saves the whole record.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::BadRequest`] for an invalid identifier,
    /// a missing status or a refused save, and
    /// [`ProjectServiceError::NotFound`] when the project does not exist.
    pub async fn update_status(
        &self,
        id: i64,
        status: Option<ProjectStatus>,
    ) -> ProjectServiceResult<()> {
        let project_id = rules::validate_project_id(id)?;
        let new_status = rules::validate_status(status)?;

        let mut project = self.load(project_id).await?;
        let previous = project.status();
        project.change_status(new_status);
        self.persist(&project).await?;
        info!(%project_id, from = %previous, to = %new_status, "changed project status");
        Ok(())
    }

    /// Counts stored projects.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::Repository`] when persistence fails.
    pub async fn count(&self) -> ProjectServiceResult<u64> {
        let count = self.repository.count().await?;
        info!(count, "counted projects");
        Ok(count)
    }

    /// Returns one zero-based page of projects.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::BadRequest`] for a negative page or a
    /// size below one, and [`ProjectServiceError::NotFound`] when the store
    /// produces no page.
    pub async fn page(&self, page: i64, size: i64) -> ProjectServiceResult<ProjectPage> {
        let request = rules::validate_page_request(page, size)?;
        self.repository
            .find_page(request)
            .await?
            .ok_or(ProjectServiceError::NotFound(NotFoundCause::Page(request)))
    }

    /// Returns `true` when a project with the identifier exists.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::BadRequest`] for an invalid identifier.
    pub async fn exists(&self, id: i64) -> ProjectServiceResult<bool> {
        let project_id = rules::validate_project_id(id)?;
        Ok(self.repository.exists_by_id(project_id).await?)
    }

    /// Returns the projects matching `ids`, skipping identifiers that do not
    /// exist.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::BadRequest`] when `ids` is empty and
    /// [`ProjectServiceError::NotFound`] when the store produces no listing.
    pub async fn find_by_ids(&self, ids: &[i64]) -> ProjectServiceResult<Vec<Project>> {
        let project_ids = rules::validate_id_list(ids)?;
        self.repository
            .find_all_by_id_in(&project_ids)
            .await?
            .ok_or(ProjectServiceError::NotFound(NotFoundCause::Listing))
    }

    /// Returns every stored project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::NotFound`] when the store produces no
    /// listing.
    pub async fn list_all(&self) -> ProjectServiceResult<Vec<Project>> {
        self.repository
            .find_all()
            .await?
            .ok_or(ProjectServiceError::NotFound(NotFoundCause::Listing))
    }

    /// Loads a project or reports it as not found.
    pub(super) async fn load(&self, project_id: ProjectId) -> ProjectServiceResult<Project> {
        if let Some(project) = self.repository.find_by_id(project_id).await? {
            return Ok(project);
        }
        warn!(%project_id, "not found project");
        Err(ProjectServiceError::NotFound(NotFoundCause::Project(
            project_id,
        )))
    }

    /// Saves a whole record, treating an absent result as a refused write.
    pub(super) async fn persist(&self, project: &Project) -> ProjectServiceResult<Project> {
        self.repository
            .save(project)
            .await?
            .ok_or(ProjectServiceError::BadRequest(BadRequestCause::WriteRejected))
    }
}
