//! Participating and waiting user management.
//!
//! Each edit loads the project, changes one membership set in memory and
//! saves the whole record back.

use super::{
    error::{ProjectServiceError, ProjectServiceResult},
    lifecycle::ProjectLifecycleService,
};
use crate::project::{
    domain::{EmailAddress, Project, ProjectDomainError, ProjectId},
    ports::ProjectRepository,
    validation::{ValidationError, rules},
};
use std::collections::BTreeSet;
use tracing::{info, warn};

impl<R> ProjectLifecycleService<R>
where
    R: ProjectRepository,
{
    /// Adds a participating user, removing the same user from the waiting
    /// list if present.
    ///
    /// Adding an existing participant succeeds without duplicating it.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::BadRequest`] for an invalid identifier
    /// or email, and [`ProjectServiceError::NotFound`] when the project does
    /// not exist.
    pub async fn add_participating_user(&self, id: i64, email: &str) -> ProjectServiceResult<()> {
        info!(email, "create participating user");
        let (project_id, address) = validate_member_target(id, email)?;
        self.edit_members(project_id, |project| {
            project.add_participating_user(&address);
            Ok(())
        })
        .await
    }

    /// Returns the participating users of a project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::BadRequest`] for an invalid identifier
    /// and [`ProjectServiceError::NotFound`] when the project does not exist.
    pub async fn participating_users(&self, id: i64) -> ProjectServiceResult<BTreeSet<String>> {
        info!(project_id = id, "all participating users");
        let project_id = rules::validate_project_id(id)?;
        let project = self.load(project_id).await?;
        Ok(project.participating_users().clone())
    }

    /// Removes a participating user.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::BadRequest`] for an invalid identifier
    /// or email, and [`ProjectServiceError::NotFound`] when the project does
    /// not exist or the user is not participating.
    pub async fn remove_participating_user(
        &self,
        id: i64,
        email: &str,
    ) -> ProjectServiceResult<()> {
        info!(email, "delete participating user");
        let (project_id, address) = validate_member_target(id, email)?;
        self.edit_members(project_id, |project| {
            project.remove_participating_user(&address)
        })
        .await
    }

    /// Queues a user on the waiting list.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::BadRequest`] for an invalid identifier
    /// or email or when the user already participates, and
    /// [`ProjectServiceError::NotFound`] when the project does not exist.
    pub async fn add_waiting_user(&self, id: i64, email: &str) -> ProjectServiceResult<()> {
        info!(email, "create waiting user");
        let (project_id, address) = validate_member_target(id, email)?;
        self.edit_members(project_id, |project| project.add_waiting_user(&address))
            .await
    }

    /// Returns the waiting users of a project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::BadRequest`] for an invalid identifier
    /// and [`ProjectServiceError::NotFound`] when the project does not exist.
    pub async fn waiting_users(&self, id: i64) -> ProjectServiceResult<BTreeSet<String>> {
        info!(project_id = id, "all waiting users");
        let project_id = rules::validate_project_id(id)?;
        let project = self.load(project_id).await?;
        Ok(project.waiting_users().clone())
    }

    /// Removes a user from the waiting list.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::BadRequest`] for an invalid identifier
    /// or email, and [`ProjectServiceError::NotFound`] when the project does
    /// not exist or the user is not waiting.
    pub async fn remove_waiting_user(&self, id: i64, email: &str) -> ProjectServiceResult<()> {
        info!(email, "delete waiting user");
        let (project_id, address) = validate_member_target(id, email)?;
        self.edit_members(project_id, |project| project.remove_waiting_user(&address))
            .await
    }

    /// Loads a project, applies `edit` and saves the result.
    ///
    /// Nothing is saved when `edit` fails.
    async fn edit_members<F>(&self, project_id: ProjectId, edit: F) -> ProjectServiceResult<()>
    where
        F: FnOnce(&mut Project) -> Result<(), ProjectDomainError> + Send,
    {
        let mut project = self.load(project_id).await?;
        if let Err(err) = edit(&mut project) {
            warn!(%project_id, error = %err, "membership change rejected");
            return Err(ProjectServiceError::from_membership(project_id, err));
        }
        self.persist(&project).await?;
        Ok(())
    }
}

/// Validates the identifier and email shared by membership edits.
fn validate_member_target(
    id: i64,
    email: &str,
) -> Result<(ProjectId, EmailAddress), ValidationError> {
    let project_id = rules::validate_project_id(id)?;
    let address = rules::validate_email(email).inspect_err(|err| {
        warn!(email, error = %err, "email is not valid");
    })?;
    Ok((project_id, address))
}
