//! Project aggregate root and its descriptive fields.

use super::{EmailAddress, ProjectDomainError, ProjectId, ProjectStatus};
use std::collections::BTreeSet;

/// Descriptive text fields carried by every project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDetails {
    project_name: String,
    description: String,
    author: String,
    project_url: String,
}

impl ProjectDetails {
    /// Creates validated project details.
    ///
    /// Fields are checked in declaration order and the first empty one is
    /// reported.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::EmptyField`] when any field is empty.
    pub fn new(
        project_name: impl Into<String>,
        description: impl Into<String>,
        author: impl Into<String>,
        project_url: impl Into<String>,
    ) -> Result<Self, ProjectDomainError> {
        let details = Self {
            project_name: project_name.into(),
            description: description.into(),
            author: author.into(),
            project_url: project_url.into(),
        };
        let fields = [
            ("projectName", &details.project_name),
            ("description", &details.description),
            ("author", &details.author),
            ("projectUrl", &details.project_url),
        ];
        if let Some((name, _)) = fields.into_iter().find(|(_, value)| value.is_empty()) {
            return Err(ProjectDomainError::EmptyField(name));
        }
        Ok(details)
    }

    /// Returns the project name.
    #[must_use]
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Returns the project description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the project author.
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the project URL.
    #[must_use]
    pub fn project_url(&self) -> &str {
        &self.project_url
    }
}

/// Overwrite applied by a full project update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectUpdate {
    /// Replacement descriptive fields.
    pub details: ProjectDetails,
    /// Replacement status.
    pub status: ProjectStatus,
}

/// A project that has not been stored yet and so has no identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    details: ProjectDetails,
    status: ProjectStatus,
}

impl ProjectDraft {
    /// Creates a draft in [`ProjectStatus::Preparation`].
    ///
    /// New projects always start in preparation, whatever status the caller
    /// asked for.
    #[must_use]
    pub const fn new(details: ProjectDetails) -> Self {
        Self {
            details,
            status: ProjectStatus::Preparation,
        }
    }

    /// Returns the descriptive fields.
    #[must_use]
    pub const fn details(&self) -> &ProjectDetails {
        &self.details
    }

    /// Returns the initial status.
    #[must_use]
    pub const fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Turns the draft into a stored project under the assigned identifier.
    #[must_use]
    pub fn into_project(self, id: ProjectId) -> Project {
        Project::from_persisted(PersistedProjectData {
            id,
            details: self.details,
            status: self.status,
            participating_users: BTreeSet::new(),
            waiting_users: BTreeSet::new(),
        })
    }
}

/// Project aggregate root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    id: ProjectId,
    details: ProjectDetails,
    status: ProjectStatus,
    participating_users: BTreeSet<String>,
    waiting_users: BTreeSet<String>,
}

/// Parameter object for reconstructing a persisted project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedProjectData {
    /// Persisted project identifier.
    pub id: ProjectId,
    /// Persisted descriptive fields.
    pub details: ProjectDetails,
    /// Persisted lifecycle status.
    pub status: ProjectStatus,
    /// Persisted participating user emails.
    pub participating_users: BTreeSet<String>,
    /// Persisted waiting user emails.
    pub waiting_users: BTreeSet<String>,
}

impl Project {
    /// Reconstructs a project from persisted storage.
    ///
    /// Membership sets are taken as stored; overlap between them is not
    /// rejected.
    #[must_use]
    pub fn from_persisted(data: PersistedProjectData) -> Self {
        Self {
            id: data.id,
            details: data.details,
            status: data.status,
            participating_users: data.participating_users,
            waiting_users: data.waiting_users,
        }
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the descriptive fields.
    #[must_use]
    pub const fn details(&self) -> &ProjectDetails {
        &self.details
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Returns the participating user emails.
    #[must_use]
    pub const fn participating_users(&self) -> &BTreeSet<String> {
        &self.participating_users
    }

    /// Returns the waiting user emails.
    #[must_use]
    pub const fn waiting_users(&self) -> &BTreeSet<String> {
        &self.waiting_users
    }

    /// Sets the lifecycle status. Any status may follow any other.
    pub const fn change_status(&mut self, status: ProjectStatus) {
        self.status = status;
    }

    /// Overwrites the descriptive fields and status.
    pub fn apply_update(&mut self, update: ProjectUpdate) {
        self.details = update.details;
        self.status = update.status;
    }

    /// Adds a participating user and drops the same user from the waiting
    /// list.
    ///
    /// Adding an existing participant is a no-op; removal from waiting
    /// happens either way.
    pub fn add_participating_user(&mut self, email: &EmailAddress) {
        self.participating_users.insert(email.as_str().to_owned());
        self.waiting_users.remove(email.as_str());
    }

    /// Removes a participating user.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::NotParticipating`] when the user is not a
    /// participant; the set is left unchanged.
    pub fn remove_participating_user(
        &mut self,
        email: &EmailAddress,
    ) -> Result<(), ProjectDomainError> {
        if !self.participating_users.remove(email.as_str()) {
            return Err(ProjectDomainError::NotParticipating(email.clone()));
        }
        Ok(())
    }

    /// Queues a user on the waiting list.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::AlreadyParticipating`] when the user is
    /// already a participant; the waiting list is left unchanged.
    pub fn add_waiting_user(&mut self, email: &EmailAddress) -> Result<(), ProjectDomainError> {
        if self.participating_users.contains(email.as_str()) {
            return Err(ProjectDomainError::AlreadyParticipating(email.clone()));
        }
        self.waiting_users.insert(email.as_str().to_owned());
        Ok(())
    }

    /// Removes a user from the waiting list.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::NotWaiting`] when the user is not
    /// waiting; the set is left unchanged.
    pub fn remove_waiting_user(&mut self, email: &EmailAddress) -> Result<(), ProjectDomainError> {
        if !self.waiting_users.remove(email.as_str()) {
            return Err(ProjectDomainError::NotWaiting(email.clone()));
        }
        Ok(())
    }
}
