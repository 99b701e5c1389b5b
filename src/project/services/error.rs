//! Service-level errors and their boundary classification.

use crate::project::{
    domain::{EmailAddress, ProjectDomainError, ProjectId},
    ports::{PageRequest, ProjectRepositoryError},
    validation::ValidationError,
};
use thiserror::Error;

/// Boundary classification of a service failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Client input was invalid or the store refused a write.
    BadRequest,
    /// The referenced project or membership entry does not exist.
    NotFound,
    /// The store failed for reasons unrelated to the request.
    Internal,
}

/// Why a request was classified as bad.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BadRequestCause {
    /// A request rule rejected the input before persistence was touched.
    Validation(ValidationError),
    /// The user is already participating and cannot join the waiting list.
    AlreadyParticipating {
        /// Target project.
        project_id: ProjectId,
        /// Rejected user.
        email: EmailAddress,
    },
    /// The store returned no result for an otherwise valid write.
    WriteRejected,
}

/// What could not be found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotFoundCause {
    /// No project has the identifier.
    Project(ProjectId),
    /// The user is not a participant of the project.
    Participant {
        /// Target project.
        project_id: ProjectId,
        /// Missing user.
        email: EmailAddress,
    },
    /// The user is not on the project's waiting list.
    WaitingUser {
        /// Target project.
        project_id: ProjectId,
        /// Missing user.
        email: EmailAddress,
    },
    /// The store produced no page for the request.
    Page(PageRequest),
    /// The store produced no listing.
    Listing,
}

/// Service-level errors for project operations.
#[derive(Debug, Error)]
pub enum ProjectServiceError {
    /// Input was invalid or the store refused a write.
    #[error("bad request")]
    BadRequest(BadRequestCause),
    /// A referenced entity does not exist.
    #[error("not found")]
    NotFound(NotFoundCause),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] ProjectRepositoryError),
}

impl ProjectServiceError {
    /// Returns the boundary classification of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::BadRequest(_) => ErrorKind::BadRequest,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Repository(_) => ErrorKind::Internal,
        }
    }

    /// Maps a failed membership edit onto its boundary classification.
    pub(super) fn from_membership(project_id: ProjectId, err: ProjectDomainError) -> Self {
        match err {
            ProjectDomainError::AlreadyParticipating(email) => {
                Self::BadRequest(BadRequestCause::AlreadyParticipating { project_id, email })
            }
            ProjectDomainError::NotParticipating(email) => {
                Self::NotFound(NotFoundCause::Participant { project_id, email })
            }
            ProjectDomainError::NotWaiting(email) => {
                Self::NotFound(NotFoundCause::WaitingUser { project_id, email })
            }
            other => Self::BadRequest(BadRequestCause::Validation(other.into())),
        }
    }
}

impl From<ValidationError> for ProjectServiceError {
    fn from(err: ValidationError) -> Self {
        Self::BadRequest(BadRequestCause::Validation(err))
    }
}

/// Result type for project service operations.
pub type ProjectServiceResult<T> = Result<T, ProjectServiceError>;
