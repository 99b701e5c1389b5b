//! Error types for project domain validation and membership edits.

use super::EmailAddress;
use thiserror::Error;

/// Errors returned while constructing or mutating domain project values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProjectDomainError {
    /// The project identifier is not a positive 32-bit integer.
    #[error("invalid project identifier {0}, expected a positive integer")]
    InvalidProjectId(i64),

    /// A required descriptive field is empty.
    #[error("project field '{0}' must not be empty")]
    EmptyField(&'static str),

    /// The value is not a syntactically valid email address.
    #[error("invalid email address '{0}'")]
    InvalidEmail(String),

    /// The user is already participating and cannot be queued as waiting.
    #[error("user {0} is already participating in the project")]
    AlreadyParticipating(EmailAddress),

    /// The user is not among the participating users.
    #[error("user {0} is not participating in the project")]
    NotParticipating(EmailAddress),

    /// The user is not among the waiting users.
    #[error("user {0} is not waiting for the project")]
    NotWaiting(EmailAddress),
}

/// Error returned while parsing project statuses from input or persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown project status: {0}")]
pub struct ParseProjectStatusError(pub String);
