//! Request validation errors.

use crate::project::domain::ProjectDomainError;
use thiserror::Error;

/// A request rule that rejected its input.
///
/// Every variant is classified as a bad request at the boundary; the variant
/// only serves logs and tests.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A value failed domain construction.
    #[error(transparent)]
    Domain(#[from] ProjectDomainError),

    /// The status was absent.
    #[error("project status is required")]
    MissingStatus,

    /// The page index was negative or out of range.
    #[error("invalid page index {0}")]
    InvalidPage(i64),

    /// The page size was below one or out of range.
    #[error("invalid page size {0}")]
    InvalidPageSize(i64),

    /// The identifier list was empty.
    #[error("identifier list must not be empty")]
    EmptyIdList,

    /// The email was empty.
    #[error("email must not be empty")]
    EmptyEmail,
}
