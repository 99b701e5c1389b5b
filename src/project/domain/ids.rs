//! Identifier types for the project domain.

use super::ProjectDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-assigned project identifier.
///
/// Identifiers are positive and fit the store's 32-bit integer key. Raw values
/// arrive as `i64` so out-of-range input can be rejected instead of failing to
/// parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i32")]
pub struct ProjectId(i32);

impl ProjectId {
    /// Creates a validated project identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::InvalidProjectId`] when the value is
    /// below one or does not fit a 32-bit key.
    pub fn new(value: i64) -> Result<Self, ProjectDomainError> {
        match i32::try_from(value) {
            Ok(id) if id >= 1 => Ok(Self(id)),
            _ => Err(ProjectDomainError::InvalidProjectId(value)),
        }
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }
}

impl TryFrom<i64> for ProjectId {
    type Error = ProjectDomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ProjectId> for i32 {
    fn from(id: ProjectId) -> Self {
        id.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
