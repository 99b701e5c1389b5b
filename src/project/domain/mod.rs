//! Domain model for project lifecycle and membership management.
//!
//! A project carries descriptive fields, a lifecycle status and two user
//! membership sets. Participating and waiting users are independent sets with
//! one cross-set side effect: joining the participants removes a user from the
//! waiting list.

mod email;
mod error;
mod ids;
mod project;
mod status;

pub use email::{EmailAddress, is_valid_email};
pub use error::{ParseProjectStatusError, ProjectDomainError};
pub use ids::ProjectId;
pub use project::{
    PersistedProjectData, Project, ProjectDetails, ProjectDraft, ProjectUpdate,
};
pub use status::ProjectStatus;
