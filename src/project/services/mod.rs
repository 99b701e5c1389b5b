//! Application services for project lifecycle orchestration.

mod error;
mod lifecycle;
mod membership;

pub use error::{
    BadRequestCause, ErrorKind, NotFoundCause, ProjectServiceError, ProjectServiceResult,
};
pub use lifecycle::{CreateProjectRequest, ProjectLifecycleService, UpdateProjectRequest};
