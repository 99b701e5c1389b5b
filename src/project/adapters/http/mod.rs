//! HTTP adapter exposing project operations over axum.
//!
//! Success bodies are JSON values or the plain text `OK`. Failures carry only
//! the status reason phrase: `Bad Request`, `Not Found` or
//! `Internal Server Error`.

mod dto;
mod error;
mod routes;

pub use dto::{ProjectDto, ProjectPageDto};
pub use error::ApiError;
pub use routes::{project_routes, router};
