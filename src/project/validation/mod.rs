//! Request validation for project operations.
//!
//! Validation runs before any repository access. The first failing rule wins
//! and callers see a generic bad-request outcome.

mod error;
pub mod rules;

pub use error::ValidationError;
