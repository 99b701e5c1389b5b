//! Individual request validation rules.
//!
//! Each rule is a pure function that either returns the validated value or
//! the first [`ValidationError`] it meets. Rules never touch persistence.

use super::ValidationError;
use crate::project::{
    domain::{EmailAddress, ProjectDetails, ProjectId, ProjectStatus},
    ports::PageRequest,
};

/// Validates a raw project identifier.
///
/// # Errors
///
/// Returns [`ValidationError::Domain`] when the identifier is below one or
/// out of range.
pub fn validate_project_id(raw: i64) -> Result<ProjectId, ValidationError> {
    Ok(ProjectId::new(raw)?)
}

/// Validates the four descriptive fields.
///
/// # Errors
///
/// Returns [`ValidationError::Domain`] naming the first empty field.
pub fn validate_details(
    project_name: &str,
    description: &str,
    author: &str,
    project_url: &str,
) -> Result<ProjectDetails, ValidationError> {
    Ok(ProjectDetails::new(
        project_name,
        description,
        author,
        project_url,
    )?)
}

/// Validates that a status was supplied.
///
/// # Errors
///
/// Returns [`ValidationError::MissingStatus`] when `status` is `None`.
pub const fn validate_status(
    status: Option<ProjectStatus>,
) -> Result<ProjectStatus, ValidationError> {
    match status {
        Some(value) => Ok(value),
        None => Err(ValidationError::MissingStatus),
    }
}

/// Validates a zero-based page index and page size.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidPage`] for a negative or oversize page
/// and [`ValidationError::InvalidPageSize`] for a size below one or
/// oversize.
pub fn validate_page_request(page: i64, size: i64) -> Result<PageRequest, ValidationError> {
    let page_index = u32::try_from(page).map_err(|_| ValidationError::InvalidPage(page))?;
    let page_size = u32::try_from(size).map_err(|_| ValidationError::InvalidPageSize(size))?;
    PageRequest::new(page_index, page_size).ok_or(ValidationError::InvalidPageSize(size))
}

/// Validates a bulk identifier list.
///
/// Identifiers that can never exist (below one or out of range) are dropped
/// rather than rejected, as they would match nothing in the store.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyIdList`] when `ids` is empty.
pub fn validate_id_list(ids: &[i64]) -> Result<Vec<ProjectId>, ValidationError> {
    if ids.is_empty() {
        return Err(ValidationError::EmptyIdList);
    }
    Ok(ids
        .iter()
        .filter_map(|raw| ProjectId::new(*raw).ok())
        .collect())
}

/// Validates an email address.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyEmail`] for an empty value and
/// [`ValidationError::Domain`] when the syntax check fails.
pub fn validate_email(raw: &str) -> Result<EmailAddress, ValidationError> {
    if raw.is_empty() {
        return Err(ValidationError::EmptyEmail);
    }
    Ok(EmailAddress::new(raw)?)
}
