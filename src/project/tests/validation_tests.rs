//! Request rule tests.

use crate::project::{
    domain::{ProjectDomainError, ProjectId, ProjectStatus},
    validation::{ValidationError, rules},
};
use rstest::rstest;

#[rstest]
#[case(0, 1, 0, 1)]
#[case(3, 25, 3, 25)]
fn page_request_accepts_valid_bounds(
    #[case] page: i64,
    #[case] size: i64,
    #[case] expected_page: u32,
    #[case] expected_size: u32,
) {
    let request = rules::validate_page_request(page, size).expect("valid page request");
    assert_eq!(request.page(), expected_page);
    assert_eq!(request.size(), expected_size);
}

#[rstest]
#[case(-1, 1, ValidationError::InvalidPage(-1))]
#[case(0, 0, ValidationError::InvalidPageSize(0))]
#[case(0, -5, ValidationError::InvalidPageSize(-5))]
#[case(-1, 0, ValidationError::InvalidPage(-1))]
fn page_request_rejects_invalid_bounds(
    #[case] page: i64,
    #[case] size: i64,
    #[case] expected: ValidationError,
) {
    assert_eq!(rules::validate_page_request(page, size), Err(expected));
}

#[rstest]
fn id_list_must_not_be_empty() {
    assert_eq!(rules::validate_id_list(&[]), Err(ValidationError::EmptyIdList));
}

#[rstest]
fn id_list_drops_identifiers_that_cannot_exist() {
    let ids = rules::validate_id_list(&[2, 0, -4, 7]).expect("non-empty list");
    let expected = vec![
        ProjectId::new(2).expect("valid id"),
        ProjectId::new(7).expect("valid id"),
    ];
    assert_eq!(ids, expected);
}

#[rstest]
fn status_is_required() {
    assert_eq!(rules::validate_status(None), Err(ValidationError::MissingStatus));
    assert_eq!(
        rules::validate_status(Some(ProjectStatus::Suspended)),
        Ok(ProjectStatus::Suspended)
    );
}

#[rstest]
fn empty_email_is_reported_before_syntax() {
    assert_eq!(rules::validate_email(""), Err(ValidationError::EmptyEmail));
    assert_eq!(
        rules::validate_email("nobody"),
        Err(ValidationError::Domain(ProjectDomainError::InvalidEmail(
            "nobody".to_owned()
        )))
    );
}

#[rstest]
fn project_id_rule_wraps_domain_error() {
    assert_eq!(
        rules::validate_project_id(0),
        Err(ValidationError::Domain(ProjectDomainError::InvalidProjectId(0)))
    );
}
