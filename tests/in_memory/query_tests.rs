//! Query tests for [`InMemoryProjectRepository`].
//!
//! Tests listings, bulk lookup and paging.

use crate::in_memory::helpers::{repo, runtime, store_projects};
use project_registry::project::{
    adapters::memory::InMemoryProjectRepository,
    domain::ProjectId,
    ports::{PageRequest, ProjectRepository},
};
use rstest::rstest;
use std::io;
use tokio::runtime::Runtime;

#[rstest]
fn find_all_is_ordered_by_id(runtime: io::Result<Runtime>, repo: InMemoryProjectRepository) {
    let rt = runtime.expect("runtime creation");
    let stored = store_projects(&rt, &repo, &["C", "A", "B"]).expect("store projects");

    let all = rt
        .block_on(repo.find_all())
        .expect("find all")
        .expect("listing");
    assert_eq!(all, stored);
}

#[rstest]
fn bulk_lookup_skips_unknown_ids(runtime: io::Result<Runtime>, repo: InMemoryProjectRepository) {
    let rt = runtime.expect("runtime creation");
    let stored = store_projects(&rt, &repo, &["A", "B", "C"]).expect("store projects");
    let ids = [
        ProjectId::new(3).expect("valid id"),
        ProjectId::new(9).expect("valid id"),
        ProjectId::new(1).expect("valid id"),
    ];

    let found = rt
        .block_on(repo.find_all_by_id_in(&ids))
        .expect("bulk lookup")
        .expect("listing");
    let expected = vec![stored[0].clone(), stored[2].clone()];
    assert_eq!(found, expected);
}

#[rstest]
#[case(0, 2, 2)]
#[case(1, 2, 1)]
#[case(2, 2, 0)]
#[case(0, 10, 3)]
fn pages_slice_in_id_order(
    runtime: io::Result<Runtime>,
    repo: InMemoryProjectRepository,
    #[case] page: u32,
    #[case] size: u32,
    #[case] expected_len: usize,
) {
    let rt = runtime.expect("runtime creation");
    store_projects(&rt, &repo, &["A", "B", "C"]).expect("store projects");
    let request = PageRequest::new(page, size).expect("non-zero size");

    let found = rt
        .block_on(repo.find_page(request))
        .expect("find page")
        .expect("page");

    assert_eq!(found.content().len(), expected_len);
    assert_eq!(found.total_elements(), 3);
    assert_eq!(found.total_pages(), u64::from(3_u32.div_ceil(size)));
    if let Some(first) = found.content().first() {
        assert_eq!(u64::from(first.id().value().unsigned_abs()), request.offset() + 1);
    }
}
