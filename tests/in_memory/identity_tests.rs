//! Identity tests for [`InMemoryProjectRepository`].
//!
//! Tests identifier assignment, whole-record saves and deletion.

use crate::in_memory::helpers::{draft, repo, runtime, store_projects};
use project_registry::project::{
    adapters::memory::InMemoryProjectRepository,
    domain::{EmailAddress, ProjectId, ProjectStatus},
    ports::ProjectRepository,
};
use rstest::rstest;
use std::io;
use tokio::runtime::Runtime;

/// Identifiers start at one and increase with each creation.
#[rstest]
fn created_projects_receive_sequential_ids(
    runtime: io::Result<Runtime>,
    repo: InMemoryProjectRepository,
) {
    let rt = runtime.expect("runtime creation");
    let stored = store_projects(&rt, &repo, &["A", "B"]).expect("store projects");

    let ids: Vec<i32> = stored.iter().map(|project| project.id().value()).collect();
    assert_eq!(ids, vec![1, 2]);
    assert!(stored
        .iter()
        .all(|project| project.status() == ProjectStatus::Preparation));
}

/// Deleted identifiers are not handed out again.
#[rstest]
fn deleted_ids_are_not_reused(runtime: io::Result<Runtime>, repo: InMemoryProjectRepository) {
    let rt = runtime.expect("runtime creation");
    let stored = store_projects(&rt, &repo, &["A", "B"]).expect("store projects");
    let last = stored.last().expect("two projects").id();

    assert_eq!(rt.block_on(repo.delete_by_id(last)).expect("delete"), 1);
    assert_eq!(rt.block_on(repo.delete_by_id(last)).expect("delete"), 0);

    let next = rt
        .block_on(repo.create(&draft("C").expect("draft")))
        .expect("create")
        .expect("stored project");
    assert_eq!(next.id().value(), 3);
}

/// Saving replaces the stored record including its membership sets.
#[rstest]
fn save_replaces_whole_record(runtime: io::Result<Runtime>, repo: InMemoryProjectRepository) {
    let rt = runtime.expect("runtime creation");
    let mut project = store_projects(&rt, &repo, &["A"])
        .expect("store projects")
        .remove(0);

    project.change_status(ProjectStatus::InProgress);
    project.add_participating_user(&EmailAddress::new("u@test.com").expect("email"));
    let saved = rt.block_on(repo.save(&project)).expect("save");
    assert_eq!(saved.as_ref(), Some(&project));

    let fetched = rt
        .block_on(repo.find_by_id(project.id()))
        .expect("find")
        .expect("stored project");
    assert_eq!(fetched, project);
    assert_eq!(rt.block_on(repo.count()).expect("count"), 1);
}

/// Lookups of unknown identifiers report absence rather than failing.
#[rstest]
fn unknown_ids_are_absent(runtime: io::Result<Runtime>, repo: InMemoryProjectRepository) {
    let rt = runtime.expect("runtime creation");
    let id = ProjectId::new(5).expect("valid id");

    assert_eq!(rt.block_on(repo.find_by_id(id)).expect("find"), None);
    assert!(!rt.block_on(repo.exists_by_id(id)).expect("exists"));
}
