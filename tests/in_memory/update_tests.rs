//! Targeted update tests for [`InMemoryProjectRepository`].

use crate::in_memory::helpers::{repo, runtime, store_projects};
use project_registry::project::{
    adapters::memory::InMemoryProjectRepository,
    domain::{EmailAddress, ProjectDetails, ProjectId, ProjectStatus, ProjectUpdate},
    ports::ProjectRepository,
};
use rstest::rstest;
use std::io;
use tokio::runtime::Runtime;

fn replacement() -> ProjectUpdate {
    ProjectUpdate {
        details: ProjectDetails::new("Renamed", "new", "b@test.com", "http://y")
            .expect("valid details"),
        status: ProjectStatus::Cancelled,
    }
}

/// Field updates leave the membership sets alone.
#[rstest]
fn update_fields_keeps_membership(runtime: io::Result<Runtime>, repo: InMemoryProjectRepository) {
    let rt = runtime.expect("runtime creation");
    let mut project = store_projects(&rt, &repo, &["A"])
        .expect("store projects")
        .remove(0);
    project
        .add_waiting_user(&EmailAddress::new("w@test.com").expect("email"))
        .expect("user can wait");
    rt.block_on(repo.save(&project)).expect("save");

    let update = replacement();
    let affected = rt
        .block_on(repo.update_fields(project.id(), &update))
        .expect("update");
    assert_eq!(affected, 1);

    let fetched = rt
        .block_on(repo.find_by_id(project.id()))
        .expect("find")
        .expect("stored project");
    assert_eq!(fetched.details(), &update.details);
    assert_eq!(fetched.status(), ProjectStatus::Cancelled);
    assert!(fetched.waiting_users().contains("w@test.com"));
}

/// Updating an unknown identifier affects no rows and stores nothing.
#[rstest]
fn update_fields_of_unknown_id_affects_nothing(
    runtime: io::Result<Runtime>,
    repo: InMemoryProjectRepository,
) {
    let rt = runtime.expect("runtime creation");
    let id = ProjectId::new(8).expect("valid id");

    let affected = rt
        .block_on(repo.update_fields(id, &replacement()))
        .expect("update");

    assert_eq!(affected, 0);
    assert_eq!(rt.block_on(repo.count()).expect("count"), 0);
}
