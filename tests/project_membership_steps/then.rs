//! Then steps for project membership BDD scenarios.

use std::collections::BTreeSet;

use super::world::{ProjectMembershipWorld, run_async};
use eyre::WrapErr;
use project_registry::project::{domain::ProjectStatus, services::ErrorKind};
use rstest_bdd_macros::then;

fn refused_with(world: &ProjectMembershipWorld, expected: ErrorKind) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing request result"))?;
    match result {
        Err(err) if err.kind() == expected => Ok(()),
        other => Err(eyre::eyre!("expected {expected:?} refusal, got {other:?}")),
    }
}

#[then(r#"the participating users are "{email}""#)]
fn participating_users_are(world: &ProjectMembershipWorld, email: String) -> Result<(), eyre::Report> {
    let id = world.project_id()?;
    let users = run_async(world.service.participating_users(id)).wrap_err("list participants")?;
    let expected = BTreeSet::from([email]);
    eyre::ensure!(users == expected, "expected {expected:?}, found {users:?}");
    Ok(())
}

#[then("the waiting list is empty")]
fn waiting_list_is_empty(world: &ProjectMembershipWorld) -> Result<(), eyre::Report> {
    let id = world.project_id()?;
    let users = run_async(world.service.waiting_users(id)).wrap_err("list waiting users")?;
    eyre::ensure!(users.is_empty(), "expected no waiting users, found {users:?}");
    Ok(())
}

#[then("the request succeeds")]
fn request_succeeds(world: &ProjectMembershipWorld) -> Result<(), eyre::Report> {
    match world.last_result.as_ref() {
        Some(Ok(())) => Ok(()),
        other => Err(eyre::eyre!("expected success, got {other:?}")),
    }
}

#[then("the participating users are empty")]
fn participating_users_are_empty(world: &ProjectMembershipWorld) -> Result<(), eyre::Report> {
    let id = world.project_id()?;
    let users = run_async(world.service.participating_users(id)).wrap_err("list participants")?;
    eyre::ensure!(users.is_empty(), "expected no participants, found {users:?}");
    Ok(())
}

#[then(r#"the waiting users are "{email}""#)]
fn waiting_users_are(world: &ProjectMembershipWorld, email: String) -> Result<(), eyre::Report> {
    let id = world.project_id()?;
    let users = run_async(world.service.waiting_users(id)).wrap_err("list waiting users")?;
    let expected = BTreeSet::from([email]);
    eyre::ensure!(users == expected, "expected {expected:?}, found {users:?}");
    Ok(())
}

#[then("the request is refused as a bad request")]
fn refused_as_bad_request(world: &ProjectMembershipWorld) -> Result<(), eyre::Report> {
    refused_with(world, ErrorKind::BadRequest)
}

#[then("the request is refused as not found")]
fn refused_as_not_found(world: &ProjectMembershipWorld) -> Result<(), eyre::Report> {
    refused_with(world, ErrorKind::NotFound)
}

#[then(r#"the project is in status "{status}""#)]
fn project_in_status(world: &ProjectMembershipWorld, status: String) -> Result<(), eyre::Report> {
    let expected = ProjectStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let id = world.project_id()?;
    let project = run_async(world.service.read(id)).wrap_err("read project")?;
    eyre::ensure!(
        project.status() == expected,
        "expected status {expected}, found {}",
        project.status()
    );
    Ok(())
}
