//! When steps for project membership BDD scenarios.

use super::world::{ProjectMembershipWorld, run_async};
use eyre::WrapErr;
use project_registry::project::{domain::ProjectStatus, services::CreateProjectRequest};
use rstest_bdd_macros::when;

fn parse_status(raw: &str) -> Result<ProjectStatus, eyre::Report> {
    ProjectStatus::try_from(raw).map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))
}

#[when(r#""{email}" joins the waiting list"#)]
fn joins_waiting_list(world: &mut ProjectMembershipWorld, email: String) -> Result<(), eyre::Report> {
    let id = world.project_id()?;
    world.last_result = Some(run_async(world.service.add_waiting_user(id, &email)));
    Ok(())
}

#[when(r#""{email}" is added as a participant"#)]
fn added_as_participant(
    world: &mut ProjectMembershipWorld,
    email: String,
) -> Result<(), eyre::Report> {
    let id = world.project_id()?;
    world.last_result = Some(run_async(world.service.add_participating_user(id, &email)));
    Ok(())
}

#[when(r#""{email}" is removed from the participants"#)]
fn removed_from_participants(
    world: &mut ProjectMembershipWorld,
    email: String,
) -> Result<(), eyre::Report> {
    let id = world.project_id()?;
    world.last_result = Some(run_async(
        world.service.remove_participating_user(id, &email),
    ));
    Ok(())
}

#[when(r#"a project named "{name}" is created asking for status "{status}""#)]
fn project_created_with_status(
    world: &mut ProjectMembershipWorld,
    name: String,
    status: String,
) -> Result<(), eyre::Report> {
    let request = CreateProjectRequest::new(
        name,
        "scenario project",
        "author@test.com",
        "http://projects.test",
    )
    .with_status(parse_status(&status)?);
    let created = run_async(world.service.create(request)).wrap_err("create project")?;
    world.project_id = Some(i64::from(created.id().value()));
    Ok(())
}

#[when(r#"the status is changed to "{status}""#)]
fn status_changed(world: &mut ProjectMembershipWorld, status: String) -> Result<(), eyre::Report> {
    let id = world.project_id()?;
    let target = parse_status(&status)?;
    run_async(world.service.update_status(id, Some(target))).wrap_err("change status")?;
    Ok(())
}
