//! Given steps for project membership BDD scenarios.

use super::world::{ProjectMembershipWorld, run_async};
use eyre::WrapErr;
use project_registry::project::services::CreateProjectRequest;
use rstest_bdd_macros::given;

#[given(r#"a project named "{name}""#)]
fn project_named(world: &mut ProjectMembershipWorld, name: String) -> Result<(), eyre::Report> {
    let created = run_async(world.service.create(CreateProjectRequest::new(
        name,
        "scenario project",
        "author@test.com",
        "http://projects.test",
    )))
    .wrap_err("create project for scenario")?;
    world.project_id = Some(i64::from(created.id().value()));
    Ok(())
}

#[given(r#""{email}" participates in the project"#)]
fn user_participates(world: &mut ProjectMembershipWorld, email: String) -> Result<(), eyre::Report> {
    let id = world.project_id()?;
    run_async(world.service.add_participating_user(id, &email))
        .wrap_err("add participant in scenario setup")?;
    Ok(())
}
