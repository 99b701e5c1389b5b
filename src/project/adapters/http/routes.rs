//! axum routes exposing the project operation catalogue.

use super::{
    dto::{ProjectDto, ProjectPageDto},
    error::ApiError,
};
use crate::project::{
    domain::ProjectStatus,
    ports::ProjectRepository,
    services::ProjectLifecycleService,
};
use axum::{
    Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    routing::{delete, get, patch, post},
};
use std::collections::BTreeSet;

/// Body returned by operations that only acknowledge success.
const OK: &str = "OK";

type ServiceState<R> = State<ProjectLifecycleService<R>>;
type ApiResult<T> = Result<T, ApiError>;
type IdPath = Result<Path<i64>, PathRejection>;
type MemberPath = Result<Path<(i64, String)>, PathRejection>;

/// Builds the application router with project routes under `/projects` and
/// a `/health` probe.
pub fn router<R>(service: ProjectLifecycleService<R>) -> Router
where
    R: ProjectRepository + 'static,
{
    Router::new()
        .nest("/projects", project_routes())
        .route("/health", get(|| async { OK }))
        .with_state(service)
}

/// Builds the project routes without binding state.
pub fn project_routes<R>() -> Router<ProjectLifecycleService<R>>
where
    R: ProjectRepository + 'static,
{
    Router::new()
        .route("/create", post(create::<R>))
        .route("/read/{id}", get(read::<R>))
        .route("/delete/{id}", delete(remove::<R>))
        .route("/update", patch(update::<R>))
        .route("/update/status/{id}", patch(update_status::<R>))
        .route("/count", get(count::<R>))
        .route("/page/{page}/{size}", get(page::<R>))
        .route("/for-ids", post(for_ids::<R>))
        .route("/all", get(all::<R>))
        .route("/if-exists/{id}", get(if_exists::<R>))
        .route(
            "/{id}/participating-users/create/{email}",
            get(add_participating_user::<R>),
        )
        .route(
            "/{id}/participating-users/all",
            get(participating_users::<R>),
        )
        .route(
            "/{id}/participating-users/delete/{email}",
            delete(remove_participating_user::<R>),
        )
        .route(
            "/{id}/waiting-users/create/{email}",
            get(add_waiting_user::<R>),
        )
        .route("/{id}/waiting-users/all", get(waiting_users::<R>))
        .route(
            "/{id}/waiting-users/delete/{email}",
            delete(remove_waiting_user::<R>),
        )
}

async fn create<R: ProjectRepository + 'static>(
    State(service): ServiceState<R>,
    payload: Result<Json<ProjectDto>, JsonRejection>,
) -> ApiResult<Json<ProjectDto>> {
    let Json(dto) = payload?;
    let project = service.create(dto.into_create_request()).await?;
    Ok(Json(ProjectDto::from(&project)))
}

async fn read<R: ProjectRepository + 'static>(
    State(service): ServiceState<R>,
    path: IdPath,
) -> ApiResult<Json<ProjectDto>> {
    let Path(id) = path?;
    let project = service.read(id).await?;
    Ok(Json(ProjectDto::from(&project)))
}

async fn remove<R: ProjectRepository + 'static>(
    State(service): ServiceState<R>,
    path: IdPath,
) -> ApiResult<&'static str> {
    let Path(id) = path?;
    service.delete(id).await?;
    Ok(OK)
}

async fn update<R: ProjectRepository + 'static>(
    State(service): ServiceState<R>,
    payload: Result<Json<ProjectDto>, JsonRejection>,
) -> ApiResult<&'static str> {
    let Json(dto) = payload?;
    service.update(dto.into_update_request()).await?;
    Ok(OK)
}

async fn update_status<R: ProjectRepository + 'static>(
    State(service): ServiceState<R>,
    path: IdPath,
    payload: Result<Json<Option<ProjectStatus>>, JsonRejection>,
) -> ApiResult<&'static str> {
    let Path(id) = path?;
    let Json(status) = payload?;
    service.update_status(id, status).await?;
    Ok(OK)
}

async fn count<R: ProjectRepository + 'static>(
    State(service): ServiceState<R>,
) -> ApiResult<Json<u64>> {
    Ok(Json(service.count().await?))
}

async fn page<R: ProjectRepository + 'static>(
    State(service): ServiceState<R>,
    path: Result<Path<(i64, i64)>, PathRejection>,
) -> ApiResult<Json<ProjectPageDto>> {
    let Path((page_index, page_size)) = path?;
    let found = service.page(page_index, page_size).await?;
    Ok(Json(ProjectPageDto::from(&found)))
}

async fn for_ids<R: ProjectRepository + 'static>(
    State(service): ServiceState<R>,
    payload: Result<Json<Option<Vec<i64>>>, JsonRejection>,
) -> ApiResult<Json<Vec<ProjectDto>>> {
    let Json(ids) = payload?;
    let projects = service.find_by_ids(&ids.unwrap_or_default()).await?;
    Ok(Json(projects.iter().map(ProjectDto::from).collect()))
}

async fn all<R: ProjectRepository + 'static>(
    State(service): ServiceState<R>,
) -> ApiResult<Json<Vec<ProjectDto>>> {
    let projects = service.list_all().await?;
    Ok(Json(projects.iter().map(ProjectDto::from).collect()))
}

async fn if_exists<R: ProjectRepository + 'static>(
    State(service): ServiceState<R>,
    path: IdPath,
) -> ApiResult<Json<bool>> {
    let Path(id) = path?;
    Ok(Json(service.exists(id).await?))
}

async fn add_participating_user<R: ProjectRepository + 'static>(
    State(service): ServiceState<R>,
    path: MemberPath,
) -> ApiResult<&'static str> {
    let Path((id, email)) = path?;
    service.add_participating_user(id, &email).await?;
    Ok(OK)
}

async fn participating_users<R: ProjectRepository + 'static>(
    State(service): ServiceState<R>,
    path: IdPath,
) -> ApiResult<Json<BTreeSet<String>>> {
    let Path(id) = path?;
    Ok(Json(service.participating_users(id).await?))
}

async fn remove_participating_user<R: ProjectRepository + 'static>(
    State(service): ServiceState<R>,
    path: MemberPath,
) -> ApiResult<&'static str> {
    let Path((id, email)) = path?;
    service.remove_participating_user(id, &email).await?;
    Ok(OK)
}

async fn add_waiting_user<R: ProjectRepository + 'static>(
    State(service): ServiceState<R>,
    path: MemberPath,
) -> ApiResult<&'static str> {
    let Path((id, email)) = path?;
    service.add_waiting_user(id, &email).await?;
    Ok(OK)
}

async fn waiting_users<R: ProjectRepository + 'static>(
    State(service): ServiceState<R>,
    path: IdPath,
) -> ApiResult<Json<BTreeSet<String>>> {
    let Path(id) = path?;
    Ok(Json(service.waiting_users(id).await?))
}

async fn remove_waiting_user<R: ProjectRepository + 'static>(
    State(service): ServiceState<R>,
    path: MemberPath,
) -> ApiResult<&'static str> {
    let Path((id, email)) = path?;
    service.remove_waiting_user(id, &email).await?;
    Ok(OK)
}
