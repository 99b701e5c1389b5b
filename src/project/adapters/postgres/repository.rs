//! `PostgreSQL` repository implementation for project storage.

use super::{
    models::{NewProjectRow, ProjectRecordRow, ProjectRow},
    schema::projects,
};
use crate::project::{
    domain::{
        PersistedProjectData, Project, ProjectDetails, ProjectDraft, ProjectId, ProjectStatus,
        ProjectUpdate,
    },
    ports::{
        PageRequest, ProjectPage, ProjectRepository, ProjectRepositoryError,
        ProjectRepositoryResult,
    },
};
use async_trait::async_trait;
use diesel::dsl::exists;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by project adapters.
pub type ProjectPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed project repository.
#[derive(Debug, Clone)]
pub struct PostgresProjectRepository {
    pool: ProjectPgPool,
}

impl PostgresProjectRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: ProjectPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> ProjectRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> ProjectRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(ProjectRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(ProjectRepositoryError::persistence)?
    }
}

#[async_trait]
impl ProjectRepository for PostgresProjectRepository {
    async fn find_by_id(&self, id: ProjectId) -> ProjectRepositoryResult<Option<Project>> {
        self.run_blocking(move |connection| {
            let row = projects::table
                .find(id.value())
                .select(ProjectRow::as_select())
                .first::<ProjectRow>(connection)
                .optional()
                .map_err(ProjectRepositoryError::persistence)?;
            row.map(row_to_project).transpose()
        })
        .await
    }

    async fn create(&self, draft: &ProjectDraft) -> ProjectRepositoryResult<Option<Project>> {
        let new_row = to_new_row(draft);
        self.run_blocking(move |connection| {
            let row = diesel::insert_into(projects::table)
                .values(&new_row)
                .returning(ProjectRow::as_returning())
                .get_result::<ProjectRow>(connection)
                .optional()
                .map_err(ProjectRepositoryError::persistence)?;
            row.map(row_to_project).transpose()
        })
        .await
    }

    async fn save(&self, project: &Project) -> ProjectRepositoryResult<Option<Project>> {
        let record = to_record_row(project);
        self.run_blocking(move |connection| {
            let row = diesel::insert_into(projects::table)
                .values(&record)
                .on_conflict(projects::project_id)
                .do_update()
                .set(&record)
                .returning(ProjectRow::as_returning())
                .get_result::<ProjectRow>(connection)
                .optional()
                .map_err(ProjectRepositoryError::persistence)?;
            row.map(row_to_project).transpose()
        })
        .await
    }

    async fn delete_by_id(&self, id: ProjectId) -> ProjectRepositoryResult<usize> {
        self.run_blocking(move |connection| {
            diesel::delete(projects::table.find(id.value()))
                .execute(connection)
                .map_err(ProjectRepositoryError::persistence)
        })
        .await
    }

    async fn count(&self) -> ProjectRepositoryResult<u64> {
        self.run_blocking(count_projects).await
    }

    async fn exists_by_id(&self, id: ProjectId) -> ProjectRepositoryResult<bool> {
        self.run_blocking(move |connection| {
            diesel::select(exists(projects::table.find(id.value())))
                .get_result::<bool>(connection)
                .map_err(ProjectRepositoryError::persistence)
        })
        .await
    }

    async fn find_all(&self) -> ProjectRepositoryResult<Option<Vec<Project>>> {
        self.run_blocking(|connection| {
            let rows = projects::table
                .order(projects::project_id.asc())
                .select(ProjectRow::as_select())
                .load::<ProjectRow>(connection)
                .map_err(ProjectRepositoryError::persistence)?;
            rows_to_projects(rows).map(Some)
        })
        .await
    }

    async fn find_all_by_id_in(
        &self,
        ids: &[ProjectId],
    ) -> ProjectRepositoryResult<Option<Vec<Project>>> {
        let keys: Vec<i32> = ids.iter().map(|id| id.value()).collect();
        self.run_blocking(move |connection| {
            let rows = projects::table
                .filter(projects::project_id.eq_any(keys))
                .order(projects::project_id.asc())
                .select(ProjectRow::as_select())
                .load::<ProjectRow>(connection)
                .map_err(ProjectRepositoryError::persistence)?;
            rows_to_projects(rows).map(Some)
        })
        .await
    }

    async fn find_page(&self, request: PageRequest) -> ProjectRepositoryResult<Option<ProjectPage>> {
        self.run_blocking(move |connection| {
            let total = count_projects(connection)?;
            let rows = projects::table
                .order(projects::project_id.asc())
                .limit(i64::from(request.size()))
                .offset(pg_offset(request))
                .select(ProjectRow::as_select())
                .load::<ProjectRow>(connection)
                .map_err(ProjectRepositoryError::persistence)?;
            let content = rows_to_projects(rows)?;
            Ok(Some(ProjectPage::new(content, request, total)))
        })
        .await
    }

    async fn update_fields(
        &self,
        id: ProjectId,
        update: &ProjectUpdate,
    ) -> ProjectRepositoryResult<usize> {
        let ProjectUpdate { details, status } = update.clone();
        self.run_blocking(move |connection| {
            diesel::update(projects::table.find(id.value()))
                .set((
                    projects::project_url.eq(details.project_url()),
                    projects::description.eq(details.description()),
                    projects::project_name.eq(details.project_name()),
                    projects::status.eq(status.as_str()),
                    projects::author.eq(details.author()),
                ))
                .execute(connection)
                .map_err(ProjectRepositoryError::persistence)
        })
        .await
    }
}

fn count_projects(connection: &mut PgConnection) -> ProjectRepositoryResult<u64> {
    let total = projects::table
        .count()
        .get_result::<i64>(connection)
        .map_err(ProjectRepositoryError::persistence)?;
    u64::try_from(total).map_err(ProjectRepositoryError::persistence)
}

/// Row offset for a page request, saturated to the range `OFFSET` accepts.
///
/// Offsets past `i64::MAX` lie beyond any stored row and still yield an
/// empty page.
pub(super) fn pg_offset(request: PageRequest) -> i64 {
    i64::try_from(request.offset()).unwrap_or(i64::MAX)
}

pub(super) fn to_new_row(draft: &ProjectDraft) -> NewProjectRow {
    let details = draft.details();
    NewProjectRow {
        project_name: details.project_name().to_owned(),
        description: details.description().to_owned(),
        author: details.author().to_owned(),
        project_url: details.project_url().to_owned(),
        status: draft.status().as_str().to_owned(),
        participating_users: Vec::new(),
        waiting_users: Vec::new(),
    }
}

pub(super) fn to_record_row(project: &Project) -> ProjectRecordRow {
    let details = project.details();
    ProjectRecordRow {
        project_id: project.id().value(),
        project_name: details.project_name().to_owned(),
        description: details.description().to_owned(),
        author: details.author().to_owned(),
        project_url: details.project_url().to_owned(),
        status: project.status().as_str().to_owned(),
        participating_users: project.participating_users().iter().cloned().collect(),
        waiting_users: project.waiting_users().iter().cloned().collect(),
    }
}

pub(super) fn row_to_project(row: ProjectRow) -> ProjectRepositoryResult<Project> {
    let ProjectRow {
        project_id,
        project_name,
        description,
        author,
        project_url,
        status: persisted_status,
        participating_users,
        waiting_users,
    } = row;

    let id = ProjectId::new(i64::from(project_id)).map_err(ProjectRepositoryError::persistence)?;
    let details = ProjectDetails::new(project_name, description, author, project_url)
        .map_err(ProjectRepositoryError::persistence)?;
    let status = ProjectStatus::try_from(persisted_status.as_str())
        .map_err(ProjectRepositoryError::persistence)?;

    Ok(Project::from_persisted(PersistedProjectData {
        id,
        details,
        status,
        participating_users: participating_users.into_iter().collect(),
        waiting_users: waiting_users.into_iter().collect(),
    }))
}

fn rows_to_projects(rows: Vec<ProjectRow>) -> ProjectRepositoryResult<Vec<Project>> {
    rows.into_iter().map(row_to_project).collect()
}
