//! In-memory repository for project lifecycle tests and store-less runs.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::project::{
    domain::{Project, ProjectDraft, ProjectId, ProjectUpdate},
    ports::{
        PageRequest, ProjectPage, ProjectRepository, ProjectRepositoryError,
        ProjectRepositoryResult,
    },
};

/// Thread-safe in-memory project repository.
///
/// Identifiers are assigned from a counter starting at one and are never
/// reused after deletion.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProjectRepository {
    state: Arc<RwLock<InMemoryProjectState>>,
}

#[derive(Debug, Default)]
struct InMemoryProjectState {
    projects: BTreeMap<ProjectId, Project>,
    last_id: i64,
}

impl InMemoryProjectRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> ProjectRepositoryResult<RwLockReadGuard<'_, InMemoryProjectState>> {
        self.state.read().map_err(|err| {
            ProjectRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> ProjectRepositoryResult<RwLockWriteGuard<'_, InMemoryProjectState>> {
        self.state.write().map_err(|err| {
            ProjectRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn find_by_id(&self, id: ProjectId) -> ProjectRepositoryResult<Option<Project>> {
        let state = self.read()?;
        Ok(state.projects.get(&id).cloned())
    }

    async fn create(&self, draft: &ProjectDraft) -> ProjectRepositoryResult<Option<Project>> {
        let mut state = self.write()?;
        let next_id = state.last_id + 1;
        let id = ProjectId::new(next_id).map_err(ProjectRepositoryError::persistence)?;
        state.last_id = next_id;

        let project = draft.clone().into_project(id);
        state.projects.insert(id, project.clone());
        Ok(Some(project))
    }

    async fn save(&self, project: &Project) -> ProjectRepositoryResult<Option<Project>> {
        let mut state = self.write()?;
        let id = project.id();
        state.last_id = state.last_id.max(i64::from(id.value()));
        state.projects.insert(id, project.clone());
        Ok(Some(project.clone()))
    }

    async fn delete_by_id(&self, id: ProjectId) -> ProjectRepositoryResult<usize> {
        let mut state = self.write()?;
        Ok(usize::from(state.projects.remove(&id).is_some()))
    }

    async fn count(&self) -> ProjectRepositoryResult<u64> {
        let state = self.read()?;
        u64::try_from(state.projects.len()).map_err(ProjectRepositoryError::persistence)
    }

    async fn exists_by_id(&self, id: ProjectId) -> ProjectRepositoryResult<bool> {
        let state = self.read()?;
        Ok(state.projects.contains_key(&id))
    }

    async fn find_all(&self) -> ProjectRepositoryResult<Option<Vec<Project>>> {
        let state = self.read()?;
        Ok(Some(state.projects.values().cloned().collect()))
    }

    async fn find_all_by_id_in(
        &self,
        ids: &[ProjectId],
    ) -> ProjectRepositoryResult<Option<Vec<Project>>> {
        let state = self.read()?;
        let found = state
            .projects
            .values()
            .filter(|project| ids.contains(&project.id()))
            .cloned()
            .collect();
        Ok(Some(found))
    }

    async fn find_page(&self, request: PageRequest) -> ProjectRepositoryResult<Option<ProjectPage>> {
        let state = self.read()?;
        let total = u64::try_from(state.projects.len()).map_err(ProjectRepositoryError::persistence)?;
        let skip = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let take = usize::try_from(request.size()).unwrap_or(usize::MAX);
        let content = state
            .projects
            .values()
            .skip(skip)
            .take(take)
            .cloned()
            .collect();
        Ok(Some(ProjectPage::new(content, request, total)))
    }

    async fn update_fields(
        &self,
        id: ProjectId,
        update: &ProjectUpdate,
    ) -> ProjectRepositoryResult<usize> {
        let mut state = self.write()?;
        let Some(project) = state.projects.get_mut(&id) else {
            return Ok(0);
        };
        project.apply_update(update.clone());
        Ok(1)
    }
}
