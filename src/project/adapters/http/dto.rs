//! JSON transfer objects for the HTTP boundary.

use crate::project::{
    domain::{Project, ProjectStatus},
    ports::ProjectPage,
    services::{CreateProjectRequest, UpdateProjectRequest},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Wire form of a project.
///
/// Every field defaults when absent so that incomplete payloads reach
/// request validation instead of failing deserialisation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectDto {
    /// Project identifier; zero when not yet assigned.
    pub project_id: i64,
    /// Project name.
    pub project_name: String,
    /// Project description.
    pub description: String,
    /// Project author.
    pub author: String,
    /// Project URL.
    pub project_url: String,
    /// Lifecycle status.
    pub status: Option<ProjectStatus>,
    /// Participating user emails.
    pub participating_users: BTreeSet<String>,
    /// Waiting user emails.
    pub waiting_users: BTreeSet<String>,
}

impl ProjectDto {
    /// Converts the payload into a creation request.
    #[must_use]
    pub fn into_create_request(self) -> CreateProjectRequest {
        let request = CreateProjectRequest::new(
            self.project_name,
            self.description,
            self.author,
            self.project_url,
        );
        match self.status {
            Some(status) => request.with_status(status),
            None => request,
        }
    }

    /// Converts the payload into a full update request.
    #[must_use]
    pub fn into_update_request(self) -> UpdateProjectRequest {
        let request = UpdateProjectRequest::new(
            self.project_id,
            self.project_name,
            self.description,
            self.author,
            self.project_url,
        );
        match self.status {
            Some(status) => request.with_status(status),
            None => request,
        }
    }
}

impl From<&Project> for ProjectDto {
    fn from(project: &Project) -> Self {
        let details = project.details();
        Self {
            project_id: i64::from(project.id().value()),
            project_name: details.project_name().to_owned(),
            description: details.description().to_owned(),
            author: details.author().to_owned(),
            project_url: details.project_url().to_owned(),
            status: Some(project.status()),
            participating_users: project.participating_users().clone(),
            waiting_users: project.waiting_users().clone(),
        }
    }
}

/// Wire form of one page of projects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPageDto {
    /// Projects on the page.
    pub content: Vec<ProjectDto>,
    /// Zero-based page index.
    pub number: u32,
    /// Requested page size.
    pub size: u32,
    /// Number of records across all pages.
    pub total_elements: u64,
    /// Number of pages.
    pub total_pages: u64,
}

impl From<&ProjectPage> for ProjectPageDto {
    fn from(page: &ProjectPage) -> Self {
        Self {
            content: page.content().iter().map(ProjectDto::from).collect(),
            number: page.request().page(),
            size: page.request().size(),
            total_elements: page.total_elements(),
            total_pages: page.total_pages(),
        }
    }
}
