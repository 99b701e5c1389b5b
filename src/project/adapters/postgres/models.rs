//! Diesel row models for project persistence.

use super::schema::projects;
use diesel::prelude::*;

/// Query result row for project records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = projects)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProjectRow {
    /// Store-assigned project identifier.
    pub project_id: i32,
    /// Project name.
    pub project_name: String,
    /// Project description.
    pub description: String,
    /// Project author.
    pub author: String,
    /// Project URL.
    pub project_url: String,
    /// Lifecycle status.
    pub status: String,
    /// Participating user emails.
    pub participating_users: Vec<String>,
    /// Waiting user emails.
    pub waiting_users: Vec<String>,
}

/// Insert model for new project records; the identifier comes from the
/// table's sequence.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = projects)]
pub struct NewProjectRow {
    /// Project name.
    pub project_name: String,
    /// Project description.
    pub description: String,
    /// Project author.
    pub author: String,
    /// Project URL.
    pub project_url: String,
    /// Lifecycle status.
    pub status: String,
    /// Participating user emails.
    pub participating_users: Vec<String>,
    /// Waiting user emails.
    pub waiting_users: Vec<String>,
}

/// Upsert model carrying an existing identifier.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = projects)]
#[diesel(primary_key(project_id))]
pub struct ProjectRecordRow {
    /// Existing project identifier.
    pub project_id: i32,
    /// Project name.
    pub project_name: String,
    /// Project description.
    pub description: String,
    /// Project author.
    pub author: String,
    /// Project URL.
    pub project_url: String,
    /// Lifecycle status.
    pub status: String,
    /// Participating user emails.
    pub participating_users: Vec<String>,
    /// Waiting user emails.
    pub waiting_users: Vec<String>,
}
