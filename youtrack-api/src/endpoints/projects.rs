//! # Project Endpoints
//!
//! Project administration lives under `/admin/projects`, which requires the
//! authenticated account to hold admin permissions for mutations.

use reqwest::Method;
use serde_json::Value;

use super::fields_query;
use crate::client::YouTrackClient;
use crate::error::ApiError;
use crate::models::{NewProject, ProjectPatch, SearchOptions};

impl YouTrackClient {
  /// List projects.
  pub async fn list_projects(&self, options: &SearchOptions) -> Result<Value, ApiError> {
    self.request(Method::GET, "/admin/projects", None, &options.to_query()).await
  }

  /// Fetch a project by id or short name.
  pub async fn get_project(&self, project_id: &str, fields: Option<&str>) -> Result<Value, ApiError> {
    self
      .request(Method::GET, &format!("/admin/projects/{project_id}"), None, &fields_query(fields))
      .await
  }

  /// Create a project.
  pub async fn create_project(&self, project: &NewProject) -> Result<Value, ApiError> {
    self.post_json("/admin/projects", project, &[]).await
  }

  /// Update a project. An explicit `archived: Some(false)` unarchives it.
  pub async fn update_project(&self, project_id: &str, patch: &ProjectPatch) -> Result<Value, ApiError> {
    self.post_json(&format!("/admin/projects/{project_id}"), patch, &[]).await
  }

  /// Delete a project.
  pub async fn delete_project(&self, project_id: &str) -> Result<Value, ApiError> {
    self
      .request(Method::DELETE, &format!("/admin/projects/{project_id}"), None, &[])
      .await
  }

  /// List the custom fields attached to a project.
  pub async fn project_custom_fields(&self, project_id: &str, fields: Option<&str>) -> Result<Value, ApiError> {
    self
      .request(
        Method::GET,
        &format!("/admin/projects/{project_id}/customFields"),
        None,
        &fields_query(fields),
      )
      .await
  }

  /// Fetch aggregate statistics for a project.
  pub async fn project_statistics(&self, project_id: &str) -> Result<Value, ApiError> {
    self
      .request(Method::GET, &format!("/admin/projects/{project_id}/statistics"), None, &[])
      .await
  }
}
