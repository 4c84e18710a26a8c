//! Project management tools.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use youtrack_api::YouTrackClient;
use youtrack_api::models::{EntityRef, NewProject, ProjectPatch, SearchOptions};

use super::{count, default_top, display_field, parse_params};
use crate::types::ToolOutcome;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListProjectsParams {
  /// Number of items to skip for pagination.
  #[serde(default)]
  pub skip: u64,
  /// Maximum number of items to return.
  #[serde(default = "default_top")]
  pub top: u64,
  /// Comma-separated list of fields to return.
  pub fields: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetProjectParams {
  /// Project ID or short name.
  pub project_id: String,
  /// Comma-separated list of fields to return.
  pub fields: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectParams {
  /// Project name.
  pub name: String,
  /// Project short name (used as the issue id prefix).
  pub short_name: String,
  /// Project description.
  pub description: Option<String>,
  /// Project leader login or ID.
  pub leader: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectParams {
  /// Project ID or short name.
  pub project_id: String,
  /// Updated project name.
  pub name: Option<String>,
  /// Updated project description.
  pub description: Option<String>,
  /// Updated project leader login or ID.
  pub leader: Option<String>,
  /// Archive (true) or unarchive (false) the project.
  pub archived: Option<bool>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteProjectParams {
  /// Project ID or short name.
  pub project_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetProjectCustomFieldsParams {
  /// Project ID or short name.
  pub project_id: String,
  /// Comma-separated list of fields to return.
  pub fields: Option<String>,
}

pub async fn list_projects(client: &YouTrackClient, args: Value) -> ToolOutcome {
  let params: ListProjectsParams = match parse_params(args) {
    Ok(p) => p,
    Err(outcome) => return outcome,
  };

  let options = SearchOptions {
    skip: params.skip,
    top: params.top,
    fields: params.fields,
    ..SearchOptions::default()
  };

  match client.list_projects(&options).await {
    Ok(projects) => {
      let found = count(&projects);
      ToolOutcome::ok(projects, format!("Retrieved {found} projects"))
    }
    Err(e) => ToolOutcome::fail(e.to_string()),
  }
}

pub async fn get_project(client: &YouTrackClient, args: Value) -> ToolOutcome {
  let params: GetProjectParams = match parse_params(args) {
    Ok(p) => p,
    Err(outcome) => return outcome,
  };

  match client.get_project(&params.project_id, params.fields.as_deref()).await {
    Ok(project) => {
      let name = display_field(&project, "shortName", &params.project_id).to_string();
      ToolOutcome::ok(project, format!("Retrieved project {name}"))
    }
    Err(e) => ToolOutcome::fail(e.to_string()),
  }
}

pub async fn create_project(client: &YouTrackClient, args: Value) -> ToolOutcome {
  let params: CreateProjectParams = match parse_params(args) {
    Ok(p) => p,
    Err(outcome) => return outcome,
  };

  let project = NewProject {
    name: params.name,
    short_name: params.short_name.clone(),
    description: params.description,
    leader: params.leader.map(EntityRef::from),
  };

  match client.create_project(&project).await {
    Ok(created) => {
      let name = display_field(&created, "shortName", &params.short_name).to_string();
      ToolOutcome::ok(created, format!("Created project {name}"))
    }
    Err(e) => ToolOutcome::fail(e.to_string()),
  }
}

pub async fn update_project(client: &YouTrackClient, args: Value) -> ToolOutcome {
  let params: UpdateProjectParams = match parse_params(args) {
    Ok(p) => p,
    Err(outcome) => return outcome,
  };

  let patch = ProjectPatch {
    name: params.name,
    description: params.description,
    leader: params.leader.map(EntityRef::from),
    archived: params.archived,
  };

  match client.update_project(&params.project_id, &patch).await {
    Ok(updated) => {
      let name = display_field(&updated, "shortName", &params.project_id).to_string();
      ToolOutcome::ok(updated, format!("Updated project {name}"))
    }
    Err(e) => ToolOutcome::fail(e.to_string()),
  }
}

pub async fn delete_project(client: &YouTrackClient, args: Value) -> ToolOutcome {
  let params: DeleteProjectParams = match parse_params(args) {
    Ok(p) => p,
    Err(outcome) => return outcome,
  };

  match client.delete_project(&params.project_id).await {
    Ok(_) => ToolOutcome::done(format!("Deleted project {}", params.project_id)),
    Err(e) => ToolOutcome::fail(e.to_string()),
  }
}

pub async fn get_project_custom_fields(client: &YouTrackClient, args: Value) -> ToolOutcome {
  let params: GetProjectCustomFieldsParams = match parse_params(args) {
    Ok(p) => p,
    Err(outcome) => return outcome,
  };

  match client
    .project_custom_fields(&params.project_id, params.fields.as_deref())
    .await
  {
    Ok(fields) => {
      let found = count(&fields);
      ToolOutcome::ok(
        fields,
        format!("Retrieved {found} custom fields for project {}", params.project_id),
      )
    }
    Err(e) => ToolOutcome::fail(e.to_string()),
  }
}
