//! Issue management tools.
//!
//! `youtrack_list_issues` composes a YouTrack query from the convenience
//! filters (`project`, `assignee`, `state`, `priority`) joined with ` and `,
//! but a caller-supplied raw `query` always wins over the derived one.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use youtrack_api::YouTrackClient;
use youtrack_api::models::{EntityRef, IssuePatch, NewIssue, SearchOptions};

use super::{count, default_top, display_field, parse_params};
use crate::types::ToolOutcome;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListIssuesParams {
  /// Filter by project short name or ID.
  pub project: Option<String>,
  /// YouTrack search query string.
  pub query: Option<String>,
  /// Filter by assignee login or ID.
  pub assignee: Option<String>,
  /// Filter by issue state.
  pub state: Option<String>,
  /// Filter by priority.
  pub priority: Option<String>,
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
pub struct GetIssueParams {
  /// Issue ID (e.g., PROJECT-123).
  pub issue_id: String,
  /// Comma-separated list of fields to return.
  pub fields: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateIssueParams {
  /// Project short name or ID.
  pub project: String,
  /// Issue title/summary.
  pub summary: String,
  /// Issue description.
  pub description: Option<String>,
  /// Assignee login or ID.
  pub assignee: Option<String>,
  /// Priority name or ID.
  pub priority: Option<String>,
  /// Issue type name or ID.
  #[serde(rename = "type")]
  pub issue_type: Option<String>,
  /// List of tag names or IDs.
  pub tags: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIssueParams {
  /// Issue ID (e.g., PROJECT-123).
  pub issue_id: String,
  /// Updated issue title/summary.
  pub summary: Option<String>,
  /// Updated issue description.
  pub description: Option<String>,
  /// Updated assignee login or ID.
  pub assignee: Option<String>,
  /// Updated priority name or ID.
  pub priority: Option<String>,
  /// Updated state name or ID.
  pub state: Option<String>,
  /// Updated list of tag names or IDs.
  pub tags: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteIssueParams {
  /// Issue ID (e.g., PROJECT-123).
  pub issue_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct SearchIssuesParams {
  /// YouTrack search query (e.g., "assignee: me state: Open").
  pub query: String,
  /// Number of items to skip for pagination.
  #[serde(default)]
  pub skip: u64,
  /// Maximum number of items to return.
  #[serde(default = "default_top")]
  pub top: u64,
  /// Comma-separated list of fields to return.
  pub fields: Option<String>,
}

pub async fn list_issues(client: &YouTrackClient, args: Value) -> ToolOutcome {
  let params: ListIssuesParams = match parse_params(args) {
    Ok(p) => p,
    Err(outcome) => return outcome,
  };

  let mut options = SearchOptions {
    query: params.query.clone(),
    skip: params.skip,
    top: params.top,
    fields: params.fields.clone(),
  };

  // Raw query wins; the derived filter only applies when none was given.
  if options.query.is_none() {
    let mut filters = Vec::new();
    if let Some(ref project) = params.project {
      filters.push(format!("project: {project}"));
    }
    if let Some(ref assignee) = params.assignee {
      filters.push(format!("assignee: {assignee}"));
    }
    if let Some(ref state) = params.state {
      filters.push(format!("state: {state}"));
    }
    if let Some(ref priority) = params.priority {
      filters.push(format!("priority: {priority}"));
    }
    if !filters.is_empty() {
      options.query = Some(filters.join(" and "));
    }
  }

  match client.list_issues(&options).await {
    Ok(issues) => {
      let found = count(&issues);
      ToolOutcome::ok(issues, format!("Found {found} issues"))
    }
    Err(e) => ToolOutcome::fail(e.to_string()),
  }
}

pub async fn get_issue(client: &YouTrackClient, args: Value) -> ToolOutcome {
  let params: GetIssueParams = match parse_params(args) {
    Ok(p) => p,
    Err(outcome) => return outcome,
  };

  match client.get_issue(&params.issue_id, params.fields.as_deref()).await {
    Ok(issue) => {
      let id = display_field(&issue, "idReadable", &params.issue_id).to_string();
      ToolOutcome::ok(issue, format!("Retrieved issue {id}"))
    }
    Err(e) => ToolOutcome::fail(e.to_string()),
  }
}

pub async fn create_issue(client: &YouTrackClient, args: Value) -> ToolOutcome {
  let params: CreateIssueParams = match parse_params(args) {
    Ok(p) => p,
    Err(outcome) => return outcome,
  };

  let issue = NewIssue {
    project: EntityRef::from(params.project),
    summary: params.summary,
    description: params.description,
    assignee: params.assignee.map(EntityRef::from),
    priority: params.priority.map(EntityRef::from),
    issue_type: params.issue_type.map(EntityRef::from),
    tags: params.tags.map(|tags| tags.into_iter().map(EntityRef::from).collect()),
  };

  match client.create_issue(&issue).await {
    Ok(created) => {
      let id = display_field(&created, "idReadable", "").to_string();
      ToolOutcome::ok(created, format!("Created issue {id}"))
    }
    Err(e) => ToolOutcome::fail(e.to_string()),
  }
}

pub async fn update_issue(client: &YouTrackClient, args: Value) -> ToolOutcome {
  let params: UpdateIssueParams = match parse_params(args) {
    Ok(p) => p,
    Err(outcome) => return outcome,
  };

  let patch = IssuePatch {
    summary: params.summary,
    description: params.description,
    assignee: params.assignee.map(EntityRef::from),
    priority: params.priority.map(EntityRef::from),
    state: params.state.map(EntityRef::from),
    tags: params.tags.map(|tags| tags.into_iter().map(EntityRef::from).collect()),
  };

  match client.update_issue(&params.issue_id, &patch).await {
    Ok(updated) => {
      let id = display_field(&updated, "idReadable", &params.issue_id).to_string();
      ToolOutcome::ok(updated, format!("Updated issue {id}"))
    }
    Err(e) => ToolOutcome::fail(e.to_string()),
  }
}

pub async fn delete_issue(client: &YouTrackClient, args: Value) -> ToolOutcome {
  let params: DeleteIssueParams = match parse_params(args) {
    Ok(p) => p,
    Err(outcome) => return outcome,
  };

  match client.delete_issue(&params.issue_id).await {
    Ok(_) => ToolOutcome::done(format!("Deleted issue {}", params.issue_id)),
    Err(e) => ToolOutcome::fail(e.to_string()),
  }
}

pub async fn search_issues(client: &YouTrackClient, args: Value) -> ToolOutcome {
  let params: SearchIssuesParams = match parse_params(args) {
    Ok(p) => p,
    Err(outcome) => return outcome,
  };

  let options = SearchOptions {
    query: Some(params.query.clone()),
    skip: params.skip,
    top: params.top,
    fields: params.fields,
  };

  match client.list_issues(&options).await {
    Ok(issues) => {
      let found = count(&issues);
      ToolOutcome::ok(issues, format!("Found {found} issues matching \"{}\"", params.query))
    }
    Err(e) => ToolOutcome::fail(e.to_string()),
  }
}
