//! Sprint tools.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use youtrack_api::YouTrackClient;
use youtrack_api::models::{NewSprint, SearchOptions, SprintPatch};

use super::{count, default_top, display_field, parse_params};
use crate::types::ToolOutcome;

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListSprintsParams {
  /// Agile board ID.
  pub board_id: String,
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
pub struct GetSprintParams {
  /// Agile board ID.
  pub board_id: String,
  /// Sprint ID.
  pub sprint_id: String,
  /// Comma-separated list of fields to return.
  pub fields: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSprintParams {
  /// Agile board ID.
  pub board_id: String,
  /// Sprint name.
  pub name: String,
  /// Sprint goal.
  pub goal: Option<String>,
  /// Start date as a Unix timestamp in milliseconds.
  pub start: Option<i64>,
  /// Finish date as a Unix timestamp in milliseconds.
  pub finish: Option<i64>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSprintParams {
  /// Agile board ID.
  pub board_id: String,
  /// Sprint ID.
  pub sprint_id: String,
  /// Updated sprint name.
  pub name: Option<String>,
  /// Updated sprint goal.
  pub goal: Option<String>,
  /// Updated start date as a Unix timestamp in milliseconds.
  pub start: Option<i64>,
  /// Updated finish date as a Unix timestamp in milliseconds.
  pub finish: Option<i64>,
  /// Archive (true) or unarchive (false) the sprint.
  pub archived: Option<bool>,
}

pub async fn list_sprints(client: &YouTrackClient, args: Value) -> ToolOutcome {
  let params: ListSprintsParams = match parse_params(args) {
    Ok(p) => p,
    Err(outcome) => return outcome,
  };

  let options = SearchOptions {
    skip: params.skip,
    top: params.top,
    fields: params.fields,
    ..SearchOptions::default()
  };

  match client.list_sprints(&params.board_id, &options).await {
    Ok(sprints) => {
      let found = count(&sprints);
      ToolOutcome::ok(
        sprints,
        format!("Retrieved {found} sprints for board {}", params.board_id),
      )
    }
    Err(e) => ToolOutcome::fail(e.to_string()),
  }
}

pub async fn get_sprint(client: &YouTrackClient, args: Value) -> ToolOutcome {
  let params: GetSprintParams = match parse_params(args) {
    Ok(p) => p,
    Err(outcome) => return outcome,
  };

  match client
    .get_sprint(&params.board_id, &params.sprint_id, params.fields.as_deref())
    .await
  {
    Ok(sprint) => {
      let name = display_field(&sprint, "name", &params.sprint_id).to_string();
      ToolOutcome::ok(sprint, format!("Retrieved sprint {name}"))
    }
    Err(e) => ToolOutcome::fail(e.to_string()),
  }
}

pub async fn create_sprint(client: &YouTrackClient, args: Value) -> ToolOutcome {
  let params: CreateSprintParams = match parse_params(args) {
    Ok(p) => p,
    Err(outcome) => return outcome,
  };

  let sprint = NewSprint {
    name: params.name.clone(),
    goal: params.goal,
    start: params.start,
    finish: params.finish,
  };

  match client.create_sprint(&params.board_id, &sprint).await {
    Ok(created) => {
      let name = display_field(&created, "name", &params.name).to_string();
      ToolOutcome::ok(created, format!("Created sprint {name}"))
    }
    Err(e) => ToolOutcome::fail(e.to_string()),
  }
}

pub async fn update_sprint(client: &YouTrackClient, args: Value) -> ToolOutcome {
  let params: UpdateSprintParams = match parse_params(args) {
    Ok(p) => p,
    Err(outcome) => return outcome,
  };

  let patch = SprintPatch {
    name: params.name,
    goal: params.goal,
    start: params.start,
    finish: params.finish,
    archived: params.archived,
  };

  match client.update_sprint(&params.board_id, &params.sprint_id, &patch).await {
    Ok(updated) => {
      let name = display_field(&updated, "name", &params.sprint_id).to_string();
      ToolOutcome::ok(updated, format!("Updated sprint {name}"))
    }
    Err(e) => ToolOutcome::fail(e.to_string()),
  }
}
