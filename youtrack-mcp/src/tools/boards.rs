//! Agile board tools.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use youtrack_api::YouTrackClient;
use youtrack_api::models::{BoardPatch, EntityRef, NewBoard, SearchOptions};

use super::{count, default_top, display_field, parse_params};
use crate::types::ToolOutcome;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListBoardsParams {
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
pub struct GetBoardParams {
  /// Agile board ID.
  pub board_id: String,
  /// Comma-separated list of fields to return.
  pub fields: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateBoardParams {
  /// Board name.
  pub name: String,
  /// Project IDs the board spans.
  pub projects: Vec<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBoardParams {
  /// Agile board ID.
  pub board_id: String,
  /// Updated board name.
  pub name: Option<String>,
  /// Updated project IDs.
  pub projects: Option<Vec<String>>,
}

pub async fn list_agile_boards(client: &YouTrackClient, args: Value) -> ToolOutcome {
  let params: ListBoardsParams = match parse_params(args) {
    Ok(p) => p,
    Err(outcome) => return outcome,
  };

  let options = SearchOptions {
    skip: params.skip,
    top: params.top,
    fields: params.fields,
    ..SearchOptions::default()
  };

  match client.list_boards(&options).await {
    Ok(boards) => {
      let found = count(&boards);
      ToolOutcome::ok(boards, format!("Retrieved {found} agile boards"))
    }
    Err(e) => ToolOutcome::fail(e.to_string()),
  }
}

pub async fn get_agile_board(client: &YouTrackClient, args: Value) -> ToolOutcome {
  let params: GetBoardParams = match parse_params(args) {
    Ok(p) => p,
    Err(outcome) => return outcome,
  };

  match client.get_board(&params.board_id, params.fields.as_deref()).await {
    Ok(board) => {
      let name = display_field(&board, "name", &params.board_id).to_string();
      ToolOutcome::ok(board, format!("Retrieved agile board {name}"))
    }
    Err(e) => ToolOutcome::fail(e.to_string()),
  }
}

pub async fn create_agile_board(client: &YouTrackClient, args: Value) -> ToolOutcome {
  let params: CreateBoardParams = match parse_params(args) {
    Ok(p) => p,
    Err(outcome) => return outcome,
  };

  let board = NewBoard {
    name: params.name.clone(),
    projects: params.projects.into_iter().map(EntityRef::from).collect(),
  };

  match client.create_board(&board).await {
    Ok(created) => {
      let name = display_field(&created, "name", &params.name).to_string();
      ToolOutcome::ok(created, format!("Created agile board {name}"))
    }
    Err(e) => ToolOutcome::fail(e.to_string()),
  }
}

pub async fn update_agile_board(client: &YouTrackClient, args: Value) -> ToolOutcome {
  let params: UpdateBoardParams = match parse_params(args) {
    Ok(p) => p,
    Err(outcome) => return outcome,
  };

  let patch = BoardPatch {
    name: params.name,
    projects: params
      .projects
      .map(|projects| projects.into_iter().map(EntityRef::from).collect()),
  };

  match client.update_board(&params.board_id, &patch).await {
    Ok(updated) => {
      let name = display_field(&updated, "name", &params.board_id).to_string();
      ToolOutcome::ok(updated, format!("Updated agile board {name}"))
    }
    Err(e) => ToolOutcome::fail(e.to_string()),
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;
  use wiremock::matchers::{body_json, method, path};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use super::*;
  use crate::tools::test_support::test_client;

  #[tokio::test]
  async fn test_create_agile_board_maps_project_ids() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
      .and(path("/api/agiles"))
      .and(body_json(json!({
          "name": "Sprint Board",
          "projects": [{"id": "0-0"}, {"id": "0-1"}]
      })))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "7-1", "name": "Sprint Board"})))
      .mount(&mock_server)
      .await;

    let client = test_client(&mock_server);
    let outcome = create_agile_board(&client, json!({"name": "Sprint Board", "projects": ["0-0", "0-1"]})).await;

    assert!(outcome.success);
    assert_eq!(outcome.message.as_deref(), Some("Created agile board Sprint Board"));
  }

  #[tokio::test]
  async fn test_update_agile_board_name_only() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
      .and(path("/api/agiles/7-1"))
      .and(body_json(json!({"name": "Renamed"})))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "7-1", "name": "Renamed"})))
      .mount(&mock_server)
      .await;

    let client = test_client(&mock_server);
    let outcome = update_agile_board(&client, json!({"boardId": "7-1", "name": "Renamed"})).await;

    assert!(outcome.success);
    assert_eq!(outcome.message.as_deref(), Some("Updated agile board Renamed"));
  }
}
