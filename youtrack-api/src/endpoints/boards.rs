//! # Agile Board Endpoints

use reqwest::Method;
use serde_json::Value;

use super::fields_query;
use crate::client::YouTrackClient;
use crate::error::ApiError;
use crate::models::{BoardPatch, NewBoard, SearchOptions};

impl YouTrackClient {
  /// List agile boards.
  pub async fn list_boards(&self, options: &SearchOptions) -> Result<Value, ApiError> {
    self.request(Method::GET, "/agiles", None, &options.to_query()).await
  }

  /// Fetch an agile board by id.
  pub async fn get_board(&self, board_id: &str, fields: Option<&str>) -> Result<Value, ApiError> {
    self
      .request(Method::GET, &format!("/agiles/{board_id}"), None, &fields_query(fields))
      .await
  }

  /// Create an agile board spanning the given projects.
  pub async fn create_board(&self, board: &NewBoard) -> Result<Value, ApiError> {
    self.post_json("/agiles", board, &[]).await
  }

  /// Update an agile board.
  pub async fn update_board(&self, board_id: &str, patch: &BoardPatch) -> Result<Value, ApiError> {
    self.post_json(&format!("/agiles/{board_id}"), patch, &[]).await
  }
}

#[cfg(test)]
mod tests {
  use anyhow::Result;
  use serde_json::json;
  use wiremock::matchers::{body_json, method, path};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use crate::endpoints::test_support::test_client;
  use crate::models::{EntityRef, NewBoard, SearchOptions};

  #[tokio::test]
  async fn test_list_boards() -> Result<()> {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
      .and(path("/api/agiles"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": "7-1", "name": "Demo Board"}])))
      .mount(&mock_server)
      .await;

    let client = test_client(&mock_server);
    let boards = client.list_boards(&SearchOptions::page(0, 50)).await?;
    assert_eq!(boards[0]["name"], "Demo Board");

    Ok(())
  }

  #[tokio::test]
  async fn test_create_board_with_projects() -> Result<()> {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
      .and(path("/api/agiles"))
      .and(body_json(json!({"name": "Sprint Board", "projects": [{"id": "0-0"}]})))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "7-2", "name": "Sprint Board"})))
      .mount(&mock_server)
      .await;

    let client = test_client(&mock_server);
    let board = NewBoard {
      name: "Sprint Board".to_string(),
      projects: vec![EntityRef::from("0-0")],
    };
    let created = client.create_board(&board).await?;
    assert_eq!(created["id"], "7-2");

    Ok(())
  }
}
