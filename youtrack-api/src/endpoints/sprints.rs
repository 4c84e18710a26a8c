//! # Sprint Endpoints
//!
//! Sprints are always addressed through their parent agile board.

use reqwest::Method;
use serde_json::Value;

use super::fields_query;
use crate::client::YouTrackClient;
use crate::error::ApiError;
use crate::models::{NewSprint, SearchOptions, SprintPatch};

impl YouTrackClient {
  /// List the sprints of an agile board.
  pub async fn list_sprints(&self, board_id: &str, options: &SearchOptions) -> Result<Value, ApiError> {
    self
      .request(Method::GET, &format!("/agiles/{board_id}/sprints"), None, &options.to_query())
      .await
  }

  /// Fetch a sprint by id.
  pub async fn get_sprint(&self, board_id: &str, sprint_id: &str, fields: Option<&str>) -> Result<Value, ApiError> {
    self
      .request(
        Method::GET,
        &format!("/agiles/{board_id}/sprints/{sprint_id}"),
        None,
        &fields_query(fields),
      )
      .await
  }

  /// Create a sprint on a board.
  pub async fn create_sprint(&self, board_id: &str, sprint: &NewSprint) -> Result<Value, ApiError> {
    self.post_json(&format!("/agiles/{board_id}/sprints"), sprint, &[]).await
  }

  /// Update a sprint. `archived: Some(true)` closes it out.
  pub async fn update_sprint(&self, board_id: &str, sprint_id: &str, patch: &SprintPatch) -> Result<Value, ApiError> {
    self
      .post_json(&format!("/agiles/{board_id}/sprints/{sprint_id}"), patch, &[])
      .await
  }
}
