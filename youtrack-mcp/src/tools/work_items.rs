//! Work item (time tracking) tools.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use youtrack_api::YouTrackClient;
use youtrack_api::models::{DurationSpec, EntityRef, NewWorkItem, SearchOptions, WorkItemPatch};

use super::{count, default_top, parse_params};
use crate::types::ToolOutcome;

/// Duration in minutes (number) or time string (e.g., "2h 30m").
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum DurationInput {
  Minutes(u64),
  Presentation(String),
}

impl From<DurationInput> for DurationSpec {
  fn from(input: DurationInput) -> Self {
    match input {
      DurationInput::Minutes(minutes) => Self::Minutes(minutes),
      DurationInput::Presentation(text) => Self::Presentation(text),
    }
  }
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetWorkItemsParams {
  /// Issue ID (e.g., PROJECT-123).
  pub issue_id: String,
  /// Number of items to skip for pagination.
  #[serde(default)]
  pub skip: u64,
  /// Maximum number of items to return.
  #[serde(default = "default_top")]
  pub top: u64,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddWorkItemParams {
  /// Issue ID (e.g., PROJECT-123).
  pub issue_id: String,
  /// Duration in minutes (number) or time string (e.g., "2h 30m").
  pub duration: DurationInput,
  /// Work description.
  pub description: Option<String>,
  /// Work date as a Unix timestamp in milliseconds.
  pub date: Option<i64>,
  /// Work item type name or ID.
  #[serde(rename = "type")]
  pub work_type: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWorkItemParams {
  /// Issue ID (e.g., PROJECT-123).
  pub issue_id: String,
  /// Work item ID.
  pub work_item_id: String,
  /// Updated duration in minutes (number) or time string (e.g., "2h 30m").
  pub duration: Option<DurationInput>,
  /// Updated work description.
  pub description: Option<String>,
  /// Updated work date as a Unix timestamp in milliseconds.
  pub date: Option<i64>,
  /// Updated work item type name or ID.
  #[serde(rename = "type")]
  pub work_type: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteWorkItemParams {
  /// Issue ID (e.g., PROJECT-123).
  pub issue_id: String,
  /// Work item ID.
  pub work_item_id: String,
}

pub async fn get_work_items(client: &YouTrackClient, args: Value) -> ToolOutcome {
  let params: GetWorkItemsParams = match parse_params(args) {
    Ok(p) => p,
    Err(outcome) => return outcome,
  };

  match client
    .list_work_items(&params.issue_id, &SearchOptions::page(params.skip, params.top))
    .await
  {
    Ok(work_items) => {
      let found = count(&work_items);
      ToolOutcome::ok(
        work_items,
        format!("Retrieved {found} work items for issue {}", params.issue_id),
      )
    }
    Err(e) => ToolOutcome::fail(e.to_string()),
  }
}

pub async fn add_work_item(client: &YouTrackClient, args: Value) -> ToolOutcome {
  let params: AddWorkItemParams = match parse_params(args) {
    Ok(p) => p,
    Err(outcome) => return outcome,
  };

  let work_item = NewWorkItem {
    duration: params.duration.into(),
    description: params.description,
    date: params.date,
    work_type: params.work_type.map(EntityRef::from),
  };

  match client.add_work_item(&params.issue_id, &work_item).await {
    Ok(created) => ToolOutcome::ok(created, format!("Added work item to issue {}", params.issue_id)),
    Err(e) => ToolOutcome::fail(e.to_string()),
  }
}

pub async fn update_work_item(client: &YouTrackClient, args: Value) -> ToolOutcome {
  let params: UpdateWorkItemParams = match parse_params(args) {
    Ok(p) => p,
    Err(outcome) => return outcome,
  };

  let patch = WorkItemPatch {
    duration: params.duration.map(DurationSpec::from),
    description: params.description,
    date: params.date,
    work_type: params.work_type.map(EntityRef::from),
  };

  match client
    .update_work_item(&params.issue_id, &params.work_item_id, &patch)
    .await
  {
    Ok(updated) => ToolOutcome::ok(updated, format!("Updated work item {}", params.work_item_id)),
    Err(e) => ToolOutcome::fail(e.to_string()),
  }
}

pub async fn delete_work_item(client: &YouTrackClient, args: Value) -> ToolOutcome {
  let params: DeleteWorkItemParams = match parse_params(args) {
    Ok(p) => p,
    Err(outcome) => return outcome,
  };

  match client.delete_work_item(&params.issue_id, &params.work_item_id).await {
    Ok(_) => ToolOutcome::done(format!("Deleted work item {}", params.work_item_id)),
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
  async fn test_add_work_item_accepts_minute_duration() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
      .and(path("/api/issues/DEMO-1/timeTracking/workItems"))
      .and(body_json(json!({"duration": 90})))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "6-1"})))
      .mount(&mock_server)
      .await;

    let client = test_client(&mock_server);
    let outcome = add_work_item(&client, json!({"issueId": "DEMO-1", "duration": 90})).await;

    assert!(outcome.success);
    assert_eq!(outcome.message.as_deref(), Some("Added work item to issue DEMO-1"));
  }

  #[tokio::test]
  async fn test_add_work_item_accepts_presentation_duration() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
      .and(path("/api/issues/DEMO-1/timeTracking/workItems"))
      .and(body_json(json!({"duration": "2h 30m", "type": {"id": "Development"}})))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "6-2"})))
      .mount(&mock_server)
      .await;

    let client = test_client(&mock_server);
    let outcome = add_work_item(
      &client,
      json!({"issueId": "DEMO-1", "duration": "2h 30m", "type": "Development"}),
    )
    .await;

    assert!(outcome.success);
  }

  #[tokio::test]
  async fn test_add_work_item_requires_duration() {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server);

    let outcome = add_work_item(&client, json!({"issueId": "DEMO-1"})).await;

    assert!(!outcome.success);
    assert!(outcome.error.as_deref().is_some_and(|e| e.starts_with("Invalid parameters:")));
  }

  #[tokio::test]
  async fn test_update_work_item_sends_only_given_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
      .and(path("/api/issues/DEMO-1/timeTracking/workItems/6-1"))
      .and(body_json(json!({"description": "Pairing session"})))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "6-1"})))
      .mount(&mock_server)
      .await;

    let client = test_client(&mock_server);
    let outcome = update_work_item(
      &client,
      json!({"issueId": "DEMO-1", "workItemId": "6-1", "description": "Pairing session"}),
    )
    .await;

    assert!(outcome.success);
    assert_eq!(outcome.message.as_deref(), Some("Updated work item 6-1"));
  }
}
