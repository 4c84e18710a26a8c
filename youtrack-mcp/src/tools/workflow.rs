//! Workflow command tools.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use youtrack_api::YouTrackClient;
use youtrack_api::models::CommandRequest;

use super::parse_params;
use crate::types::ToolOutcome;

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetIssueCommandsParams {
  /// Issue ID (e.g., PROJECT-123).
  pub issue_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApplyCommandParams {
  /// Issue ID (e.g., PROJECT-123).
  pub issue_id: String,
  /// Command to apply (e.g., "State Fixed assignee jane").
  pub command: String,
  /// Comment to attach alongside the command.
  pub comment: Option<String>,
}

pub async fn get_issue_commands(client: &YouTrackClient, args: Value) -> ToolOutcome {
  let params: GetIssueCommandsParams = match parse_params(args) {
    Ok(p) => p,
    Err(outcome) => return outcome,
  };

  match client.available_commands(&params.issue_id).await {
    Ok(commands) => ToolOutcome::ok(
      commands,
      format!("Retrieved available commands for issue {}", params.issue_id),
    ),
    Err(e) => ToolOutcome::fail(e.to_string()),
  }
}

pub async fn apply_workflow_command(client: &YouTrackClient, args: Value) -> ToolOutcome {
  let params: ApplyCommandParams = match parse_params(args) {
    Ok(p) => p,
    Err(outcome) => return outcome,
  };

  let command = CommandRequest {
    query: params.command.clone(),
    comment: params.comment,
  };

  match client.apply_command(&params.issue_id, &command).await {
    Ok(result) => ToolOutcome::ok(
      result,
      format!("Applied command \"{}\" to issue {}", params.command, params.issue_id),
    ),
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
  async fn test_apply_workflow_command() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
      .and(path("/api/issues/DEMO-1/execute"))
      .and(body_json(json!({"query": "State Fixed"})))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
      .mount(&mock_server)
      .await;

    let client = test_client(&mock_server);
    let outcome = apply_workflow_command(&client, json!({"issueId": "DEMO-1", "command": "State Fixed"})).await;

    assert!(outcome.success);
    assert_eq!(
      outcome.message.as_deref(),
      Some("Applied command \"State Fixed\" to issue DEMO-1")
    );
  }

  #[tokio::test]
  async fn test_invalid_command_maps_to_envelope() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
      .and(path("/api/issues/DEMO-1/execute"))
      .respond_with(ResponseTemplate::new(400).set_body_json(json!({
          "error": "bad_request",
          "error_description": "Command is invalid: Stat Fixed"
      })))
      .mount(&mock_server)
      .await;

    let client = test_client(&mock_server);
    let outcome = apply_workflow_command(&client, json!({"issueId": "DEMO-1", "command": "Stat Fixed"})).await;

    assert!(!outcome.success);
    assert_eq!(outcome.error.as_deref(), Some("Command is invalid: Stat Fixed"));
  }
}
