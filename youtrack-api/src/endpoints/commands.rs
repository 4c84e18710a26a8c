//! # Workflow Command Endpoints
//!
//! YouTrack commands apply workflow transitions with the same syntax the
//! web UI's command dialog accepts (`State Fixed assignee jane`).

use reqwest::Method;
use serde_json::Value;

use crate::client::YouTrackClient;
use crate::error::ApiError;
use crate::models::CommandRequest;

impl YouTrackClient {
  /// Apply a command to an issue, optionally attaching a comment.
  pub async fn apply_command(&self, issue_id: &str, command: &CommandRequest) -> Result<Value, ApiError> {
    self.post_json(&format!("/issues/{issue_id}/execute"), command, &[]).await
  }

  /// List the commands currently applicable to an issue.
  pub async fn available_commands(&self, issue_id: &str) -> Result<Value, ApiError> {
    self.request(Method::GET, &format!("/issues/{issue_id}/execute"), None, &[]).await
  }
}
