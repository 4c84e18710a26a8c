//! Attachment tools.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use youtrack_api::YouTrackClient;
use youtrack_api::models::SearchOptions;

use super::{count, default_top, parse_params};
use crate::types::ToolOutcome;

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetAttachmentsParams {
  /// Issue ID (e.g., PROJECT-123).
  pub issue_id: String,
  /// Number of items to skip for pagination.
  #[serde(default)]
  pub skip: u64,
  /// Maximum number of items to return.
  #[serde(default = "default_top")]
  pub top: u64,
}

pub async fn get_attachments(client: &YouTrackClient, args: Value) -> ToolOutcome {
  let params: GetAttachmentsParams = match parse_params(args) {
    Ok(p) => p,
    Err(outcome) => return outcome,
  };

  match client
    .list_attachments(&params.issue_id, &SearchOptions::page(params.skip, params.top))
    .await
  {
    Ok(attachments) => {
      let found = count(&attachments);
      ToolOutcome::ok(
        attachments,
        format!("Retrieved {found} attachments for issue {}", params.issue_id),
      )
    }
    Err(e) => ToolOutcome::fail(e.to_string()),
  }
}
