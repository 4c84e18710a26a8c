//! Comment management tools.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use youtrack_api::YouTrackClient;
use youtrack_api::models::{CommentPatch, NewComment, SearchOptions};

use super::{count, default_top, parse_params};
use crate::types::ToolOutcome;

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetCommentsParams {
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
pub struct AddCommentParams {
  /// Issue ID (e.g., PROJECT-123).
  pub issue_id: String,
  /// Comment text.
  pub text: String,
  /// Whether the comment uses Markdown formatting.
  #[serde(default)]
  pub uses_markdown: bool,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCommentParams {
  /// Issue ID (e.g., PROJECT-123).
  pub issue_id: String,
  /// Comment ID.
  pub comment_id: String,
  /// Updated comment text.
  pub text: String,
  /// Whether the comment uses Markdown formatting.
  #[serde(default)]
  pub uses_markdown: bool,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteCommentParams {
  /// Issue ID (e.g., PROJECT-123).
  pub issue_id: String,
  /// Comment ID.
  pub comment_id: String,
}

pub async fn get_comments(client: &YouTrackClient, args: Value) -> ToolOutcome {
  let params: GetCommentsParams = match parse_params(args) {
    Ok(p) => p,
    Err(outcome) => return outcome,
  };

  match client
    .list_comments(&params.issue_id, &SearchOptions::page(params.skip, params.top))
    .await
  {
    Ok(comments) => {
      let found = count(&comments);
      ToolOutcome::ok(
        comments,
        format!("Retrieved {found} comments for issue {}", params.issue_id),
      )
    }
    Err(e) => ToolOutcome::fail(e.to_string()),
  }
}

pub async fn add_comment(client: &YouTrackClient, args: Value) -> ToolOutcome {
  let params: AddCommentParams = match parse_params(args) {
    Ok(p) => p,
    Err(outcome) => return outcome,
  };

  let comment = NewComment {
    text: params.text,
    uses_markdown: params.uses_markdown,
  };

  match client.add_comment(&params.issue_id, &comment).await {
    Ok(created) => ToolOutcome::ok(created, format!("Added comment to issue {}", params.issue_id)),
    Err(e) => ToolOutcome::fail(e.to_string()),
  }
}

pub async fn update_comment(client: &YouTrackClient, args: Value) -> ToolOutcome {
  let params: UpdateCommentParams = match parse_params(args) {
    Ok(p) => p,
    Err(outcome) => return outcome,
  };

  let patch = CommentPatch {
    text: Some(params.text),
    uses_markdown: Some(params.uses_markdown),
  };

  match client.update_comment(&params.issue_id, &params.comment_id, &patch).await {
    Ok(updated) => ToolOutcome::ok(updated, format!("Updated comment {}", params.comment_id)),
    Err(e) => ToolOutcome::fail(e.to_string()),
  }
}

pub async fn delete_comment(client: &YouTrackClient, args: Value) -> ToolOutcome {
  let params: DeleteCommentParams = match parse_params(args) {
    Ok(p) => p,
    Err(outcome) => return outcome,
  };

  match client.delete_comment(&params.issue_id, &params.comment_id).await {
    Ok(_) => ToolOutcome::done(format!("Deleted comment {}", params.comment_id)),
    Err(e) => ToolOutcome::fail(e.to_string()),
  }
}
