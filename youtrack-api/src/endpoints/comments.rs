//! # Comment Endpoints

use reqwest::Method;
use serde_json::Value;

use crate::client::YouTrackClient;
use crate::error::ApiError;
use crate::models::{CommentPatch, NewComment, SearchOptions};

impl YouTrackClient {
  /// List comments on an issue.
  pub async fn list_comments(&self, issue_id: &str, options: &SearchOptions) -> Result<Value, ApiError> {
    self
      .request(Method::GET, &format!("/issues/{issue_id}/comments"), None, &options.to_query())
      .await
  }

  /// Add a comment to an issue.
  pub async fn add_comment(&self, issue_id: &str, comment: &NewComment) -> Result<Value, ApiError> {
    self.post_json(&format!("/issues/{issue_id}/comments"), comment, &[]).await
  }

  /// Update an existing comment.
  pub async fn update_comment(&self, issue_id: &str, comment_id: &str, patch: &CommentPatch) -> Result<Value, ApiError> {
    self
      .post_json(&format!("/issues/{issue_id}/comments/{comment_id}"), patch, &[])
      .await
  }

  /// Delete a comment.
  pub async fn delete_comment(&self, issue_id: &str, comment_id: &str) -> Result<Value, ApiError> {
    self
      .request(Method::DELETE, &format!("/issues/{issue_id}/comments/{comment_id}"), None, &[])
      .await
  }
}
