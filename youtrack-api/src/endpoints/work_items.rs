//! # Work Item Endpoints
//!
//! Time tracking entries under `/issues/{id}/timeTracking/workItems`.

use reqwest::Method;
use serde_json::Value;

use crate::client::YouTrackClient;
use crate::error::ApiError;
use crate::models::{NewWorkItem, SearchOptions, WorkItemPatch};

impl YouTrackClient {
  /// List work items logged against an issue.
  pub async fn list_work_items(&self, issue_id: &str, options: &SearchOptions) -> Result<Value, ApiError> {
    self
      .request(
        Method::GET,
        &format!("/issues/{issue_id}/timeTracking/workItems"),
        None,
        &options.to_query(),
      )
      .await
  }

  /// Log a new work item.
  pub async fn add_work_item(&self, issue_id: &str, work_item: &NewWorkItem) -> Result<Value, ApiError> {
    self
      .post_json(&format!("/issues/{issue_id}/timeTracking/workItems"), work_item, &[])
      .await
  }

  /// Update an existing work item.
  pub async fn update_work_item(
    &self,
    issue_id: &str,
    work_item_id: &str,
    patch: &WorkItemPatch,
  ) -> Result<Value, ApiError> {
    self
      .post_json(&format!("/issues/{issue_id}/timeTracking/workItems/{work_item_id}"), patch, &[])
      .await
  }

  /// Delete a work item.
  pub async fn delete_work_item(&self, issue_id: &str, work_item_id: &str) -> Result<Value, ApiError> {
    self
      .request(
        Method::DELETE,
        &format!("/issues/{issue_id}/timeTracking/workItems/{work_item_id}"),
        None,
        &[],
      )
      .await
  }
}
