//! # Tag Endpoints

use reqwest::Method;
use serde_json::Value;

use super::fields_query;
use crate::client::YouTrackClient;
use crate::error::ApiError;
use crate::models::SearchOptions;

impl YouTrackClient {
  /// List tags visible to the authenticated user.
  pub async fn list_tags(&self, options: &SearchOptions) -> Result<Value, ApiError> {
    self.request(Method::GET, "/tags", None, &options.to_query()).await
  }

  /// Fetch a tag by id.
  pub async fn get_tag(&self, tag_id: &str, fields: Option<&str>) -> Result<Value, ApiError> {
    self
      .request(Method::GET, &format!("/tags/{tag_id}"), None, &fields_query(fields))
      .await
  }
}
