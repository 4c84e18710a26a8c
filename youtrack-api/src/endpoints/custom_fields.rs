//! # Custom Field Endpoints
//!
//! Instance-wide custom field settings under
//! `/admin/customFieldSettings/customFields`. Per-project fields live on the
//! project endpoints.

use reqwest::Method;
use serde_json::Value;

use super::fields_query;
use crate::client::YouTrackClient;
use crate::error::ApiError;
use crate::models::SearchOptions;

impl YouTrackClient {
  /// List the custom fields defined on the instance.
  pub async fn list_custom_fields(&self, options: &SearchOptions) -> Result<Value, ApiError> {
    self
      .request(Method::GET, "/admin/customFieldSettings/customFields", None, &options.to_query())
      .await
  }

  /// Fetch a custom field definition by id.
  pub async fn get_custom_field(&self, field_id: &str, fields: Option<&str>) -> Result<Value, ApiError> {
    self
      .request(
        Method::GET,
        &format!("/admin/customFieldSettings/customFields/{field_id}"),
        None,
        &fields_query(fields),
      )
      .await
  }
}
