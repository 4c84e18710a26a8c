//! # Report Endpoints

use serde_json::Value;

use crate::client::YouTrackClient;
use crate::error::ApiError;

impl YouTrackClient {
  /// Generate a report of the given type. Parameters are forwarded as the
  /// request body untouched; their shape depends on the report type.
  pub async fn generate_report(&self, report_type: &str, params: &Value) -> Result<Value, ApiError> {
    self.post_json(&format!("/reports/{report_type}"), params, &[]).await
  }
}
