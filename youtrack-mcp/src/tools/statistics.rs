//! Statistics and reporting tools.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use youtrack_api::YouTrackClient;

use super::parse_params;
use crate::types::ToolOutcome;

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetProjectStatisticsParams {
  /// Project ID or short name.
  pub project_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateReportParams {
  /// Report type (e.g., "timeTracking", "issueDistribution").
  pub report_type: String,
  /// Report-specific parameters, forwarded untouched.
  pub parameters: Option<Value>,
}

pub async fn get_project_statistics(client: &YouTrackClient, args: Value) -> ToolOutcome {
  let params: GetProjectStatisticsParams = match parse_params(args) {
    Ok(p) => p,
    Err(outcome) => return outcome,
  };

  match client.project_statistics(&params.project_id).await {
    Ok(statistics) => ToolOutcome::ok(
      statistics,
      format!("Retrieved statistics for project {}", params.project_id),
    ),
    Err(e) => ToolOutcome::fail(e.to_string()),
  }
}

pub async fn generate_report(client: &YouTrackClient, args: Value) -> ToolOutcome {
  let params: GenerateReportParams = match parse_params(args) {
    Ok(p) => p,
    Err(outcome) => return outcome,
  };

  let report_params = params.parameters.unwrap_or_else(|| serde_json::json!({}));
  match client.generate_report(&params.report_type, &report_params).await {
    Ok(report) => ToolOutcome::ok(report, format!("Generated report of type {}", params.report_type)),
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
  async fn test_get_project_statistics() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
      .and(path("/api/admin/projects/DEMO/statistics"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({"issues": 42})))
      .mount(&mock_server)
      .await;

    let client = test_client(&mock_server);
    let outcome = get_project_statistics(&client, json!({"projectId": "DEMO"})).await;

    assert!(outcome.success);
    assert_eq!(outcome.message.as_deref(), Some("Retrieved statistics for project DEMO"));
  }

  #[tokio::test]
  async fn test_generate_report_forwards_parameters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
      .and(path("/api/reports/timeTracking"))
      .and(body_json(json!({"project": "DEMO"})))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "11-1"})))
      .mount(&mock_server)
      .await;

    let client = test_client(&mock_server);
    let outcome = generate_report(
      &client,
      json!({"reportType": "timeTracking", "parameters": {"project": "DEMO"}}),
    )
    .await;

    assert!(outcome.success);
    assert_eq!(outcome.message.as_deref(), Some("Generated report of type timeTracking"));
  }
}
