//! # Issue Endpoints
//!
//! Core issue operations: listing and searching with the YouTrack query
//! language, plus create, update, and delete.

use reqwest::Method;
use serde_json::Value;

use super::fields_query;
use crate::client::YouTrackClient;
use crate::error::ApiError;
use crate::models::{IssuePatch, NewIssue, SearchOptions};

impl YouTrackClient {
  /// List issues. When `options.query` is set it is passed through verbatim
  /// as a YouTrack search query.
  pub async fn list_issues(&self, options: &SearchOptions) -> Result<Value, ApiError> {
    self.request(Method::GET, "/issues", None, &options.to_query()).await
  }

  /// Fetch a single issue by id or readable id (`DEMO-42`).
  pub async fn get_issue(&self, issue_id: &str, fields: Option<&str>) -> Result<Value, ApiError> {
    self
      .request(Method::GET, &format!("/issues/{issue_id}"), None, &fields_query(fields))
      .await
  }

  /// Create an issue.
  pub async fn create_issue(&self, issue: &NewIssue) -> Result<Value, ApiError> {
    self.post_json("/issues", issue, &[]).await
  }

  /// Update an issue. Only the fields present in the patch are touched.
  pub async fn update_issue(&self, issue_id: &str, patch: &IssuePatch) -> Result<Value, ApiError> {
    self.post_json(&format!("/issues/{issue_id}"), patch, &[]).await
  }

  /// Delete an issue.
  pub async fn delete_issue(&self, issue_id: &str) -> Result<Value, ApiError> {
    self.request(Method::DELETE, &format!("/issues/{issue_id}"), None, &[]).await
  }
}

#[cfg(test)]
mod tests {
  use anyhow::Result;
  use serde_json::json;
  use wiremock::matchers::{body_json, method, path, query_param};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use crate::endpoints::test_support::test_client;
  use crate::models::{EntityRef, IssuePatch, NewIssue, SearchOptions};

  #[tokio::test]
  async fn test_list_issues_with_query() -> Result<()> {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
      .and(path("/api/issues"))
      .and(query_param("query", "project: DEMO and assignee: jane"))
      .and(query_param("skip", "0"))
      .and(query_param("top", "50"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!([
          {"id": "2-1", "idReadable": "DEMO-1", "summary": "First"},
          {"id": "2-2", "idReadable": "DEMO-2", "summary": "Second"}
      ])))
      .mount(&mock_server)
      .await;

    let client = test_client(&mock_server);
    let options = SearchOptions {
      query: Some("project: DEMO and assignee: jane".to_string()),
      ..SearchOptions::page(0, 50)
    };
    let issues = client.list_issues(&options).await?;
    assert_eq!(issues.as_array().map(Vec::len), Some(2));

    Ok(())
  }

  #[tokio::test]
  async fn test_create_issue_sends_exact_payload() -> Result<()> {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
      .and(path("/api/issues"))
      .and(body_json(json!({
          "project": {"id": "0-0"},
          "summary": "Login fails",
          "assignee": {"id": "jane"}
      })))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "2-3", "idReadable": "DEMO-3"})))
      .mount(&mock_server)
      .await;

    let client = test_client(&mock_server);
    let issue = NewIssue {
      project: EntityRef::from("0-0"),
      summary: "Login fails".to_string(),
      description: None,
      assignee: Some(EntityRef::from("jane")),
      priority: None,
      issue_type: None,
      tags: None,
    };
    let created = client.create_issue(&issue).await?;
    assert_eq!(created["idReadable"], "DEMO-3");

    Ok(())
  }

  #[tokio::test]
  async fn test_update_issue_posts_patch() -> Result<()> {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
      .and(path("/api/issues/DEMO-1"))
      .and(body_json(json!({"state": {"id": "Fixed"}})))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "2-1"})))
      .mount(&mock_server)
      .await;

    let client = test_client(&mock_server);
    let patch = IssuePatch {
      state: Some(EntityRef::from("Fixed")),
      ..IssuePatch::default()
    };
    client.update_issue("DEMO-1", &patch).await?;

    Ok(())
  }

  #[tokio::test]
  async fn test_get_issue_not_found() -> Result<()> {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
      .and(path("/api/issues/DEMO-404"))
      .respond_with(ResponseTemplate::new(404).set_body_json(json!({
          "error": "Not Found",
          "error_description": "Issue not found"
      })))
      .mount(&mock_server)
      .await;

    let client = test_client(&mock_server);
    let err = client.get_issue("DEMO-404", None).await.unwrap_err();
    assert_eq!(err.to_string(), "Issue not found");

    Ok(())
  }

  #[tokio::test]
  async fn test_delete_issue_accepts_empty_body() -> Result<()> {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
      .and(path("/api/issues/DEMO-1"))
      .respond_with(ResponseTemplate::new(200))
      .mount(&mock_server)
      .await;

    let client = test_client(&mock_server);
    let value = client.delete_issue("DEMO-1").await?;
    assert!(value.is_null());

    Ok(())
  }
}
