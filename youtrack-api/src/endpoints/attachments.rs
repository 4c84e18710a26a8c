//! # Attachment Endpoints
//!
//! Attachment listing and multipart upload.

use reqwest::Method;
use reqwest::multipart::{Form, Part};
use serde_json::Value;

use crate::client::YouTrackClient;
use crate::error::ApiError;
use crate::models::SearchOptions;

impl YouTrackClient {
  /// List attachments on an issue.
  pub async fn list_attachments(&self, issue_id: &str, options: &SearchOptions) -> Result<Value, ApiError> {
    self
      .request(Method::GET, &format!("/issues/{issue_id}/attachments"), None, &options.to_query())
      .await
  }

  /// Upload a file as an issue attachment. The bytes are sent as a single
  /// multipart `file` part under the given filename.
  pub async fn add_attachment(&self, issue_id: &str, filename: &str, content: Vec<u8>) -> Result<Value, ApiError> {
    let part = Part::bytes(content).file_name(filename.to_string());
    let form = Form::new().part("file", part);
    self.request_multipart(&format!("/issues/{issue_id}/attachments"), form).await
  }
}

#[cfg(test)]
mod tests {
  use anyhow::Result;
  use serde_json::json;
  use wiremock::matchers::{header_exists, method, path};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use crate::endpoints::test_support::test_client;
  use crate::models::SearchOptions;

  #[tokio::test]
  async fn test_list_attachments() -> Result<()> {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
      .and(path("/api/issues/DEMO-1/attachments"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": "5-1", "name": "log.txt"}])))
      .mount(&mock_server)
      .await;

    let client = test_client(&mock_server);
    let attachments = client.list_attachments("DEMO-1", &SearchOptions::page(0, 50)).await?;
    assert_eq!(attachments[0]["name"], "log.txt");

    Ok(())
  }

  #[tokio::test]
  async fn test_add_attachment_uses_multipart() -> Result<()> {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
      .and(path("/api/issues/DEMO-1/attachments"))
      .and(header_exists("Content-Type"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": "5-2", "name": "log.txt"}])))
      .mount(&mock_server)
      .await;

    let client = test_client(&mock_server);
    let uploaded = client.add_attachment("DEMO-1", "log.txt", b"panic at line 42".to_vec()).await?;
    assert_eq!(uploaded[0]["name"], "log.txt");

    Ok(())
  }

  #[tokio::test]
  async fn test_add_attachment_from_file_on_disk() -> Result<()> {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
      .and(path("/api/issues/DEMO-1/attachments"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": "5-3", "name": "report.csv"}])))
      .mount(&mock_server)
      .await;

    let dir = tempfile::tempdir()?;
    let file_path = dir.path().join("report.csv");
    std::fs::write(&file_path, "issue,state\nDEMO-1,Open\n")?;
    let content = std::fs::read(&file_path)?;

    let client = test_client(&mock_server);
    let uploaded = client.add_attachment("DEMO-1", "report.csv", content).await?;
    assert_eq!(uploaded[0]["name"], "report.csv");

    Ok(())
  }
}
